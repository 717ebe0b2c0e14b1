//! Path tree rules: path items, operations and everything they carry.

use indexmap::IndexMap;

use super::document::check_requirements;
use super::{descend, flag, is_blank, require, validate_list, validate_map, Validate, ValidationContext};
use crate::document::{
    is_status_code, styles_for, Callback, Encoding, Example, Header, Link, MediaType, Operation,
    Parameter, PathItem, Paths, RequestBody, Response, Responses, ENCODING_STYLES, PARAMETER_LOCATIONS,
};
use crate::error::Finding;
use crate::path::JsonPath;
use crate::reference::RefOr;
use crate::schema::Schema;

impl Validate for Paths {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        for (template, item) in self.iter() {
            let item_path = path.push_key(template.as_str());
            if !template.starts_with('/') {
                flag(findings, item_path.clone(), "invalid_path", "path must start with /");
            }
            item.validate_into(&item_path, ctx, findings);
        }
    }
}

impl Validate for PathItem {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if self.is_reference() {
            return;
        }
        descend(path, ctx, findings, |ctx, findings| {
            validate_list(&self.servers, &path.push_field("servers"), ctx, findings);
            validate_list(&self.parameters, &path.push_field("parameters"), ctx, findings);
            for (method, operation) in self.operations() {
                operation.validate_into(&path.push_field(method), ctx, findings);
            }
        });
    }
}

impl Validate for Operation {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        let responses_path = path.push_field("responses");
        match &self.responses {
            None => flag(findings, responses_path, "required", "required field is missing"),
            Some(responses) => responses.validate_into(&responses_path, ctx, findings),
        }

        validate_list(&self.parameters, &path.push_field("parameters"), ctx, findings);
        if let Some(body) = &self.request_body {
            body.validate_into(&path.push_field("requestBody"), ctx, findings);
        }
        validate_map(&self.callbacks, &path.push_field("callbacks"), ctx, findings);
        validate_list(&self.servers, &path.push_field("servers"), ctx, findings);
        if let Some(security) = &self.security {
            check_requirements(security, &path.push_field("security"), ctx, findings);
        }
    }
}

impl Validate for Responses {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if self.is_empty() {
            flag(findings, path.clone(), "empty", "must contain at least one response");
        }

        for (code, response) in &self.codes {
            let code_path = path.push_key(code.as_str());
            if !is_status_code(code) {
                flag(
                    findings,
                    code_path.clone(),
                    "invalid_status_code",
                    "invalid status code pattern, must be 3-digit code or pattern like 2XX",
                );
            }
            response.validate_into(&code_path, ctx, findings);
        }

        if let Some(default) = &self.default {
            default.validate_into(&path.push_field("default"), ctx, findings);
        }
    }
}

impl Validate for Response {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "description", self.description.as_ref());
        validate_map(&self.headers, &path.push_field("headers"), ctx, findings);
        validate_map(&self.content, &path.push_field("content"), ctx, findings);
        validate_map(&self.links, &path.push_field("links"), ctx, findings);
    }
}

impl Validate for Parameter {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "name", self.name.as_ref());

        let location = self.location.as_deref().unwrap_or_default();
        if location.is_empty() {
            flag(findings, path.push_field("in"), "required", "required field is missing");
        } else if !PARAMETER_LOCATIONS.contains(&location) {
            flag(
                findings,
                path.push_field("in"),
                "invalid_value",
                format!("must be one of: query, header, path, cookie; got {}", location),
            );
        }

        if location == "path" && !self.required {
            flag(
                findings,
                path.push_field("required"),
                "invalid_value",
                "path parameters must have required: true",
            );
        }

        if let Some(style) = self.style.as_deref().filter(|s| !s.is_empty()) {
            if let Some(styles) = styles_for(location) {
                if !styles.contains(&style) {
                    flag(
                        findings,
                        path.push_field("style"),
                        "invalid_style",
                        format!("invalid style '{}' for parameter in '{}'", style, location),
                    );
                }
            }
        }

        check_value_shape(path, self.schema.as_ref(), &self.content, self.example.is_some(), self.examples.len(), findings);
        walk_value(path, self.schema.as_ref(), &self.content, &self.examples, ctx, findings);
    }
}

impl Validate for Header {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        check_value_shape(path, self.schema.as_ref(), &self.content, self.example.is_some(), self.examples.len(), findings);

        if let Some(style) = self.style.as_deref() {
            if !style.is_empty() && style != "simple" {
                flag(
                    findings,
                    path.push_field("style"),
                    "invalid_style",
                    "header style must be 'simple'",
                );
            }
        }

        walk_value(path, self.schema.as_ref(), &self.content, &self.examples, ctx, findings);
    }
}

/// Shared by parameters and headers: exactly one of `schema` and `content`,
/// and at most one of `example` and `examples`.
fn check_value_shape(
    path: &JsonPath,
    schema: Option<&Schema>,
    content: &IndexMap<String, MediaType>,
    has_example: bool,
    examples: usize,
    findings: &mut Vec<Finding>,
) {
    match (schema.is_some(), !content.is_empty()) {
        (false, false) => flag(
            findings,
            path.clone(),
            "mutually_exclusive",
            "must have either 'schema' or 'content'",
        ),
        (true, true) => flag(
            findings,
            path.clone(),
            "mutually_exclusive",
            "cannot have both 'schema' and 'content'",
        ),
        _ => {}
    }
    check_examples(path, has_example, examples, findings);
}

fn check_examples(path: &JsonPath, has_example: bool, examples: usize, findings: &mut Vec<Finding>) {
    if has_example && examples > 0 {
        flag(
            findings,
            path.clone(),
            "mutually_exclusive",
            "cannot have both 'example' and 'examples'",
        );
    }
}

fn walk_value(
    path: &JsonPath,
    schema: Option<&Schema>,
    content: &IndexMap<String, MediaType>,
    examples: &IndexMap<String, RefOr<Example>>,
    ctx: &ValidationContext<'_>,
    findings: &mut Vec<Finding>,
) {
    if let Some(schema) = schema {
        schema.validate_into(&path.push_field("schema"), ctx, findings);
    }
    validate_map(content, &path.push_field("content"), ctx, findings);
    validate_map(examples, &path.push_field("examples"), ctx, findings);
}

impl Validate for RequestBody {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if self.content.is_empty() {
            flag(findings, path.push_field("content"), "required", "required field is missing");
        }
        validate_map(&self.content, &path.push_field("content"), ctx, findings);
    }
}

impl Validate for MediaType {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        check_examples(path, self.example.is_some(), self.examples.len(), findings);
        if let Some(schema) = &self.schema {
            schema.validate_into(&path.push_field("schema"), ctx, findings);
        }
        validate_map(&self.encoding, &path.push_field("encoding"), ctx, findings);
        validate_map(&self.examples, &path.push_field("examples"), ctx, findings);
    }
}

impl Validate for Encoding {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if let Some(style) = self.style.as_deref().filter(|s| !s.is_empty()) {
            if !ENCODING_STYLES.contains(&style) {
                flag(
                    findings,
                    path.push_field("style"),
                    "invalid_style",
                    format!("invalid encoding style '{}'", style),
                );
            }
        }
        validate_map(&self.headers, &path.push_field("headers"), ctx, findings);
    }
}

impl Validate for Example {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if self.value.is_some() && !is_blank(self.external_value.as_ref()) {
            flag(
                findings,
                path.clone(),
                "mutually_exclusive",
                "cannot have both 'value' and 'externalValue'",
            );
        }
    }
}

impl Validate for Link {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if !is_blank(self.operation_id.as_ref()) && !is_blank(self.operation_ref.as_ref()) {
            flag(
                findings,
                path.clone(),
                "mutually_exclusive",
                "cannot have both 'operationId' and 'operationRef'",
            );
        }
    }
}

impl Validate for Callback {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        validate_map(self.iter(), path, ctx, findings);
    }
}
