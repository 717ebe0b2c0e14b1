//! Root, metadata, server, tag and component rules.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{flag, is_blank, require, validate_list, validate_map, Validate, ValidationContext};
use crate::document::{
    Components, Info, License, OpenApi, SecurityRequirement, Server, ServerVariable, Tag,
    OPENAPI_VERSION_PREFIX,
};
use crate::error::Finding;
use crate::path::JsonPath;

static COMPONENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\.\-_]+$").expect("valid regex"));

impl Validate for OpenApi {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        let schemes = self.components.as_ref().map(|c| &c.security_schemes);
        let ctx = &ctx.with_security_schemes(schemes);

        match self.openapi.as_deref() {
            None | Some("") => flag(
                findings,
                path.push_field("openapi"),
                "required",
                "required field is missing",
            ),
            Some(version) if !version.starts_with(OPENAPI_VERSION_PREFIX) => flag(
                findings,
                path.push_field("openapi"),
                "invalid_version",
                format!("expected 3.1.x version, got {}", version),
            ),
            Some(_) => {}
        }

        match &self.info {
            None => flag(findings, path.push_field("info"), "required", "required field is missing"),
            Some(info) => info.validate_into(&path.push_field("info"), ctx, findings),
        }

        let has_paths = self.paths.as_ref().is_some_and(|p| !p.is_empty());
        if !has_paths && self.webhooks.is_empty() && self.components.is_none() {
            flag(
                findings,
                path.clone(),
                "required",
                "must have at least one of: paths, webhooks, or components",
            );
        }

        if let Some(paths) = &self.paths {
            paths.validate_into(&path.push_field("paths"), ctx, findings);
        }
        validate_map(&self.webhooks, &path.push_field("webhooks"), ctx, findings);
        if let Some(components) = &self.components {
            components.validate_into(&path.push_field("components"), ctx, findings);
        }
        validate_list(&self.tags, &path.push_field("tags"), ctx, findings);
        validate_list(&self.servers, &path.push_field("servers"), ctx, findings);
        check_requirements(&self.security, &path.push_field("security"), ctx, findings);
    }
}

/// Every scheme named by a requirement must be declared in the document.
pub(super) fn check_requirements(
    requirements: &[SecurityRequirement],
    path: &JsonPath,
    ctx: &ValidationContext<'_>,
    findings: &mut Vec<Finding>,
) {
    for (i, requirement) in requirements.iter().enumerate() {
        for name in requirement.keys() {
            if ctx.is_scheme_declared(name) == Some(false) {
                flag(
                    findings,
                    path.push_index(i).push_key(name.as_str()),
                    "undefined_scheme",
                    format!("security scheme '{}' is not defined in components", name),
                );
            }
        }
    }
}

impl Validate for Info {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "title", self.title.as_ref());
        require(findings, path, "version", self.version.as_ref());
        if let Some(license) = &self.license {
            license.validate_into(&path.push_field("license"), ctx, findings);
        }
    }
}

impl Validate for License {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "name", self.name.as_ref());
        if !is_blank(self.identifier.as_ref()) && !is_blank(self.url.as_ref()) {
            flag(
                findings,
                path.clone(),
                "mutually_exclusive",
                "identifier and url are mutually exclusive",
            );
        }
    }
}

impl Validate for Server {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "url", self.url.as_ref());
        validate_map(&self.variables, &path.push_field("variables"), ctx, findings);
    }
}

impl Validate for ServerVariable {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "default", self.default.as_ref());
        if !self.enum_values.is_empty() {
            let default = self.default.as_deref().unwrap_or_default();
            if !self.enum_values.iter().any(|v| v == default) {
                flag(
                    findings,
                    path.push_field("default"),
                    "invalid_value",
                    "default value must be one of the enum values",
                );
            }
        }
    }
}

impl Validate for Tag {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        require(findings, path, "name", self.name.as_ref());
    }
}

impl Validate for Components {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        registry(&self.schemas, path, "schemas", ctx, findings);
        registry(&self.responses, path, "responses", ctx, findings);
        registry(&self.parameters, path, "parameters", ctx, findings);
        registry(&self.examples, path, "examples", ctx, findings);
        registry(&self.request_bodies, path, "requestBodies", ctx, findings);
        registry(&self.headers, path, "headers", ctx, findings);
        registry(&self.security_schemes, path, "securitySchemes", ctx, findings);
        registry(&self.links, path, "links", ctx, findings);
        registry(&self.callbacks, path, "callbacks", ctx, findings);
        registry(&self.path_items, path, "pathItems", ctx, findings);
    }
}

/// Checks each component name, then the component itself.
fn registry<T: Validate>(
    entries: &IndexMap<String, T>,
    path: &JsonPath,
    kind: &str,
    ctx: &ValidationContext<'_>,
    findings: &mut Vec<Finding>,
) {
    for (name, node) in entries {
        let entry_path = path.push_field(kind).push_key(name.as_str());
        if !COMPONENT_NAME.is_match(name) {
            flag(
                findings,
                entry_path.clone(),
                "invalid_name",
                "component name contains invalid characters",
            );
        }
        node.validate_into(&entry_path, ctx, findings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::from_value;
    use serde_json::{json, Value};

    fn messages(document: Value) -> Vec<String> {
        let document: OpenApi = from_value(document).unwrap();
        document.validate().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_minimal_document_is_valid() {
        assert!(messages(json!({
            "openapi": "3.1.0",
            "info": {"title": "t", "version": "1"},
            "components": {}
        }))
        .is_empty());
    }

    #[test]
    fn test_wrong_version() {
        assert_eq!(
            messages(json!({"openapi": "3.0.3", "info": {"title": "t", "version": "1"}, "components": {}})),
            vec!["openapi: expected 3.1.x version, got 3.0.3"]
        );
    }

    #[test]
    fn test_info_and_license() {
        assert_eq!(
            messages(json!({
                "openapi": "3.1.0",
                "info": {"license": {"identifier": "MIT", "url": "https://mit"}},
                "components": {}
            })),
            vec![
                "info.title: required field is missing",
                "info.version: required field is missing",
                "info.license.name: required field is missing",
                "info.license: identifier and url are mutually exclusive",
            ]
        );
    }

    #[test]
    fn test_server_variables() {
        assert_eq!(
            messages(json!({
                "openapi": "3.1.0",
                "info": {"title": "t", "version": "1"},
                "components": {},
                "servers": [
                    {"url": "https://{env}.example.com", "variables": {"env": {"default": "qa", "enum": ["prod", "dev"]}}},
                    {"variables": {"port": {}}}
                ]
            })),
            vec![
                "servers[0].variables[env].default: default value must be one of the enum values",
                "servers[1].url: required field is missing",
                "servers[1].variables[port].default: required field is missing",
            ]
        );
    }

    #[test]
    fn test_component_names_in_every_registry() {
        assert_eq!(
            messages(json!({
                "openapi": "3.1.0",
                "info": {"title": "t", "version": "1"},
                "components": {
                    "schemas": {"Good.Name-1_x": true, "bad name": true},
                    "examples": {"bad/example": {"value": 1}}
                }
            })),
            vec![
                "components.schemas[bad name]: component name contains invalid characters",
                "components.examples[bad/example]: component name contains invalid characters",
            ]
        );
    }

    #[test]
    fn test_tags_and_undefined_security_scheme() {
        assert_eq!(
            messages(json!({
                "openapi": "3.1.0",
                "info": {"title": "t", "version": "1"},
                "components": {"securitySchemes": {"key": {"type": "apiKey", "name": "k", "in": "header"}}},
                "tags": [{"description": "no name"}],
                "security": [{"key": []}, {"oauth": ["read"]}]
            })),
            vec![
                "tags[0].name: required field is missing",
                "security[1][oauth]: security scheme 'oauth' is not defined in components",
            ]
        );
    }
}
