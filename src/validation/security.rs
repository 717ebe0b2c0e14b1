//! Security scheme rules.

use super::{flag, is_blank, Validate, ValidationContext};
use crate::document::{OAuthFlow, OAuthFlows, SecurityScheme, API_KEY_LOCATIONS, SECURITY_SCHEME_TYPES};
use crate::error::Finding;
use crate::path::JsonPath;

impl Validate for SecurityScheme {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        let scheme_type = self.scheme_type.as_deref().unwrap_or_default();
        if scheme_type.is_empty() {
            flag(findings, path.push_field("type"), "required", "required field is missing");
            return;
        }

        match scheme_type {
            "apiKey" => {
                if is_blank(self.name.as_ref()) {
                    flag(findings, path.push_field("name"), "required", "required for apiKey type");
                }
                match self.location.as_deref() {
                    None | Some("") => {
                        flag(findings, path.push_field("in"), "required", "required for apiKey type")
                    }
                    Some(location) if !API_KEY_LOCATIONS.contains(&location) => flag(
                        findings,
                        path.push_field("in"),
                        "invalid_value",
                        "must be one of: query, header, cookie",
                    ),
                    Some(_) => {}
                }
            }
            "http" => {
                if is_blank(self.scheme.as_ref()) {
                    flag(findings, path.push_field("scheme"), "required", "required for http type");
                }
            }
            "oauth2" => match &self.flows {
                None => flag(findings, path.push_field("flows"), "required", "required for oauth2 type"),
                Some(flows) => flows.validate_into(&path.push_field("flows"), ctx, findings),
            },
            "openIdConnect" => {
                if is_blank(self.open_id_connect_url.as_ref()) {
                    flag(
                        findings,
                        path.push_field("openIdConnectUrl"),
                        "required",
                        "required for openIdConnect type",
                    );
                }
            }
            "mutualTLS" => {}
            other => flag(
                findings,
                path.push_field("type"),
                "invalid_value",
                format!("must be one of: {}; got {}", SECURITY_SCHEME_TYPES.join(", "), other),
            ),
        }
    }
}

impl Validate for OAuthFlows {
    fn validate_into(&self, path: &JsonPath, _ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if self.is_empty() {
            flag(findings, path.clone(), "empty", "at least one OAuth flow must be defined");
            return;
        }

        let flows = [
            ("implicit", &self.implicit, true, false),
            ("password", &self.password, false, true),
            ("clientCredentials", &self.client_credentials, false, true),
            ("authorizationCode", &self.authorization_code, true, true),
        ];
        for (name, flow, needs_authorization, needs_token) in flows {
            if let Some(flow) = flow {
                check_flow(flow, &path.push_field(name), name, needs_authorization, needs_token, findings);
            }
        }
    }
}

fn check_flow(
    flow: &OAuthFlow,
    path: &JsonPath,
    name: &str,
    needs_authorization: bool,
    needs_token: bool,
    findings: &mut Vec<Finding>,
) {
    if needs_authorization && is_blank(flow.authorization_url.as_ref()) {
        flag(
            findings,
            path.push_field("authorizationUrl"),
            "required",
            format!("required for {} flow", name),
        );
    }
    if needs_token && is_blank(flow.token_url.as_ref()) {
        flag(
            findings,
            path.push_field("tokenUrl"),
            "required",
            format!("required for {} flow", name),
        );
    }
    if flow.scopes.is_none() {
        flag(findings, path.push_field("scopes"), "required", "required field is missing");
    }
}
