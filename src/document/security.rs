//! Security schemes and requirements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::extensions::{impl_extensible, Extensions};

/// Valid values of a security scheme's `type`.
pub const SECURITY_SCHEME_TYPES: [&str; 5] = ["apiKey", "http", "mutualTLS", "oauth2", "openIdConnect"];

/// Valid values of an `apiKey` scheme's `in`.
pub const API_KEY_LOCATIONS: [&str; 3] = ["query", "header", "cookie"];

/// Scheme name to the scopes required from it. An empty list means no
/// particular scope.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Header, query or cookie name for `apiKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// HTTP authorization scheme for `http`, e.g. `bearer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl SecurityScheme {
    /// An `http` scheme such as `bearer` or `basic`.
    pub fn http(scheme: impl Into<String>) -> Self {
        Self {
            scheme_type: Some("http".to_string()),
            scheme: Some(scheme.into()),
            ..Self::default()
        }
    }

    /// An `apiKey` scheme read from `name` in `location`.
    pub fn api_key(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            scheme_type: Some("apiKey".to_string()),
            name: Some(name.into()),
            location: Some(location.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl OAuthFlows {
    /// Returns true if no flow is defined.
    pub fn is_empty(&self) -> bool {
        self.implicit.is_none()
            && self.password.is_none()
            && self.client_credentials.is_none()
            && self.authorization_code.is_none()
    }
}

/// Configuration of one OAuth flow. `scopes` is required but may be empty,
/// so absence and `{}` are kept apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(SecurityScheme, OAuthFlows, OAuthFlow);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use serde_json::json;

    #[test]
    fn test_empty_scopes_survive() {
        let input = json!({
            "clientCredentials": {"tokenUrl": "https://auth.example.com/token", "scopes": {}}
        });
        let flows: OAuthFlows = from_value(input.clone()).unwrap();
        assert_eq!(flows.client_credentials.as_ref().unwrap().scopes, Some(IndexMap::new()));
        assert_eq!(to_value(&flows).unwrap(), input);
    }

    #[test]
    fn test_flows_is_empty() {
        assert!(OAuthFlows::default().is_empty());
        let flows: OAuthFlows = from_value(json!({"password": {"tokenUrl": "t", "scopes": {}}})).unwrap();
        assert!(!flows.is_empty());
    }

    #[test]
    fn test_requirement_is_plain_map() {
        let req: SecurityRequirement = from_value(json!({"oauth": ["read", "write"], "key": []})).unwrap();
        assert_eq!(req["oauth"], vec!["read", "write"]);
        assert!(req["key"].is_empty());
    }
}
