//! The OpenAPI 3.1 document tree.
//!
//! Every node here decodes leniently: unknown non-`x-` fields are dropped and
//! required fields are optional in the type, so a document with missing
//! pieces still decodes and the validator can report everything at once.
//! Nodes that may be referenced are wrapped in [`RefOr`](crate::RefOr).

mod body;
mod callback;
mod components;
mod info;
mod keyed;
mod parameter;
mod paths;
mod response;
mod security;
mod server;

pub use body::{Encoding, Example, MediaType, RequestBody, ENCODING_STYLES};
pub use callback::Callback;
pub use components::Components;
pub use info::{Contact, ExternalDocs, Info, License, Tag};
pub use parameter::{styles_for, Header, Parameter, PARAMETER_LOCATIONS};
pub use paths::{Operation, PathItem, Paths, METHODS};
pub use response::{is_status_code, Link, Response, Responses, DEFAULT_RESPONSE};
pub use security::{
    OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme, API_KEY_LOCATIONS,
    SECURITY_SCHEME_TYPES,
};
pub use server::{Server, ServerVariable};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::extensions::{impl_extensible, Extensions};

/// The version prefix this crate models.
pub const OPENAPI_VERSION_PREFIX: &str = "3.1";

/// The root of an OpenAPI 3.1 document.
///
/// # Example
///
/// ```rust
/// use oas31::{from_str, OpenApi};
///
/// let doc: OpenApi = from_str(r#"{
///     "openapi": "3.1.0",
///     "info": {"title": "Pets", "version": "1.0.0"},
///     "paths": {
///         "/pets": {
///             "get": {"responses": {"200": {"description": "ok"}}}
///         }
///     }
/// }"#).unwrap();
///
/// assert!(doc.validate().is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema_dialect: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub webhooks: IndexMap<String, PathItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl OpenApi {
    /// Creates a document with `openapi: 3.1.0` and the given info block.
    pub fn new(info: Info) -> Self {
        Self {
            openapi: Some("3.1.0".to_string()),
            info: Some(info),
            ..Self::default()
        }
    }

    /// Returns the path item for a path template.
    pub fn path(&self, path: &str) -> Option<&PathItem> {
        self.paths.as_ref().and_then(|paths| paths.get(path))
    }
}

impl_extensible!(OpenApi);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use serde_json::json;

    #[test]
    fn test_root_round_trip_keeps_extensions() {
        let input = json!({
            "openapi": "3.1.0",
            "info": {"title": "t", "version": "1", "x-logo": {"url": "l"}},
            "webhooks": {"newPet": {"post": {"responses": {"200": {"description": "ok"}}}}},
            "x-tenant": "a"
        });
        let doc: OpenApi = from_value(input.clone()).unwrap();

        assert!(doc.webhooks.contains_key("newPet"));
        assert_eq!(doc.extensions.get("x-tenant"), Some(&json!("a")));
        assert_eq!(to_value(&doc).unwrap(), input);
    }

    #[test]
    fn test_deep_decode_error_path() {
        let err = from_value::<OpenApi>(json!({
            "paths": {
                "/pets": {
                    "get": {
                        "parameters": [{"name": "id", "in": "query", "schema": {"type": 7}}]
                    }
                }
            }
        }))
        .unwrap_err();

        assert_eq!(err.path, "paths./pets.get.parameters[0].schema.type");
    }

    #[test]
    fn test_path_lookup() {
        let mut doc = OpenApi::new(Info::new("t", "1"));
        let mut paths = Paths::new();
        paths.insert("/a", PathItem::default());
        doc.paths = Some(paths);

        assert!(doc.path("/a").is_some());
        assert!(doc.path("/b").is_none());
    }
}
