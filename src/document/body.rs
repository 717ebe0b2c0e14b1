//! Request bodies, media types, encodings and examples.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Header;
use crate::codec::{is_false, present};
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::RefOr;
use crate::schema::Schema;

/// Styles allowed on a multipart or form-urlencoded [`Encoding`].
pub const ENCODING_STYLES: [&str; 4] = ["form", "spaceDelimited", "pipeDelimited", "deepObject"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media type (or range) to payload description.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Schema and examples for one media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    /// Property name to encoding.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub encoding: IndexMap<String, Encoding>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl MediaType {
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }
}

/// Serialization of a single property of a form or multipart body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, RefOr<Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// An example value, inline or by URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(RequestBody, MediaType, Encoding, Example);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use serde_json::json;

    #[test]
    fn test_media_type_with_encoding() {
        let input = json!({
            "schema": {"type": "object"},
            "encoding": {
                "file": {"contentType": "image/png", "headers": {"X-Rate": {"$ref": "#/components/headers/rate"}}}
            },
            "x-sample": [1]
        });
        let media: MediaType = from_value(input.clone()).unwrap();

        let encoding = &media.encoding["file"];
        assert_eq!(encoding.content_type.as_deref(), Some("image/png"));
        assert!(encoding.headers["X-Rate"].is_reference());
        assert_eq!(to_value(&media).unwrap(), input);
    }

    #[test]
    fn test_example_reference_keeps_summary() {
        let example: RefOr<Example> =
            from_value(json!({"$ref": "#/components/examples/a", "summary": "s"})).unwrap();
        assert_eq!(example.as_reference().unwrap().summary.as_deref(), Some("s"));
    }
}
