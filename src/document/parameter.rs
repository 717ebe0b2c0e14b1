//! Parameters and headers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Example, MediaType};
use crate::codec::{is_false, present};
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::RefOr;
use crate::schema::Schema;

/// Valid values of a parameter's `in`.
pub const PARAMETER_LOCATIONS: [&str; 4] = ["query", "header", "path", "cookie"];

/// Serialization styles allowed for a parameter location, or `None` for an
/// unknown location.
pub fn styles_for(location: &str) -> Option<&'static [&'static str]> {
    match location {
        "path" => Some(&["matrix", "label", "simple"]),
        "query" => Some(&["form", "spaceDelimited", "pipeDelimited", "deepObject"]),
        "header" => Some(&["simple"]),
        "cookie" => Some(&["form"]),
        _ => None,
    }
}

/// A single operation parameter, identified by `name` and `in`.
///
/// Exactly one of `schema` and `content` describes the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Parameter {
    /// Creates a parameter with `name`, `in` and a schema.
    ///
    /// Path parameters are marked required.
    pub fn new(name: impl Into<String>, location: impl Into<String>, schema: Schema) -> Self {
        let location = location.into();
        Self {
            name: Some(name.into()),
            required: location == "path",
            location: Some(location),
            schema: Some(schema),
            ..Self::default()
        }
    }
}

/// A header; shaped like a [`Parameter`] without `name` and `in`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(Parameter, Header);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use serde_json::json;

    #[test]
    fn test_styles_for() {
        assert!(styles_for("path").unwrap().contains(&"simple"));
        assert!(!styles_for("path").unwrap().contains(&"form"));
        assert_eq!(styles_for("header"), Some(&["simple"][..]));
        assert_eq!(styles_for("body"), None);
    }

    #[test]
    fn test_parameter_round_trip() {
        let input = json!({
            "name": "id",
            "in": "path",
            "required": true,
            "explode": false,
            "schema": {"type": "string"},
            "example": null,
            "x-internal": true
        });
        let param: Parameter = from_value(input.clone()).unwrap();

        assert_eq!(param.location.as_deref(), Some("path"));
        assert_eq!(param.explode, Some(false));
        assert_eq!(param.example, Some(Value::Null));
        assert_eq!(to_value(&param).unwrap(), input);
    }

    #[test]
    fn test_new_marks_path_parameters_required() {
        assert!(Parameter::new("id", "path", Schema::default()).required);
        assert!(!Parameter::new("q", "query", Schema::default()).required);
    }
}
