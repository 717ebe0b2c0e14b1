//! OpenAPI-specific schema annotations layered on top of JSON Schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codec::is_false;
use crate::extensions::{impl_extensible, Extensions};

/// Hints which schema of a `oneOf`/`anyOf` applies, keyed on a property value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Discriminator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Property value to schema pointer or name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, String>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// XML serialization hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub attribute: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub wrapped: bool,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(Discriminator, Xml);
