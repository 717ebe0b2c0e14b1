//! Reusable components.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Callback, Example, Header, Link, Parameter, PathItem, RequestBody, Response, SecurityScheme};
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::RefOr;
use crate::schema::Schema;

/// Named, reusable definitions referenced from elsewhere in the document.
///
/// Names in every registry are restricted to `[a-zA-Z0-9._-]+`; the
/// validator reports others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, RefOr<Response>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, RefOr<Parameter>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub request_bodies: IndexMap<String, RefOr<RequestBody>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, RefOr<Header>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub security_schemes: IndexMap<String, RefOr<SecurityScheme>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, RefOr<Link>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, RefOr<Callback>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub path_items: IndexMap<String, PathItem>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a security scheme is registered under `name`.
    pub fn has_security_scheme(&self, name: &str) -> bool {
        self.security_schemes.contains_key(name)
    }
}

impl_extensible!(Components);
