//! The path tree: paths, path items and operations.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::keyed::{serialize_keyed, KeyedVisitor};
use super::{Callback, ExternalDocs, Parameter, RequestBody, Responses, SecurityRequirement, Server};
use crate::codec::is_false;
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::RefOr;

/// The HTTP methods a path item can describe, in the order they are visited.
pub const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Relative paths to the individual endpoints, keyed by path template.
///
/// On decode, keys starting with `/` become path items, `x-` keys become
/// extensions and any other key is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub items: IndexMap<String, PathItem>,
    pub extensions: Extensions,
}

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path item for a path template.
    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    /// Adds or replaces a path item.
    pub fn insert(&mut self, path: impl Into<String>, item: PathItem) -> Option<PathItem> {
        self.items.insert(path.into(), item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.items.iter()
    }
}

impl Serialize for Paths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(
            serializer,
            self.items.iter().map(|(k, v)| (k.as_str(), v)),
            &self.extensions,
        )
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = KeyedVisitor::new("a map of path templates", |key| key.starts_with('/'));
        let (items, extensions) = deserializer.deserialize_map(visitor)?;
        Ok(Self { items, extensions })
    }
}

/// The operations available on a single path.
///
/// A path item with a non-empty `$ref` points at a definition elsewhere;
/// its other fields are still decoded but the validator skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RefOr<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl PathItem {
    /// Returns true if this path item carries a non-empty `$ref`.
    pub fn is_reference(&self) -> bool {
        self.reference.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Returns the operation for an HTTP method (lowercase).
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        match method {
            "get" => self.get.as_ref(),
            "put" => self.put.as_ref(),
            "post" => self.post.as_ref(),
            "delete" => self.delete.as_ref(),
            "options" => self.options.as_ref(),
            "head" => self.head.as_ref(),
            "patch" => self.patch.as_ref(),
            "trace" => self.trace.as_ref(),
            _ => None,
        }
    }

    /// Iterates over the defined operations in [`METHODS`] order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        METHODS
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RefOr<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<RequestBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Responses>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, RefOr<Callback>>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// `None` inherits the document-level requirements; `Some(vec![])` removes them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(Paths, PathItem, Operation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use serde_json::json;

    #[test]
    fn test_paths_split_items_extensions_and_junk() {
        let paths: Paths = from_value(json!({
            "/pets": {"get": {"responses": {"200": {"description": "ok"}}}},
            "x-owner": "team",
            "pets": {"get": {}}
        }))
        .unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths.get("/pets").is_some());
        assert!(paths.get("pets").is_none());
        assert_eq!(paths.extensions.get("x-owner"), Some(&json!("team")));
        assert_eq!(
            to_value(&paths).unwrap(),
            json!({
                "/pets": {"get": {"responses": {"200": {"description": "ok"}}}},
                "x-owner": "team"
            })
        );
    }

    #[test]
    fn test_path_error_is_located() {
        let err = from_value::<Paths>(json!({"/pets": {"get": {"tags": "a"}}})).unwrap_err();
        assert_eq!(err.path, "/pets.get.tags");
    }

    #[test]
    fn test_operations_follow_method_order() {
        let item: PathItem = from_value(json!({
            "trace": {},
            "post": {},
            "get": {}
        }))
        .unwrap();

        let methods: Vec<_> = item.operations().map(|(method, _)| method).collect();
        assert_eq!(methods, vec!["get", "post", "trace"]);
    }

    #[test]
    fn test_path_item_reference() {
        let item: PathItem = from_value(json!({"$ref": "#/components/pathItems/a"})).unwrap();
        assert!(item.is_reference());
        assert!(!PathItem::default().is_reference());
    }

    #[test]
    fn test_operation_security_override_is_kept() {
        let op: Operation = from_value(json!({"security": []})).unwrap();
        assert_eq!(op.security, Some(Vec::new()));
        assert_eq!(to_value(&op).unwrap(), json!({"security": []}));
    }
}
