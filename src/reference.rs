//! Referenceable nodes.
//!
//! Parameters, headers, responses, request bodies, examples, links,
//! callbacks, security schemes and schemas may each appear either inline or
//! as a [`Reference`] to a definition elsewhere. [`RefOr`] captures that once,
//! generically, for every node kind.
//!
//! A node is a reference if and only if its `$ref` pointer is non-empty.
//! References are never followed here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::{decode_buffered, with_stack};
use crate::extensions::{impl_extensible, Extensible, Extensions};

/// The pointer keyword.
pub const REF_KEYWORD: &str = "$ref";

/// A pointer to a node defined elsewhere, with its own optional summary and
/// description (distinct from whatever the target carries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// The target pointer, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Reference {
    /// Creates a reference to `pointer`.
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            reference: pointer.into(),
            summary: None,
            description: None,
            extensions: Extensions::new(),
        }
    }

    /// Sets the reference's own summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the reference's own description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl_extensible!(Reference);

/// Either a reference or an inline node of type `T`.
///
/// # Example
///
/// ```rust
/// use oas31::{from_str, Parameter, RefOr};
///
/// let param: RefOr<Parameter> = from_str(r##"{"$ref": "#/components/parameters/limit"}"##).unwrap();
/// assert!(param.is_reference());
/// assert!(param.as_item().is_none());
///
/// let param: RefOr<Parameter> = from_str(r#"{"name": "limit", "in": "query"}"#).unwrap();
/// assert!(!param.is_reference());
/// assert_eq!(param.as_item().unwrap().name.as_deref(), Some("limit"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    /// A pointer to a node defined elsewhere.
    Ref(Reference),
    /// The node itself.
    Item(T),
}

impl<T> RefOr<T> {
    /// Creates a reference to `pointer`.
    pub fn reference(pointer: impl Into<String>) -> Self {
        RefOr::Ref(Reference::new(pointer))
    }

    /// Returns true if this node is a reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }

    /// Returns the reference, if this node is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            RefOr::Ref(reference) => Some(reference),
            RefOr::Item(_) => None,
        }
    }

    /// Returns the pointer string, if this node is a reference.
    pub fn pointer(&self) -> Option<&str> {
        self.as_reference().map(|r| r.reference.as_str())
    }

    /// Returns the inline node, if this node is not a reference.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    /// Mutable access to the inline node.
    pub fn as_item_mut(&mut self) -> Option<&mut T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    /// Consumes this node, returning the inline value if there is one.
    pub fn into_item(self) -> Option<T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(item: T) -> Self {
        RefOr::Item(item)
    }
}

impl<T: Default> Default for RefOr<T> {
    fn default() -> Self {
        RefOr::Item(T::default())
    }
}

impl<T: Extensible> Extensible for RefOr<T> {
    fn extensions(&self) -> &Extensions {
        match self {
            RefOr::Ref(reference) => &reference.extensions,
            RefOr::Item(item) => item.extensions(),
        }
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        match self {
            RefOr::Ref(reference) => &mut reference.extensions,
            RefOr::Item(item) => item.extensions_mut(),
        }
    }
}

impl<T: Serialize> Serialize for RefOr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        with_stack(move || match self {
            RefOr::Ref(reference) => reference.serialize(serializer),
            RefOr::Item(item) => item.serialize(serializer),
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for RefOr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        with_stack(move || {
            let raw = Map::<String, Value>::deserialize(deserializer)?;
            decode_ref_or(raw)
        })
    }
}

/// Decodes a buffered field map as a reference when it carries a pointer,
/// otherwise as the inline shape `T`.
///
/// A `$ref` that is present but not a string is decoded as a reference so
/// the type mismatch surfaces as an error instead of being dropped.
pub(crate) fn decode_ref_or<T, E>(raw: Map<String, Value>) -> Result<RefOr<T>, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    let is_reference = match raw.get(REF_KEYWORD) {
        None => false,
        Some(Value::String(pointer)) => !pointer.is_empty(),
        Some(_) => true,
    };

    if is_reference {
        decode_buffered(raw).map(RefOr::Ref)
    } else {
        decode_buffered(raw).map(RefOr::Item)
    }
}
