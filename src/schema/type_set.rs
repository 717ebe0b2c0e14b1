//! The `type` keyword.

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The type names JSON Schema 2020-12 defines.
pub const JSON_TYPES: [&str; 7] = [
    "string", "number", "integer", "boolean", "array", "object", "null",
];

/// Returns true if `name` is one of [`JSON_TYPES`].
pub fn is_json_type(name: &str) -> bool {
    JSON_TYPES.contains(&name)
}

/// Value of a schema's `type` keyword: one type name or a list of them.
///
/// Both encodings mean the same set of types; queries go through
/// [`TypeSet::names`] and [`TypeSet::contains`] so callers never branch on the
/// encoding. The original encoding is kept for re-encoding. Names are kept
/// verbatim, unknown ones included, so the validator can report them.
///
/// # Example
///
/// ```rust
/// use oas31::TypeSet;
///
/// let single = TypeSet::from("string");
/// let multi = TypeSet::from(vec!["string".to_string(), "null".to_string()]);
///
/// assert!(single.contains("string"));
/// assert!(multi.contains("string"));
/// assert!(!single.contains("null"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSet {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

impl TypeSet {
    /// All type names, in document order.
    pub fn names(&self) -> &[String] {
        match self {
            TypeSet::Single(name) => std::slice::from_ref(name),
            TypeSet::Multiple(names) => names,
        }
    }

    /// Returns true if `name` is one of the types.
    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Number of type names.
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Returns true for an empty list (`"type": []`).
    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

impl From<&str> for TypeSet {
    fn from(name: &str) -> Self {
        TypeSet::Single(name.to_string())
    }
}

impl From<Vec<String>> for TypeSet {
    fn from(names: Vec<String>) -> Self {
        TypeSet::Multiple(names)
    }
}

impl Serialize for TypeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypeSet::Single(name) => serializer.serialize_str(name),
            TypeSet::Multiple(names) => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeSetVisitor;

        impl<'de> Visitor<'de> for TypeSetVisitor {
            type Value = TypeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type name or an array of type names")
            }

            fn visit_str<E: serde::de::Error>(self, name: &str) -> Result<TypeSet, E> {
                Ok(TypeSet::Single(name.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, name: String) -> Result<TypeSet, E> {
                Ok(TypeSet::Single(name))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TypeSet, A::Error> {
                let mut names = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(TypeSet::Multiple(names))
            }
        }

        deserializer.deserialize_any(TypeSetVisitor)
    }
}
