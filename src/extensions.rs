//! Specification extensions (`x-*` fields).
//!
//! Every node that participates in extension preservation embeds an
//! [`Extensions`] value as a `#[serde(flatten)]` field. On decode, serde first
//! matches the node's recognized keywords; every remaining field is handed to
//! [`Extensions`], which keeps those whose name carries the [`EXTENSION_PREFIX`]
//! and silently drops the rest (typos of real keywords included). On encode,
//! the entries are written after the node's own fields. Recognized keywords
//! never start with `x-`, so the two sets cannot collide.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Error;

/// Reserved prefix that marks a field as an extension.
pub const EXTENSION_PREFIX: &str = "x-";

/// Returns true if `name` is an extension field name.
pub fn is_extension(name: &str) -> bool {
    name.starts_with(EXTENSION_PREFIX)
}

/// Extension fields attached to a node, keyed by their full `x-` name.
///
/// An empty map is the same as no extensions: nothing is written on encode,
/// so re-encoding is stable.
///
/// # Example
///
/// ```rust
/// use oas31::Extensions;
/// use serde_json::json;
///
/// let mut ext = Extensions::new();
/// ext.insert("x-internal", json!(true)).unwrap();
/// assert!(ext.insert("internal", json!(true)).is_err());
/// assert_eq!(ext.get("x-internal"), Some(&json!(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    /// Creates an empty extension map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an extension value, returning the previous value under that name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtensionName`] if `name` lacks the `x-` prefix.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Result<Option<Value>, Error> {
        let name = name.into();
        if !is_extension(&name) {
            return Err(Error::InvalidExtensionName(name));
        }
        Ok(self.0.insert(name, value))
    }

    /// Returns the value of an extension.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Removes an extension, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Returns the number of extensions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no extensions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub(crate) fn insert_raw(&mut self, name: String, value: Value) {
        self.0.insert(name, value);
    }
}

impl Serialize for Extensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtensionsVisitor;

        impl<'de> Visitor<'de> for ExtensionsVisitor {
            type Value = Extensions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of extension fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Extensions, A::Error> {
                let mut ext = Extensions::new();
                while let Some(name) = map.next_key::<String>()? {
                    if is_extension(&name) {
                        let value = map.next_value::<Value>()?;
                        ext.insert_raw(name, value);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(ext)
            }
        }

        deserializer.deserialize_map(ExtensionsVisitor)
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A node that carries specification extensions.
pub trait Extensible {
    /// The node's extensions.
    fn extensions(&self) -> &Extensions;

    /// Mutable access to the node's extensions.
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Looks up a single extension by its full name.
    fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions().get(name)
    }
}

/// Implements [`Extensible`] for structs with an `extensions` field.
macro_rules! impl_extensible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::extensions::Extensible for $ty {
                fn extensions(&self) -> &$crate::extensions::Extensions {
                    &self.extensions
                }

                fn extensions_mut(&mut self) -> &mut $crate::extensions::Extensions {
                    &mut self.extensions
                }
            }
        )+
    };
}

pub(crate) use impl_extensible;
