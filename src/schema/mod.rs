//! The schema node model.
//!
//! A [`Schema`] is one of three closed shapes:
//!
//! - a boolean schema (`true` accepts anything, `false` nothing);
//! - a [`Reference`] (an object whose `$ref` pointer is non-empty);
//! - an inline [`SchemaObject`] carrying JSON Schema 2020-12 keywords and
//!   the OpenAPI description layer.
//!
//! The shape is decided once at decode time; encoding switches on the shape
//! before touching any keyword, so a boolean schema is always written as a
//! bare `true`/`false`.

mod annotations;
mod object;
mod type_set;

pub use annotations::{Discriminator, Xml};
pub use object::{SchemaObject, SubschemaSlot};
pub use type_set::{is_json_type, TypeSet, JSON_TYPES};

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::with_stack;
use crate::reference::{decode_ref_or, RefOr, Reference};

/// A JSON Schema node.
///
/// # Example
///
/// ```rust
/// use oas31::{from_str, to_string, Schema};
///
/// let schema: Schema = from_str("false").unwrap();
/// assert_eq!(schema.as_bool(), Some(false));
/// assert_eq!(to_string(&schema).unwrap(), "false");
///
/// let schema: Schema = from_str(r##"{"$ref": "#/components/schemas/Pet"}"##).unwrap();
/// assert!(schema.is_reference());
///
/// let schema: Schema = from_str(r#"{"type": "string", "x-foo": "bar"}"#).unwrap();
/// assert!(schema.as_object().unwrap().has_type("string"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// `true` or `false`.
    Bool(bool),
    /// A pointer to a schema defined elsewhere.
    Ref(Reference),
    /// An inline object schema.
    Object(Box<SchemaObject>),
}

impl Schema {
    /// Creates a reference schema pointing at `pointer`.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Schema::Ref(Reference::new(pointer))
    }

    /// Returns the boolean value of a boolean schema.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Schema::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true for `true`/`false` schemas.
    pub fn is_bool(&self) -> bool {
        matches!(self, Schema::Bool(_))
    }

    /// Returns true if this node is a reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, Schema::Ref(_))
    }

    /// Returns the reference, if this node is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Schema::Ref(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the object shape, if this node has one.
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Schema::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable access to the object shape.
    pub fn as_object_mut(&mut self) -> Option<&mut SchemaObject> {
        match self {
            Schema::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl Default for Schema {
    /// The empty object schema `{}`.
    fn default() -> Self {
        Schema::Object(Box::default())
    }
}

impl From<bool> for Schema {
    fn from(value: bool) -> Self {
        Schema::Bool(value)
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Schema::Object(Box::new(object))
    }
}

impl From<Reference> for Schema {
    fn from(reference: Reference) -> Self {
        Schema::Ref(reference)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        with_stack(move || match self {
            Schema::Bool(value) => serializer.serialize_bool(*value),
            Schema::Ref(reference) => reference.serialize(serializer),
            Schema::Object(object) => object.serialize(serializer),
        })
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or an object schema")
            }

            fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Schema, E> {
                Ok(Schema::Bool(value))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Schema, A::Error> {
                let raw = Map::<String, Value>::deserialize(MapAccessDeserializer::new(map))?;
                Ok(match decode_ref_or::<SchemaObject, A::Error>(raw)? {
                    RefOr::Ref(reference) => Schema::Ref(reference),
                    RefOr::Item(object) => Schema::Object(Box::new(object)),
                })
            }
        }

        with_stack(move || deserializer.deserialize_any(SchemaVisitor))
    }
}
