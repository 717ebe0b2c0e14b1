//! The object shape of a schema node.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{Discriminator, Schema, TypeSet, Xml};
use crate::codec::{is_false, present};
use crate::document::ExternalDocs;
use crate::extensions::{impl_extensible, Extensions};

/// A JSON Schema 2020-12 object schema with the OpenAPI description layer.
///
/// Every keyword is optional. Absent keywords and empty collections are not
/// written on encode. Value keywords (`const`, `default`, `example`) keep an
/// explicit JSON `null` as `Some(Value::Null)`, distinct from absence.
///
/// # Example
///
/// ```rust
/// use oas31::{Schema, SchemaObject, TypeSet};
///
/// let mut object = SchemaObject::of_type("object");
/// object.properties.insert("id".into(), SchemaObject::of_type("integer").into());
/// object.required.push("id".into());
///
/// let schema = Schema::from(object);
/// assert!(schema.as_object().unwrap().has_type("object"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaObject {
    // Identity and meta.
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(rename = "$anchor", skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(rename = "$dynamicAnchor", skip_serializing_if = "Option::is_none")]
    pub dynamic_anchor: Option<String>,
    #[serde(rename = "$dynamicRef", skip_serializing_if = "Option::is_none")]
    pub dynamic_ref: Option<String>,
    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "$defs", skip_serializing_if = "IndexMap::is_empty")]
    pub defs: IndexMap<String, Schema>,
    #[serde(rename = "$vocabulary", skip_serializing_if = "IndexMap::is_empty")]
    pub vocabulary: IndexMap<String, bool>,

    // Applicators.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Schema>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub if_schema: Option<Schema>,
    #[serde(rename = "then", skip_serializing_if = "Option::is_none")]
    pub then_schema: Option<Schema>,
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub else_schema: Option<Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dependent_schemas: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_items: Vec<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub pattern_properties: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unevaluated_items: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unevaluated_properties: Option<Schema>,

    // Any instance.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_set: Option<TypeSet>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(
        rename = "const",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub const_value: Option<Value>,

    // Numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,

    // String.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    // Array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub unique_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contains: Option<u64>,

    // Object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dependent_required: IndexMap<String, Vec<String>>,

    // Format and content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_schema: Option<Schema>,

    // Meta-data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub write_only: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,

    // OpenAPI description layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl SchemaObject {
    /// Creates an empty object schema (equivalent to `{}`, which accepts anything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object schema with a single `type`.
    pub fn of_type(name: &str) -> Self {
        Self {
            type_set: Some(TypeSet::from(name)),
            ..Self::default()
        }
    }

    /// Returns true if `type` is present and names `name`.
    pub fn has_type(&self, name: &str) -> bool {
        self.type_set.as_ref().is_some_and(|set| set.contains(name))
    }

    /// Iterates over every directly nested schema with the keyword path
    /// that leads to it, in keyword order.
    pub fn subschemas(&self) -> Vec<(SubschemaSlot<'_>, &Schema)> {
        let mut out = Vec::new();

        push_keyed(&mut out, "$defs", &self.defs);
        for (keyword, list) in [
            ("allOf", &self.all_of),
            ("anyOf", &self.any_of),
            ("oneOf", &self.one_of),
        ] {
            for (i, schema) in list.iter().enumerate() {
                out.push((SubschemaSlot::Indexed(keyword, i), schema));
            }
        }
        for (keyword, schema) in [
            ("not", &self.not),
            ("if", &self.if_schema),
            ("then", &self.then_schema),
            ("else", &self.else_schema),
        ] {
            if let Some(schema) = schema {
                out.push((SubschemaSlot::Single(keyword), schema));
            }
        }
        push_keyed(&mut out, "dependentSchemas", &self.dependent_schemas);
        for (i, schema) in self.prefix_items.iter().enumerate() {
            out.push((SubschemaSlot::Indexed("prefixItems", i), schema));
        }
        for (keyword, schema) in [("items", &self.items), ("contains", &self.contains)] {
            if let Some(schema) = schema {
                out.push((SubschemaSlot::Single(keyword), schema));
            }
        }
        push_keyed(&mut out, "properties", &self.properties);
        push_keyed(&mut out, "patternProperties", &self.pattern_properties);
        for (keyword, schema) in [
            ("additionalProperties", &self.additional_properties),
            ("propertyNames", &self.property_names),
            ("unevaluatedItems", &self.unevaluated_items),
            ("unevaluatedProperties", &self.unevaluated_properties),
            ("contentSchema", &self.content_schema),
        ] {
            if let Some(schema) = schema {
                out.push((SubschemaSlot::Single(keyword), schema));
            }
        }

        out
    }
}

fn push_keyed<'a>(
    out: &mut Vec<(SubschemaSlot<'a>, &'a Schema)>,
    keyword: &'static str,
    map: &'a IndexMap<String, Schema>,
) {
    for (name, schema) in map {
        out.push((SubschemaSlot::Keyed(keyword, name.as_str()), schema));
    }
}

/// Where a nested schema sits inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubschemaSlot<'a> {
    /// `not`, `items`, `additionalProperties`, ...
    Single(&'static str),
    /// `allOf[2]`, `prefixItems[0]`, ...
    Indexed(&'static str, usize),
    /// `properties[name]`, `$defs[Pet]`, ...
    Keyed(&'static str, &'a str),
}

impl_extensible!(SchemaObject);
