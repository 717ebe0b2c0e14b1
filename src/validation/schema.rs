//! Schema rules.

use std::cmp::Ordering;
use std::collections::HashSet;

use regex::Regex;
use serde_json::Number;

use super::{descend, flag, is_blank, Validate, ValidationContext};
use crate::error::Finding;
use crate::path::JsonPath;
use crate::schema::{is_json_type, Schema, SchemaObject, SubschemaSlot};

impl Validate for Schema {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        // Boolean schemas carry no constraint; references are not followed.
        if let Schema::Object(object) = self {
            descend(path, ctx, findings, |ctx, findings| {
                object.validate_into(path, ctx, findings)
            });
        }
    }
}

impl Validate for SchemaObject {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        check_type(self, path, ctx, findings);
        check_bounds(self, path, findings);
        check_patterns(self, path, findings);
        check_required(self, path, findings);

        if let Some(discriminator) = &self.discriminator {
            if is_blank(discriminator.property_name.as_ref()) {
                flag(
                    findings,
                    path.push_field("discriminator").push_field("propertyName"),
                    "required",
                    "required field is missing",
                );
            }
        }

        for (slot, schema) in self.subschemas() {
            schema.validate_into(&slot_path(path, slot), ctx, findings);
        }
    }
}

fn slot_path(path: &JsonPath, slot: SubschemaSlot<'_>) -> JsonPath {
    match slot {
        SubschemaSlot::Single(keyword) => path.push_field(keyword),
        SubschemaSlot::Indexed(keyword, i) => path.push_field(keyword).push_index(i),
        SubschemaSlot::Keyed(keyword, name) => path.push_field(keyword).push_key(name),
    }
}

fn check_type(object: &SchemaObject, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
    let Some(types) = &object.type_set else {
        return;
    };
    let type_path = path.push_field("type");

    if types.is_empty() {
        flag(findings, type_path.clone(), "invalid_type", "type must not be empty");
    }

    let mut seen = HashSet::new();
    for name in types.names() {
        if !is_json_type(name) {
            flag(findings, type_path.clone(), "invalid_type", format!("invalid type '{}'", name));
        }
        if !seen.insert(name.as_str()) {
            flag(findings, type_path.clone(), "invalid_type", format!("duplicate type '{}'", name));
        }
    }

    if ctx.array_items_check()
        && types.contains("array")
        && object.items.is_none()
        && object.prefix_items.is_empty()
    {
        flag(
            findings,
            path.clone(),
            "missing_items",
            "array type should have items or prefixItems defined",
        );
    }
}

fn check_bounds(object: &SchemaObject, path: &JsonPath, findings: &mut Vec<Finding>) {
    if let Some(multiple_of) = object.multiple_of.as_ref().and_then(Number::as_f64) {
        if multiple_of <= 0.0 {
            flag(
                findings,
                path.push_field("multipleOf"),
                "invalid_value",
                "multipleOf must be greater than 0",
            );
        }
    }

    if let (Some(min), Some(max)) = (&object.minimum, &object.maximum) {
        if compare(min, max) == Some(Ordering::Greater) {
            flag(findings, path.clone(), "bound_conflict", "minimum cannot be greater than maximum");
        }
    }
    if let (Some(min), Some(max)) = (&object.exclusive_minimum, &object.exclusive_maximum) {
        if matches!(compare(min, max), Some(Ordering::Greater | Ordering::Equal)) {
            flag(
                findings,
                path.clone(),
                "bound_conflict",
                "exclusiveMinimum must be less than exclusiveMaximum",
            );
        }
    }

    let pairs = [
        ("minLength", object.min_length, "maxLength", object.max_length),
        ("minItems", object.min_items, "maxItems", object.max_items),
        ("minProperties", object.min_properties, "maxProperties", object.max_properties),
        ("minContains", object.min_contains, "maxContains", object.max_contains),
    ];
    for (min_name, min, max_name, max) in pairs {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                flag(
                    findings,
                    path.clone(),
                    "bound_conflict",
                    format!("{} cannot be greater than {}", min_name, max_name),
                );
            }
        }
    }
}

/// Orders two JSON numbers, exactly when both are integers.
fn compare(a: &Number, b: &Number) -> Option<Ordering> {
    match (a.as_i64(), b.as_i64(), a.as_u64(), b.as_u64()) {
        (Some(a), Some(b), _, _) => Some(a.cmp(&b)),
        (_, _, Some(a), Some(b)) => Some(a.cmp(&b)),
        // A negative integer against one beyond i64::MAX.
        (Some(_), None, None, Some(_)) => Some(Ordering::Less),
        (None, Some(_), Some(_), None) => Some(Ordering::Greater),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

fn check_patterns(object: &SchemaObject, path: &JsonPath, findings: &mut Vec<Finding>) {
    if let Some(pattern) = object.pattern.as_deref().filter(|p| !p.is_empty()) {
        if let Err(err) = Regex::new(pattern) {
            flag(
                findings,
                path.push_field("pattern"),
                "invalid_pattern",
                format!("invalid regex pattern: {}", err),
            );
        }
    }

    for key in object.pattern_properties.keys() {
        if let Err(err) = Regex::new(key) {
            flag(
                findings,
                path.push_field("patternProperties").push_key(key.as_str()),
                "invalid_pattern",
                format!("invalid regex pattern: {}", err),
            );
        }
    }
}

/// Names in `required` must be declared in `properties` when both are present.
fn check_required(object: &SchemaObject, path: &JsonPath, findings: &mut Vec<Finding>) {
    if object.required.is_empty() || object.properties.is_empty() {
        return;
    }
    for name in &object.required {
        if !object.properties.contains_key(name) {
            flag(
                findings,
                path.push_field("required"),
                "undefined_property",
                format!("required property '{}' not defined in properties", name),
            );
        }
    }
}
