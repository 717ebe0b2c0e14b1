//! Property tests for codec stability and validation totality.

use oas31::{from_slice, from_value, to_vec, OpenApi, Schema, Validator};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON without floats, so numbers compare exactly after re-encoding.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Schema-shaped JSON: booleans, references and objects mixing real
/// keywords, extensions and unknown fields.
fn schema_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        "#/\\$defs/[a-z]{1,6}".prop_map(|p| json!({"$ref": p})),
        prop::sample::select(vec!["string", "integer", "number", "array", "object", "null", "strng"])
            .prop_map(|t| json!({"type": t})),
        (0u64..20, 0u64..20).prop_map(|(min, max)| json!({"minLength": min, "maxLength": max})),
        (-50i64..50, -50i64..50).prop_map(|(min, max)| json!({"minimum": min, "maximum": max})),
        prop::sample::select(vec!["^a+$", "[", "(x|y)", ""]).prop_map(|p| json!({"pattern": p})),
    ];
    leaf.prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|s| json!({"allOf": s})),
            prop::collection::vec(inner.clone(), 1..3).prop_map(|s| json!({"prefixItems": s})),
            prop::collection::btree_map("[a-z]{1,6}", inner.clone(), 0..4).prop_map(|m| {
                let required: Vec<_> = m.keys().take(1).cloned().chain(["ghost".to_string()]).collect();
                json!({"type": "object", "properties": m, "required": required})
            }),
            (inner.clone(), json_value()).prop_map(|(s, x)| json!({"items": s, "x-any": x, "tyep": 1})),
            (inner.clone(), inner).prop_map(|(a, b)| json!({"if": a, "then": b, "not": false})),
        ]
    })
}

/// A generated schema buried under a long chain of single-child applicators.
fn deep_schema_value() -> impl Strategy<Value = Value> {
    let keywords = prop::sample::select(vec!["not", "items", "contains", "properties", "allOf"]);
    (schema_value(), prop::collection::vec(keywords, 0..50)).prop_map(|(leaf, keywords)| {
        keywords.into_iter().fold(leaf, |inner, keyword| match keyword {
            "properties" => json!({"properties": {"p": inner}}),
            "allOf" => json!({"allOf": [inner]}),
            keyword => json!({ keyword: inner }),
        })
    })
}

fn document_value() -> impl Strategy<Value = Value> {
    (schema_value(), prop::sample::select(vec!["query", "path", "header", "cookie", "body"]),
        prop::sample::select(vec!["form", "simple", "label", "deepObject"]))
        .prop_map(|(schema, location, style)| {
            json!({
                "openapi": "3.1.0",
                "info": {"title": "generated", "version": "1"},
                "paths": {
                    "/items/{id}": {
                        "get": {
                            "parameters": [{"name": "id", "in": location, "style": style, "schema": schema.clone()}],
                            "responses": {"200": {"description": "ok"}}
                        }
                    }
                },
                "components": {"schemas": {"Generated": schema}}
            })
        })
}

proptest! {
    /// Decoding an encoding reproduces the same bytes.
    #[test]
    fn schema_round_trip_is_stable(value in schema_value()) {
        let schema: Schema = from_value(value).unwrap();
        let first = to_vec(&schema).unwrap();
        let again: Schema = from_slice(&first).unwrap();
        prop_assert_eq!(to_vec(&again).unwrap(), first);
        prop_assert_eq!(again, schema);
    }

    /// Deep chains decode from bytes, re-encode identically and validate.
    #[test]
    fn deep_schema_survives_codec_and_validation(value in deep_schema_value()) {
        let bytes = serde_json::to_vec(&value).unwrap();
        let schema: Schema = from_slice(&bytes).unwrap();
        let first = to_vec(&schema).unwrap();
        let again: Schema = from_slice(&first).unwrap();
        prop_assert_eq!(to_vec(&again).unwrap(), first);

        let report = Validator::new().validate_schema(&schema);
        prop_assert!(report.with_code("max_depth_exceeded").is_empty());
    }

    /// Whole documents are stable under re-encoding too.
    #[test]
    fn document_round_trip_is_stable(value in document_value()) {
        let doc: OpenApi = from_value(value).unwrap();
        let first = to_vec(&doc).unwrap();
        let again: OpenApi = from_slice(&first).unwrap();
        prop_assert_eq!(to_vec(&again).unwrap(), first);
    }

    /// Validation is total and deterministic on anything that decodes.
    #[test]
    fn validation_never_panics(value in document_value(), depth in 0usize..8) {
        let doc: OpenApi = from_value(value).unwrap();
        let validator = Validator::new().with_max_depth(depth);
        let first = validator.validate(&doc);
        let second = validator.validate(&doc);
        prop_assert_eq!(first, second);
    }

    /// Arbitrary JSON either decodes as a schema or fails cleanly.
    #[test]
    fn arbitrary_json_decodes_or_errors(value in json_value()) {
        if let Ok(schema) = from_value::<Schema>(value) {
            let report = Validator::new().validate_schema(&schema);
            prop_assert!(report.iter().all(|f| !f.message.is_empty()));
        }
    }
}
