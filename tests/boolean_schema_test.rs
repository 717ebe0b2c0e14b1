//! Integration tests for boolean schemas.

use oas31::{from_str, from_value, to_string, to_value, Components, Schema, SchemaObject, Validator};
use serde_json::json;

#[test]
fn test_bare_booleans_decode_and_encode() {
    let schema: Schema = from_str("true").unwrap();
    assert_eq!(schema, Schema::Bool(true));
    assert_eq!(to_string(&schema).unwrap(), "true");

    let schema: Schema = from_str("false").unwrap();
    assert_eq!(schema, Schema::Bool(false));
    assert_eq!(to_string(&schema).unwrap(), "false");
}

#[test]
fn test_booleans_in_every_subschema_position() {
    let input = json!({
        "items": false,
        "additionalProperties": true,
        "unevaluatedProperties": false,
        "propertyNames": true,
        "not": false,
        "prefixItems": [true, false],
        "properties": {"anything": true, "nothing": false},
        "$defs": {"never": false}
    });
    let schema: Schema = from_value(input.clone()).unwrap();

    let object = schema.as_object().unwrap();
    assert_eq!(object.items.as_ref().and_then(Schema::as_bool), Some(false));
    assert_eq!(object.additional_properties.as_ref().and_then(Schema::as_bool), Some(true));
    assert_eq!(object.properties["nothing"].as_bool(), Some(false));
    assert_eq!(object.defs["never"].as_bool(), Some(false));

    assert_eq!(to_value(&schema).unwrap(), input);
}

#[test]
fn test_boolean_schema_is_not_an_empty_object() {
    assert_ne!(Schema::Bool(true), Schema::from(SchemaObject::new()));
    assert_eq!(to_string(&Schema::from(SchemaObject::new())).unwrap(), "{}");

    let components: Components = from_value(json!({"schemas": {"A": true, "B": {}}})).unwrap();
    assert!(components.schemas["A"].is_bool());
    assert!(!components.schemas["B"].is_bool());
    assert_eq!(
        to_value(&components).unwrap(),
        json!({"schemas": {"A": true, "B": {}}})
    );
}

#[test]
fn test_booleans_never_produce_findings() {
    let validator = Validator::new().with_max_depth(0);
    assert!(validator.validate_schema(&Schema::Bool(true)).is_valid());
    assert!(validator.validate_schema(&Schema::Bool(false)).is_valid());
}

#[test]
fn test_non_boolean_scalars_are_rejected() {
    for text in ["0", "1", "\"true\"", "null", "[true]"] {
        assert!(from_str::<Schema>(text).is_err(), "{} should not decode", text);
    }
}
