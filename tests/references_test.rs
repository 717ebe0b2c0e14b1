//! Integration tests for reference nodes.

use oas31::{
    from_value, to_value, Extensible, Header, OpenApi, Parameter, RefOr, Reference, Response, Schema,
};
use serde_json::json;

#[test]
fn test_reference_with_own_summary_and_description() {
    let param: RefOr<Parameter> = from_value(json!({
        "$ref": "#/components/parameters/limit",
        "summary": "Page size",
        "description": "Overrides the target's description"
    }))
    .unwrap();

    let reference = param.as_reference().unwrap();
    assert_eq!(reference.reference, "#/components/parameters/limit");
    assert_eq!(reference.summary.as_deref(), Some("Page size"));
    assert_eq!(reference.description.as_deref(), Some("Overrides the target's description"));
}

#[test]
fn test_reference_drops_target_fields_but_keeps_extensions() {
    let response: RefOr<Response> = from_value(json!({
        "$ref": "#/components/responses/NotFound",
        "description": "kept",
        "headers": {"X-Dropped": {"schema": {}}},
        "x-trace": "kept too"
    }))
    .unwrap();

    assert!(response.is_reference());
    assert_eq!(response.extension("x-trace"), Some(&json!("kept too")));
    assert_eq!(
        to_value(&response).unwrap(),
        json!({"$ref": "#/components/responses/NotFound", "description": "kept", "x-trace": "kept too"})
    );
}

#[test]
fn test_inline_and_reference_mix_in_one_list() {
    let doc: OpenApi = from_value(json!({
        "openapi": "3.1.0",
        "info": {"title": "t", "version": "1"},
        "paths": {
            "/a": {
                "get": {
                    "parameters": [
                        {"$ref": "#/components/parameters/p"},
                        {"name": "q", "in": "query", "schema": {"type": "string"}}
                    ],
                    "responses": {"200": {"description": "ok"}}
                }
            }
        }
    }))
    .unwrap();

    let params = &doc.path("/a").unwrap().get.as_ref().unwrap().parameters;
    assert_eq!(params[0].pointer(), Some("#/components/parameters/p"));
    assert_eq!(params[1].as_item().and_then(|p| p.name.as_deref()), Some("q"));
}

#[test]
fn test_schema_reference_keeps_shape_through_encoding() {
    let schema = Schema::Ref(Reference::new("#/$defs/node").with_description("recursive"));
    let encoded = to_value(&schema).unwrap();
    assert_eq!(encoded, json!({"$ref": "#/$defs/node", "description": "recursive"}));

    let decoded: Schema = from_value(encoded).unwrap();
    assert_eq!(decoded, schema);
}

#[test]
fn test_references_are_not_followed_by_validation() {
    let doc: OpenApi = from_value(json!({
        "openapi": "3.1.0",
        "info": {"title": "t", "version": "1"},
        "components": {
            "headers": {"Broken": {"$ref": "#/components/headers/DoesNotExist"}},
            "schemas": {"Loop": {"$ref": "#/components/schemas/Loop"}}
        }
    }))
    .unwrap();

    assert!(doc.validate().is_valid());
}

#[test]
fn test_constructed_references() {
    let header: RefOr<Header> = RefOr::reference("#/components/headers/Rate");
    assert_eq!(to_value(&header).unwrap(), json!({"$ref": "#/components/headers/Rate"}));

    let inline: RefOr<Header> = Header::default().into();
    assert!(inline.as_item().is_some());
    assert_eq!(inline.into_item(), Some(Header::default()));
}
