//! Integration tests for JsonPath.

use oas31::{JsonPath, PathSegment};

#[test]
fn test_path_construction_and_display() {
    assert_eq!(JsonPath::root().to_string(), "");
    assert_eq!(JsonPath::root().push_field("info").to_string(), "info");
    assert_eq!(JsonPath::root().push_index(0).to_string(), "[0]");
    assert_eq!(JsonPath::root().push_key("200").to_string(), "[200]");

    let path = JsonPath::root()
        .push_field("paths")
        .push_key("/pets")
        .push_field("get")
        .push_field("parameters")
        .push_index(0)
        .push_field("schema")
        .push_field("properties")
        .push_key("name");
    assert_eq!(path.to_string(), "paths[/pets].get.parameters[0].schema.properties[name]");
}

#[test]
fn test_path_segments_preserved() {
    let path = JsonPath::root()
        .push_field("responses")
        .push_key("404")
        .push_index(3);

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            &PathSegment::field("responses"),
            &PathSegment::key("404"),
            &PathSegment::index(3),
        ]
    );
}

#[test]
fn test_key_and_field_with_same_text_differ() {
    let field = JsonPath::root().push_field("default");
    let key = JsonPath::root().push_key("default");
    assert_ne!(field, key);
    assert_eq!(field.to_string(), "default");
    assert_eq!(key.to_string(), "[default]");
}

#[test]
fn test_path_is_immutable() {
    let base = JsonPath::root().push_field("servers");

    let first = base.push_index(0);
    let second = base.push_index(1).push_field("url");

    assert_eq!(base.to_string(), "servers");
    assert_eq!(first.to_string(), "servers[0]");
    assert_eq!(second.to_string(), "servers[1].url");
}

#[test]
fn test_root_path() {
    assert!(JsonPath::root().is_root());
    assert!(JsonPath::root().is_empty());
    assert_eq!(JsonPath::from_field("info").len(), 1);
}
