//! Integration tests for Finding, Findings and DecodeError.

use oas31::{from_str, Finding, Findings, JsonPath, OpenApi, ValidationResult};
use stillwater::prelude::*;
use stillwater::Validation;

#[test]
fn test_finding_full_context() {
    let finding = Finding::new(
        JsonPath::from_field("paths").push_key("/pets").push_field("get"),
        "required field is missing",
    )
    .with_code("required");

    assert_eq!(finding.path.to_string(), "paths[/pets].get");
    assert_eq!(finding.code, "required");
    assert_eq!(finding.to_string(), "paths[/pets].get: required field is missing");
}

#[test]
fn test_root_finding_has_no_prefix() {
    let finding = Finding::new(JsonPath::root(), "OpenAPI document is nil");
    assert_eq!(finding.to_string(), "OpenAPI document is nil");
    assert_eq!(finding.code, "validation_error");
}

#[test]
fn test_findings_never_empty() {
    assert!(Findings::from_vec(Vec::new()).is_none());

    let findings = Findings::single(Finding::new(JsonPath::root(), "x"));
    assert!(!findings.is_empty());
    assert_eq!(findings.len(), 1);
}

#[test]
fn test_findings_combine_via_semigroup() {
    let a = Findings::single(Finding::new(JsonPath::from_field("openapi"), "a").with_code("required"));
    let b = Findings::single(Finding::new(JsonPath::from_field("info"), "b").with_code("required"));
    let c = Findings::single(Finding::new(JsonPath::from_field("info"), "c").with_code("invalid_value"));

    let combined = a.combine(b).combine(c);
    assert_eq!(combined.len(), 3);
    assert_eq!(combined.with_code("required").len(), 2);

    let messages: Vec<String> = combined.into_iter().map(|f| f.message).collect();
    assert_eq!(messages, vec!["a", "b", "c"]);
}

#[test]
fn test_validation_and_accumulates_findings() {
    let v1: ValidationResult<()> = OpenApi::default().validate().into_validation();
    let v2: ValidationResult<()> = Validation::Failure(Findings::single(Finding::new(
        JsonPath::from_field("extra"),
        "extra",
    )));

    match v1.and(v2) {
        Validation::Failure(findings) => assert_eq!(findings.len(), 4),
        Validation::Success(_) => panic!("Expected failure"),
    }
}

#[test]
fn test_decode_error_display() {
    let err = from_str::<OpenApi>(r#"{"info": {"title": ["not", "a", "string"]}}"#).unwrap_err();
    assert_eq!(err.path, "info.title");
    assert!(err.to_string().starts_with("decode failed at `info.title`: "));

    let err: oas31::Error = err.into();
    assert!(matches!(err, oas31::Error::Decode(_)));
}
