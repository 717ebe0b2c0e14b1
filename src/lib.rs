//! # oas31
//!
//! A lossless OpenAPI 3.1 document model with exhaustive structural
//! validation.
//!
//! ## Overview
//!
//! Documents decode into strongly typed nodes that keep every `x-`
//! extension field, so decoding and re-encoding a document loses nothing
//! but unknown non-extension keys. Schemas follow the JSON Schema 2020-12
//! dialect OpenAPI 3.1 adopts: a schema is a boolean, a reference or an
//! object, and the shape survives the round trip.
//!
//! Validation walks the whole tree once and collects ALL rule violations
//! rather than stopping at the first, each with the path where it occurred.
//! References are never followed.
//!
//! ## Core Types
//!
//! - [`OpenApi`]: the document root and the tree under it
//! - [`Schema`]: a boolean, [`Reference`] or [`SchemaObject`] schema node
//! - [`RefOr`]: a node that may be replaced by a reference
//! - [`Extensions`]: the `x-` fields of a node, in document order
//! - [`Validator`]: the validation walk and its options
//! - [`Finding`]: one violation, located by a [`JsonPath`]
//!
//! ## Example
//!
//! ```rust
//! use oas31::{from_str, to_string, OpenApi};
//!
//! let doc: OpenApi = from_str(r#"{
//!     "openapi": "3.1.0",
//!     "info": {"title": "Pets", "version": "1", "x-audience": "public"},
//!     "paths": {
//!         "/pets": {
//!             "get": {
//!                 "parameters": [{"name": "id", "in": "path", "schema": {"type": "integr"}}],
//!                 "responses": {"200": {"description": "ok"}}
//!             }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let report = doc.validate();
//! let messages: Vec<_> = report.iter().map(ToString::to_string).collect();
//! assert_eq!(messages, vec![
//!     "paths[/pets].get.parameters[0].required: path parameters must have required: true",
//!     "paths[/pets].get.parameters[0].schema.type: invalid type 'integr'",
//! ]);
//!
//! assert!(to_string(&doc).unwrap().contains(r#""x-audience":"public""#));
//! ```

pub mod codec;
pub mod document;
pub mod error;
pub mod extensions;
pub mod path;
pub mod reference;
pub mod schema;
pub mod validation;

pub use codec::{from_slice, from_str, from_value, to_string, to_value, to_vec, to_vec_pretty};
pub use document::{
    Callback, Components, Contact, Encoding, Example, ExternalDocs, Header, Info, License, Link,
    MediaType, OAuthFlow, OAuthFlows, OpenApi, Operation, Parameter, PathItem, Paths, RequestBody,
    Response, Responses, SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag,
};
pub use error::{DecodeError, Error, Finding, Findings};
pub use extensions::{Extensible, Extensions, EXTENSION_PREFIX};
pub use path::{JsonPath, PathSegment};
pub use reference::{RefOr, Reference};
pub use schema::{Discriminator, Schema, SchemaObject, TypeSet, Xml, JSON_TYPES};
pub use validation::{validate, validate_all, Validate, ValidationContext, ValidationReport, Validator};

/// Result of a validation walk in stillwater form.
pub type ValidationResult<T> = stillwater::Validation<T, Findings>;
