//! Decode and encode entry points.
//!
//! Decoding tracks the location of every keyword with `serde_path_to_error`.
//! Schemas and referenceable nodes are decoded in two steps (first into a raw
//! field map, then into their typed shape), which starts a fresh path tracker;
//! [`decode_buffered`] carries the inner location out through serde's
//! message-only custom errors so [`DecodeError::path`] is always absolute.
//!
//! Every level of that two-step decode costs a large stack frame, so the
//! recursive node kinds run their nested decode and encode through
//! [`with_stack`], which moves onto a fresh heap-allocated stack segment
//! when the current one runs low. Input depth is still bounded by
//! `serde_json`'s recursion limit, which surfaces as a located error.

use serde::de::{self, DeserializeOwned};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Error};

/// Marks the start and end of a nested location inside a custom error message.
const LOCATION_MARK: char = '\u{1f}';

/// Root path as rendered by `serde_path_to_error`.
const ROOT: &str = ".";

/// Stack that must remain before a nested node is entered.
const RED_ZONE: usize = 1024 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
const STACK_SEGMENT: usize = 8 * 1024 * 1024;

/// Decodes a node from UTF-8 JSON bytes.
///
/// # Example
///
/// ```rust
/// use oas31::{Schema, from_slice};
///
/// let schema: Schema = from_slice(b"true").unwrap();
/// assert_eq!(schema.as_bool(), Some(true));
///
/// let err = from_slice::<Schema>(br#"{"properties": {"id": {"minLength": "x"}}}"#).unwrap_err();
/// assert_eq!(err.path, "properties.id.minLength");
/// ```
///
/// # Errors
///
/// Returns [`DecodeError`] naming the first offending keyword.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    tracing::debug!(bytes = bytes.len(), "decoding");
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let node = serde_path_to_error::deserialize(&mut de).map_err(located)?;
    de.end()
        .map_err(|err| log_failure(DecodeError::new(ROOT, err.to_string())))?;
    Ok(node)
}

/// Decodes a node from a JSON string.
///
/// # Errors
///
/// Returns [`DecodeError`] naming the first offending keyword.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    from_slice(json.as_bytes())
}

/// Decodes a node from an already-parsed JSON value tree.
///
/// # Errors
///
/// Returns [`DecodeError`] naming the first offending keyword.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(value).map_err(located)
}

/// Encodes a node as compact UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the serializer fails.
pub fn to_vec<T: Serialize>(node: &T) -> Result<Vec<u8>, Error> {
    let bytes = serde_json::to_vec(node).map_err(Error::Encode)?;
    tracing::debug!(bytes = bytes.len(), "encoded");
    Ok(bytes)
}

/// Encodes a node as indented UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the serializer fails.
pub fn to_vec_pretty<T: Serialize>(node: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec_pretty(node).map_err(Error::Encode)
}

/// Encodes a node as a compact JSON string.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the serializer fails.
pub fn to_string<T: Serialize>(node: &T) -> Result<String, Error> {
    serde_json::to_string(node).map_err(Error::Encode)
}

/// Encodes a node as a JSON value tree.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the serializer fails.
pub fn to_value<T: Serialize>(node: &T) -> Result<Value, Error> {
    serde_json::to_value(node).map_err(Error::Encode)
}

/// Decodes a typed node out of an already-buffered raw field map.
///
/// Any failure is reported through `E::custom` with the inner location
/// embedded, so the enclosing tracker can splice it onto its own path.
pub(crate) fn decode_buffered<T, E>(raw: Map<String, Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_path_to_error::deserialize(Value::Object(raw)).map_err(|err| {
        let DecodeError { path, message } = located(err);
        E::custom(format!("{LOCATION_MARK}{path}{LOCATION_MARK}{message}"))
    })
}

/// Runs `f`, first switching to a new stack segment if fewer than
/// [`RED_ZONE`] bytes of the current stack remain.
///
/// Schemas and referenceable nodes call this once per nesting level, which
/// covers every recursive cycle in the model.
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// `deserialize_with` helper that keeps an explicit JSON `null` as `Some(Value::Null)`.
///
/// Paired with `#[serde(default)]`, an absent keyword stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: de::Deserializer<'de>,
{
    <Value as de::Deserialize>::deserialize(deserializer).map(Some)
}

pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}

fn located(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let outer = err.path().to_string();
    let inner = err.into_inner().to_string();
    let (nested, message) = split_location(&inner);
    log_failure(DecodeError::new(join_paths(&outer, nested), message))
}

fn log_failure(err: DecodeError) -> DecodeError {
    tracing::debug!(path = %err.path, message = %err.message, "decode failed");
    err
}

/// Splits a message produced by [`decode_buffered`] into location and text.
fn split_location(message: &str) -> (&str, &str) {
    message
        .strip_prefix(LOCATION_MARK)
        .and_then(|rest| rest.split_once(LOCATION_MARK))
        .unwrap_or((ROOT, message))
}

fn join_paths(outer: &str, inner: &str) -> String {
    if outer == ROOT {
        inner.to_string()
    } else if inner == ROOT {
        outer.to_string()
    } else if inner.starts_with('[') {
        format!("{outer}{inner}")
    } else {
        format!("{outer}.{inner}")
    }
}
