//! Responses and links.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::keyed::{serialize_keyed, KeyedVisitor};
use super::{Header, MediaType, Server};
use crate::codec::present;
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::RefOr;

/// The catch-all response key.
pub const DEFAULT_RESPONSE: &str = "default";

/// A three-digit HTTP status code or a class range such as `2XX`.
pub(crate) static STATUS_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-5](?:[0-9]{2}|XX)$").expect("valid regex"));

/// Returns true if `key` is a valid status code key.
pub fn is_status_code(key: &str) -> bool {
    STATUS_CODE.is_match(key)
}

/// The expected responses of an operation, keyed by status code.
///
/// On decode, `default`, status-code keys and `x-` keys are kept; any other
/// key is dropped.
///
/// # Example
///
/// ```rust
/// use oas31::{from_str, Responses};
///
/// let responses: Responses = from_str(r#"{
///     "200": {"description": "ok"},
///     "4XX": {"description": "client error"},
///     "default": {"description": "unexpected"}
/// }"#).unwrap();
///
/// assert!(responses.get("200").is_some());
/// assert!(responses.get("4XX").is_some());
/// assert!(responses.default().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    pub default: Option<RefOr<Response>>,
    pub codes: IndexMap<String, RefOr<Response>>,
    pub extensions: Extensions,
}

impl Responses {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Returns the response for a status code key, or the default response
    /// for `"default"`.
    pub fn get(&self, code: &str) -> Option<&RefOr<Response>> {
        if code == DEFAULT_RESPONSE {
            self.default.as_ref()
        } else {
            self.codes.get(code)
        }
    }

    pub fn default(&self) -> Option<&RefOr<Response>> {
        self.default.as_ref()
    }

    /// Adds a response under a status code key, or as the default response.
    pub fn insert(&mut self, code: impl Into<String>, response: RefOr<Response>) {
        let code = code.into();
        if code == DEFAULT_RESPONSE {
            self.default = Some(response);
        } else {
            self.codes.insert(code, response);
        }
    }

    /// Total number of responses, default included.
    pub fn len(&self) -> usize {
        self.codes.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let default = self.default.iter().map(|r| (DEFAULT_RESPONSE, r));
        let codes = self.codes.iter().map(|(k, v)| (k.as_str(), v));
        serialize_keyed(serializer, default.chain(codes), &self.extensions)
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = KeyedVisitor::new("a map of status codes to responses", |key| {
            key == DEFAULT_RESPONSE || is_status_code(key)
        });
        let (mut codes, extensions) = deserializer.deserialize_map(visitor)?;
        let default = codes.shift_remove(DEFAULT_RESPONSE);
        Ok(Self {
            default,
            codes,
            extensions,
        })
    }
}

/// A single response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, RefOr<Header>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, RefOr<Link>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

/// A design-time link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameter name to a constant or runtime expression.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(Responses, Response, Link);
