//! Structural validation of OpenAPI 3.1 documents.
//!
//! Validation is a single pure walk over a decoded document. Every rule
//! violation becomes a [`Finding`]; the walk never stops early, so one pass
//! reports everything that is wrong. References are never followed: a
//! reference node is accepted as-is while its siblings are still checked.
//!
//! The walk visits the document root, then `info`, `paths`, `webhooks`,
//! `components`, `tags`, `servers` and finally `security`.

mod context;
mod document;
mod operation;
mod report;
mod schema;
mod security;

pub use context::ValidationContext;
pub use report::ValidationReport;

use rayon::prelude::*;

use crate::codec::with_stack;
use crate::document::OpenApi;
use crate::error::Finding;
use crate::path::JsonPath;
use crate::reference::RefOr;
use crate::schema::Schema;

/// Default limit on schema and path-item nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A node that can check itself.
///
/// Implementations push one [`Finding`] per violation onto `findings` and
/// recurse into their children with extended paths. They never return early
/// because of an earlier finding.
pub trait Validate {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>);
}

impl<T: Validate> Validate for RefOr<T> {
    fn validate_into(&self, path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>) {
        if let RefOr::Item(item) = self {
            item.validate_into(path, ctx, findings);
        }
    }
}

/// Validation configuration.
///
/// # Example
///
/// ```rust
/// use oas31::{from_str, OpenApi, Validator};
///
/// let doc: OpenApi = from_str(r#"{
///     "openapi": "3.1.0",
///     "info": {"title": "t", "version": "1"},
///     "components": {"schemas": {"List": {"type": "array"}}}
/// }"#).unwrap();
///
/// assert_eq!(Validator::new().validate(&doc).len(), 1);
/// assert!(Validator::new().with_array_items_check(false).validate(&doc).is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    max_depth: usize,
    array_items_check: bool,
}

impl Validator {
    /// Creates a validator with default max depth (128) and every lint on.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            array_items_check: true,
        }
    }

    /// Sets the maximum nesting depth of schemas and path items.
    ///
    /// Descent stops at this depth with a `max_depth_exceeded` finding; the
    /// walk continues with the node's siblings.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enables or disables "array type should have items or prefixItems defined".
    pub fn with_array_items_check(mut self, enabled: bool) -> Self {
        self.array_items_check = enabled;
        self
    }

    fn context(&self) -> ValidationContext<'static> {
        ValidationContext::new(self.max_depth).with_array_items_check(self.array_items_check)
    }

    /// Validates a whole document. `None` yields the single finding
    /// `OpenAPI document is nil`.
    pub fn validate<'a>(&self, document: impl Into<Option<&'a OpenApi>>) -> ValidationReport {
        let mut findings = Vec::new();
        match document.into() {
            Some(document) => document.validate_into(&JsonPath::root(), &self.context(), &mut findings),
            None => findings.push(
                Finding::new(JsonPath::root(), "OpenAPI document is nil").with_code("required"),
            ),
        }
        tracing::debug!(findings = findings.len(), "validated document");
        ValidationReport::new(findings)
    }

    /// Validates a standalone schema, with paths relative to the schema.
    pub fn validate_schema(&self, schema: &Schema) -> ValidationReport {
        self.validate_node(schema)
    }

    /// Validates any node kind, with paths relative to that node.
    pub fn validate_node<T: Validate + ?Sized>(&self, node: &T) -> ValidationReport {
        let mut findings = Vec::new();
        node.validate_into(&JsonPath::root(), &self.context(), &mut findings);
        tracing::debug!(findings = findings.len(), "validated node");
        ValidationReport::new(findings)
    }

    /// Validates many documents in parallel. Reports are in input order.
    pub fn validate_all(&self, documents: &[OpenApi]) -> Vec<ValidationReport> {
        documents.par_iter().map(|document| self.validate(document)).collect()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenApi {
    /// Validates this document with the default [`Validator`].
    pub fn validate(&self) -> ValidationReport {
        Validator::new().validate(self)
    }
}

/// Validates a document with the default [`Validator`].
///
/// Accepts `&OpenApi` or `None`.
pub fn validate<'a>(document: impl Into<Option<&'a OpenApi>>) -> ValidationReport {
    Validator::new().validate(document)
}

/// Validates many documents in parallel with the default [`Validator`].
pub fn validate_all(documents: &[OpenApi]) -> Vec<ValidationReport> {
    Validator::new().validate_all(documents)
}

/// Pushes a finding.
pub(crate) fn flag(findings: &mut Vec<Finding>, path: JsonPath, code: &str, message: impl Into<String>) {
    findings.push(Finding::new(path, message).with_code(code));
}

/// Reports `field` under `path` as missing when it is absent or empty.
pub(crate) fn require(findings: &mut Vec<Finding>, path: &JsonPath, field: &str, value: Option<&String>) {
    if is_blank(value) {
        flag(findings, path.push_field(field), "required", "required field is missing");
    }
}

pub(crate) fn is_blank(value: Option<&String>) -> bool {
    value.map_or(true, |v| v.is_empty())
}

/// Runs `walk` one level deeper, or reports that the depth limit stops it.
pub(crate) fn descend<F>(path: &JsonPath, ctx: &ValidationContext<'_>, findings: &mut Vec<Finding>, walk: F)
where
    F: FnOnce(&ValidationContext<'_>, &mut Vec<Finding>),
{
    if ctx.at_limit() {
        tracing::trace!(path = %path, depth = ctx.depth(), "depth limit reached");
        flag(
            findings,
            path.clone(),
            "max_depth_exceeded",
            format!("maximum nesting depth {} exceeded", ctx.max_depth()),
        );
        return;
    }
    with_stack(|| walk(&ctx.increment_depth(), findings));
}

/// Validates every entry of a named map under `path[name]`.
pub(crate) fn validate_map<'a, T, I>(
    entries: I,
    path: &JsonPath,
    ctx: &ValidationContext<'_>,
    findings: &mut Vec<Finding>,
) where
    T: Validate + 'a,
    I: IntoIterator<Item = (&'a String, &'a T)>,
{
    for (name, node) in entries {
        node.validate_into(&path.push_key(name.as_str()), ctx, findings);
    }
}

/// Validates every element of a list under `path[i]`.
pub(crate) fn validate_list<T: Validate>(
    nodes: &[T],
    path: &JsonPath,
    ctx: &ValidationContext<'_>,
    findings: &mut Vec<Finding>,
) {
    for (i, node) in nodes.iter().enumerate() {
        node.validate_into(&path.push_index(i), ctx, findings);
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
    assert_send::<OpenApi>();
    assert_sync::<OpenApi>();
};
