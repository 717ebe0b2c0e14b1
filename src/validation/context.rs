//! Validation context for the document walk.
//!
//! This module provides the [`ValidationContext`] type that carries the walk
//! configuration, depth tracking and document-wide lookups. It keeps deep or
//! pathological trees from exhausting the stack.

use indexmap::IndexMap;

use crate::document::SecurityScheme;
use crate::reference::RefOr;

/// Validation context carries configuration and depth tracking information.
///
/// ValidationContext is passed through the validation call chain to enable:
/// - Depth tracking so descent stops at a configured limit
/// - Optional lints that callers can switch off
/// - Lookups against the enclosing document (declared security schemes)
///
/// The context is `Copy`; descending produces a new context rather than
/// mutating the caller's.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    depth: usize,
    max_depth: usize,
    array_items_check: bool,
    schemes: DeclaredSchemes<'a>,
}

/// Which security schemes the enclosing document declares.
#[derive(Debug, Clone, Copy)]
enum DeclaredSchemes<'a> {
    /// Not validating a whole document; requirement names are not checked.
    Unknown,
    /// The document's `components.securitySchemes`, if it has any.
    Known(Option<&'a IndexMap<String, RefOr<SecurityScheme>>>),
}

impl<'a> ValidationContext<'a> {
    /// Creates a new context at depth zero with a max depth limit.
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            array_items_check: true,
            schemes: DeclaredSchemes::Unknown,
        }
    }

    /// Enables or disables the "array without items" lint.
    pub fn with_array_items_check(mut self, enabled: bool) -> Self {
        self.array_items_check = enabled;
        self
    }

    /// Records the security schemes declared by the document being walked.
    pub fn with_security_schemes(
        mut self,
        schemes: Option<&'a IndexMap<String, RefOr<SecurityScheme>>>,
    ) -> Self {
        self.schemes = DeclaredSchemes::Known(schemes);
        self
    }

    /// Creates a new context with incremented depth.
    ///
    /// This is called when descending into a nested schema or path item.
    pub fn increment_depth(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the maximum allowed depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns true if descending once more would exceed the limit.
    pub fn at_limit(&self) -> bool {
        self.depth >= self.max_depth
    }

    /// Returns true if array schemas without `items` are reported.
    pub fn array_items_check(&self) -> bool {
        self.array_items_check
    }

    /// Returns whether `name` is a declared security scheme, or `None` when
    /// the walk has no document to check against.
    pub fn is_scheme_declared(&self, name: &str) -> Option<bool> {
        match self.schemes {
            DeclaredSchemes::Unknown => None,
            DeclaredSchemes::Known(None) => Some(false),
            DeclaredSchemes::Known(Some(schemes)) => Some(schemes.contains_key(name)),
        }
    }
}
