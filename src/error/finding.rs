//! Validation finding types.
//!
//! This module provides [`Finding`] for a single rule violation and
//! [`Findings`] for a non-empty set of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single validation finding with its location.
///
/// `Finding` captures:
/// - **path**: Where in the document the rule was violated
/// - **message**: Human-readable description of the violation
/// - **code**: Machine-readable tag for programmatic filtering
///
/// Severity is uniform; callers that need tiers can filter on `code`.
///
/// # Example
///
/// ```rust
/// use oas31::{Finding, JsonPath};
///
/// let finding = Finding::new(
///     JsonPath::root().push_field("info").push_field("title"),
///     "required field is missing",
/// )
/// .with_code("required");
///
/// assert_eq!(finding.to_string(), "info.title: required field is missing");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// The path to the node that violated a rule.
    pub path: JsonPath,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code (e.g., `invalid_style`).
    pub code: String,
}

impl Finding {
    /// Creates a new finding with the given path and message.
    ///
    /// The code defaults to "validation_error". Use `with_code` to set
    /// a more specific code.
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: "validation_error".to_string(),
        }
    }

    /// Sets the code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for Finding {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Finding>();
    assert_sync::<Finding>();
};

/// A non-empty collection of validation findings.
///
/// `Findings` is the failure side of
/// `stillwater::Validation<(), Findings>`, obtained from
/// [`ValidationReport::into_validation`](crate::ValidationReport::into_validation).
/// It implements `Semigroup`, so findings from independent checks combine:
///
/// ```rust
/// use oas31::{Finding, Findings, JsonPath};
/// use stillwater::prelude::*;
///
/// let a = Findings::single(Finding::new(JsonPath::from_field("openapi"), "required field is missing"));
/// let b = Findings::single(Finding::new(JsonPath::from_field("info"), "required field is missing"));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Findings(NonEmptyVec<Finding>);

impl Findings {
    /// Creates a `Findings` containing a single finding.
    pub fn single(finding: Finding) -> Self {
        Self(NonEmptyVec::singleton(finding))
    }

    /// Creates a `Findings` from a `Vec`, or `None` when the vec is empty.
    pub fn from_vec(findings: Vec<Finding>) -> Option<Self> {
        let mut rest = findings.into_iter();
        let head = rest.next()?;
        Some(rest.fold(Self::single(head), |acc, finding| {
            acc.combine(Self::single(finding))
        }))
    }

    /// Returns the number of findings in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained findings.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.0.iter()
    }

    /// Returns all findings with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&Finding> {
        self.0.iter().filter(|f| f.code == code).collect()
    }

}

impl Semigroup for Findings {
    fn combine(self, other: Self) -> Self {
        Findings(self.0.combine(other.0))
    }
}

impl Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finding) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", finding)?;
        }
        Ok(())
    }
}

impl std::error::Error for Findings {}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Findings>();
    assert_sync::<Findings>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_creation() {
        let finding = Finding::new(JsonPath::from_field("openapi"), "required field is missing");

        assert_eq!(finding.path, JsonPath::from_field("openapi"));
        assert_eq!(finding.message, "required field is missing");
        assert_eq!(finding.code, "validation_error");
    }

    #[test]
    fn test_finding_display_root() {
        let finding = Finding::new(JsonPath::root(), "OpenAPI document is nil");
        assert_eq!(finding.to_string(), "OpenAPI document is nil");
    }

    #[test]
    fn test_finding_display_nested() {
        let finding = Finding::new(
            JsonPath::from_field("paths").push_key("/pets").push_field("get"),
            "oops",
        );
        assert_eq!(finding.to_string(), "paths[/pets].get: oops");
    }

    #[test]
    fn test_findings_from_empty_vec() {
        assert!(Findings::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_findings_combine_and_filter() {
        let path_a = JsonPath::from_field("a");
        let a1 = Finding::new(path_a.clone(), "one").with_code("required");
        let a2 = Finding::new(path_a.clone(), "two").with_code("invalid_style");
        let b = Finding::new(JsonPath::from_field("b"), "three").with_code("required");

        let findings = Findings::single(a1)
            .combine(Findings::single(a2))
            .combine(Findings::single(b));

        assert_eq!(findings.len(), 3);
        assert_eq!(findings.with_code("required").len(), 2);
        assert_eq!(findings.iter().next().map(|f| f.message.as_str()), Some("one"));
    }

    #[test]
    fn test_findings_display_is_semicolon_joined() {
        let findings = Findings::from_vec(vec![
            Finding::new(JsonPath::from_field("a"), "one"),
            Finding::new(JsonPath::from_field("b"), "two"),
        ])
        .unwrap();

        assert_eq!(findings.to_string(), "a: one; b: two");
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = Findings::single(Finding::new(JsonPath::root(), "1"));
        let e2 = Findings::single(Finding::new(JsonPath::root(), "2"));
        let e3 = Findings::single(Finding::new(JsonPath::root(), "3"));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        let left_msgs: Vec<_> = left.iter().map(|f| &f.message).collect();
        let right_msgs: Vec<_> = right.iter().map(|f| &f.message).collect();
        assert_eq!(left_msgs, right_msgs);
    }
}
