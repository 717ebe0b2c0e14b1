//! The result of a validation pass.

use std::fmt::{self, Display};

use stillwater::Validation;

use crate::error::{Finding, Findings};
use crate::ValidationResult;

/// Every finding from one validation pass, in traversal order.
///
/// An empty report means the document passed. Findings are never
/// deduplicated or truncated.
///
/// # Example
///
/// ```rust
/// use oas31::{validate, OpenApi};
///
/// let report = validate(&OpenApi::default());
/// assert!(!report.is_valid());
/// assert_eq!(
///     report.to_string(),
///     "openapi: required field is missing; info: required field is missing; \
///      must have at least one of: paths, webhooks, or components"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub(crate) fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Returns true if there are no findings.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns all findings with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.code == code).collect()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    /// Converts the report into a stillwater `Validation` so it can be
    /// combined with other accumulating checks.
    pub fn into_validation(self) -> ValidationResult<()> {
        match Findings::from_vec(self.findings) {
            None => Validation::Success(()),
            Some(findings) => Validation::Failure(findings),
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", finding)?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationReport>();
    assert_sync::<ValidationReport>();
};
