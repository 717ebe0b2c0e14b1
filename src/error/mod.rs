//! Error types for decoding failures and validation findings.
//!
//! Decoding failures are fatal to the decode call and are reported through
//! [`DecodeError`]. Validation produces [`Finding`]s, which are never fatal and
//! are accumulated into a report.

mod decode_error;
mod finding;

pub use decode_error::{DecodeError, Error};
pub use finding::{Finding, Findings};
