//! Decode and encode error types.

/// A structural failure while turning JSON into the document model.
///
/// Decoding stops at the first failure; no partial document is returned.
/// `path` locates the offending keyword from the document root using
/// dotted keys and bracketed indices, e.g. `paths./pets.get.parameters[0].in`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("decode failed at `{path}`: {message}")]
pub struct DecodeError {
    /// Location of the offending keyword. `.` denotes the document root.
    pub path: String,
    /// What went wrong at that location.
    pub message: String,
}

impl DecodeError {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by the codec entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input did not match the shape of the document model.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The model could not be written as JSON.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// An extension was inserted under a name lacking the `x-` prefix.
    #[error("extension name '{0}' must start with 'x-'")]
    InvalidExtensionName(String),
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Error>();
    assert_sync::<Error>();
};
