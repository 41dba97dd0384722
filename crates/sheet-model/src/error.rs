//! Error types for character sheet conversion.

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Missing fields never produce an error; they are filled with defaults by the
/// transform. Only a document whose shape cannot be walked at all is rejected.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value the transform must descend into has the wrong shape.
    #[error("malformed source document at `{path}`: expected {expected}")]
    Structure { path: String, expected: &'static str },
}

impl SheetError {
    pub fn structure(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Structure {
            path: path.into(),
            expected,
        }
    }
}

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
