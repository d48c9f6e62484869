//! Error types for the import crate (thiserror-based).

use thiserror::Error;

/// Errors that can occur while planning an import.
///
/// The UI treats these as a cancelled import, never a crash: a malformed
/// pasted batch simply adds nothing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The pasted text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pasted JSON parsed but is not an array of items.
    #[error("expected a JSON array of items")]
    NotAnArray,
}

/// Convenience Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
