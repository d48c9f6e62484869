//! Error types for the project crate (thiserror-based).

use thiserror::Error;

/// Errors that can occur during catalog file operations.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// File I/O error (read, write, path resolution).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog version is from a newer format than this build understands.
    #[error("Unsupported catalog version: {version}")]
    UnsupportedVersion { version: String },

    /// Catalog file is structurally invalid.
    #[error("Invalid catalog file: {reason}")]
    InvalidCatalog { reason: String },

    /// The catalog file path does not exist or is not a file.
    #[error("Catalog file not found: {path}")]
    NotFound { path: String },
}

/// Convenience Result type for catalog file operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
