//! Error types for the editing engine (thiserror-based).

use thiserror::Error;

/// Errors surfaced by the editing engine.
///
/// Stale references (reorder or delete requests naming an id that is no
/// longer present) and empty undo/redo stacks are deliberately *not* errors:
/// drag sources and shortcut handlers can race concurrent state changes, so
/// those paths resolve to silent no-ops instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// `replace_order` was called with an id sequence that is not exactly a
    /// permutation of the collection's current id set.
    #[error("invalid permutation: {reason}")]
    InvalidPermutation { reason: String },
}

/// Convenience Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
