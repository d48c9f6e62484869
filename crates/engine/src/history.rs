//! Snapshot-based undo/redo history.
//!
//! Two stacks of [`CollectionSnapshot`]s: `undo_stack` holds past states
//! (most recent last) and `redo_stack` holds states undone and available
//! again (soonest next last). Recording a fresh change clears the redo
//! stack, since new edits invalidate the redo branch.
//!
//! Restoring a snapshot is itself a collection mutation, so the manager
//! runs a small two-state capture machine: [`undo`](HistoryManager::undo)
//! and [`redo`](HistoryManager::redo) arm a suppression flag, and the one
//! change event produced by the replay is consumed by the next
//! [`record`](HistoryManager::record) call instead of becoming a new
//! history entry. Without this, every undo would record itself and corrupt
//! the stacks.

use tracing::debug;

use crate::snapshot::CollectionSnapshot;

/// Default maximum number of undo entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Manages undo/redo history over collection snapshots.
pub struct HistoryManager {
    undo_stack: Vec<CollectionSnapshot>,
    redo_stack: Vec<CollectionSnapshot>,
    max_entries: usize,
    /// When true, the next recorded change originates from an undo/redo
    /// replay and must not become a new history entry.
    suppress_next_capture: bool,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl HistoryManager {
    /// Create a new history manager with the given maximum undo depth.
    pub fn new(max_entries: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries,
            suppress_next_capture: false,
        }
    }

    /// Record an observed structural change, passing the state from *before*
    /// the change. Clears the redo stack.
    ///
    /// While suppression is armed (an undo/redo replay is in flight) the
    /// call consumes the suppression and records nothing. Callers only
    /// report actual changes, so no-op commits never reach this point.
    pub fn record(&mut self, before: CollectionSnapshot) {
        if self.suppress_next_capture {
            self.suppress_next_capture = false;
            debug!("Capture suppressed: undo/redo replay");
            return;
        }

        self.redo_stack.clear();
        self.undo_stack.push(before);

        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }

        debug!(undo_depth = self.undo_stack.len(), "History entry recorded");
    }

    /// Undo: pop the most recent past state, saving `current` for redo.
    ///
    /// Arms capture suppression so the replayed restore is not re-recorded.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: CollectionSnapshot) -> Option<CollectionSnapshot> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.suppress_next_capture = true;
        debug!(
            undo_remaining = self.undo_stack.len(),
            redo_available = self.redo_stack.len(),
            "Undo"
        );
        Some(snapshot)
    }

    /// Redo: pop the soonest undone state, saving `current` for undo.
    ///
    /// Arms capture suppression like [`undo`](Self::undo). Returns `None`
    /// when there is nothing to redo.
    pub fn redo(&mut self, current: CollectionSnapshot) -> Option<CollectionSnapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        self.suppress_next_capture = true;
        debug!(
            undo_available = self.undo_stack.len(),
            redo_remaining = self.redo_stack.len(),
            "Redo"
        );
        Some(snapshot)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of entries on the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Whether the next recorded change will be swallowed as a replay.
    pub fn is_suppressing(&self) -> bool {
        self.suppress_next_capture
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.suppress_next_capture = false;
        debug!("History cleared");
    }

    /// The maximum number of undo entries.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Set the maximum number of undo entries, trimming the oldest if needed.
    pub fn set_max_entries(&mut self, max: usize) {
        self.max_entries = max;
        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }
}
