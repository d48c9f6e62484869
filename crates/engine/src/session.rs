//! Central engine instance tying the collection, selection, history, and
//! drag state together.
//!
//! `CatalogSession` is the single entry point the surrounding application
//! drives: import and deletion UIs, the drag gesture source, undo/redo
//! shortcuts, and the persistence collaborator all call in here. The
//! collection, selection, and history are updated as one unit, so every
//! operation leaves the triple consistent before the next is observed.

use tracing::{debug, info};

use crate::collection::{AppendEdge, Collection};
use crate::drag::DragSession;
use crate::error::EngineResult;
use crate::history::{HistoryManager, DEFAULT_HISTORY_DEPTH};
use crate::item::CatalogItem;
use crate::reorder;
use crate::selection::SelectionManager;
use crate::snapshot::CollectionSnapshot;

/// The editing engine for one catalog session.
pub struct CatalogSession {
    collection: Collection,
    selection: SelectionManager,
    history: HistoryManager,
    drag: Option<DragSession>,
    /// Whether there are structural changes not yet written by the
    /// persistence collaborator.
    is_dirty: bool,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
            selection: SelectionManager::new(),
            history: HistoryManager::new(DEFAULT_HISTORY_DEPTH),
            drag: None,
            is_dirty: false,
        }
    }

    /// Create an empty session with the given undo depth.
    pub fn with_history_depth(max_entries: usize) -> Self {
        Self {
            history: HistoryManager::new(max_entries),
            ..Self::new()
        }
    }

    /// Create an empty session whose collection appends at the given edge.
    pub fn with_append_edge(edge: AppendEdge) -> Self {
        Self {
            collection: Collection::with_append_edge(edge),
            ..Self::new()
        }
    }

    /// Seed a session from a persisted snapshot. Selection and history
    /// start empty; the session starts clean.
    pub fn from_snapshot(snapshot: &CollectionSnapshot) -> Self {
        let mut session = Self::new();
        snapshot.restore(&mut session.collection);
        info!(items = session.collection.len(), "Session seeded from snapshot");
        session
    }

    // --- Import / deletion ---

    /// Append freshly imported items. Ids must be fresh (the import
    /// collaborator mints them); see [`Collection::append`]. Empty batches
    /// record nothing.
    pub fn import(&mut self, items: Vec<CatalogItem>) {
        if items.is_empty() {
            return;
        }
        let count = items.len();
        let before = self.collection.snapshot();
        self.collection.append(items);
        self.history.record(before);
        self.mark_dirty();
        info!(count, total = self.collection.len(), "Items imported");
    }

    /// Remove one item. A stale id is a no-op returning `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.collection.contains(id) {
            debug!(id = %id, "Remove ignored: id not present");
            return false;
        }
        let before = self.collection.snapshot();
        self.collection.remove(id);
        self.selection.remove(id);
        self.history.record(before);
        self.mark_dirty();
        true
    }

    /// Remove every currently selected item as one undoable step.
    /// Returns how many items were removed.
    pub fn remove_selected(&mut self) -> usize {
        let ids = self.selection.ids().to_vec();
        if ids.is_empty() {
            return 0;
        }
        let before = self.collection.snapshot();
        let mut removed = 0;
        for id in &ids {
            if self.collection.remove(id).is_some() {
                removed += 1;
            }
        }
        self.selection.clear();
        self.history.record(before);
        self.mark_dirty();
        info!(removed, "Selected items removed");
        removed
    }

    /// Remove every item as one undoable step. Returns how many were
    /// removed; an already empty collection records nothing.
    pub fn clear_items(&mut self) -> usize {
        if self.collection.is_empty() {
            return 0;
        }
        let before = self.collection.snapshot();
        let removed = self.collection.clear();
        self.selection.clear();
        self.history.record(before);
        self.mark_dirty();
        info!(removed, "All items removed");
        removed
    }

    // --- Selection ---

    /// Toggle selection of an item. Unknown ids are ignored so the
    /// selection never references a missing item.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.collection.contains(id) {
            debug!(id = %id, "Toggle ignored: id not present");
            return;
        }
        self.selection.toggle(id);
    }

    /// Select every item.
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.collection);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check if an item is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// The selected ids.
    pub fn selected_ids(&self) -> &[String] {
        self.selection.ids()
    }

    // --- Drag lifecycle ---

    /// Begin dragging `active_id`, ending any previous drag. A stale id is
    /// a no-op returning `false`.
    ///
    /// Starting a drag on an unselected item collapses the selection to
    /// just that item, so the drag moves only what the user grabbed.
    pub fn begin_drag(&mut self, active_id: &str) -> bool {
        self.drag = None;
        if !self.collection.contains(active_id) {
            debug!(id = %active_id, "Drag ignored: id not present");
            return false;
        }
        if !self.selection.is_selected(active_id) {
            self.selection.select_only(active_id);
        }
        self.drag = Some(DragSession::new(
            active_id,
            self.selection.ids().to_vec(),
        ));
        debug!(id = %active_id, selected = self.selection.len(), "Drag started");
        true
    }

    /// Abort the current drag without a drop. Collection and history are
    /// untouched. The drag-start selection collapse is not rolled back;
    /// the source behaves the same way.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!(id = %session.active_id, "Drag cancelled");
        }
    }

    /// Complete the current drag by dropping onto `over_id`.
    ///
    /// Computes the new permutation (single-item or group move), commits it
    /// through the collection, and records history when the order actually
    /// changed. Returns `Ok(true)` on a structural change; a missing drag
    /// session, stale target, or identity move returns `Ok(false)`.
    ///
    /// After the drop, a selection that is still exactly the dragged item
    /// is cleared: a single-item drag does not leave a lingering one-item
    /// selection.
    pub fn drop_on(&mut self, over_id: &str) -> EngineResult<bool> {
        let Some(session) = self.drag.take() else {
            debug!(id = %over_id, "Drop ignored: no active drag");
            return Ok(false);
        };

        let order = self.collection.ids();
        let changed = match reorder::compute_reorder(
            &order,
            self.selection.ids(),
            &session.active_id,
            over_id,
        ) {
            Some(new_order) => {
                let before = self.collection.snapshot();
                let changed = self.collection.replace_order(&new_order)?;
                if changed {
                    self.history.record(before);
                    self.mark_dirty();
                }
                changed
            }
            None => {
                debug!(
                    active = %session.active_id,
                    over = %over_id,
                    "Drop is a no-op"
                );
                false
            }
        };

        if self.selection.len() == 1 && self.selection.is_selected(&session.active_id) {
            self.selection.clear();
        }

        debug!(active = %session.active_id, over = %over_id, changed, "Drag dropped");
        Ok(changed)
    }

    /// The in-progress drag, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    // --- Undo / redo ---

    /// Undo the most recent change. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.collection.snapshot();
        let Some(snapshot) = self.history.undo(current) else {
            return false;
        };
        self.apply_replay(&snapshot);
        true
    }

    /// Redo the most recently undone change. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.collection.snapshot();
        let Some(snapshot) = self.history.redo(current) else {
            return false;
        };
        self.apply_replay(&snapshot);
        true
    }

    /// Restore a snapshot popped from a history stack. The restore is a
    /// collection change like any other, so it is reported to the history
    /// manager, whose armed suppression consumes it.
    fn apply_replay(&mut self, snapshot: &CollectionSnapshot) {
        let before = self.collection.snapshot();
        self.collection.restore(snapshot);
        self.selection.prune_missing(&self.collection);
        self.history.record(before);
        self.mark_dirty();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- State access ---

    /// The ordered collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The items in their current order.
    pub fn items(&self) -> &[CatalogItem] {
        self.collection.items()
    }

    /// Capture a snapshot for the persistence or export collaborators.
    pub fn snapshot(&self) -> CollectionSnapshot {
        self.collection.snapshot()
    }

    /// The undo/redo history.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Whether there are changes not yet persisted.
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Mark the session as persisted (no unsaved changes).
    pub fn mark_clean(&mut self) {
        if self.is_dirty {
            self.is_dirty = false;
            debug!("Session marked as clean");
        }
    }

    fn mark_dirty(&mut self) {
        if !self.is_dirty {
            self.is_dirty = true;
            debug!("Session marked as dirty");
        }
    }
}
