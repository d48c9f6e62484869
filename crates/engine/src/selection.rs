//! Selection state management.
//!
//! The selection is the set of item ids currently marked as chosen for
//! group operations. Every selected id must exist in the collection; the
//! owning [`CatalogSession`](crate::session::CatalogSession) forwards each
//! collection removal here so the invariant holds without the collection
//! ever reaching into selection internals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::Collection;

/// Tracks which item ids are currently selected.
///
/// Ids are kept in selection order (a `Vec` with duplicate guards rather
/// than a hash set); the order has no engine-level meaning.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionManager {
    selected: Vec<String>,
}

impl SelectionManager {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id: it enters the set if absent, leaves if present.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Replace the selection with exactly one id.
    pub fn select_only(&mut self, id: &str) {
        self.selected.clear();
        self.selected.push(id.to_string());
    }

    /// Replace the selection with the collection's full id set.
    pub fn select_all(&mut self, collection: &Collection) {
        self.selected = collection.ids();
        debug!(count = self.selected.len(), "Selected all items");
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Deselect a specific id. Returns whether it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    /// Drop every selected id that no longer exists in the collection.
    /// Returns how many ids were pruned.
    pub fn prune_missing(&mut self, collection: &Collection) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| collection.contains(id));
        let pruned = before - self.selected.len();
        if pruned > 0 {
            debug!(pruned, remaining = self.selected.len(), "Pruned stale selection ids");
        }
        pruned
    }

    /// Check if an id is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// The selected ids.
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::CatalogItem;

    fn make_collection(ids: &[&str]) -> Collection {
        let mut collection = Collection::new();
        collection.append(
            ids.iter()
                .map(|id| CatalogItem::with_id(*id, format!("/images/{id}.png"), None))
                .collect(),
        );
        collection
    }

    #[test]
    fn new_selection_is_empty() {
        let selection = SelectionManager::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        assert!(selection.is_selected("a"));
        assert_eq!(selection.len(), 1);

        selection.toggle("a");
        assert!(!selection.is_selected("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_accumulates_distinct_ids() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        selection.toggle("b");
        assert!(selection.is_selected("a"));
        assert!(selection.is_selected("b"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn select_only_discards_previous() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        selection.toggle("b");

        selection.select_only("c");
        assert_eq!(selection.ids(), ["c".to_string()]);
    }

    #[test]
    fn select_all_matches_collection() {
        let collection = make_collection(&["a", "b", "c"]);
        let mut selection = SelectionManager::new();
        selection.select_all(&collection);
        assert_eq!(selection.len(), 3);
        assert!(selection.is_selected("a"));
        assert!(selection.is_selected("c"));
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn remove_reports_membership() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        assert!(selection.remove("a"));
        assert!(!selection.remove("a"));
    }

    #[test]
    fn prune_missing_drops_stale_ids() {
        let mut collection = make_collection(&["a", "b", "c"]);
        let mut selection = SelectionManager::new();
        selection.select_all(&collection);

        collection.remove("b");
        let pruned = selection.prune_missing(&collection);
        assert_eq!(pruned, 1);
        assert!(!selection.is_selected("b"));
        assert!(selection.is_selected("a"));
        assert!(selection.is_selected("c"));
    }

    #[test]
    fn prune_missing_with_consistent_selection_is_noop() {
        let collection = make_collection(&["a"]);
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        assert_eq!(selection.prune_missing(&collection), 0);
        assert!(selection.is_selected("a"));
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let mut selection = SelectionManager::new();
        selection.toggle("a");
        selection.toggle("b");

        let json = serde_json::to_string(&selection).unwrap();
        let restored: SelectionManager = serde_json::from_str(&json).unwrap();
        assert!(restored.is_selected("a"));
        assert!(restored.is_selected("b"));
    }
}
