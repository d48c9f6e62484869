//! Ordered collection of catalog items.
//!
//! The collection is the single source of truth for item order. All ids are
//! unique, and the order is the only state export and render consumers read.
//! Reorders are committed exclusively through [`Collection::replace_order`],
//! which rejects anything that is not an exact permutation of the current
//! id set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::item::CatalogItem;
use crate::snapshot::CollectionSnapshot;

/// Which end of the collection [`Collection::append`] grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppendEdge {
    /// New items are inserted before all existing items.
    Front,
    /// New items are added after all existing items.
    #[default]
    Back,
}

/// The ordered sequence of catalog items.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Collection {
    items: Vec<CatalogItem>,
    append_edge: AppendEdge,
}

impl Collection {
    /// Create a new empty collection appending at the back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection that appends at the given edge.
    pub fn with_append_edge(edge: AppendEdge) -> Self {
        Self {
            items: Vec::new(),
            append_edge: edge,
        }
    }

    /// Add items, preserving their input order, at the configured edge.
    ///
    /// # Panics
    ///
    /// Ids must be fresh. Appending an id the collection already holds (or
    /// one repeated within the batch) is a programming error in the import
    /// collaborator, not a recoverable condition.
    pub fn append(&mut self, items: Vec<CatalogItem>) {
        if items.is_empty() {
            return;
        }

        let mut seen: HashSet<&str> = self.items.iter().map(|i| i.id.as_str()).collect();
        for item in &items {
            assert!(
                seen.insert(item.id.as_str()),
                "append called with duplicate id: {}",
                item.id
            );
        }

        let count = items.len();
        match self.append_edge {
            AppendEdge::Back => self.items.extend(items),
            AppendEdge::Front => {
                self.items.splice(0..0, items);
            }
        }

        debug!(count, total = self.items.len(), "Items appended");
    }

    /// Remove the item with the given id. Returns the removed item, or
    /// `None` if the id is absent (stale references are tolerated, not
    /// errors).
    pub fn remove(&mut self, id: &str) -> Option<CatalogItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(pos);
        debug!(id = %id, remaining = self.items.len(), "Item removed");
        Some(item)
    }

    /// Remove every item. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        if count > 0 {
            debug!(count, "Collection cleared");
        }
        count
    }

    /// Commit a reordering. `new_order` must be exactly a permutation of the
    /// current id set; anything else is rejected with
    /// [`EngineError::InvalidPermutation`].
    ///
    /// Returns `Ok(true)` when the order actually changed and `Ok(false)`
    /// when `new_order` equals the current order, so callers can tell
    /// structural changes apart from no-ops without comparing serialized
    /// state.
    pub fn replace_order(&mut self, new_order: &[String]) -> EngineResult<bool> {
        if new_order.len() != self.items.len() {
            return Err(EngineError::InvalidPermutation {
                reason: format!(
                    "expected {} ids, got {}",
                    self.items.len(),
                    new_order.len()
                ),
            });
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(new_order.len());
        for id in new_order {
            if !self.contains(id) {
                return Err(EngineError::InvalidPermutation {
                    reason: format!("unknown id: {id}"),
                });
            }
            if !seen.insert(id.as_str()) {
                return Err(EngineError::InvalidPermutation {
                    reason: format!("duplicate id: {id}"),
                });
            }
        }

        let unchanged = self
            .items
            .iter()
            .zip(new_order)
            .all(|(item, id)| item.id == *id);
        if unchanged {
            debug!("Reorder commit is a no-op");
            return Ok(false);
        }

        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            if let Some(item) = self.items.iter().find(|item| item.id == *id) {
                reordered.push(item.clone());
            }
        }
        self.items = reordered;

        debug!(count = self.items.len(), "Order replaced");
        Ok(true)
    }

    /// Capture an immutable snapshot of the current ordered items.
    pub fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot::capture(self)
    }

    /// Replace the entire ordered sequence atomically from a snapshot.
    pub fn restore(&mut self, snapshot: &CollectionSnapshot) {
        snapshot.restore(self);
    }

    pub(crate) fn set_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }

    /// The items in their current order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The ids in their current order.
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with the given id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Current index of the item with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> CatalogItem {
        CatalogItem::with_id(id, format!("/images/{id}.png"), Some(format!("{id}.png")))
    }

    fn make_collection(ids: &[&str]) -> Collection {
        let mut collection = Collection::new();
        collection.append(ids.iter().map(|id| make_item(id)).collect());
        collection
    }

    fn order_of(collection: &Collection) -> Vec<&str> {
        collection.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn new_collection_is_empty() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.ids().is_empty());
    }

    #[test]
    fn append_preserves_input_order() {
        let collection = make_collection(&["a", "b", "c"]);
        assert_eq!(order_of(&collection), vec!["a", "b", "c"]);
    }

    #[test]
    fn append_at_back_by_default() {
        let mut collection = make_collection(&["a", "b"]);
        collection.append(vec![make_item("c"), make_item("d")]);
        assert_eq!(order_of(&collection), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn append_at_front_preserves_batch_order() {
        let mut collection = Collection::with_append_edge(AppendEdge::Front);
        collection.append(vec![make_item("a"), make_item("b")]);
        collection.append(vec![make_item("c"), make_item("d")]);
        assert_eq!(order_of(&collection), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn append_empty_batch_is_noop() {
        let mut collection = make_collection(&["a"]);
        collection.append(Vec::new());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    #[should_panic(expected = "duplicate id")]
    fn append_existing_id_panics() {
        let mut collection = make_collection(&["a"]);
        collection.append(vec![make_item("a")]);
    }

    #[test]
    #[should_panic(expected = "duplicate id")]
    fn append_repeated_id_within_batch_panics() {
        let mut collection = Collection::new();
        collection.append(vec![make_item("a"), make_item("a")]);
    }

    #[test]
    fn remove_existing_item() {
        let mut collection = make_collection(&["a", "b", "c"]);
        let removed = collection.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(order_of(&collection), vec!["a", "c"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut collection = make_collection(&["a"]);
        assert!(collection.remove("missing").is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut collection = make_collection(&["a", "b", "c"]);
        assert_eq!(collection.clear(), 3);
        assert!(collection.is_empty());
        assert_eq!(collection.clear(), 0);
    }

    #[test]
    fn replace_order_applies_permutation() {
        let mut collection = make_collection(&["a", "b", "c"]);
        let changed = collection
            .replace_order(&["c".into(), "a".into(), "b".into()])
            .unwrap();
        assert!(changed);
        assert_eq!(order_of(&collection), vec!["c", "a", "b"]);
    }

    #[test]
    fn replace_order_same_order_is_noop() {
        let mut collection = make_collection(&["a", "b"]);
        let changed = collection.replace_order(&["a".into(), "b".into()]).unwrap();
        assert!(!changed);
        assert_eq!(order_of(&collection), vec!["a", "b"]);
    }

    #[test]
    fn replace_order_rejects_wrong_length() {
        let mut collection = make_collection(&["a", "b"]);
        let err = collection.replace_order(&["a".into()]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPermutation { .. }));
        assert_eq!(order_of(&collection), vec!["a", "b"]);
    }

    #[test]
    fn replace_order_rejects_unknown_id() {
        let mut collection = make_collection(&["a", "b"]);
        let err = collection
            .replace_order(&["a".into(), "z".into()])
            .unwrap_err();
        assert!(err.to_string().contains("unknown id"));
    }

    #[test]
    fn replace_order_rejects_duplicated_id() {
        let mut collection = make_collection(&["a", "b"]);
        let err = collection
            .replace_order(&["a".into(), "a".into()])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn id_set_stable_across_operations() {
        let mut collection = make_collection(&["a", "b", "c", "d"]);
        collection
            .replace_order(&["d".into(), "c".into(), "b".into(), "a".into()])
            .unwrap();
        collection.remove("c");
        collection.append(vec![make_item("e")]);

        let mut ids = collection.ids();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn lookup_accessors() {
        let collection = make_collection(&["a", "b"]);
        assert!(collection.contains("a"));
        assert!(!collection.contains("z"));
        assert_eq!(collection.position("b"), Some(1));
        assert_eq!(collection.position("z"), None);
        assert_eq!(collection.get("a").unwrap().id, "a");
        assert!(collection.get("z").is_none());
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let collection = make_collection(&["a", "b"]);
        let json = serde_json::to_string(&collection).unwrap();
        let restored: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(order_of(&restored), vec!["a", "b"]);
    }
}
