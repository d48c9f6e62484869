//! Immutable collection snapshots.
//!
//! A [`CollectionSnapshot`] captures the full ordered item sequence at a
//! point in time. Snapshots back the undo/redo stacks and are what the
//! persistence and export collaborators read: always a completed state,
//! never a partially-updated one. They are cheaply cloneable and
//! serializable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::Collection;
use crate::item::CatalogItem;

/// A complete snapshot of the collection's ordered items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    items: Vec<CatalogItem>,
}

impl CollectionSnapshot {
    /// Capture a snapshot from the current collection state.
    pub fn capture(collection: &Collection) -> Self {
        Self {
            items: collection.items().to_vec(),
        }
    }

    /// Build a snapshot directly from items (persistence loads).
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Restore this snapshot into the given collection, replacing the
    /// entire ordered sequence atomically.
    pub fn restore(&self, collection: &mut Collection) {
        collection.set_items(self.items.clone());
        debug!(count = self.items.len(), "Snapshot restored");
    }

    /// The captured items in their captured order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The captured ids in their captured order.
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Number of captured items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
