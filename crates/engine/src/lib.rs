//! `ck-engine` -- Ordered-collection editing core for the CatalogKit native engine.
//!
//! This crate provides:
//!
//! - **`CatalogSession`**: Central engine instance holding the collection, selection,
//!   history, and any in-progress drag.
//! - **`Collection`**: The ordered item sequence and its mutation API.
//! - **`SelectionManager`**: The set of currently chosen item ids, kept consistent
//!   with the collection.
//! - **`HistoryManager`**: Snapshot-based undo/redo with capture suppression.
//! - **`reorder`**: The single-item and group drag-and-drop reorder algorithms.
//!
//! # Architecture
//!
//! ```text
//! CatalogSession (engine instance)
//! ├── collection: Collection            (ordered items, sole source of order)
//! ├── selection: SelectionManager       (what's selected)
//! ├── history: HistoryManager           (undo/redo snapshot stacks)
//! └── drag: Option<DragSession>         (transient, one drag at a time)
//! ```
//!
//! All mutations run to completion before the next is observed; the engine is
//! single-threaded and performs no I/O. Persistence and export collaborators
//! read completed [`CollectionSnapshot`]s, never partial state.

pub mod collection;
pub mod drag;
pub mod error;
pub mod history;
pub mod item;
pub mod reorder;
pub mod selection;
pub mod session;
pub mod snapshot;

// Re-export primary types at crate root for convenience.
pub use collection::{AppendEdge, Collection};
pub use drag::DragSession;
pub use error::{EngineError, EngineResult};
pub use history::{HistoryManager, DEFAULT_HISTORY_DEPTH};
pub use item::CatalogItem;
pub use selection::SelectionManager;
pub use session::CatalogSession;
pub use snapshot::CollectionSnapshot;
