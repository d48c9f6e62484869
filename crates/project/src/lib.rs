//! `ck-project` -- Catalog file save/load for the CatalogKit native engine.
//!
//! This crate owns the persisted catalog format. It supports:
//!
//! - **Save/Load**: Serialize/deserialize [`CatalogFile`] to/from JSON
//! - **Migration**: The web editor stored the catalog as a bare JSON array
//!   of items; that legacy shape is migrated into the versioned format
//! - **Recovery**: Corrupt persisted data falls back to an empty catalog
//!   instead of failing the session
//!
//! # Usage
//!
//! ```rust,no_run
//! use ck_project::{load_catalog, save_catalog, CatalogFile};
//! use std::path::Path;
//!
//! let catalog = CatalogFile::new("Summer Catalog");
//! save_catalog(&catalog, Path::new("summer.ckc")).unwrap();
//!
//! let loaded = load_catalog(Path::new("summer.ckc")).unwrap();
//! assert_eq!(loaded.name, "Summer Catalog");
//! ```

pub mod error;
pub mod load;
pub mod migrate;
pub mod save;
pub mod types;

// Re-export primary API at crate root
pub use error::{ProjectError, ProjectResult};
pub use load::{from_json_string, load_catalog, load_or_default};
pub use migrate::{migrate_catalog, CURRENT_VERSION};
pub use save::{save_catalog, to_json_string, to_json_string_compact};
pub use types::{CatalogFile, ItemData};
