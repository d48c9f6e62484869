//! `ck-import` -- Import planning for the CatalogKit native engine.
//!
//! The import collaborator decides *which* files become catalog items and
//! mints their identities; reading and decoding the image bytes stays with
//! the host shell. Three paths, matching the web editor's three import
//! buttons:
//!
//! - **Files**: a plain multi-file upload, filtered to images
//! - **Folder**: a recursive folder upload that keeps one representative
//!   image per folder
//! - **JSON**: a pasted JSON batch of previously exported items

pub mod error;
pub mod files;
pub mod folder;
pub mod json;

// Re-export primary API at crate root
pub use error::{ImportError, ImportResult};
pub use files::{is_image_path, item_from_path, items_from_paths};
pub use folder::{pick_folder_representatives, FolderScan};
pub use json::parse_items_json;
