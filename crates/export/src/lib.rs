//! `ck-export` -- Export planning for the CatalogKit native engine.
//!
//! Exports read the collection's current order and item metadata, nothing
//! else. This crate computes which items land on which PDF part and which
//! rows the spreadsheet lists; the actual PDF and XLSX encoding stays with
//! the host shell's document libraries.

pub mod listing;
pub mod paginate;

// Re-export primary API at crate root
pub use listing::{listing_rows, LISTING_HEADER};
pub use paginate::{page_count, plan_pages, Page, ITEMS_PER_FILE};
