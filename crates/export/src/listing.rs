//! Listing rows for spreadsheet export.
//!
//! The spreadsheet export is a single-column listing of the catalog's file
//! names, one row per item, in display order. Encoding to XLSX happens in
//! the host shell.

use ck_engine::CatalogItem;

/// Header for the listing's single column.
pub const LISTING_HEADER: &str = "File name";

/// One row per item, in display order: the item's display name, or a
/// fallback carrying its id when it has none.
pub fn listing_rows(items: &[CatalogItem]) -> Vec<String> {
    items.iter().map(CatalogItem::display_label).collect()
}
