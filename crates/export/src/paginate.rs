//! Page planning for paginated PDF export.
//!
//! Large catalogs are exported as several PDF files; each holds at most
//! [`ITEMS_PER_FILE`] items, sliced from the collection in display order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ck_engine::CatalogItem;

/// How many items each exported PDF file holds.
pub const ITEMS_PER_FILE: usize = 48;

/// One planned export page: a `[start, end)` slice of the ordered
/// collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,
    /// Index of the first item on this page.
    pub start: usize,
    /// One past the index of the last item on this page.
    pub end: usize,
    /// Ids of the items on this page, in display order.
    pub item_ids: Vec<String>,
}

/// Number of pages needed for `item_count` items at `per_page` each.
///
/// # Panics
///
/// `per_page` must be positive; zero is a programming error.
pub fn page_count(item_count: usize, per_page: usize) -> usize {
    assert!(per_page > 0, "per_page must be positive");
    item_count.div_ceil(per_page)
}

/// Split the ordered items into export pages of at most `per_page` items.
///
/// Every item lands on exactly one page; the final page may be short.
///
/// # Panics
///
/// `per_page` must be positive; zero is a programming error.
pub fn plan_pages(items: &[CatalogItem], per_page: usize) -> Vec<Page> {
    assert!(per_page > 0, "per_page must be positive");

    let pages: Vec<Page> = items
        .chunks(per_page)
        .enumerate()
        .map(|(index, chunk)| {
            let start = index * per_page;
            Page {
                index,
                start,
                end: start + chunk.len(),
                item_ids: chunk.iter().map(|item| item.id.clone()).collect(),
            }
        })
        .collect();

    debug!(
        items = items.len(),
        per_page,
        pages = pages.len(),
        "Planned export pages"
    );
    pages
}
