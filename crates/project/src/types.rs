//! Catalog file data model — web-app compatible JSON format.
//!
//! [`CatalogFile`] is the persisted shape of a catalog. Item entries keep
//! the web editor's field names (`id`, `url`, `name`) so catalogs move
//! between the native engine and the browser version unchanged.

use serde::{Deserialize, Serialize};

use ck_engine::{CatalogItem, CollectionSnapshot};

/// Top-level persisted catalog file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    /// Catalog format version (see [`crate::migrate::CURRENT_VERSION`]).
    pub version: u32,
    /// Human-readable catalog name.
    pub name: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modified timestamp.
    pub updated_at: String,
    /// Catalog items in display order.
    pub items: Vec<ItemData>,
}

/// A persisted catalog item, matching the web editor's stored shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    /// Unique item identifier.
    pub id: String,
    /// Content reference (path, URL, or data URL).
    pub url: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&CatalogItem> for ItemData {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            url: item.source.clone(),
            name: item.name.clone(),
        }
    }
}

impl From<ItemData> for CatalogItem {
    fn from(data: ItemData) -> Self {
        CatalogItem::with_id(data.id, data.url, data.name)
    }
}

impl CatalogFile {
    /// Create a new empty catalog with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = current_iso_timestamp();
        Self {
            version: crate::migrate::CURRENT_VERSION,
            name: name.into(),
            created_at: now.clone(),
            updated_at: now,
            items: Vec::new(),
        }
    }

    /// Build a catalog file from an engine snapshot.
    pub fn from_snapshot(name: impl Into<String>, snapshot: &CollectionSnapshot) -> Self {
        let mut catalog = Self::new(name);
        catalog.items = snapshot.items().iter().map(ItemData::from).collect();
        catalog
    }

    /// Replace the persisted items from an engine snapshot and refresh the
    /// modification timestamp.
    pub fn update_from_snapshot(&mut self, snapshot: &CollectionSnapshot) {
        self.items = snapshot.items().iter().map(ItemData::from).collect();
        self.touch();
    }

    /// Convert the persisted items into an engine snapshot (session-start
    /// seeding).
    pub fn to_snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot::from_items(
            self.items.iter().cloned().map(CatalogItem::from).collect(),
        )
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = current_iso_timestamp();
    }
}

/// Generate a current ISO 8601 timestamp without an external crate.
/// Accurate for dates from 1970 onward, which is all a modification stamp
/// needs.
pub(crate) fn current_iso_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let sec = secs % 60;
    let min = (secs / 60) % 60;
    let hour = (secs / 3600) % 24;
    let days = secs / 86400;

    // Civil-from-days (Gregorian calendar, days since 1970-01-01).
    let z = days as i64 + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}
