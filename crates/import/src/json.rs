//! JSON batch import — parsing pasted item arrays.
//!
//! The web editor lets users paste a previously exported JSON array of
//! items. Entries missing an id or url are silently dropped, matching the
//! editor's validity filter; only unparseable input is reported as an
//! error, and the UI treats that as "nothing imported".

use serde::Deserialize;
use tracing::{debug, warn};

use ck_engine::CatalogItem;

use crate::error::{ImportError, ImportResult};

/// Lenient shape of one pasted entry. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Parse a pasted JSON array into catalog items, keeping their ids.
///
/// Entries that are not objects, or that lack a non-empty `id` or `url`,
/// are skipped. Returns [`ImportError`] only when the text is not a JSON
/// array at all.
pub fn parse_items_json(json: &str) -> ImportResult<Vec<CatalogItem>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let entries = value.as_array().ok_or(ImportError::NotAnArray)?;

    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;

    for entry in entries {
        let raw: RawEntry = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match (raw.id, raw.url) {
            (Some(id), Some(url)) if !id.is_empty() && !url.is_empty() => {
                items.push(CatalogItem::with_id(id, url, raw.name));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = items.len(), "Dropped invalid entries from JSON batch");
    } else {
        debug!(count = items.len(), "Parsed JSON batch");
    }

    Ok(items)
}
