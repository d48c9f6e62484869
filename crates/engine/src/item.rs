//! Catalog item data model.

use serde::{Deserialize, Serialize};

/// A single entry in the catalog: an image reference plus display metadata.
///
/// Identity is the `id`. The `source` and `name` fields are inert data the
/// engine carries along but never interprets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item identifier.
    pub id: String,
    /// Content reference: a file path, URL, or data URL.
    pub source: String,
    /// Optional display name, usually the original file name.
    pub name: Option<String>,
}

impl CatalogItem {
    /// Create a new item with a freshly minted unique id.
    pub fn new(source: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source: source.into(),
            name,
        }
    }

    /// Create an item with a caller-supplied id (loads and JSON imports).
    pub fn with_id(
        id: impl Into<String>,
        source: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            name,
        }
    }

    /// Label shown in export listings: the display name when present,
    /// otherwise a fallback carrying the id.
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Unnamed image ({})", self.id),
        }
    }
}
