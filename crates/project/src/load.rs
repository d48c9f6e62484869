//! Catalog deserialization — loading `CatalogFile` from JSON files.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ProjectError, ProjectResult};
use crate::migrate::migrate_catalog;
use crate::types::CatalogFile;

/// Deserialize a catalog from a JSON string.
///
/// Runs version migration first, so both the current versioned format and
/// the legacy bare item array parse.
pub fn from_json_string(json: &str) -> ProjectResult<CatalogFile> {
    // Parse as a generic Value first so migration can inspect the shape.
    let mut value: serde_json::Value = serde_json::from_str(json)?;

    let version = migrate_catalog(&mut value)?;
    debug!(version, "Catalog version after migration");

    let catalog: CatalogFile = serde_json::from_value(value)?;

    debug!(
        catalog_name = %catalog.name,
        items = catalog.items.len(),
        "Deserialized catalog from JSON"
    );

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Load a catalog from a file at the given path.
pub fn load_catalog(path: &Path) -> ProjectResult<CatalogFile> {
    if !path.exists() {
        return Err(ProjectError::NotFound {
            path: path.display().to_string(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read catalog file");
        ProjectError::Io(e)
    })?;

    let catalog = from_json_string(&json)?;

    info!(
        catalog_name = %catalog.name,
        items = catalog.items.len(),
        path = %path.display(),
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Load a catalog, falling back to an empty one when the file is missing
/// or its contents cannot be parsed.
///
/// The web editor behaved the same way with its persisted state: corrupt
/// data was discarded and the session started empty rather than failing.
pub fn load_or_default(path: &Path, name: &str) -> CatalogFile {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(ProjectError::NotFound { .. }) => {
            debug!(path = %path.display(), "No catalog file, starting empty");
            CatalogFile::new(name)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Discarding unreadable catalog, starting empty");
            CatalogFile::new(name)
        }
    }
}

/// Validate basic structural requirements of a loaded catalog.
fn validate_catalog(catalog: &CatalogFile) -> ProjectResult<()> {
    if catalog.name.is_empty() {
        return Err(ProjectError::InvalidCatalog {
            reason: "catalog name is empty".into(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.items.len());
    for item in &catalog.items {
        if item.id.is_empty() {
            return Err(ProjectError::InvalidCatalog {
                reason: "item with empty id".into(),
            });
        }
        if item.url.is_empty() {
            return Err(ProjectError::InvalidCatalog {
                reason: format!("item {} has an empty url", item.id),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ProjectError::InvalidCatalog {
                reason: format!("duplicate item id: {}", item.id),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{save_catalog, to_json_string};
    use crate::types::ItemData;

    fn sample_catalog() -> CatalogFile {
        let mut catalog = CatalogFile::new("Load Test");
        catalog.items.push(ItemData {
            id: "a".into(),
            url: "/images/a.png".into(),
            name: Some("a.png".into()),
        });
        catalog.items.push(ItemData {
            id: "b".into(),
            url: "/images/b.png".into(),
            name: None,
        });
        catalog
    }

    #[test]
    fn from_json_string_basic() {
        let json = to_json_string(&sample_catalog()).expect("serialize");
        let loaded = from_json_string(&json).expect("deserialize");

        assert_eq!(loaded.name, "Load Test");
        assert_eq!(loaded.items.len(), 2);
        assert_eq!(loaded.items[0].id, "a");
    }

    #[test]
    fn from_json_string_accepts_legacy_array() {
        let json = r#"[{"id": "a", "url": "/images/a.png", "name": "a.png"}]"#;
        let loaded = from_json_string(json).expect("deserialize legacy");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.version, crate::migrate::CURRENT_VERSION);
    }

    #[test]
    fn from_json_string_invalid_json() {
        assert!(from_json_string("this is not json").is_err());
    }

    #[test]
    fn load_catalog_file_roundtrip() {
        let dir = std::env::temp_dir().join("ck_project_load_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("load_test.ckc");

        save_catalog(&sample_catalog(), &path).expect("save");

        let loaded = load_catalog(&path).expect("load");
        assert_eq!(loaded.name, "Load Test");
        assert_eq!(loaded.items.len(), 2);

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn load_catalog_nonexistent_file() {
        let path = std::path::PathBuf::from("/nonexistent/path/catalog.ckc");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn load_or_default_missing_file_starts_empty() {
        let path = std::path::PathBuf::from("/nonexistent/path/catalog.ckc");
        let catalog = load_or_default(&path, "Fresh");
        assert_eq!(catalog.name, "Fresh");
        assert!(catalog.items.is_empty());
    }

    #[test]
    fn load_or_default_corrupt_file_starts_empty() {
        let dir = std::env::temp_dir().join("ck_project_corrupt_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("corrupt.ckc");
        std::fs::write(&path, "{{{ definitely not json").expect("write");

        let catalog = load_or_default(&path, "Fresh");
        assert!(catalog.items.is_empty());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut catalog = sample_catalog();
        catalog.name.clear();
        let json = serde_json::to_string(&catalog).unwrap();
        let err = from_json_string(&json).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut catalog = sample_catalog();
        catalog.items.push(ItemData {
            id: "a".into(),
            url: "/images/dup.png".into(),
            name: None,
        });
        let json = serde_json::to_string(&catalog).unwrap();
        let err = from_json_string(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn validate_rejects_empty_url() {
        let mut catalog = sample_catalog();
        catalog.items[0].url.clear();
        let json = serde_json::to_string(&catalog).unwrap();
        let err = from_json_string(&json).unwrap_err();
        assert!(err.to_string().contains("empty url"));
    }
}
