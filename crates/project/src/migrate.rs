//! Version migration — transforms older catalog JSON to the current format.
//!
//! The web editor originally persisted the catalog as a bare JSON array of
//! items (the browser `localStorage` shape). That array is treated as
//! version 0 and wrapped into the versioned [`CatalogFile`](crate::types::CatalogFile)
//! object on load, so old catalogs keep working unchanged.

use tracing::{debug, info};

use crate::error::{ProjectError, ProjectResult};

/// Current catalog format version.
pub const CURRENT_VERSION: u32 = 1;

/// Name given to catalogs migrated from the unversioned legacy format.
const MIGRATED_CATALOG_NAME: &str = "Imported Catalog";

/// Migrate a catalog JSON value to the current version in-place.
///
/// Returns the version after migration. A value already at the current
/// version is left untouched.
pub fn migrate_catalog(value: &mut serde_json::Value) -> ProjectResult<u32> {
    if value.is_array() {
        migrate_v0_to_v1(value);
        return Ok(CURRENT_VERSION);
    }

    let obj = value
        .as_object()
        .ok_or_else(|| ProjectError::InvalidCatalog {
            reason: "catalog root must be a JSON object or a legacy item array".into(),
        })?;

    let version = extract_version(obj)?;

    if version > CURRENT_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: version.to_string(),
        });
    }

    if version < CURRENT_VERSION {
        // Version 0 only ever existed as the bare-array shape handled above.
        return Err(ProjectError::InvalidCatalog {
            reason: format!("no migration path from object version {version}"),
        });
    }

    debug!(version, "Catalog is at current version, no migration needed");
    Ok(version)
}

/// Extract the version number from a catalog JSON object.
fn extract_version(obj: &serde_json::Map<String, serde_json::Value>) -> ProjectResult<u32> {
    match obj.get("version") {
        Some(serde_json::Value::Number(n)) => {
            n.as_u64()
                .map(|v| v as u32)
                .ok_or_else(|| ProjectError::InvalidCatalog {
                    reason: "version must be a non-negative integer".into(),
                })
        }
        Some(_) => Err(ProjectError::InvalidCatalog {
            reason: "version field has unexpected type".into(),
        }),
        None => Err(ProjectError::InvalidCatalog {
            reason: "catalog object has no version field".into(),
        }),
    }
}

/// Wrap a legacy bare item array into a version 1 catalog object.
fn migrate_v0_to_v1(value: &mut serde_json::Value) {
    let items = std::mem::take(value);
    let count = items.as_array().map(Vec::len).unwrap_or(0);

    let now = crate::types::current_iso_timestamp();
    *value = serde_json::json!({
        "version": CURRENT_VERSION,
        "name": MIGRATED_CATALOG_NAME,
        "createdAt": now,
        "updatedAt": now,
        "items": items,
    });

    info!(count, "Migrated legacy item array to versioned catalog");
}
