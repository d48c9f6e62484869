//! Catalog serialization — writing `CatalogFile` to JSON files.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ProjectError, ProjectResult};
use crate::types::CatalogFile;

/// Serialize a catalog to a pretty-printed JSON string.
pub fn to_json_string(catalog: &CatalogFile) -> ProjectResult<String> {
    let json = serde_json::to_string_pretty(catalog)?;
    debug!(
        catalog_name = %catalog.name,
        json_len = json.len(),
        "Serialized catalog to JSON"
    );
    Ok(json)
}

/// Serialize a catalog to a compact (non-pretty) JSON string.
pub fn to_json_string_compact(catalog: &CatalogFile) -> ProjectResult<String> {
    let json = serde_json::to_string(catalog)?;
    debug!(
        catalog_name = %catalog.name,
        json_len = json.len(),
        "Serialized catalog to compact JSON"
    );
    Ok(json)
}

/// Save a catalog to a file at the given path.
///
/// The data is first written to a temporary file in the same directory,
/// then renamed over the target path, so an interrupted write never leaves
/// a half-written catalog behind.
pub fn save_catalog(catalog: &CatalogFile, path: &Path) -> ProjectResult<()> {
    let json = to_json_string(catalog)?;

    let temp_path = path.with_extension("ckc.tmp");

    std::fs::write(&temp_path, json.as_bytes()).map_err(|e| {
        tracing::error!(path = %temp_path.display(), error = %e, "Failed to write temp file");
        ProjectError::Io(e)
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        // Best-effort cleanup of the temp file if the rename fails.
        let _ = std::fs::remove_file(&temp_path);
        tracing::error!(
            from = %temp_path.display(),
            to = %path.display(),
            error = %e,
            "Failed to rename temp file to target"
        );
        ProjectError::Io(e)
    })?;

    info!(
        catalog_name = %catalog.name,
        items = catalog.items.len(),
        path = %path.display(),
        "Catalog saved"
    );
    Ok(())
}
