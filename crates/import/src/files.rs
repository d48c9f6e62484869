//! Item construction for plain multi-file uploads.

use std::path::Path;

use tracing::debug;

use ck_engine::CatalogItem;

/// File extensions accepted as catalog images.
const IMAGE_EXTENSIONS: &[&str] = &["avif", "bmp", "gif", "jpeg", "jpg", "png", "webp"];

/// Whether a path looks like an image file, by extension
/// (case-insensitive). The web editor filtered on the `image/*` MIME type;
/// paths are what the native shell has before any decoding happens.
pub fn is_image_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// The file name component of a path, as the item's display name.
pub(crate) fn file_name(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Build a catalog item for one uploaded file, or `None` for non-images.
/// The item carries a freshly minted id and the file name as its display
/// name.
pub fn item_from_path(path: &str) -> Option<CatalogItem> {
    if !is_image_path(path) {
        return None;
    }
    Some(CatalogItem::new(path, file_name(path)))
}

/// Build catalog items for an uploaded file batch, preserving input order
/// and skipping non-images.
pub fn items_from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Vec<CatalogItem> {
    let items: Vec<CatalogItem> = paths.into_iter().filter_map(item_from_path).collect();
    debug!(count = items.len(), "Built items from file batch");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(is_image_path("photos/shoe.png"));
        assert!(is_image_path("photos/shoe.JPG"));
        assert!(is_image_path("shoe.webp"));
        assert!(!is_image_path("notes/readme.txt"));
        assert!(!is_image_path("archive.zip"));
        assert!(!is_image_path("no_extension"));
    }

    #[test]
    fn item_from_path_uses_file_name() {
        let item = item_from_path("photos/summer/shoe.png").unwrap();
        assert_eq!(item.source, "photos/summer/shoe.png");
        assert_eq!(item.name.as_deref(), Some("shoe.png"));
        assert!(!item.id.is_empty());
    }

    #[test]
    fn item_from_path_rejects_non_images() {
        assert!(item_from_path("notes/readme.txt").is_none());
    }

    #[test]
    fn items_from_paths_filters_and_preserves_order() {
        let items = items_from_paths(["a.png", "skip.txt", "b.jpg"]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source, "a.png");
        assert_eq!(items[1].source, "b.jpg");
    }

    #[test]
    fn items_get_distinct_ids() {
        let items = items_from_paths(["a.png", "b.png"]);
        assert_ne!(items[0].id, items[1].id);
    }
}
