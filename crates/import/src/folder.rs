//! Folder-representative selection for recursive folder uploads.
//!
//! A recursive upload hands over every file in a folder tree. The catalog
//! wants one image per product, and products live one per folder, so the
//! planner keeps exactly one representative image per folder: the first in
//! file-name order. Folders keep the order in which the upload first
//! mentioned them.

use tracing::info;

use crate::files::{file_name, is_image_path};

/// Result of scanning a recursive folder upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderScan {
    /// The chosen representative paths, one per folder, in folder
    /// encounter order.
    pub representatives: Vec<String>,
    /// How many folders contained at least one image.
    pub folder_count: usize,
}

/// Pick one representative image per folder from relative upload paths.
///
/// Non-image files are skipped. Each remaining path is grouped by its
/// containing folder (everything before the last `/`, empty for top-level
/// files); within a folder the paths are ordered by file name, and the
/// first is chosen.
pub fn pick_folder_representatives<'a>(
    paths: impl IntoIterator<Item = &'a str>,
) -> FolderScan {
    // Folder -> image paths, in first-seen folder order.
    let mut groups: Vec<(&str, Vec<&'a str>)> = Vec::new();

    for path in paths {
        if !is_image_path(path) {
            continue;
        }
        let folder = match path.rsplit_once('/') {
            Some((folder, _)) => folder,
            None => "",
        };
        match groups.iter_mut().find(|(name, _)| *name == folder) {
            Some((_, files)) => files.push(path),
            None => groups.push((folder, vec![path])),
        }
    }

    let mut representatives = Vec::with_capacity(groups.len());
    for (_, mut files) in groups {
        files.sort_by_key(|path| file_name(path));
        if let Some(first) = files.first() {
            representatives.push((*first).to_string());
        }
    }

    let scan = FolderScan {
        folder_count: representatives.len(),
        representatives,
    };
    info!(folders = scan.folder_count, "Folder scan complete");
    scan
}
