//! Filesystem scanning.
//!
//! Walks the image root and files every image under the name of the
//! directory it sits in.
//!
//! ## Directory Structure
//!
//! ```text
//! images/MASTER/                 # Image root (files here are ignored)
//! ├── Nature/                    # Category "Nature"
//! │   ├── a.jpg
//! │   └── b.png
//! ├── Urban/                     # No images → no category
//! │   └── notes.txt
//! └── Travel/
//!     ├── cover.jpg              # Category "Travel"
//!     └── Japan/                 # Category "Japan", not "Travel/Japan"
//!         └── tokyo.jpg
//! ```
//!
//! A category is always a single directory name. Two directories with the
//! same name at different depths (`A/Sub` and `B/Sub`) share one category.
//!
//! ## Traversal Order
//!
//! Within each directory, files are visited before subdirectories and both
//! are ordered by name. This fixes the key order of the index: a directory's
//! own images register its category before anything nested below it.

use crate::config::IndexerConfig;
use crate::index::GalleryIndex;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory '{}' not found", .0.display())]
    MissingInputDirectory(PathBuf),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Scan `config.image_root` and build the gallery index.
///
/// Fails with [`ScanError::MissingInputDirectory`] when the root is absent
/// or not a directory. Any error while reading the tree aborts the scan.
pub fn scan(config: &IndexerConfig) -> Result<GalleryIndex, ScanError> {
    let root = &config.image_root;
    if !root.is_dir() {
        return Err(ScanError::MissingInputDirectory(root.clone()));
    }

    let mut index = GalleryIndex::new();

    // Depth 1 holds the category directories and stray root files; only
    // entries inside a subdirectory can be images.
    let walker = WalkDir::new(root).min_depth(2).sort_by(files_first);

    for entry in walker {
        let entry = entry?;
        if !is_file(&entry) || !config.is_image(entry.path()) {
            continue;
        }
        let Some(category) = category_name(entry.path()) else {
            continue;
        };
        index.add_image(&category, web_path(entry.path()));
    }

    index.sort_images();
    Ok(index)
}

/// Files before directories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Anything that is not a directory, following symlinks for the check.
///
/// Dangling symlinks count as files. Symlinked directories are not followed.
fn is_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        !entry.path().is_dir()
    } else {
        !entry.file_type().is_dir()
    }
}

/// Base name of the directory containing `path`.
fn category_name(path: &Path) -> Option<String> {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

/// Path as a string with every backslash turned into a forward slash.
fn web_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
