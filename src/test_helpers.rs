//! Shared test utilities for the gallery-index test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let root = build_tree(tmp.path(), &["Nature/a.jpg", "Nature/b.png"]);
//! let index = scan(&config_for(&root)).unwrap();
//!
//! assert_eq!(category_names(&index), vec!["Nature"]);
//! assert_eq!(image_file_names(&index, "Nature"), vec!["a.jpg", "b.png"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IndexerConfig;
use crate::index::GalleryIndex;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `<base>/images/MASTER` and the given files below it.
///
/// File paths are relative to the image root; parent directories are created
/// as needed. Returns the image root.
pub fn build_tree(base: &Path, files: &[&str]) -> PathBuf {
    let root = base.join("images").join("MASTER");
    fs::create_dir_all(&root).unwrap();
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "fake image").unwrap();
    }
    root
}

/// Default config pointed at `root`, writing `gallery.json` next to it.
pub fn config_for(root: &Path) -> IndexerConfig {
    IndexerConfig {
        image_root: root.to_path_buf(),
        output_file: root.with_file_name("gallery.json"),
        ..IndexerConfig::default()
    }
}

/// The image root as it appears at the start of indexed paths.
pub fn web_root(root: &Path) -> String {
    root.to_string_lossy().replace('\\', "/")
}

/// Remove all permissions from `dir`.
///
/// Returns `false` (and restores the permissions) when the directory is still
/// readable afterwards, as happens when tests run as root.
#[cfg(unix)]
pub fn lock_dir(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(dir).is_ok() {
        unlock_dir(dir);
        return false;
    }
    true
}

/// Restore `dir` to `0o755` so `TempDir` can clean it up.
#[cfg(unix)]
pub fn unlock_dir(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}

// =========================================================================
// Index lookups — panics with a clear message on miss
// =========================================================================

/// Category names in key order.
pub fn category_names(index: &GalleryIndex) -> Vec<&str> {
    index.category_names().collect()
}

/// Images of a category. Panics if the category is absent.
pub fn find_category<'a>(index: &'a GalleryIndex, name: &str) -> &'a [String] {
    index.images(name).unwrap_or_else(|| {
        let names = category_names(index);
        panic!("category '{name}' not found. Available: {names:?}")
    })
}

/// File names (last path segment) of a category's images, in index order.
pub fn image_file_names(index: &GalleryIndex, name: &str) -> Vec<String> {
    find_category(index, name)
        .iter()
        .map(|p| p.rsplit('/').next().unwrap_or(p).to_string())
        .collect()
}
