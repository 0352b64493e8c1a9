//! The gallery index: category name → sorted image paths.
//!
//! Serializes as a flat JSON object whose keys appear in the order the
//! categories were first found during the scan:
//!
//! ```json
//! {
//!   "Nature": [
//!     "images/MASTER/Nature/a.jpg",
//!     "images/MASTER/Nature/b.png"
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Insertion-ordered map of categories to image paths.
///
/// A category exists only once an image has been added to it, so the index
/// never contains an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GalleryIndex {
    categories: IndexMap<String, Vec<String>>,
}

impl GalleryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image path to `category`, creating the category at the end
    /// of the key order if this is its first image.
    pub fn add_image(&mut self, category: &str, path: String) {
        match self.categories.get_mut(category) {
            Some(images) => images.push(path),
            None => {
                self.categories.insert(category.to_string(), vec![path]);
            }
        }
    }

    /// Sort every category's images ascending by byte-wise string order.
    pub fn sort_images(&mut self) {
        for images in self.categories.values_mut() {
            images.sort();
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn images(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category names in key order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, images)| (name.as_str(), images.as_slice()))
    }

    /// Render as pretty JSON (2-space indentation, no trailing newline).
    ///
    /// Non-ASCII text is written as UTF-8 rather than `\u` escapes.
    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON rendering to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), IndexError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}
