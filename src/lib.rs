//! # Gallery Index
//!
//! Build-time asset indexing for static image galleries. The filesystem is
//! the data source: every folder under the image root is a category, and the
//! images inside it are listed in a JSON file the gallery page loads.
//!
//! ```text
//! images/MASTER/Nature/b.png      ┐
//! images/MASTER/Nature/a.jpg      ├─→  { "Nature": ["images/MASTER/Nature/a.jpg",
//! images/MASTER/Urban/notes.txt   ┘                 "images/MASTER/Nature/b.png"] }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `IndexerConfig`: defaults, `gallery-index.toml` loading, CLI overrides |
//! | [`scan`] | Walks the image root and groups images by their directory name |
//! | [`index`] | `GalleryIndex`: insertion-ordered categories, sorting, JSON output |
//! | [`generate`] | A full run: scan, then write the index file |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Categories Are Directory Names
//!
//! An image's category is the name of the folder it sits in, at any depth.
//! `Travel/Japan/tokyo.jpg` lands in `Japan`, and `A/Sub` and `B/Sub` share
//! one `Sub` category. Galleries here are flat, so a hierarchical key would
//! only leak folder layout into URLs.
//!
//! ## Deterministic Output
//!
//! The walk is sorted (a directory's files, then its subdirectories, each by
//! name) and image lists are sorted byte-wise. Running twice over the same
//! tree produces byte-identical JSON, so the index can be committed without
//! noisy diffs.
//!
//! ## All Reads Before One Write
//!
//! The index is built entirely in memory and written once. A missing image
//! root stops the run before anything is written, leaving a previous
//! `gallery.json` in place.

pub mod config;
pub mod generate;
pub mod index;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
