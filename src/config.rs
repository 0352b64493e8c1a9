//! Indexer configuration.
//!
//! The indexer runs with no arguments, so every option has a default. Values
//! are layered: stock defaults, then an optional `gallery-index.toml`, then
//! command-line flags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! image_root = "images/MASTER"   # Directory holding one folder per category
//! output_file = "gallery.json"   # Index written here, replaced on every run
//! valid_extensions = [".jpg", ".jpeg", ".png", ".gif", ".webp"]
//! ```
//!
//! Extensions match case-insensitively and the leading dot is optional, so
//! `"JPG"` and `".jpg"` are equivalent. Unknown keys are rejected to catch
//! typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gallery-index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything one indexing run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// Directory scanned for category folders.
    pub image_root: PathBuf,
    /// Where the JSON index is written.
    pub output_file: PathBuf,
    /// File extensions treated as images.
    pub valid_extensions: Vec<String>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("images/MASTER"),
            output_file: PathBuf::from("gallery.json"),
            valid_extensions: [".jpg", ".jpeg", ".png", ".gif", ".webp"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl IndexerConfig {
    /// Validate that the config can drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "image_root must not be empty".into(),
            ));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        if self.valid_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "valid_extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .valid_extensions
            .iter()
            .find(|e| normalize_extension(e).is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "valid_extensions contains an empty extension: {bad:?}"
            )));
        }
        Ok(())
    }

    /// Whether `path` has one of the configured image extensions.
    ///
    /// Leading dots are part of the name, so `.jpg` and `..jpg` have no
    /// extension and never match, while `.hidden.jpg` does.
    pub fn is_image(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        let Some(ext) = extension_of(&name) else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.valid_extensions
            .iter()
            .any(|valid| normalize_extension(valid) == ext)
    }

    /// Apply command-line overrides on top of this config and re-validate.
    ///
    /// A non-empty `extensions` list replaces the configured list entirely.
    pub fn with_overrides(
        mut self,
        image_root: Option<PathBuf>,
        output_file: Option<PathBuf>,
        extensions: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(root) = image_root {
            self.image_root = root;
        }
        if let Some(output) = output_file {
            self.output_file = output;
        }
        if !extensions.is_empty() {
            self.valid_extensions = extensions;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Text after the last dot, ignoring any dots the name starts with.
///
/// `"a.tar.png"` → `Some("png")`, `"photo."` → `Some("")`, `"..jpg"` → `None`.
fn extension_of(name: &str) -> Option<&str> {
    let stem = name.trim_start_matches('.');
    stem.rfind('.').map(|dot| &stem[dot + 1..])
}

/// Lowercase an extension and strip its leading dot: `".JPG"` → `"jpg"`.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load the config file at `path` and validate it.
///
/// The file is sparse: `#[serde(default)]` fills every key it leaves out
/// from [`IndexerConfig::default`]. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<IndexerConfig, ConfigError> {
    let config: IndexerConfig = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        IndexerConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-index configuration
# ===========================
#
# Place this file in the directory you run gallery-index from, named
# gallery-index.toml, or pass it with --config. Every key is optional;
# command-line flags override values set here.

# Directory to scan. Each folder below it becomes a category named after
# the folder. Images in nested folders are filed under their immediate
# parent folder's name.
image_root = "images/MASTER"

# JSON index destination. Overwritten on every successful run.
output_file = "gallery.json"

# Extensions treated as images. Case-insensitive; the leading dot is optional.
valid_extensions = [".jpg", ".jpeg", ".png", ".gif", ".webp"]
"##
}
