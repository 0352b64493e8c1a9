//! One complete indexing run: scan the image root, then write the index.
//!
//! Reads finish before the single write, and nothing is written when the
//! scan fails. A missing image root is the only expected failure; callers
//! tell it apart with [`GenerateError::missing_input_directory`].

use crate::config::IndexerConfig;
use crate::index::IndexError;
use crate::scan::{self, ScanError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Failed to write index: {0}")]
    Write(#[from] IndexError),
}

impl GenerateError {
    /// The configured root if this run failed because it does not exist.
    pub fn missing_input_directory(&self) -> Option<&Path> {
        match self {
            GenerateError::Scan(ScanError::MissingInputDirectory(root)) => Some(root),
            _ => None,
        }
    }
}

/// Build the gallery index and write it to `config.output_file`.
///
/// Returns the number of categories written.
pub fn generate(config: &IndexerConfig) -> Result<usize, GenerateError> {
    let index = scan::scan(config)?;
    index.write(&config.output_file)?;
    Ok(index.len())
}
