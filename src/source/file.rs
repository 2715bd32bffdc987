//! File-based invoice source.
//!
//! Reads a JSON array of invoice records (the stub-endpoint shape) from
//! disk. Structural problems are reported with the array index of the
//! offending record; a load either fully succeeds or yields no data.

use crate::model::{AppError, FetchError, Invoice, ParseError};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-once invoice file source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FetchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the whole record set.
    pub fn load(&self) -> Result<Vec<Invoice>, AppError> {
        let raw = fs::read_to_string(&self.path).map_err(FetchError::from)?;
        Ok(parse_records(&raw)?)
    }
}

/// Parse a JSON array of invoice records.
///
/// Parses the array loosely first so a structural failure can be pinned to
/// the index of the record that caused it.
pub fn parse_records(raw: &str) -> Result<Vec<Invoice>, ParseError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
            message: e.to_string(),
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| ParseError::InvalidRecord {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

// ===== Tests =====
