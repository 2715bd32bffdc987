//! Invoice data sources.
//!
//! This module provides the fetch layer:
//! - File loading for a JSON array of records
//! - Seeded mock generation standing in for the stub endpoint
//! - Unified InvoiceSource enum for both
//! - FetchGuard generation counter for stale-fetch coordination

use crate::model::{AppError, Invoice};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod fetch;
pub mod file;
pub mod mock;

pub use fetch::{FetchGuard, FetchTicket};
pub use file::FileSource;
pub use mock::MockSource;

/// Unified invoice source. Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum InvoiceSource {
    /// JSON file on disk (read-once).
    File(FileSource),
    /// Deterministic generated data.
    Mock(MockSource),
}

impl InvoiceSource {
    /// Fetch the full authoritative record set.
    ///
    /// # Errors
    ///
    /// File sources surface read and parse failures; mock sources never
    /// fail.
    pub fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<Invoice>, AppError> {
        match self {
            InvoiceSource::File(f) => f.load(),
            InvoiceSource::Mock(m) => Ok(m.generate(now)),
        }
    }
}

/// Pick a source: a data file when a path is given, otherwise mock data.
///
/// # Errors
///
/// Returns `FetchError::FileNotFound` (wrapped in `AppError`) if the path
/// does not exist.
pub fn detect_source(
    file: Option<PathBuf>,
    mock_seed: u64,
    mock_count: usize,
) -> Result<InvoiceSource, AppError> {
    match file {
        Some(path) => Ok(InvoiceSource::File(FileSource::new(path)?)),
        None => Ok(InvoiceSource::Mock(MockSource::new(mock_seed, mock_count))),
    }
}

// ===== Tests =====
