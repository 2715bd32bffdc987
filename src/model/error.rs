//! Error taxonomy for invdash.
//!
//! Hierarchical errors built with `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! Recovery strategy: fetch errors are surfaced to the user with a retry
//! action and, when no prior data exists, nothing is shown until a fetch
//! succeeds. Parse errors abort the offending load (no partial data).
//! Store errors on a mutation trigger a full refetch of the authoritative
//! set rather than fine-grained undo.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to fetch the invoice collection from its source.
    #[error("Failed to fetch invoices: {0}")]
    Fetch(#[from] FetchError),

    /// Failed to parse fetched invoice data.
    #[error("Failed to parse invoice data: {0}")]
    Parse(#[from] ParseError),

    /// A mutation against the in-memory store failed.
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    /// I/O failure in the shell layer (stdout, log file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered fetching the record collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The invoice data file does not exist at the given path.
    #[error("Invoice file not found: {path}")]
    FileNotFound {
        /// The filesystem path that was attempted.
        path: PathBuf,
    },

    /// Simulated endpoint failure, used to exercise the retry path.
    #[error("Endpoint unavailable: {reason}")]
    EndpointUnavailable { reason: String },

    /// Generic I/O error reading the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered parsing fetched invoice data.
///
/// Structural failures (missing id, negative amount, unknown status) are
/// reported with the array index of the offending record so the data set
/// can be fixed at the source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not valid JSON.
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// A record in the payload failed validation.
    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },
}

/// Errors from mutations against the in-memory store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The target invoice is not in the collection.
    #[error("Unknown invoice id '{id}'")]
    UnknownInvoice { id: String },
}
