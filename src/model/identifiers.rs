//! Invoice identifier newtype with smart constructor.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique, stable identifier for an invoice.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

/// Error returned when an invoice id fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invoice id must be non-empty")]
pub struct InvalidInvoiceId;

impl InvoiceId {
    /// Smart constructor: validates a non-empty, non-whitespace id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidInvoiceId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidInvoiceId)
        } else {
            Ok(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl<'de> Deserialize<'de> for InvoiceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        InvoiceId::new(raw).map_err(serde::de::Error::custom)
    }
}

// ===== Tests =====
