//! Monetary amount newtype.
//!
//! Amounts are stored as whole cents in a `u64`, so a negative amount is
//! unrepresentable. The stub-endpoint JSON carries amounts as decimal
//! dollar numbers; conversion validates sign and finiteness.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Non-negative monetary amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

/// Error returned when a raw amount fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidAmount {
    #[error("Amount must be non-negative, got {0}")]
    Negative(f64),
    #[error("Amount must be finite, got {0}")]
    NotFinite(f64),
}

impl Amount {
    /// Smart constructor from decimal dollars (the wire representation).
    /// Rejects negative, NaN, and infinite values. Rounds to whole cents.
    pub fn from_dollars(raw: f64) -> Result<Self, InvalidAmount> {
        if !raw.is_finite() {
            return Err(InvalidAmount::NotFinite(raw));
        }
        if raw < 0.0 {
            return Err(InvalidAmount::Negative(raw));
        }
        Ok(Self((raw * 100.0).round() as u64))
    }

    /// Construct from a whole number of cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Saturating addition, for summary aggregation.
    pub fn saturating_add(&self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    /// Renders as decimal dollars, e.g. `1234.56`. Search terms are matched
    /// against this rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Amount::from_dollars(raw).map_err(serde::de::Error::custom)
    }
}

// ===== Tests =====
