//! Invoice status enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of an invoice. Exactly one variant at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Sent,
    Paid,
    Overdue,
    Cancelled,
    Disputed,
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown invoice status '{0}'")]
pub struct UnknownStatus(pub String);

impl InvoiceStatus {
    /// Parse from the lowercase wire representation.
    pub fn parse(raw: &str) -> Result<Self, UnknownStatus> {
        match raw {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            "cancelled" => Ok(Self::Cancelled),
            "disputed" => Ok(Self::Disputed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
        }
    }

    /// All variants, in display order. Used by per-status summary counts.
    pub fn all() -> [InvoiceStatus; 7] {
        [
            Self::Draft,
            Self::Pending,
            Self::Sent,
            Self::Paid,
            Self::Overdue,
            Self::Cancelled,
            Self::Disputed,
        ]
    }

    /// True for statuses that still count toward outstanding balance.
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, Self::Paid | Self::Cancelled)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ===== Tests =====
