//! Invoice record and its nested types.
//!
//! `Invoice` is the wire shape consumed from the stub fetch layer. Fields
//! that real data sets routinely omit (customer, due date) are optional and
//! degrade to placeholders at read time rather than failing the whole load.

use crate::model::{Amount, InvoiceId, InvoiceStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing customer or customer name.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

// ===== Customer =====

/// Customer reference. The name is nested and may itself be absent in
/// malformed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

// ===== Comment =====

/// A free-text comment attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

// ===== Invoice =====

/// One invoice record.
///
/// Invariant: `days_overdue` is derived from `due_date` at read time and is
/// `u32`, so it can never go negative. It is intentionally not a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    #[serde(default)]
    pub customer: Option<Customer>,
    pub amount: Amount,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub last_updated: DateTime<Utc>,
}

impl Invoice {
    /// Customer name for display and search. Degrades to a placeholder when
    /// the customer or its name is missing.
    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// Whole days past the due date as of `now`. Zero for invoices due
    /// today, due in the future, or with no due date.
    pub fn days_overdue(&self, now: DateTime<Utc>) -> u32 {
        match self.due_date {
            Some(due) => {
                let days = (now.date_naive() - due).num_days();
                u32::try_from(days).unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Copy-on-write status change: a new record with the status replaced
    /// and `last_updated` stamped.
    pub fn with_status(&self, status: InvoiceStatus, now: DateTime<Utc>) -> Invoice {
        Invoice {
            status,
            last_updated: now,
            ..self.clone()
        }
    }

    /// Copy-on-write comment append, stamps `last_updated`.
    pub fn with_comment(&self, comment: Comment, now: DateTime<Utc>) -> Invoice {
        let mut next = self.clone();
        next.comments.push(comment);
        next.last_updated = now;
        next
    }
}

// ===== Tests =====
