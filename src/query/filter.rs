//! Filter stage of the listing pipeline.
//!
//! Pure function from the full record collection plus predicates to the
//! matching subset. Predicates compose with logical AND; an empty
//! predicate passes every record through.

use crate::model::{Amount, Invoice, InvoiceStatus};
use chrono::{DateTime, Utc};

// ===== Filters =====

/// Field-level filter predicates. `Default` is the pass-through filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filters {
    /// Exact-match status filter.
    pub status: Option<InvoiceStatus>,
    /// Inclusive lower bound on amount.
    pub amount_min: Option<Amount>,
    /// Inclusive upper bound on amount.
    pub amount_max: Option<Amount>,
    /// Minimum days overdue; 0 disables the predicate.
    pub min_days_overdue: u32,
}

impl Filters {
    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
            && self.min_days_overdue == 0
    }

    /// Whether a single record satisfies every active predicate.
    pub fn matches(&self, invoice: &Invoice, now: DateTime<Utc>) -> bool {
        if let Some(status) = self.status {
            if invoice.status != status {
                return false;
            }
        }
        if let Some(min) = self.amount_min {
            if invoice.amount < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if invoice.amount > max {
                return false;
            }
        }
        if self.min_days_overdue > 0 && invoice.days_overdue(now) < self.min_days_overdue {
            return false;
        }
        true
    }
}

// ===== Search matching =====

/// Case-insensitive substring match of `term` against the record's
/// searchable fields: customer name, id, and amount-as-string.
/// An empty (or whitespace-only) term matches everything.
pub fn matches_search(invoice: &Invoice, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    invoice.customer_name().to_lowercase().contains(&needle)
        || invoice.id.as_str().to_lowercase().contains(&needle)
        || invoice.amount.to_string().contains(&needle)
}

// ===== Filter stage =====

/// Apply search term and field predicates to the full collection.
///
/// Returns references in input order; output is always a subset of the
/// input. No side effects.
pub fn apply<'a>(
    records: &'a [Invoice],
    term: &str,
    filters: &Filters,
    now: DateTime<Utc>,
) -> Vec<&'a Invoice> {
    records
        .iter()
        .filter(|inv| matches_search(inv, term) && filters.matches(inv, now))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
