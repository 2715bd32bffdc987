//! Dashboard summary cards.
//!
//! Aggregates over the FULL collection, not the filtered set: the cards
//! answer "how is the book doing", the table answers "what am I looking
//! at".

use crate::model::{Amount, Invoice, InvoiceStatus};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Derived totals for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    /// Number of invoices in the collection.
    pub invoice_count: usize,
    /// Sum of amounts still outstanding (not paid, not cancelled).
    pub outstanding: Amount,
    /// Sum of paid amounts.
    pub paid: Amount,
    /// Invoices at least one day past due.
    pub overdue_count: usize,
    /// Count per status, in status display order.
    pub by_status: BTreeMap<InvoiceStatus, usize>,
}

impl DashboardSummary {
    /// Compute all cards in one pass. Pure.
    pub fn compute(records: &[Invoice], now: DateTime<Utc>) -> Self {
        let mut summary = DashboardSummary {
            invoice_count: records.len(),
            ..Default::default()
        };
        for inv in records {
            if inv.status.is_outstanding() {
                summary.outstanding = summary.outstanding.saturating_add(inv.amount);
            }
            if inv.status == InvoiceStatus::Paid {
                summary.paid = summary.paid.saturating_add(inv.amount);
            }
            if inv.days_overdue(now) > 0 {
                summary.overdue_count += 1;
            }
            *summary.by_status.entry(inv.status).or_insert(0) += 1;
        }
        summary
    }
}

// ===== Tests =====
