//! Plain-text rendering for the CLI shell.
//!
//! Formats summary cards and the current listing page as fixed-width text.
//! This is the entire presentation layer; there is no interactive UI.

use crate::model::Invoice;
use crate::presence::PresenceMap;
use crate::query::{ListingPage, SelectionTracker};
use crate::summary::DashboardSummary;
use chrono::{DateTime, Utc};

/// Render the summary cards as a short header block.
pub fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Invoices: {}   Outstanding: {}   Paid: {}   Overdue: {}\n",
        summary.invoice_count, summary.outstanding, summary.paid, summary.overdue_count
    ));
    if !summary.by_status.is_empty() {
        let parts: Vec<String> = summary
            .by_status
            .iter()
            .map(|(status, count)| format!("{status}={count}"))
            .collect();
        out.push_str(&format!("By status: {}\n", parts.join(" ")));
    }
    out
}

/// Render one page of records as a table, with selection markers and
/// presence annotations.
pub fn render_listing(
    page: &ListingPage,
    selection: &SelectionTracker,
    presence: &PresenceMap,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<3} {:<10} {:<22} {:>12} {:<12} {:>8} {:<10} {}\n",
        "", "ID", "CUSTOMER", "AMOUNT", "DUE", "OVERDUE", "STATUS", "PRESENCE"
    ));
    for inv in &page.rows {
        out.push_str(&render_row(inv, selection, presence, now));
    }
    out.push_str(&format!(
        "Page {}/{}   showing {} of {} filtered ({} total, {} selected)\n",
        page.page,
        page.total_pages,
        page.rows.len(),
        page.filtered,
        page.total,
        page.selected
    ));
    out
}

fn render_row(
    inv: &Invoice,
    selection: &SelectionTracker,
    presence: &PresenceMap,
    now: DateTime<Utc>,
) -> String {
    let marker = if selection.contains(&inv.id) { "[x]" } else { "[ ]" };
    let due = inv
        .due_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let who = presence
        .get(&inv.id)
        .map(|ann| format!("{} {}", ann.collaborator, ann.action.as_str()))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<3} {:<10} {:<22} {:>12} {:<12} {:>8} {:<10} {}\n",
        marker,
        inv.id,
        inv.customer_name(),
        inv.amount.to_string(),
        due,
        inv.days_overdue(now),
        inv.status,
        who
    )
}

// ===== Tests =====
