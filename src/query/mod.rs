//! The listing pipeline: query state plus the filter → sort → page stages.
//!
//! `QueryState` holds the user-controlled parameters and enforces the
//! reset rules (changing search, filters, or page size snaps back to page
//! 1). `run_pipeline` wires the pure stages together and derives the
//! render-ready counts.

pub mod filter;
pub mod page;
pub mod selection;
pub mod sort;

pub use filter::Filters;
pub use page::{PageSpec, DEFAULT_PAGE_SIZE};
pub use selection::SelectionTracker;
pub use sort::{SortDirection, SortKey, SortSpec, UnknownSortKey};

use crate::model::{Amount, Invoice, InvoiceStatus};
use chrono::{DateTime, Utc};

// ===== QueryState =====

/// User-controlled query parameters. Ephemeral, owned by the view.
///
/// All mutation goes through methods so the page-reset rules cannot be
/// bypassed; there is deliberately no module-level or global state here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    search: String,
    filters: Filters,
    sort: SortSpec,
    page: PageSpec,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> PageSpec {
        self.page
    }

    /// Set the free-text search term. Resets to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page.page = 1;
    }

    /// Set the status filter. Resets to page 1.
    pub fn set_status_filter(&mut self, status: Option<InvoiceStatus>) {
        self.filters.status = status;
        self.page.page = 1;
    }

    /// Set the inclusive amount range. Resets to page 1.
    pub fn set_amount_range(&mut self, min: Option<Amount>, max: Option<Amount>) {
        self.filters.amount_min = min;
        self.filters.amount_max = max;
        self.page.page = 1;
    }

    /// Set the minimum days-overdue threshold. Resets to page 1.
    pub fn set_min_days_overdue(&mut self, days: u32) {
        self.filters.min_days_overdue = days;
        self.page.page = 1;
    }

    /// Change the sort spec. Does NOT reset the page.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Toggle direction if the key is already active, else sort ascending
    /// by the new key.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec {
                key,
                direction: SortDirection::Ascending,
            };
        }
    }

    /// Go to a 1-based page. Out-of-range values are accepted here; the
    /// pipeline clamps when it knows the filtered count.
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page.max(1);
    }

    /// Change the page size. Resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size;
        self.page.page = 1;
    }
}

// ===== ListingPage =====

/// Render-ready page of records plus derived counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    /// Records for the (clamped) current page, in display order.
    pub rows: Vec<Invoice>,
    /// Size of the full collection.
    pub total: usize,
    /// Size of the filtered set.
    pub filtered: usize,
    /// Size of the selection set.
    pub selected: usize,
    /// Page number actually shown, clamped to `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
}

// ===== Pipeline =====

/// Run filter → sort → page over the collection and derive counts.
///
/// Deterministic and side-effect free; `now` is passed in explicitly so
/// `days_overdue` is computed at read time against a single clock reading.
pub fn run_pipeline(
    records: &[Invoice],
    query: &QueryState,
    selection: &SelectionTracker,
    now: DateTime<Utc>,
) -> ListingPage {
    let filtered = filter::apply(records, &query.search, &query.filters, now);
    let filtered_count = filtered.len();

    let sorted = sort::apply(filtered, query.sort);

    let clamped = PageSpec {
        page: query.page.clamp_page(filtered_count),
        page_size: query.page.page_size,
    };
    let rows: Vec<Invoice> = clamped.slice(&sorted).iter().map(|inv| (*inv).clone()).collect();

    ListingPage {
        rows,
        total: records.len(),
        filtered: filtered_count,
        selected: selection.len(),
        page: clamped.page,
        total_pages: clamped.total_pages(filtered_count),
    }
}

/// Ids of the entire filtered set, in filtered order. This is the input to
/// select-all, which covers the whole filtered set rather than the visible page.
pub fn filtered_ids(
    records: &[Invoice],
    query: &QueryState,
    now: DateTime<Utc>,
) -> Vec<crate::model::InvoiceId> {
    filter::apply(records, &query.search, &query.filters, now)
        .into_iter()
        .map(|inv| inv.id.clone())
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_state_tests.rs"]
mod tests;
