//! Application state and transitions.
//!
//! AppState is the root state type owning the store, query parameters,
//! selection, fetch lifecycle, and presence annotations. All state lives
//! here and is reached through transition methods; there is no
//! module-level mutable state anywhere in the crate.
//!
//! # Fetch lifecycle
//!
//! Fetches are asynchronous from the caller's point of view: `begin_fetch`
//! hands out a generation ticket, the shell resolves it whenever the
//! source answers, and `apply_fetch` drops any completion whose ticket has
//! been superseded. A slow stale response can therefore never overwrite a
//! faster newer one.
//!
//! # Optimistic mutation
//!
//! Status changes and comments apply to the local store immediately. When
//! the (simulated) backend reports failure, `mark_mutation_failed` flags
//! the state for a full refetch of the authoritative set; there is no
//! fine-grained undo.

use crate::model::{AppError, Invoice, InvoiceId, InvoiceStatus, StoreError};
use crate::presence::{PresenceMap, PresenceSource, DEFAULT_PRESENCE_TTL_SECS};
use crate::query::{run_pipeline, ListingPage, QueryState, SelectionTracker};
use crate::source::{FetchGuard, FetchTicket};
use crate::store::InvoiceStore;
use crate::summary::DashboardSummary;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

// ===== FetchState =====

/// Where the current fetch stands. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing in flight.
    Idle,
    /// A fetch with the given generation is in flight.
    Loading { generation: u64 },
    /// The most recent fetch failed; the message is user-visible and
    /// retryable.
    Failed { message: String },
}

// ===== AppState =====

/// Root state for one dashboard view instance.
#[derive(Debug)]
pub struct AppState {
    store: InvoiceStore,
    /// User-controlled query parameters.
    pub query: QueryState,
    selection: SelectionTracker,
    fetch_guard: FetchGuard,
    fetch: FetchState,
    presence: PresenceMap,
    presence_ttl_secs: i64,
    /// Set when an optimistic mutation failed and the authoritative set
    /// must be refetched.
    refetch_requested: bool,
    /// True once at least one fetch has succeeded. Until then a failure
    /// shows no rows at all (no partial data).
    has_data: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: InvoiceStore::new(),
            query: QueryState::new(),
            selection: SelectionTracker::new(),
            fetch_guard: FetchGuard::new(),
            fetch: FetchState::Idle,
            presence: PresenceMap::new(),
            presence_ttl_secs: DEFAULT_PRESENCE_TTL_SECS,
            refetch_requested: false,
            has_data: false,
        }
    }

    pub fn with_presence_ttl(mut self, ttl_secs: i64) -> Self {
        self.presence_ttl_secs = ttl_secs;
        self
    }

    // ===== Fetch lifecycle =====

    /// Start a fetch, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = self.fetch_guard.begin();
        self.fetch = FetchState::Loading {
            generation: ticket.generation(),
        };
        debug!(generation = ticket.generation(), "fetch started");
        ticket
    }

    /// Resolve a fetch. Completions carrying a superseded ticket are
    /// dropped so the newest fetch always wins.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Invoice>, AppError>) {
        if !self.fetch_guard.is_current(ticket) {
            debug!(
                generation = ticket.generation(),
                "dropping stale fetch completion"
            );
            return;
        }
        match result {
            Ok(records) => {
                info!(count = records.len(), "fetch succeeded, replacing collection");
                self.store.replace_all(records);
                self.selection.retain_known(self.store.ids());
                self.fetch = FetchState::Idle;
                self.refetch_requested = false;
                self.has_data = true;
            }
            Err(err) => {
                warn!(error = %err, "fetch failed");
                self.fetch = FetchState::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// User-visible failure message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.fetch {
            FetchState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// True when an optimistic mutation failed and the caller should run
    /// a fresh fetch to roll back to the authoritative set.
    pub fn needs_refetch(&self) -> bool {
        self.refetch_requested
    }

    // ===== Optimistic mutation =====

    /// Optimistically change a record's status: visible immediately.
    pub fn update_status(
        &mut self,
        id: &InvoiceId,
        status: InvoiceStatus,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.store.update_status(id, status, now)?;
        info!(id = %id, status = %status, "status updated optimistically");
        Ok(())
    }

    /// Optimistically append a comment.
    pub fn add_comment(
        &mut self,
        id: &InvoiceId,
        author: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.store.add_comment(id, author, text, now)
    }

    /// The backend rejected an optimistic mutation: request a full refetch
    /// of the authoritative set. The optimistic value stays visible until
    /// the refetch lands.
    pub fn mark_mutation_failed(&mut self) {
        warn!("mutation failed, requesting authoritative refetch");
        self.refetch_requested = true;
    }

    /// Bulk-delete the selected records from the collection. Returns the
    /// number removed; the selection is pruned to the survivors.
    pub fn delete_selected(&mut self) -> usize {
        let doomed: Vec<InvoiceId> = self.selection.iter().cloned().collect();
        let removed = self.store.remove_many(doomed.iter());
        self.selection.retain_known(self.store.ids());
        info!(removed, "bulk delete");
        removed
    }

    // ===== Selection =====

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn toggle_selection(&mut self, id: InvoiceId) {
        self.selection.toggle(id);
    }

    /// Select the entire filtered set, not just the visible page.
    pub fn select_all_filtered(&mut self, now: DateTime<Utc>) {
        let ids = crate::query::filtered_ids(self.store.records(), &self.query, now);
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ===== Presence =====

    /// Pull events from the injected presence source and expire old
    /// annotations. Cosmetic only.
    pub fn poll_presence(&mut self, source: &mut dyn PresenceSource, now: DateTime<Utc>) {
        for event in source.poll(now) {
            self.presence.record(event);
        }
        self.presence.expire(now, self.presence_ttl_secs);
    }

    pub fn presence(&self) -> &PresenceMap {
        &self.presence
    }

    // ===== Derived views =====

    pub fn records(&self) -> &[Invoice] {
        self.store.records()
    }

    /// Run the listing pipeline for the current query. When the first
    /// fetch has not succeeded yet, the listing is empty regardless of the
    /// store contents.
    pub fn listing(&self, now: DateTime<Utc>) -> ListingPage {
        if !self.has_data {
            return run_pipeline(&[], &self.query, &self.selection, now);
        }
        run_pipeline(self.store.records(), &self.query, &self.selection, now)
    }

    /// Summary cards over the full collection.
    pub fn summary(&self, now: DateTime<Utc>) -> DashboardSummary {
        DashboardSummary::compute(self.store.records(), now)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
