//! Stale-fetch coordination.
//!
//! Two overlapping fetches for the same resource are not otherwise
//! coordinated, so a slow earlier response could overwrite a faster later
//! one. `FetchGuard` hands out generation-numbered tickets; only the
//! ticket from the most recent `begin()` is current, and completions
//! carrying a stale ticket must be dropped by the caller.

/// Generation ticket for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter over in-flight fetches.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any fetch still in flight.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Whether a completing fetch is still the latest one.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }
}

// ===== Tests =====
