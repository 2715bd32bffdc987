//! Simulated collaborator presence.
//!
//! Presence is cosmetic: an ephemeral "who's looking at this" annotation
//! per invoice, never correctness-bearing. The event source is a trait
//! injected by the shell so tests can script it and a real push mechanism
//! can replace the simulation later; no timer logic is hard-coded into the
//! view state.

use crate::model::InvoiceId;
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

/// Default annotation time-to-live.
pub const DEFAULT_PRESENCE_TTL_SECS: i64 = 30;

// ===== Events =====

/// What a collaborator is doing on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceAction {
    Viewing,
    Editing,
    Commenting,
}

impl PresenceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
            Self::Commenting => "commenting",
        }
    }
}

/// One presence observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEvent {
    pub invoice_id: InvoiceId,
    pub collaborator: String,
    pub action: PresenceAction,
    pub at: DateTime<Utc>,
}

// ===== Source trait =====

/// External presence event source.
///
/// `poll` is non-blocking: it returns whatever events are due as of `now`
/// and an empty vec otherwise. The shell polls on its own cadence; there
/// are no timers to clear inside the core.
pub trait PresenceSource {
    fn poll(&mut self, now: DateTime<Utc>) -> Vec<PresenceEvent>;
}

// ===== Simulated source =====

const COLLABORATORS: &[&str] = &["maria", "jun", "priya", "tom", "alex"];

/// Seeded simulation: on each elapsed interval, assigns a random
/// collaborator and action to a random known invoice id.
#[derive(Debug)]
pub struct SimulatedPresence {
    ids: Vec<InvoiceId>,
    interval: Duration,
    last_emit: Option<DateTime<Utc>>,
    rng: StdRng,
}

impl SimulatedPresence {
    pub fn new(ids: Vec<InvoiceId>, interval_secs: i64, seed: u64) -> Self {
        Self {
            ids,
            interval: Duration::seconds(interval_secs),
            last_emit: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Swap in the id population after a refetch.
    pub fn set_ids(&mut self, ids: Vec<InvoiceId>) {
        self.ids = ids;
    }

    fn random_event(&mut self, now: DateTime<Utc>) -> Option<PresenceEvent> {
        if self.ids.is_empty() {
            return None;
        }
        let id = self.ids[self.rng.random_range(0..self.ids.len())].clone();
        let collaborator = COLLABORATORS[self.rng.random_range(0..COLLABORATORS.len())];
        let action = match self.rng.random_range(0..3) {
            0 => PresenceAction::Viewing,
            1 => PresenceAction::Editing,
            _ => PresenceAction::Commenting,
        };
        Some(PresenceEvent {
            invoice_id: id,
            collaborator: collaborator.to_string(),
            action,
            at: now,
        })
    }
}

impl PresenceSource for SimulatedPresence {
    fn poll(&mut self, now: DateTime<Utc>) -> Vec<PresenceEvent> {
        let due = match self.last_emit {
            Some(last) => now - last >= self.interval,
            None => true,
        };
        if !due {
            return Vec::new();
        }
        self.last_emit = Some(now);
        self.random_event(now).into_iter().collect()
    }
}

// ===== Annotation map =====

/// A collaborator annotation on one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub collaborator: String,
    pub action: PresenceAction,
    pub at: DateTime<Utc>,
}

/// Latest annotation per invoice, expired after a TTL.
#[derive(Debug, Clone, Default)]
pub struct PresenceMap {
    entries: HashMap<InvoiceId, Annotation>,
}

impl PresenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, replacing any older annotation for the same id.
    pub fn record(&mut self, event: PresenceEvent) {
        self.entries.insert(
            event.invoice_id,
            Annotation {
                collaborator: event.collaborator,
                action: event.action,
                at: event.at,
            },
        );
    }

    /// Drop annotations older than `ttl_secs` as of `now`.
    pub fn expire(&mut self, now: DateTime<Utc>, ttl_secs: i64) {
        let ttl = Duration::seconds(ttl_secs);
        self.entries.retain(|_, ann| now - ann.at < ttl);
    }

    pub fn get(&self, id: &InvoiceId) -> Option<&Annotation> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===== Tests =====
