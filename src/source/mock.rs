//! Deterministic mock invoice generator.
//!
//! Stands in for the stub REST endpoint: same seed, same record set. Used
//! by the CLI when no data file is given and by tests that need a sizable
//! collection.

use crate::model::{Amount, Customer, Invoice, InvoiceId, InvoiceStatus};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

const CUSTOMER_NAMES: &[&str] = &[
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Logistics",
    "Stark Industries",
    "Wayne Enterprises",
    "Tyrell Corp",
    "Wonka Imports",
    "Cyberdyne Systems",
    "Sirius Cybernetics",
];

const STATUS_POOL: &[InvoiceStatus] = &[
    InvoiceStatus::Draft,
    InvoiceStatus::Pending,
    InvoiceStatus::Pending,
    InvoiceStatus::Sent,
    InvoiceStatus::Paid,
    InvoiceStatus::Paid,
    InvoiceStatus::Overdue,
    InvoiceStatus::Cancelled,
    InvoiceStatus::Disputed,
];

/// Seeded mock source producing a fixed-size invoice collection.
#[derive(Debug, Clone)]
pub struct MockSource {
    seed: u64,
    count: usize,
}

impl MockSource {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }

    /// Generate the collection. Deterministic for a given seed, count, and
    /// `now` (due dates are offsets from `now`).
    pub fn generate(&self, now: DateTime<Utc>) -> Vec<Invoice> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| {
                let name = CUSTOMER_NAMES[rng.random_range(0..CUSTOMER_NAMES.len())];
                let status = STATUS_POOL[rng.random_range(0..STATUS_POOL.len())];
                // Between 60 days overdue and 90 days out.
                let due_offset_days = rng.random_range(-60i64..90);
                // A few malformed records, to exercise the N/A paths.
                let customer = if i % 17 == 9 {
                    None
                } else {
                    Some(Customer {
                        name: Some(name.to_string()),
                        company: None,
                    })
                };
                let due_date = if i % 23 == 11 {
                    None
                } else {
                    Some((now + Duration::days(due_offset_days)).date_naive())
                };
                Invoice {
                    // Generated ids are sequential, so they are unique.
                    id: InvoiceId::new(format!("INV-{:04}", i + 1))
                        .unwrap_or_else(|_| unreachable!("generated id is non-empty")),
                    customer,
                    amount: Amount::from_cents(rng.random_range(5_00..2_000_000)),
                    due_date,
                    status,
                    comments: Vec::new(),
                    last_updated: now - Duration::minutes(rng.random_range(0..10_000)),
                }
            })
            .collect()
    }
}

// ===== Tests =====
