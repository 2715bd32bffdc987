//! Sort stage of the listing pipeline.
//!
//! One ascending comparator per key; descending output is produced by
//! reversing the ascending order, so the two directions can never drift
//! apart on tie-break order. The underlying `sort_by` is stable, so equal
//! keys preserve relative input order in the ascending direction.

use crate::model::Invoice;
use std::cmp::Ordering;
use thiserror::Error;
use unicase::UniCase;

// ===== SortKey =====

/// Sortable field. Parsed from dotted field names as they appear in query
/// parameters (e.g. `customer.name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Id,
    CustomerName,
    Amount,
    #[default]
    DueDate,
    Status,
    LastUpdated,
}

/// Error returned when parsing an unknown sort field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort field '{0}'")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    /// Parse from a dotted field name.
    pub fn parse(raw: &str) -> Result<Self, UnknownSortKey> {
        match raw {
            "id" => Ok(Self::Id),
            "customer.name" | "customer" => Ok(Self::CustomerName),
            "amount" => Ok(Self::Amount),
            "due_date" => Ok(Self::DueDate),
            "status" => Ok(Self::Status),
            "last_updated" => Ok(Self::LastUpdated),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CustomerName => "customer.name",
            Self::Amount => "amount",
            Self::DueDate => "due_date",
            Self::Status => "status",
            Self::LastUpdated => "last_updated",
        }
    }
}

// ===== SortDirection =====

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

// ===== SortSpec =====

/// A sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

// ===== Comparator =====

/// Case-folded string comparison with a raw-bytes tie-break so the order
/// stays total ("acme" vs "Acme" always orders the same way).
fn compare_names(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| a.cmp(b))
}

/// The single ascending comparator for a key. Records missing the keyed
/// field (no due date) order before records that have it.
fn compare_ascending(key: SortKey, a: &Invoice, b: &Invoice) -> Ordering {
    match key {
        SortKey::Id => compare_names(a.id.as_str(), b.id.as_str()),
        SortKey::CustomerName => compare_names(a.customer_name(), b.customer_name()),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::DueDate => a.due_date.cmp(&b.due_date),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
    }
}

// ===== Sort stage =====

/// Order the filtered set by the given spec.
///
/// Ascending uses a stable sort, so ties keep input order. Descending is
/// the ascending order reversed element for element, ties included.
pub fn apply<'a>(mut records: Vec<&'a Invoice>, spec: SortSpec) -> Vec<&'a Invoice> {
    records.sort_by(|a, b| compare_ascending(spec.key, a, b));
    if spec.direction == SortDirection::Descending {
        records.reverse();
    }
    records
}

// ===== Tests =====

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
