//! In-memory invoice collection.
//!
//! The store owns the authoritative local copy of the record set. Records
//! are never edited in place: mutations build a replacement record via the
//! copy-on-write helpers on `Invoice` and swap it into the collection.
//! Records are only ever removed by explicit bulk delete; filtering merely
//! hides them.

use crate::model::{Comment, Invoice, InvoiceId, InvoiceStatus, StoreError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Owned collection of invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    records: Vec<Invoice>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a freshly fetched authoritative
    /// set. This is also the rollback path for failed optimistic updates.
    pub fn replace_all(&mut self, records: Vec<Invoice>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Invoice] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.records.iter().find(|inv| &inv.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &InvoiceId> {
        self.records.iter().map(|inv| &inv.id)
    }

    /// Replace the record's status, stamping `last_updated = now`.
    pub fn update_status(
        &mut self,
        id: &InvoiceId,
        status: InvoiceStatus,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let slot = self.slot_mut(id)?;
        *slot = slot.with_status(status, now);
        Ok(())
    }

    /// Append a comment to the record, stamping `last_updated = now`.
    pub fn add_comment(
        &mut self,
        id: &InvoiceId,
        author: impl Into<String>,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let comment = Comment {
            author: author.into(),
            text: text.into(),
            timestamp: now,
        };
        let slot = self.slot_mut(id)?;
        *slot = slot.with_comment(comment, now);
        Ok(())
    }

    /// Bulk delete. Returns how many records were removed; the caller is
    /// responsible for pruning its selection afterwards.
    pub fn remove_many<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a InvoiceId>,
    {
        let doomed: HashSet<&InvoiceId> = ids.into_iter().collect();
        let before = self.records.len();
        self.records.retain(|inv| !doomed.contains(&inv.id));
        before - self.records.len()
    }

    fn slot_mut(&mut self, id: &InvoiceId) -> Result<&mut Invoice, StoreError> {
        self.records
            .iter_mut()
            .find(|inv| &inv.id == id)
            .ok_or_else(|| StoreError::UnknownInvoice {
                id: id.as_str().to_string(),
            })
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Customer};
    use chrono::TimeZone;

    fn make_invoice(id: &str) -> Invoice {
        Invoice {
            id: InvoiceId::new(id).expect("valid id"),
            customer: Some(Customer {
                name: Some("Acme".to_string()),
                company: None,
            }),
            amount: Amount::from_cents(1_000),
            due_date: None,
            status: InvoiceStatus::Pending,
            comments: Vec::new(),
            last_updated: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn store_with(ids: &[&str]) -> InvoiceStore {
        let mut store = InvoiceStore::new();
        store.replace_all(ids.iter().map(|id| make_invoice(id)).collect());
        store
    }

    #[test]
    fn update_status_replaces_record_and_stamps_time() {
        let mut store = store_with(&["a", "b"]);
        let now = Utc.with_ymd_and_hms(2026, 2, 2, 8, 0, 0).unwrap();
        let id = InvoiceId::new("b").unwrap();

        store.update_status(&id, InvoiceStatus::Paid, now).expect("update");

        let rec = store.get(&id).expect("record exists");
        assert_eq!(rec.status, InvoiceStatus::Paid);
        assert_eq!(rec.last_updated, now);
        // Sibling untouched.
        let other = store.get(&InvoiceId::new("a").unwrap()).unwrap();
        assert_eq!(other.status, InvoiceStatus::Pending);
    }

    #[test]
    fn update_status_unknown_id_errors() {
        let mut store = store_with(&["a"]);
        let now = Utc::now();
        let err = store
            .update_status(&InvoiceId::new("ghost").unwrap(), InvoiceStatus::Paid, now)
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownInvoice {
                id: "ghost".to_string()
            }
        );
    }

    #[test]
    fn add_comment_appends_entry() {
        let mut store = store_with(&["a"]);
        let now = Utc.with_ymd_and_hms(2026, 2, 3, 9, 0, 0).unwrap();
        let id = InvoiceId::new("a").unwrap();

        store
            .add_comment(&id, "dana", "second reminder sent", now)
            .expect("comment");

        let rec = store.get(&id).unwrap();
        assert_eq!(rec.comments.len(), 1);
        assert_eq!(rec.comments[0].author, "dana");
        assert_eq!(rec.last_updated, now);
    }

    #[test]
    fn remove_many_deletes_and_reports_count() {
        let mut store = store_with(&["a", "b", "c"]);
        let doomed = [InvoiceId::new("a").unwrap(), InvoiceId::new("c").unwrap()];
        let removed = store.remove_many(doomed.iter());
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert!(store.get(&InvoiceId::new("b").unwrap()).is_some());
    }

    #[test]
    fn replace_all_swaps_collection() {
        let mut store = store_with(&["a", "b"]);
        store.replace_all(vec![make_invoice("z")]);
        assert_eq!(store.len(), 1);
        assert!(store.get(&InvoiceId::new("z").unwrap()).is_some());
    }
}
