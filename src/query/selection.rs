//! Row-selection tracker.
//!
//! Membership is a set of invoice ids, mutated independently of the
//! filter/sort/page stages: changing the query never touches the
//! selection. Only an explicit clear, a replacing select-all, or deletion
//! of the underlying record removes membership.

use crate::model::InvoiceId;
use std::collections::HashSet;

/// Set of selected invoice ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<InvoiceId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for one id.
    pub fn toggle(&mut self, id: InvoiceId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Replace membership with exactly the given ids.
    ///
    /// Select-all operates on the entire filtered set, not the visible
    /// page; see DESIGN.md for the rationale.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = InvoiceId>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop ids whose records were deleted from the collection.
    pub fn retain_known<'a, I>(&mut self, known: I)
    where
        I: IntoIterator<Item = &'a InvoiceId>,
    {
        let known: HashSet<&InvoiceId> = known.into_iter().collect();
        self.selected.retain(|id| known.contains(id));
    }

    pub fn contains(&self, id: &InvoiceId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvoiceId> {
        self.selected.iter()
    }
}

// ===== Tests =====
