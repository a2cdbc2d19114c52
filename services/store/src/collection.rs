//! Generic document collection
//!
//! The document-store verbs every entity store is built from: find-one,
//! find-many (optionally sorted by one field, ascending or descending),
//! insert, update-one/update-many, delete-one/delete-many with counts.
//! Backed by a concurrent map keyed by `DocumentId`; per-document operations
//! are atomic, nothing spans documents.

use dashmap::DashMap;
use std::cmp::Ordering;
use types::DocumentId;

/// Sort direction for `find_sorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    docs: DashMap<DocumentId, T>,
}

impl<T: Clone> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: DashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn insert(&self, id: DocumentId, doc: T) {
        self.docs.insert(id, doc);
    }

    /// Overwrite the document stored under `id`.
    pub fn replace(&self, id: DocumentId, doc: T) {
        self.docs.insert(id, doc);
    }

    pub fn get(&self, id: &DocumentId) -> Option<T> {
        self.docs.get(id).map(|d| d.value().clone())
    }

    pub fn find_one(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.docs
            .iter()
            .find(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.docs
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Find matching documents sorted by a single field.
    ///
    /// `compare` orders two documents by that field ascending; `order`
    /// selects the direction.
    pub fn find_sorted(
        &self,
        pred: impl Fn(&T) -> bool,
        compare: impl Fn(&T, &T) -> Ordering,
        order: SortOrder,
    ) -> Vec<T> {
        let mut out = self.find(pred);
        out.sort_by(|a, b| match order {
            SortOrder::Ascending => compare(a, b),
            SortOrder::Descending => compare(b, a),
        });
        out
    }

    /// Apply a field-set mutation to one document, returning the updated copy.
    pub fn update_one(&self, id: &DocumentId, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut entry = self.docs.get_mut(id)?;
        apply(entry.value_mut());
        Some(entry.value().clone())
    }

    /// Apply a field-set mutation to every matching document, returning the
    /// matched count.
    pub fn update_many(&self, pred: impl Fn(&T) -> bool, apply: impl Fn(&mut T)) -> u64 {
        let mut updated = 0;
        for mut entry in self.docs.iter_mut() {
            if pred(entry.value()) {
                apply(entry.value_mut());
                updated += 1;
            }
        }
        updated
    }

    pub fn remove(&self, id: &DocumentId) -> Option<T> {
        self.docs.remove(id).map(|(_, doc)| doc)
    }

    /// Delete every matching document, returning the removed documents so the
    /// caller can release any index keys they held. Deleting from an empty
    /// match set succeeds vacuously with an empty result.
    pub fn delete_many(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let ids: Vec<DocumentId> = self
            .docs
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| *entry.key())
            .collect();

        ids.iter()
            .filter_map(|id| self.docs.remove(id))
            .map(|(_, doc)| doc)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
