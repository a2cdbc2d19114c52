//! Unique indexes
//!
//! Uniqueness lives here, at the store layer, rather than in application
//! checks alone: `claim` is atomic per key, so two concurrent inserts with
//! the same key cannot both succeed even though both may have passed the
//! application-level existence check first.

use crate::error::{Result, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;
use types::DocumentId;

#[derive(Debug)]
pub struct UniqueIndex<K: Eq + Hash> {
    collection: &'static str,
    name: &'static str,
    keys: DashMap<K, DocumentId>,
}

impl<K: Eq + Hash> UniqueIndex<K> {
    pub fn new(collection: &'static str, name: &'static str) -> Self {
        Self {
            collection,
            name,
            keys: DashMap::new(),
        }
    }

    /// Claim `key` for `id`. Fails with `DuplicateKey` if another document
    /// already holds it; re-claiming a key the same document holds is a no-op.
    pub fn claim(&self, key: K, id: DocumentId) -> Result<()> {
        match self.keys.entry(key) {
            Entry::Occupied(existing) if *existing.get() != id => Err(StoreError::DuplicateKey {
                collection: self.collection,
                index: self.name,
            }),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }

    pub fn release(&self, key: &K) {
        self.keys.remove(key);
    }

    pub fn get(&self, key: &K) -> Option<DocumentId> {
        self.keys.get(key).map(|id| *id.value())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains_key(key)
    }
}
