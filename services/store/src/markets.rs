//! Market collection
//!
//! Four unique indexes guard market creation: address, owner, name, and
//! numeric market id. All four are claimed before the document is written;
//! a conflict on any key releases the keys claimed so far and nothing is
//! inserted.

use crate::collection::{Collection, SortOrder};
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, Market};

#[derive(Debug)]
pub struct MarketStore {
    docs: Collection<Market>,
    addr_idx: UniqueIndex<Address>,
    owner_idx: UniqueIndex<Address>,
    name_idx: UniqueIndex<String>,
    market_id_idx: UniqueIndex<u64>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("markets"),
            addr_idx: UniqueIndex::new("markets", "marketPlaceAddress"),
            owner_idx: UniqueIndex::new("markets", "marketOwner"),
            name_idx: UniqueIndex::new("markets", "name"),
            market_id_idx: UniqueIndex::new("markets", "marketId"),
        }
    }

    pub fn insert(&self, market: Market) -> Result<Market> {
        let id = market.id;

        self.addr_idx
            .claim(market.market_place_address.clone(), id)?;
        if let Err(err) = self.owner_idx.claim(market.market_owner.clone(), id) {
            self.addr_idx.release(&market.market_place_address);
            return Err(err);
        }
        if let Err(err) = self.name_idx.claim(market.name.clone(), id) {
            self.addr_idx.release(&market.market_place_address);
            self.owner_idx.release(&market.market_owner);
            return Err(err);
        }
        if let Err(err) = self.market_id_idx.claim(market.market_id, id) {
            self.addr_idx.release(&market.market_place_address);
            self.owner_idx.release(&market.market_owner);
            self.name_idx.release(&market.name);
            return Err(err);
        }

        self.docs.insert(id, market.clone());
        Ok(market)
    }

    pub fn by_address(&self, addr: &Address) -> Option<Market> {
        let id = self.addr_idx.get(addr)?;
        self.docs.get(&id)
    }

    pub fn by_owner(&self, owner: &Address) -> Option<Market> {
        let id = self.owner_idx.get(owner)?;
        self.docs.get(&id)
    }

    pub fn by_name(&self, name: &str) -> Option<Market> {
        let id = self.name_idx.get(&name.to_string())?;
        self.docs.get(&id)
    }

    pub fn by_market_id(&self, market_id: u64) -> Option<Market> {
        let id = self.market_id_idx.get(&market_id)?;
        self.docs.get(&id)
    }

    pub fn all(&self) -> Vec<Market> {
        self.docs.find(|_| true)
    }

    pub fn all_sorted_by_name(&self, order: SortOrder) -> Vec<Market> {
        self.docs
            .find_sorted(|_| true, |a, b| a.name.cmp(&b.name), order)
    }

    pub fn all_sorted_by_rating(&self, order: SortOrder) -> Vec<Market> {
        self.docs.find_sorted(
            |_| true,
            |a, b| a.market_rating.total_cmp(&b.market_rating),
            order,
        )
    }

    pub fn all_sorted_by_volume(&self, order: SortOrder) -> Vec<Market> {
        self.docs.find_sorted(
            |_| true,
            |a, b| a.total_traded_in_usd.cmp(&b.total_traded_in_usd),
            order,
        )
    }

    /// Field-set update of the market at `addr`. A name or owner change
    /// moves the corresponding unique index: the new key is claimed before
    /// the write, the old one released after, so the update applies fully
    /// or not at all.
    pub fn update(
        &self,
        addr: &Address,
        apply: impl FnOnce(&mut Market),
    ) -> Result<Option<Market>> {
        let Some(current) = self.by_address(addr) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        apply(&mut updated);

        let name_changed = updated.name != current.name;
        let owner_changed = updated.market_owner != current.market_owner;

        if name_changed {
            self.name_idx.claim(updated.name.clone(), updated.id)?;
        }
        if owner_changed {
            if let Err(err) = self.owner_idx.claim(updated.market_owner.clone(), updated.id) {
                if name_changed {
                    self.name_idx.release(&updated.name);
                }
                return Err(err);
            }
        }

        self.docs.replace(updated.id, updated.clone());

        if name_changed {
            self.name_idx.release(&current.name);
        }
        if owner_changed {
            self.owner_idx.release(&current.market_owner);
        }

        Ok(Some(updated))
    }

    pub fn delete(&self, addr: &Address) -> Option<Market> {
        let id = self.addr_idx.get(addr)?;
        let market = self.docs.remove(&id)?;

        self.addr_idx.release(&market.market_place_address);
        self.owner_idx.release(&market.market_owner);
        self.name_idx.release(&market.name);
        self.market_id_idx.release(&market.market_id);

        Some(market)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{addr, sample_market};
    use crate::StoreError;

    #[test]
    fn test_insert_rejects_each_duplicate_key() {
        let store = MarketStore::new();
        store.insert(sample_market('a', "Shop1", 1)).unwrap();

        // Same owner, everything else fresh.
        let mut dup_owner = sample_market('b', "Shop2", 2);
        dup_owner.market_owner = addr('a');
        assert!(matches!(
            store.insert(dup_owner),
            Err(StoreError::DuplicateKey { index: "marketOwner", .. })
        ));

        // Same name.
        assert!(matches!(
            store.insert(sample_market('c', "Shop1", 3)),
            Err(StoreError::DuplicateKey { index: "name", .. })
        ));

        // Same address.
        let mut dup_addr = sample_market('d', "Shop4", 4);
        dup_addr.market_place_address = store.all()[0].market_place_address.clone();
        assert!(matches!(
            store.insert(dup_addr),
            Err(StoreError::DuplicateKey { index: "marketPlaceAddress", .. })
        ));

        // Same numeric id.
        assert!(matches!(
            store.insert(sample_market('e', "Shop5", 1)),
            Err(StoreError::DuplicateKey { index: "marketId", .. })
        ));

        // A failed insert must not leave stray index claims behind.
        assert_eq!(store.len(), 1);
        store.insert(sample_market('f', "Shop6", 6)).unwrap();
    }

    #[test]
    fn test_update_moves_name_index() {
        let store = MarketStore::new();
        let market = store.insert(sample_market('a', "Shop1", 1)).unwrap();
        store.insert(sample_market('b', "Shop2", 2)).unwrap();

        // Renaming onto a taken name is refused without applying anything.
        let taken = store.update(&market.market_place_address, |m| {
            m.name = "Shop2".to_string();
        });
        assert!(taken.is_err());
        assert_eq!(
            store.by_address(&market.market_place_address).unwrap().name,
            "Shop1"
        );

        // Renaming onto a free name releases the old key.
        store
            .update(&market.market_place_address, |m| {
                m.name = "Shop9".to_string();
            })
            .unwrap();
        assert!(store.by_name("Shop1").is_none());
        assert!(store.by_name("Shop9").is_some());
    }

    #[test]
    fn test_sorted_by_rating_descending() {
        let store = MarketStore::new();
        for (tag, name, id, rating) in
            [('a', "Low", 1, 2.0), ('b', "High", 2, 9.5), ('c', "Mid", 3, 5.0)]
        {
            let mut market = sample_market(tag, name, id);
            market.market_rating = rating;
            store.insert(market).unwrap();
        }

        let sorted = store.all_sorted_by_rating(SortOrder::Descending);
        let names: Vec<&str> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_delete_releases_all_keys() {
        let store = MarketStore::new();
        let market = store.insert(sample_market('a', "Shop1", 1)).unwrap();

        store.delete(&market.market_place_address).unwrap();
        assert_eq!(store.len(), 0);

        // All four keys are free again.
        store.insert(sample_market('a', "Shop1", 1)).unwrap();
    }
}
