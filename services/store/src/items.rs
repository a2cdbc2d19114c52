//! Item collection
//!
//! Items are append-mostly trade records. The only unique key is the item
//! id within a marketplace; buyer/owner lookups are plain scans, and the
//! only mutation is the explicit denormalized-name propagation.

use crate::collection::Collection;
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, Item};

#[derive(Debug)]
pub struct ItemStore {
    docs: Collection<Item>,
    key_idx: UniqueIndex<(Address, u64)>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("items"),
            key_idx: UniqueIndex::new("items", "itemId"),
        }
    }

    pub fn insert(&self, item: Item) -> Result<Item> {
        let key = (item.market_place_address.clone(), item.item_id);
        self.key_idx.claim(key, item.id)?;
        self.docs.insert(item.id, item.clone());
        Ok(item)
    }

    pub fn get(&self, addr: &Address, item_id: u64) -> Option<Item> {
        let id = self.key_idx.get(&(addr.clone(), item_id))?;
        self.docs.get(&id)
    }

    pub fn for_market(&self, addr: &Address) -> Vec<Item> {
        self.docs.find(|i| i.market_place_address == *addr)
    }

    pub fn for_product(&self, addr: &Address, product_id: u64) -> Vec<Item> {
        self.docs
            .find(|i| i.market_place_address == *addr && i.product_id == product_id)
    }

    pub fn bought_by(&self, addr: &Address, buyer: &Address) -> Vec<Item> {
        self.docs
            .find(|i| i.market_place_address == *addr && i.buyer == *buyer)
    }

    pub fn owned_by(&self, addr: &Address, owner: &Address) -> Vec<Item> {
        self.docs
            .find(|i| i.market_place_address == *addr && i.owner == *owner)
    }

    pub fn bought_by_wallet(&self, buyer: &Address) -> Vec<Item> {
        self.docs.find(|i| i.buyer == *buyer)
    }

    pub fn owned_by_wallet(&self, owner: &Address) -> Vec<Item> {
        self.docs.find(|i| i.owner == *owner)
    }

    /// Does `wallet` appear as buyer or owner of any item in the market?
    /// This is the review-authorization source of truth.
    pub fn participant_exists(&self, addr: &Address, wallet: &Address) -> bool {
        self.docs
            .find_one(|i| {
                i.market_place_address == *addr && (i.buyer == *wallet || i.owner == *wallet)
            })
            .is_some()
    }

    /// Same check, narrowed to one product.
    pub fn product_participant_exists(
        &self,
        addr: &Address,
        product_id: u64,
        wallet: &Address,
    ) -> bool {
        self.docs
            .find_one(|i| {
                i.market_place_address == *addr
                    && i.product_id == product_id
                    && (i.buyer == *wallet || i.owner == *wallet)
            })
            .is_some()
    }

    /// Copy a market rename onto every item of the address. Returns the
    /// matched count.
    pub fn set_market_name(&self, addr: &Address, name: &str) -> u64 {
        self.docs.update_many(
            |i| i.market_place_address == *addr,
            |i| i.market_name = name.to_string(),
        )
    }

    /// Copy a product rename onto every matching item.
    pub fn set_product_name(&self, addr: &Address, product_id: u64, name: &str) -> u64 {
        self.docs.update_many(
            |i| i.market_place_address == *addr && i.product_id == product_id,
            |i| i.product_name = name.to_string(),
        )
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{addr, sample_item};
    use crate::StoreError;

    #[test]
    fn test_item_id_unique_per_market() {
        let store = ItemStore::new();
        store
            .insert(sample_item(addr('a'), 1, 1, addr('x'), addr('y')))
            .unwrap();

        assert!(matches!(
            store.insert(sample_item(addr('a'), 2, 1, addr('x'), addr('y'))),
            Err(StoreError::DuplicateKey { index: "itemId", .. })
        ));

        // Same item id under another marketplace is a different trade.
        store
            .insert(sample_item(addr('b'), 2, 1, addr('x'), addr('y')))
            .unwrap();
    }

    #[test]
    fn test_participant_checks() {
        let store = ItemStore::new();
        store
            .insert(sample_item(addr('a'), 1, 1, addr('x'), addr('y')))
            .unwrap();

        assert!(store.participant_exists(&addr('a'), &addr('x')));
        assert!(store.participant_exists(&addr('a'), &addr('y')));
        assert!(!store.participant_exists(&addr('a'), &addr('z')));
        assert!(!store.participant_exists(&addr('b'), &addr('x')));

        assert!(store.product_participant_exists(&addr('a'), 1, &addr('x')));
        assert!(!store.product_participant_exists(&addr('a'), 2, &addr('x')));
    }

    #[test]
    fn test_rename_propagation_scope() {
        let store = ItemStore::new();
        store
            .insert(sample_item(addr('a'), 1, 1, addr('x'), addr('y')))
            .unwrap();
        store
            .insert(sample_item(addr('a'), 2, 2, addr('x'), addr('y')))
            .unwrap();
        store
            .insert(sample_item(addr('b'), 1, 1, addr('x'), addr('y')))
            .unwrap();

        assert_eq!(store.set_market_name(&addr('a'), "Renamed"), 2);
        assert!(store
            .for_market(&addr('a'))
            .iter()
            .all(|i| i.market_name == "Renamed"));
        assert!(store
            .for_market(&addr('b'))
            .iter()
            .all(|i| i.market_name != "Renamed"));

        assert_eq!(store.set_product_name(&addr('a'), 2, "NewName"), 1);
        assert_eq!(
            store.get(&addr('a'), 1).unwrap().product_name,
            store.get(&addr('b'), 1).unwrap().product_name,
            "unmatched items keep the old product name"
        );
    }
}
