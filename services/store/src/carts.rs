//! Cart collection
//!
//! One entry per (marketplace, product, wallet). Entries hold a snapshot of
//! the product taken at add time; the refresh operations below are the only
//! way the snapshot catches up with the live product.

use crate::collection::{Collection, SortOrder};
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, CartEntry};

#[derive(Debug)]
pub struct CartStore {
    docs: Collection<CartEntry>,
    key_idx: UniqueIndex<(Address, u64, Address)>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("cartEntries"),
            key_idx: UniqueIndex::new("cartEntries", "userWallet"),
        }
    }

    pub fn insert(&self, entry: CartEntry) -> Result<CartEntry> {
        let key = (
            entry.market_place_address.clone(),
            entry.product_id,
            entry.user_wallet.clone(),
        );
        self.key_idx.claim(key, entry.id)?;
        self.docs.insert(entry.id, entry.clone());
        Ok(entry)
    }

    pub fn get(&self, addr: &Address, product_id: u64, wallet: &Address) -> Option<CartEntry> {
        let id = self
            .key_idx
            .get(&(addr.clone(), product_id, wallet.clone()))?;
        self.docs.get(&id)
    }

    pub fn for_wallet(&self, wallet: &Address) -> Vec<CartEntry> {
        self.docs.find(|c| c.user_wallet == *wallet)
    }

    pub fn for_market_wallet(&self, addr: &Address, wallet: &Address) -> Vec<CartEntry> {
        self.docs
            .find(|c| c.market_place_address == *addr && c.user_wallet == *wallet)
    }

    pub fn for_wallet_sorted_by_price(&self, wallet: &Address, order: SortOrder) -> Vec<CartEntry> {
        self.docs.find_sorted(
            |c| c.user_wallet == *wallet,
            |a, b| a.price.cmp(&b.price),
            order,
        )
    }

    pub fn for_wallet_sorted_by_market_name(
        &self,
        wallet: &Address,
        order: SortOrder,
    ) -> Vec<CartEntry> {
        self.docs.find_sorted(
            |c| c.user_wallet == *wallet,
            |a, b| a.market_name.cmp(&b.market_name),
            order,
        )
    }

    /// Copy a market rename onto every entry of the address. Returns the
    /// matched count.
    pub fn set_market_name(&self, addr: &Address, name: &str) -> u64 {
        self.docs.update_many(
            |c| c.market_place_address == *addr,
            |c| c.market_name = name.to_string(),
        )
    }

    /// Re-snapshot the live product state onto matching entries.
    pub fn refresh_product_snapshot(
        &self,
        addr: &Address,
        product_id: u64,
        name: &str,
        image_uri: &str,
        price: u64,
    ) -> u64 {
        self.docs.update_many(
            |c| c.market_place_address == *addr && c.product_id == product_id,
            |c| {
                c.product_name = name.to_string();
                c.image_uri = image_uri.to_string();
                c.price = price;
            },
        )
    }

    pub fn delete(&self, addr: &Address, product_id: u64, wallet: &Address) -> Option<CartEntry> {
        let key = (addr.clone(), product_id, wallet.clone());
        let id = self.key_idx.get(&key)?;
        let entry = self.docs.remove(&id)?;
        self.key_idx.release(&key);
        Some(entry)
    }

    /// Remove every entry of a marketplace, returning the deleted count.
    pub fn delete_for_market(&self, addr: &Address) -> u64 {
        let removed = self.docs.delete_many(|c| c.market_place_address == *addr);
        for entry in &removed {
            self.release_key(entry);
        }
        removed.len() as u64
    }

    /// Empty a wallet's cart, returning the deleted count.
    pub fn delete_for_wallet(&self, wallet: &Address) -> u64 {
        let removed = self.docs.delete_many(|c| c.user_wallet == *wallet);
        for entry in &removed {
            self.release_key(entry);
        }
        removed.len() as u64
    }

    fn release_key(&self, entry: &CartEntry) {
        self.key_idx.release(&(
            entry.market_place_address.clone(),
            entry.product_id,
            entry.user_wallet.clone(),
        ));
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
