//! Product review collection
//!
//! One review per (marketplace, product, wallet).

use crate::collection::Collection;
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, ProductReview};

#[derive(Debug)]
pub struct ProductReviewStore {
    docs: Collection<ProductReview>,
    key_idx: UniqueIndex<(Address, u64, Address)>,
}

impl ProductReviewStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("productReviews"),
            key_idx: UniqueIndex::new("productReviews", "userWallet"),
        }
    }

    pub fn insert(&self, review: ProductReview) -> Result<ProductReview> {
        let key = (
            review.market_place_address.clone(),
            review.product_id,
            review.user_wallet.clone(),
        );
        self.key_idx.claim(key, review.id)?;
        self.docs.insert(review.id, review.clone());
        Ok(review)
    }

    pub fn get(&self, addr: &Address, product_id: u64, wallet: &Address) -> Option<ProductReview> {
        let id = self
            .key_idx
            .get(&(addr.clone(), product_id, wallet.clone()))?;
        self.docs.get(&id)
    }

    pub fn for_product(&self, addr: &Address, product_id: u64) -> Vec<ProductReview> {
        self.docs
            .find(|r| r.market_place_address == *addr && r.product_id == product_id)
    }

    /// Replace the stars/text of an existing review.
    pub fn update(
        &self,
        addr: &Address,
        product_id: u64,
        wallet: &Address,
        apply: impl FnOnce(&mut ProductReview),
    ) -> Option<ProductReview> {
        let id = self
            .key_idx
            .get(&(addr.clone(), product_id, wallet.clone()))?;
        self.docs.update_one(&id, apply)
    }

    pub fn delete(
        &self,
        addr: &Address,
        product_id: u64,
        wallet: &Address,
    ) -> Option<ProductReview> {
        let key = (addr.clone(), product_id, wallet.clone());
        let id = self.key_idx.get(&key)?;
        let review = self.docs.remove(&id)?;
        self.key_idx.release(&key);
        Some(review)
    }

    /// Remove every review under one product, returning the deleted count.
    pub fn delete_for_product(&self, addr: &Address, product_id: u64) -> u64 {
        let removed = self
            .docs
            .delete_many(|r| r.market_place_address == *addr && r.product_id == product_id);
        for review in &removed {
            self.release_key(review);
        }
        removed.len() as u64
    }

    /// Remove every product review under a marketplace, returning the count.
    pub fn delete_for_market(&self, addr: &Address) -> u64 {
        let removed = self.docs.delete_many(|r| r.market_place_address == *addr);
        for review in &removed {
            self.release_key(review);
        }
        removed.len() as u64
    }

    fn release_key(&self, review: &ProductReview) {
        self.key_idx.release(&(
            review.market_place_address.clone(),
            review.product_id,
            review.user_wallet.clone(),
        ));
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for ProductReviewStore {
    fn default() -> Self {
        Self::new()
    }
}
