//! Market review collection
//!
//! One review per (marketplace, wallet).

use crate::collection::Collection;
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, MarketReview};

#[derive(Debug)]
pub struct MarketReviewStore {
    docs: Collection<MarketReview>,
    key_idx: UniqueIndex<(Address, Address)>,
}

impl MarketReviewStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("marketReviews"),
            key_idx: UniqueIndex::new("marketReviews", "userWallet"),
        }
    }

    pub fn insert(&self, review: MarketReview) -> Result<MarketReview> {
        let key = (
            review.market_place_address.clone(),
            review.user_wallet.clone(),
        );
        self.key_idx.claim(key, review.id)?;
        self.docs.insert(review.id, review.clone());
        Ok(review)
    }

    pub fn get(&self, addr: &Address, wallet: &Address) -> Option<MarketReview> {
        let id = self.key_idx.get(&(addr.clone(), wallet.clone()))?;
        self.docs.get(&id)
    }

    pub fn for_market(&self, addr: &Address) -> Vec<MarketReview> {
        self.docs.find(|r| r.market_place_address == *addr)
    }

    /// Replace the stars/text of an existing review.
    pub fn update(
        &self,
        addr: &Address,
        wallet: &Address,
        apply: impl FnOnce(&mut MarketReview),
    ) -> Option<MarketReview> {
        let id = self.key_idx.get(&(addr.clone(), wallet.clone()))?;
        self.docs.update_one(&id, apply)
    }

    pub fn delete(&self, addr: &Address, wallet: &Address) -> Option<MarketReview> {
        let key = (addr.clone(), wallet.clone());
        let id = self.key_idx.get(&key)?;
        let review = self.docs.remove(&id)?;
        self.key_idx.release(&key);
        Some(review)
    }

    /// Remove every review of a marketplace, returning the deleted count.
    pub fn delete_for_market(&self, addr: &Address) -> u64 {
        let removed = self.docs.delete_many(|r| r.market_place_address == *addr);
        for review in &removed {
            self.key_idx.release(&(
                review.market_place_address.clone(),
                review.user_wallet.clone(),
            ));
        }
        removed.len() as u64
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for MarketReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{addr, sample_market_review};
    use crate::StoreError;

    #[test]
    fn test_one_review_per_wallet_per_market() {
        let store = MarketReviewStore::new();
        store
            .insert(sample_market_review(addr('a'), addr('x'), 8))
            .unwrap();

        assert!(matches!(
            store.insert(sample_market_review(addr('a'), addr('x'), 3)),
            Err(StoreError::DuplicateKey { .. })
        ));

        // Same wallet, different market is fine.
        store
            .insert(sample_market_review(addr('b'), addr('x'), 3))
            .unwrap();
    }

    #[test]
    fn test_update_and_delete() {
        let store = MarketReviewStore::new();
        store
            .insert(sample_market_review(addr('a'), addr('x'), 8))
            .unwrap();

        let updated = store
            .update(&addr('a'), &addr('x'), |r| r.stars = 2)
            .unwrap();
        assert_eq!(updated.stars, 2);

        store.delete(&addr('a'), &addr('x')).unwrap();
        assert!(store.get(&addr('a'), &addr('x')).is_none());

        // Key is free again.
        store
            .insert(sample_market_review(addr('a'), addr('x'), 5))
            .unwrap();
    }

    #[test]
    fn test_delete_for_market_count() {
        let store = MarketReviewStore::new();
        store
            .insert(sample_market_review(addr('a'), addr('x'), 8))
            .unwrap();
        store
            .insert(sample_market_review(addr('a'), addr('y'), 6))
            .unwrap();
        store
            .insert(sample_market_review(addr('b'), addr('x'), 4))
            .unwrap();

        assert_eq!(store.delete_for_market(&addr('a')), 2);
        assert_eq!(store.delete_for_market(&addr('a')), 0);
        assert_eq!(store.len(), 1);
    }
}
