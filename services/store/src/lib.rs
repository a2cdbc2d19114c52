//! Document store for the marketplace directory
//!
//! One concurrent collection per entity, with uniqueness enforced at the
//! index layer so a check-then-insert race cannot create duplicates. The
//! aggregate [`DirectoryStore`] is an explicitly constructed handle that
//! callers inject into request handlers; there is no process-wide state.

pub mod carts;
pub mod collection;
pub mod error;
pub mod index;
pub mod items;
pub mod market_reviews;
pub mod markets;
pub mod product_reviews;
pub mod products;
pub mod reports;

pub use collection::SortOrder;
pub use error::{Result, StoreError};

use carts::CartStore;
use items::ItemStore;
use market_reviews::MarketReviewStore;
use markets::MarketStore;
use product_reviews::ProductReviewStore;
use products::ProductStore;
use reports::ReportStore;
use std::sync::Arc;

/// Thread-safe store bundling every collection of the directory.
#[derive(Debug)]
pub struct DirectoryStore {
    pub markets: Arc<MarketStore>,
    pub products: Arc<ProductStore>,
    pub items: Arc<ItemStore>,
    pub market_reviews: Arc<MarketReviewStore>,
    pub product_reviews: Arc<ProductReviewStore>,
    pub carts: Arc<CartStore>,
    pub reports: Arc<ReportStore>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            markets: Arc::new(MarketStore::new()),
            products: Arc::new(ProductStore::new()),
            items: Arc::new(ItemStore::new()),
            market_reviews: Arc::new(MarketReviewStore::new()),
            product_reviews: Arc::new(ProductReviewStore::new()),
            carts: Arc::new(CartStore::new()),
            reports: Arc::new(ReportStore::new()),
        }
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::Utc;
    use types::{Address, CartEntry, DocumentId, Item, Market, MarketReview, Product, ProductReview, Report};

    /// 42-character address built from one repeated tag character.
    pub fn addr(tag: char) -> Address {
        let mut s = String::from("0x");
        while s.len() < Address::LEN {
            s.push(tag);
        }
        Address::new(s)
    }

    pub fn sample_market(owner_tag: char, name: &str, market_id: u64) -> Market {
        Market {
            id: DocumentId::new(),
            name: name.to_string(),
            description: "a sample marketplace".to_string(),
            market_owner: addr(owner_tag),
            market_logo: "ipfs://logo".to_string(),
            market_background: "ipfs://background".to_string(),
            market_twitter: "https://twitter.com/sample".to_string(),
            market_insta: "https://instagram.com/sample".to_string(),
            market_facebook: "https://facebook.com/sample".to_string(),
            market_youtube: "https://youtube.com/sample".to_string(),
            market_mail: "sample@example.com".to_string(),
            market_id,
            market_place_address: addr(owner_tag.to_ascii_uppercase()),
            market_item_address: addr('9'),
            market_rating: 0.0,
            total_traded_in_usd: 0,
            created_at: Utc::now(),
        }
    }

    pub fn sample_product(market: Address, product_id: u64, name: &str) -> Product {
        Product {
            id: DocumentId::new(),
            name: name.to_string(),
            description: "a sample product".to_string(),
            product_id,
            market_place_address: market,
            product_image1: "ipfs://image1".to_string(),
            product_image2: "ipfs://image2".to_string(),
            product_image3: "ipfs://image3".to_string(),
            quantity: 10,
            price: 100,
            on_sale: true,
            rating: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn sample_item(
        market: Address,
        product_id: u64,
        item_id: u64,
        buyer: Address,
        owner: Address,
    ) -> Item {
        Item {
            id: DocumentId::new(),
            market_place_address: market,
            market_item_address: addr('9'),
            product_id,
            item_id,
            image_uri: "ipfs://item".to_string(),
            market_name: "Sample Market".to_string(),
            product_name: "Sample Product".to_string(),
            buyer,
            owner,
            price: 100,
            quantity: 1,
            collateral_address: addr('8'),
            created_at: Utc::now(),
        }
    }

    pub fn sample_market_review(market: Address, wallet: Address, stars: u8) -> MarketReview {
        MarketReview {
            id: DocumentId::new(),
            market_place_address: market,
            user_wallet: wallet,
            stars,
            review: "works as advertised".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn sample_product_review(
        market: Address,
        product_id: u64,
        wallet: Address,
        stars: u8,
    ) -> ProductReview {
        ProductReview {
            id: DocumentId::new(),
            market_place_address: market,
            product_id,
            user_wallet: wallet,
            stars,
            review: "arrived in one piece".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn sample_cart_entry(
        market: Address,
        product_id: u64,
        wallet: Address,
        price: u64,
    ) -> CartEntry {
        CartEntry {
            id: DocumentId::new(),
            market_place_address: market,
            product_id,
            user_wallet: wallet,
            market_name: "Sample Market".to_string(),
            product_name: "Sample Product".to_string(),
            image_uri: "ipfs://image1".to_string(),
            price,
            created_at: Utc::now(),
        }
    }

    pub fn sample_report(issue: &str) -> Report {
        Report {
            id: DocumentId::new(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            issue: issue.to_string(),
            created_at: Utc::now(),
        }
    }
}
