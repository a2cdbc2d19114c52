//! REST API service for the marketplace directory
//!
//! Request flow: validate shape → referential checks → store operation →
//! `{success, ...}` envelope. The store handle is injected through
//! [`state::AppState`]; the rules modules own every cross-entity decision.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod rules;
pub mod state;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::Utc;
    use store::DirectoryStore;
    use types::{
        Address, CartEntry, DocumentId, Item, Market, MarketReview, Product, ProductReview,
    };

    /// 42-character address built from one repeated tag character.
    pub fn addr(tag: char) -> Address {
        let mut s = String::from("0x");
        while s.len() < Address::LEN {
            s.push(tag);
        }
        Address::new(s)
    }

    /// Insert a market owned by `addr(owner_tag)` at `addr(uppercase tag)`.
    pub fn seed_market(store: &DirectoryStore, owner_tag: char, name: &str, market_id: u64) -> Market {
        store
            .markets
            .insert(Market {
                id: DocumentId::new(),
                name: name.to_string(),
                description: "a seeded marketplace".to_string(),
                market_owner: addr(owner_tag),
                market_logo: "ipfs://logo".to_string(),
                market_background: "ipfs://background".to_string(),
                market_twitter: "https://twitter.com/seeded".to_string(),
                market_insta: "https://instagram.com/seeded".to_string(),
                market_facebook: "https://facebook.com/seeded".to_string(),
                market_youtube: "https://youtube.com/seeded".to_string(),
                market_mail: "seeded@example.com".to_string(),
                market_id,
                market_place_address: addr(owner_tag.to_ascii_uppercase()),
                market_item_address: addr('9'),
                market_rating: 0.0,
                total_traded_in_usd: 0,
                created_at: Utc::now(),
            })
            .expect("seed market")
    }

    pub fn seed_product(
        store: &DirectoryStore,
        market: &Address,
        product_id: u64,
        name: &str,
    ) -> Product {
        store
            .products
            .insert(Product {
                id: DocumentId::new(),
                name: name.to_string(),
                description: "a seeded product".to_string(),
                product_id,
                market_place_address: market.clone(),
                product_image1: "ipfs://image1".to_string(),
                product_image2: "ipfs://image2".to_string(),
                product_image3: "ipfs://image3".to_string(),
                quantity: 10,
                price: 100,
                on_sale: true,
                rating: 0.0,
                created_at: Utc::now(),
            })
            .expect("seed product")
    }

    pub fn seed_item(
        store: &DirectoryStore,
        market: &Address,
        product_id: u64,
        item_id: u64,
        buyer: Address,
        owner: Address,
    ) -> Item {
        store
            .items
            .insert(Item {
                id: DocumentId::new(),
                market_place_address: market.clone(),
                market_item_address: addr('9'),
                product_id,
                item_id,
                image_uri: "ipfs://item".to_string(),
                market_name: "Shop1".to_string(),
                product_name: "Widget".to_string(),
                buyer,
                owner,
                price: 100,
                quantity: 1,
                collateral_address: addr('8'),
                created_at: Utc::now(),
            })
            .expect("seed item")
    }

    pub fn seed_market_review(
        store: &DirectoryStore,
        market: &Address,
        wallet: Address,
        stars: u8,
    ) -> MarketReview {
        store
            .market_reviews
            .insert(MarketReview {
                id: DocumentId::new(),
                market_place_address: market.clone(),
                user_wallet: wallet,
                stars,
                review: "works as advertised".to_string(),
                created_at: Utc::now(),
            })
            .expect("seed market review")
    }

    pub fn seed_product_review(
        store: &DirectoryStore,
        market: &Address,
        product_id: u64,
        wallet: Address,
        stars: u8,
    ) -> ProductReview {
        store
            .product_reviews
            .insert(ProductReview {
                id: DocumentId::new(),
                market_place_address: market.clone(),
                product_id,
                user_wallet: wallet,
                stars,
                review: "arrived in one piece".to_string(),
                created_at: Utc::now(),
            })
            .expect("seed product review")
    }

    pub fn seed_cart_entry(
        store: &DirectoryStore,
        market: &Address,
        product_id: u64,
        wallet: Address,
    ) -> CartEntry {
        store
            .carts
            .insert(CartEntry {
                id: DocumentId::new(),
                market_place_address: market.clone(),
                product_id,
                user_wallet: wallet,
                market_name: "Shop1".to_string(),
                product_name: "Widget".to_string(),
                image_uri: "ipfs://image1".to_string(),
                price: 100,
                created_at: Utc::now(),
            })
            .expect("seed cart entry")
    }
}
