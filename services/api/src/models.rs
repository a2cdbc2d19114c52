//! Request bodies
//!
//! One struct per mutating operation; camelCase wire names. Partial-update
//! requests use `Option` fields: absent means leave the stored value alone.
//! Conversion into entity documents stamps the document id and timestamp.

use chrono::Utc;
use serde::Deserialize;
use types::{Address, CartEntry, DocumentId, Item, Market, MarketReview, Product, ProductReview, Report};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketRequest {
    pub name: String,
    pub description: String,
    pub market_owner: String,
    pub market_logo: String,
    pub market_background: String,
    pub market_twitter: String,
    pub market_insta: String,
    pub market_facebook: String,
    pub market_youtube: String,
    pub market_mail: String,
    pub market_id: u64,
    pub market_place_address: String,
    pub market_item_address: String,
}

impl CreateMarketRequest {
    /// Build the document. Addresses must have been validated first.
    pub fn into_market(self) -> Market {
        Market {
            id: DocumentId::new(),
            name: self.name,
            description: self.description,
            market_owner: Address::new(self.market_owner),
            market_logo: self.market_logo,
            market_background: self.market_background,
            market_twitter: self.market_twitter,
            market_insta: self.market_insta,
            market_facebook: self.market_facebook,
            market_youtube: self.market_youtube,
            market_mail: self.market_mail,
            market_id: self.market_id,
            market_place_address: Address::new(self.market_place_address),
            market_item_address: Address::new(self.market_item_address),
            market_rating: 0.0,
            total_traded_in_usd: 0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketDataRequest {
    pub market_owner: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub market_logo: Option<String>,
    pub market_background: Option<String>,
    pub market_twitter: Option<String>,
    pub market_insta: Option<String>,
    pub market_facebook: Option<String>,
    pub market_youtube: Option<String>,
    pub market_mail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketOwnerRequest {
    pub market_owner: String,
    pub new_owner: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTradedVolumeRequest {
    pub trade_volume: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub market_owner: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub product_id: u64,
    pub market_owner: String,
    pub product_image1: String,
    pub product_image2: String,
    pub product_image3: String,
    pub quantity: u64,
    pub price: u64,
    pub on_sale: bool,
}

impl CreateProductRequest {
    pub fn into_product(self, market_place_address: Address) -> Product {
        Product {
            id: DocumentId::new(),
            name: self.name,
            description: self.description,
            product_id: self.product_id,
            market_place_address,
            product_image1: self.product_image1,
            product_image2: self.product_image2,
            product_image3: self.product_image3,
            quantity: self.quantity,
            price: self.price,
            on_sale: self.on_sale,
            rating: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDataRequest {
    pub market_owner: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_image1: Option<String>,
    pub product_image2: Option<String>,
    pub product_image3: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<u64>,
    pub on_sale: Option<bool>,
}

/// Bulk operations keyed by marketplace address carried in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketScopedRequest {
    pub market_place_address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewSweepRequest {
    pub market_place_address: String,
    pub product_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub market_item_address: String,
    pub item_id: u64,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub market_name: String,
    pub product_name: String,
    pub buyer: String,
    pub owner: String,
    pub price: u64,
    pub quantity: u64,
    pub collateral_address: String,
}

impl CreateItemRequest {
    pub fn into_item(self, market_place_address: Address, product_id: u64) -> Item {
        Item {
            id: DocumentId::new(),
            market_place_address,
            market_item_address: Address::new(self.market_item_address),
            product_id,
            item_id: self.item_id,
            image_uri: self.image_uri,
            market_name: self.market_name,
            product_name: self.product_name,
            buyer: Address::new(self.buyer),
            owner: Address::new(self.owner),
            price: self.price,
            quantity: self.quantity,
            collateral_address: Address::new(self.collateral_address),
            created_at: Utc::now(),
        }
    }
}

/// Shared by review creation and review update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub user_wallet: String,
    pub stars: u32,
    pub review: String,
}

impl ReviewRequest {
    pub fn into_market_review(self, market_place_address: Address) -> MarketReview {
        MarketReview {
            id: DocumentId::new(),
            market_place_address,
            user_wallet: Address::new(self.user_wallet),
            stars: self.stars as u8,
            review: self.review,
            created_at: Utc::now(),
        }
    }

    pub fn into_product_review(self, market_place_address: Address, product_id: u64) -> ProductReview {
        ProductReview {
            id: DocumentId::new(),
            market_place_address,
            product_id,
            user_wallet: Address::new(self.user_wallet),
            stars: self.stars as u8,
            review: self.review,
            created_at: Utc::now(),
        }
    }
}

/// Operations addressed by the caller's wallet alone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRequest {
    pub user_wallet: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCartItemRequest {
    pub market_place_address: String,
    pub product_id: u64,
    pub user_wallet: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIssueRequest {
    pub name: String,
    pub email: String,
    pub issue: String,
}

impl ReportIssueRequest {
    pub fn into_report(self) -> Report {
        Report {
            id: DocumentId::new(),
            name: self.name,
            email: self.email,
            issue: self.issue,
            created_at: Utc::now(),
        }
    }
}

/// Cart additions snapshot the live product; only the wallet comes from the
/// caller.
pub fn cart_entry_from_product(
    product: &Product,
    market: &Market,
    user_wallet: Address,
) -> CartEntry {
    CartEntry {
        id: DocumentId::new(),
        market_place_address: product.market_place_address.clone(),
        product_id: product.product_id,
        user_wallet,
        market_name: market.name.clone(),
        product_name: product.name.clone(),
        image_uri: product.product_image1.clone(),
        price: product.price,
        created_at: Utc::now(),
    }
}
