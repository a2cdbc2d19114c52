//! Review documents
//!
//! One review per wallet per scope. The author must appear as buyer or
//! owner of at least one Item in the reviewed scope; that check lives in
//! the service's integrity rules, not here.

use crate::address::Address;
use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review of a whole marketplace. Unique per (market, wallet).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReview {
    pub id: DocumentId,
    pub market_place_address: Address,
    pub user_wallet: Address,
    /// 1-10, zero is not allowed.
    pub stars: u8,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

/// A review of one product. Unique per (market, product, wallet).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub id: DocumentId,
    pub market_place_address: Address,
    pub product_id: u64,
    pub user_wallet: Address,
    /// 1-10, zero is not allowed.
    pub stars: u8,
    pub review: String,
    pub created_at: DateTime<Utc>,
}
