//! Marketplace documents
//!
//! A Market is one tenant of the directory. Its `market_place_address` keys
//! every child collection; `market_rating` and `total_traded_in_usd` are
//! derived fields, recomputed only on explicit request.

use crate::address::Address;
use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    /// Wallet of the single owner. One owner, one marketplace.
    pub market_owner: Address,
    pub market_logo: String,
    pub market_background: String,
    pub market_twitter: String,
    pub market_insta: String,
    pub market_facebook: String,
    pub market_youtube: String,
    pub market_mail: String,
    pub market_id: u64,
    pub market_place_address: Address,
    pub market_item_address: Address,
    /// Mean of review stars (1-10). 0 until the first recomputation.
    pub market_rating: f64,
    /// Running sum of reported trade volume. Only ever grows.
    #[serde(rename = "totalTradedInUSD")]
    pub total_traded_in_usd: u64,
    pub created_at: DateTime<Utc>,
}
