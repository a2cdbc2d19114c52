//! Item documents
//!
//! An Item records one completed trade. `market_name` and `product_name`
//! are denormalized copies taken at creation time; they drift from the live
//! parents until the explicit rename-propagation operations run. Items are
//! never cascade-deleted: they are history, not live references.

use crate::address::Address;
use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DocumentId,
    pub market_place_address: Address,
    pub market_item_address: Address,
    pub product_id: u64,
    pub item_id: u64,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub market_name: String,
    pub product_name: String,
    pub buyer: Address,
    pub owner: Address,
    /// Price in native tokens at trade time.
    pub price: u64,
    pub quantity: u64,
    pub collateral_address: Address,
    pub created_at: DateTime<Utc>,
}
