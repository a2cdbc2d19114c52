//! Cart documents
//!
//! A CartEntry snapshots the product's name, image, and price at add time.
//! The snapshot is not live-linked; an explicit refresh operation copies
//! the current product state back onto matching entries.

use crate::address::Address;
use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: DocumentId,
    pub market_place_address: Address,
    pub product_id: u64,
    pub user_wallet: Address,
    pub market_name: String,
    pub product_name: String,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    /// Product price at add time.
    pub price: u64,
    pub created_at: DateTime<Utc>,
}
