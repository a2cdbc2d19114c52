//! Product documents
//!
//! A Product belongs to exactly one Market; its `product_id` and `name` are
//! each unique within that market. `rating` is derived, recomputed only on
//! explicit request.

use crate::address::Address;
use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    pub product_id: u64,
    pub market_place_address: Address,
    pub product_image1: String,
    pub product_image2: String,
    pub product_image3: String,
    pub quantity: u64,
    pub price: u64,
    pub on_sale: bool,
    /// Mean of review stars (1-10). 0 until the first recomputation.
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}
