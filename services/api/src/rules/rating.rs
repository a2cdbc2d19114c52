//! Aggregation rules for derived fields
//!
//! Ratings are recomputed only on explicit request: the mean of all review
//! stars in scope, or the previous value when the scope has no reviews.
//! Traded volume only ever accumulates; the caller is trusted to report
//! each trade exactly once.

use crate::error::AppError;
use crate::rules::integrity;
use anyhow::anyhow;
use store::DirectoryStore;
use types::{Address, Market, Product};

/// Arithmetic mean of review stars, None over an empty scope.
pub fn mean_stars(stars: &[u8]) -> Option<f64> {
    if stars.is_empty() {
        return None;
    }
    let sum: u64 = stars.iter().map(|&s| u64::from(s)).sum();
    Some(sum as f64 / stars.len() as f64)
}

/// Recompute a market's rating from its reviews. With zero reviews the
/// stored rating is left untouched, not reset.
pub fn recompute_market_rating(
    store: &DirectoryStore,
    addr: &Address,
) -> Result<Market, AppError> {
    let market = integrity::require_market(store, addr)?;

    let stars: Vec<u8> = store
        .market_reviews
        .for_market(addr)
        .iter()
        .map(|r| r.stars)
        .collect();

    let Some(rating) = mean_stars(&stars) else {
        return Ok(market);
    };

    store
        .markets
        .update(addr, |m| m.market_rating = rating)?
        .ok_or_else(|| anyhow!("market vanished during rating update").into())
}

/// Recompute one product's rating from its reviews; same empty-scope rule.
pub fn recompute_product_rating(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
) -> Result<Product, AppError> {
    integrity::require_market(store, addr)?;
    let product = integrity::require_product(store, addr, product_id)?;

    let stars: Vec<u8> = store
        .product_reviews
        .for_product(addr, product_id)
        .iter()
        .map(|r| r.stars)
        .collect();

    let Some(rating) = mean_stars(&stars) else {
        return Ok(product);
    };

    store
        .products
        .update(addr, product_id, |p| p.rating = rating)?
        .ok_or_else(|| anyhow!("product vanished during rating update").into())
}

/// Add one reported trade's volume to the market total. Never subtracts.
pub fn accumulate_traded_volume(
    store: &DirectoryStore,
    addr: &Address,
    amount: u64,
) -> Result<Market, AppError> {
    integrity::require_market(store, addr)?;

    store
        .markets
        .update(addr, |m| {
            m.total_traded_in_usd = m.total_traded_in_usd.saturating_add(amount);
        })?
        .ok_or_else(|| anyhow!("market vanished during volume update").into())
}
