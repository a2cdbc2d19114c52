//! Cascade policy and denormalized-field synchronization
//!
//! Deleting a market is one sequenced operation: children first, then the
//! market document. Items are the deliberate exception; a trade already
//! happened and its record outlives the market. The narrower bulk deletes
//! remain callable on their own, each re-checking that the parent market is
//! really gone so a recreated market at the same address keeps its children.

use crate::error::AppError;
use crate::rules::integrity;
use serde::Serialize;
use store::DirectoryStore;
use types::{Address, Item, Market};

/// Per-collection counts reported by the sequenced market cascade.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CascadeSummary {
    pub products_deleted: u64,
    pub cart_entries_deleted: u64,
    pub market_reviews_deleted: u64,
    pub product_reviews_deleted: u64,
}

/// Delete a market and everything that depends on it, in order: products,
/// cart entries, market reviews, product reviews, then the market itself.
/// Items are retained.
pub fn delete_market(
    store: &DirectoryStore,
    addr: &Address,
    claimed_owner: &Address,
) -> Result<(Market, CascadeSummary), AppError> {
    integrity::require_owned_market(store, addr, claimed_owner)?;

    let summary = CascadeSummary {
        products_deleted: store.products.delete_for_market(addr),
        cart_entries_deleted: store.carts.delete_for_market(addr),
        market_reviews_deleted: store.market_reviews.delete_for_market(addr),
        product_reviews_deleted: store.product_reviews.delete_for_market(addr),
    };

    let market = store
        .markets
        .delete(addr)
        .ok_or_else(|| AppError::NotFound("market place address not found".to_string()))?;

    tracing::info!(
        market = %market.market_place_address,
        products = summary.products_deleted,
        carts = summary.cart_entries_deleted,
        market_reviews = summary.market_reviews_deleted,
        product_reviews = summary.product_reviews_deleted,
        "market cascade complete"
    );

    Ok((market, summary))
}

/// The guard shared by the orphan bulk deletes: the market must be gone.
fn ensure_market_absent(store: &DirectoryStore, addr: &Address) -> Result<(), AppError> {
    if store.markets.by_address(addr).is_some() {
        return Err(AppError::Conflict(
            "marketplace still exists, its children cannot be bulk-deleted".to_string(),
        ));
    }
    Ok(())
}

/// Remove all products left behind by a deleted market. Vacuously zero when
/// nothing matches.
pub fn delete_all_products(store: &DirectoryStore, addr: &Address) -> Result<u64, AppError> {
    ensure_market_absent(store, addr)?;
    Ok(store.products.delete_for_market(addr))
}

pub fn delete_all_market_reviews(store: &DirectoryStore, addr: &Address) -> Result<u64, AppError> {
    ensure_market_absent(store, addr)?;
    Ok(store.market_reviews.delete_for_market(addr))
}

/// Market-scoped product-review sweep, for when the whole market is gone.
pub fn delete_all_market_product_reviews(
    store: &DirectoryStore,
    addr: &Address,
) -> Result<u64, AppError> {
    ensure_market_absent(store, addr)?;
    Ok(store.product_reviews.delete_for_market(addr))
}

/// Product-scoped review sweep: the market must still exist but the product
/// must be gone.
pub fn delete_orphan_product_reviews(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
) -> Result<u64, AppError> {
    integrity::require_market(store, addr)?;
    if store.products.get(addr, product_id).is_some() {
        return Err(AppError::Conflict(
            "product still exists, its reviews cannot be bulk-deleted".to_string(),
        ));
    }
    Ok(store.product_reviews.delete_for_product(addr, product_id))
}

pub fn delete_all_cart_entries(store: &DirectoryStore, addr: &Address) -> Result<u64, AppError> {
    ensure_market_absent(store, addr)?;
    Ok(store.carts.delete_for_market(addr))
}

/// Copy the live market name onto every item of the address, returning the
/// refreshed items.
pub fn propagate_market_rename_to_items(
    store: &DirectoryStore,
    addr: &Address,
) -> Result<Vec<Item>, AppError> {
    let market = integrity::require_market(store, addr)?;
    store.items.set_market_name(addr, &market.name);
    Ok(store.items.for_market(addr))
}

/// Copy the live product name onto every matching item.
pub fn propagate_product_rename_to_items(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
) -> Result<Vec<Item>, AppError> {
    integrity::require_market(store, addr)?;
    let product = integrity::require_product(store, addr, product_id)?;
    store.items.set_product_name(addr, product_id, &product.name);
    Ok(store.items.for_product(addr, product_id))
}

/// Copy the live market name onto every cart entry of the address,
/// returning the matched count.
pub fn propagate_market_rename_to_carts(
    store: &DirectoryStore,
    addr: &Address,
) -> Result<u64, AppError> {
    let market = integrity::require_market(store, addr)?;
    Ok(store.carts.set_market_name(addr, &market.name))
}

/// Re-snapshot the live product name/image/price onto matching cart
/// entries, returning the matched count.
pub fn refresh_cart_snapshots(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
) -> Result<u64, AppError> {
    integrity::require_market(store, addr)?;
    let product = integrity::require_product(store, addr, product_id)?;
    Ok(store.carts.refresh_product_snapshot(
        addr,
        product_id,
        &product.name,
        &product.product_image1,
        product.price,
    ))
}
