//! Cart operations
//!
//! Adding to a cart snapshots the live product; the two PUT operations are
//! the explicit way a snapshot catches up with later renames or price
//! changes.

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::{
    cart_entry_from_product, DeleteCartItemRequest, MarketScopedRequest, WalletRequest,
};
use crate::rules::{cascade, integrity};
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use store::SortOrder;
use types::Address;

pub async fn add_cart_item(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<WalletRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("userWallet", &req.user_wallet, "Enter a valid userWallet address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet);

    let market = integrity::require_market(&state.store, &addr)?;
    let product = integrity::require_product(&state.store, &addr, product_id)?;

    if state.store.carts.get(&addr, product_id, &wallet).is_some() {
        return Err(AppError::Conflict("item is already in cart".to_string()));
    }

    let entry = state
        .store
        .carts
        .insert(cart_entry_from_product(&product, &market, wallet))?;
    Ok(Json(json!({ "success": true, "cartItem": entry })))
}

pub async fn propagate_market_name(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let updated = cascade::propagate_market_rename_to_carts(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "updatedCount": updated })))
}

pub async fn refresh_product_data(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let updated = cascade::refresh_cart_snapshots(&state.store, &addr, product_id)?;
    Ok(Json(json!({ "success": true, "updatedCount": updated })))
}

pub async fn my_cart_items(
    State(state): State<AppState>,
    Path(user_wallet): Path<String>,
) -> Result<Json<Value>, AppError> {
    let wallet = path_address(&user_wallet)?;
    let entries = state.store.carts.for_wallet(&wallet);
    Ok(Json(json!({ "success": true, "cartItems": entries })))
}

pub async fn my_market_cart_items(
    State(state): State<AppState>,
    Path((market_place_address, user_wallet)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let wallet = path_address(&user_wallet)?;
    integrity::require_market(&state.store, &addr)?;

    let entries = state.store.carts.for_market_wallet(&addr, &wallet);
    Ok(Json(json!({ "success": true, "cartItems": entries })))
}

pub async fn sorted_price_carts(
    State(state): State<AppState>,
    Path(user_wallet): Path<String>,
) -> Result<Json<Value>, AppError> {
    let wallet = path_address(&user_wallet)?;
    let entries = state
        .store
        .carts
        .for_wallet_sorted_by_price(&wallet, SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "cartItems": entries })))
}

pub async fn sorted_market_names(
    State(state): State<AppState>,
    Path(user_wallet): Path<String>,
) -> Result<Json<Value>, AppError> {
    let wallet = path_address(&user_wallet)?;
    let entries = state
        .store
        .carts
        .for_wallet_sorted_by_market_name(&wallet, SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "cartItems": entries })))
}

pub async fn delete_cart_item(
    State(state): State<AppState>,
    AppJson(req): AppJson<DeleteCartItemRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address(
        "marketPlaceAddress",
        &req.market_place_address,
        "Enter a valid market place address",
    )
    .address("userWallet", &req.user_wallet, "Enter a valid userWallet address")
    .min_int("productId", req.product_id, 1, "Enter a valid productId");
    v.finish()?;

    let addr = Address::new(req.market_place_address);
    let wallet = Address::new(req.user_wallet);

    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, req.product_id)?;

    let entry = state
        .store
        .carts
        .delete(&addr, req.product_id, &wallet)
        .ok_or_else(|| AppError::NotFound("item not found".to_string()))?;
    Ok(Json(json!({ "success": true, "cartItem": entry })))
}

pub async fn delete_all_market_cart_items(
    State(state): State<AppState>,
    AppJson(req): AppJson<MarketScopedRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address(
        "marketPlaceAddress",
        &req.market_place_address,
        "Enter a valid market place address",
    );
    v.finish()?;

    let addr = Address::new(req.market_place_address);
    let deleted = cascade::delete_all_cart_entries(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}

pub async fn delete_all_my_cart_items(
    State(state): State<AppState>,
    AppJson(req): AppJson<WalletRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("userWallet", &req.user_wallet, "Enter a valid userWallet address");
    v.finish()?;

    let wallet = Address::new(req.user_wallet);
    let deleted = state.store.carts.delete_for_wallet(&wallet);
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}
