//! Item operations
//!
//! Items record completed trades; after the parent checks at creation they
//! are read-only except for the explicit denormalized-name propagation.

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::CreateItemRequest;
use crate::rules::{cascade, integrity};
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

pub async fn create_item(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<CreateItemRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketItemAddress", &req.market_item_address, "Enter a valid market items address")
        .min_int("itemId", req.item_id, 1, "Invalid item id")
        .length("imageURI", &req.image_uri, 5, None, "Invalid image uri")
        .length("marketName", &req.market_name, 3, None, "Invalid market name")
        .length("productName", &req.product_name, 3, None, "Invalid product name")
        .address("buyer", &req.buyer, "Enter a valid buyer address")
        .address("owner", &req.owner, "Enter a valid owner address")
        .min_int("price", req.price, 1, "Invalid price")
        .min_int("quantity", req.quantity, 1, "Invalid quantity number")
        .address("collateralAddress", &req.collateral_address, "Enter a valid collateral address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    integrity::check_item_parents(
        &state.store,
        &addr,
        product_id,
        &req.market_name,
        &req.product_name,
        req.item_id,
    )?;

    let item = state.store.items.insert(req.into_item(addr, product_id))?;
    Ok(Json(json!({ "success": true, "item": item })))
}

pub async fn sold_items(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let items = state.store.items.for_market(&addr);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn sold_product_items(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, product_id)?;
    let items = state.store.items.for_product(&addr, product_id);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn bought_items(
    State(state): State<AppState>,
    Path((market_place_address, buyer)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let buyer = path_address(&buyer)?;
    let items = state.store.items.bought_by(&addr, &buyer);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn owned_items(
    State(state): State<AppState>,
    Path((market_place_address, owner)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let owner = path_address(&owner)?;
    let items = state.store.items.owned_by(&addr, &owner);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path((market_place_address, item_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let item = state
        .store
        .items
        .get(&addr, item_id)
        .ok_or_else(|| AppError::NotFound("item does not exist".to_string()))?;
    Ok(Json(json!({ "success": true, "item": item })))
}

pub async fn my_bought_items(
    State(state): State<AppState>,
    Path(buyer): Path<String>,
) -> Result<Json<Value>, AppError> {
    let buyer = path_address(&buyer)?;
    let items = state.store.items.bought_by_wallet(&buyer);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn my_owned_items(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Value>, AppError> {
    let owner = path_address(&owner)?;
    let items = state.store.items.owned_by_wallet(&owner);
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn propagate_market_name(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let items = cascade::propagate_market_rename_to_items(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn propagate_product_name(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let items = cascade::propagate_product_rename_to_items(&state.store, &addr, product_id)?;
    Ok(Json(json!({ "success": true, "items": items })))
}
