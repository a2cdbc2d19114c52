//! Product review operations

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::{MarketScopedRequest, ProductReviewSweepRequest, ReviewRequest, WalletRequest};
use crate::rules::{cascade, integrity};
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use types::Address;

fn validate_review(req: &ReviewRequest) -> Result<(), AppError> {
    let mut v = Validator::new();
    v.address("userWallet", &req.user_wallet, "Enter a valid wallet address")
        .stars("stars", req.stars, "Invalid range(1-10)")
        .length("review", &req.review, 5, None, "Enter a valid review");
    v.finish()
}

pub async fn create_product_review(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<ReviewRequest>,
) -> Result<Json<Value>, AppError> {
    validate_review(&req)?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet.clone());

    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, product_id)?;
    if state
        .store
        .product_reviews
        .get(&addr, product_id, &wallet)
        .is_some()
    {
        return Err(AppError::Conflict("you have already reviewed".to_string()));
    }
    integrity::require_product_participant(&state.store, &addr, product_id, &wallet)?;

    let review = state
        .store
        .product_reviews
        .insert(req.into_product_review(addr, product_id))?;
    Ok(Json(json!({ "success": true, "productReview": review })))
}

pub async fn update_product_review(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<ReviewRequest>,
) -> Result<Json<Value>, AppError> {
    validate_review(&req)?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet.clone());
    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, product_id)?;

    let review = state
        .store
        .product_reviews
        .update(&addr, product_id, &wallet, |r| {
            r.stars = req.stars as u8;
            r.review = req.review;
        })
        .ok_or_else(|| AppError::NotFound("you do not have any review to update".to_string()))?;

    Ok(Json(json!({ "success": true, "productReview": review })))
}

pub async fn product_reviews(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let reviews = state.store.product_reviews.for_product(&addr, product_id);
    Ok(Json(json!({ "success": true, "productReviews": reviews })))
}

pub async fn my_product_review(
    State(state): State<AppState>,
    Path((market_place_address, user_wallet, product_id)): Path<(String, String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let wallet = path_address(&user_wallet)?;
    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, product_id)?;

    let review = state
        .store
        .product_reviews
        .get(&addr, product_id, &wallet)
        .ok_or_else(|| AppError::NotFound("product review not found".to_string()))?;
    Ok(Json(json!({ "success": true, "productReview": review })))
}

pub async fn delete_my_product_review(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<WalletRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("userWallet", &req.user_wallet, "Enter a valid wallet address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet);
    integrity::require_market(&state.store, &addr)?;
    integrity::require_product(&state.store, &addr, product_id)?;

    let review = state
        .store
        .product_reviews
        .delete(&addr, product_id, &wallet)
        .ok_or_else(|| AppError::NotFound("review not found".to_string()))?;
    Ok(Json(json!({ "success": true, "productReview": review })))
}

/// Product-scoped sweep: the market must still exist and the product must
/// be gone.
pub async fn delete_all_product_reviews(
    State(state): State<AppState>,
    AppJson(req): AppJson<ProductReviewSweepRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address(
        "marketPlaceAddress",
        &req.market_place_address,
        "Enter a valid market place address",
    )
    .min_int("productId", req.product_id, 1, "Enter a valid id");
    v.finish()?;

    let addr = Address::new(req.market_place_address);
    let deleted = cascade::delete_orphan_product_reviews(&state.store, &addr, req.product_id)?;
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}

/// Market-scoped sweep: requires the market itself to be gone.
pub async fn delete_all_market_product_reviews(
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
    let deleted = cascade::delete_all_market_product_reviews(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}
