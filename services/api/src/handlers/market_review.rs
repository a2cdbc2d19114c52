//! Market review operations
//!
//! Check order for creation: parent market, then duplicate review, then the
//! buyer/owner authorization.

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::{MarketScopedRequest, ReviewRequest, WalletRequest};
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

pub async fn create_market_review(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<ReviewRequest>,
) -> Result<Json<Value>, AppError> {
    validate_review(&req)?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet.clone());

    integrity::require_market(&state.store, &addr)?;
    if state.store.market_reviews.get(&addr, &wallet).is_some() {
        return Err(AppError::Conflict("you have already reviewed".to_string()));
    }
    integrity::require_market_participant(&state.store, &addr, &wallet)?;

    let review = state
        .store
        .market_reviews
        .insert(req.into_market_review(addr))?;
    Ok(Json(json!({ "success": true, "marketReview": review })))
}

pub async fn update_market_review(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<ReviewRequest>,
) -> Result<Json<Value>, AppError> {
    validate_review(&req)?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet.clone());
    integrity::require_market(&state.store, &addr)?;

    let review = state
        .store
        .market_reviews
        .update(&addr, &wallet, |r| {
            r.stars = req.stars as u8;
            r.review = req.review;
        })
        .ok_or_else(|| AppError::NotFound("you do not have any review to update".to_string()))?;

    Ok(Json(json!({ "success": true, "marketReview": review })))
}

pub async fn market_reviews(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let reviews = state.store.market_reviews.for_market(&addr);
    Ok(Json(json!({ "success": true, "marketReviews": reviews })))
}

pub async fn my_market_review(
    State(state): State<AppState>,
    Path((market_place_address, user_wallet)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let wallet = path_address(&user_wallet)?;
    integrity::require_market(&state.store, &addr)?;

    let review = state
        .store
        .market_reviews
        .get(&addr, &wallet)
        .ok_or_else(|| AppError::NotFound("review not found".to_string()))?;
    Ok(Json(json!({ "success": true, "review": review })))
}

pub async fn delete_my_market_review(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<WalletRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("userWallet", &req.user_wallet, "Enter a valid wallet address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let wallet = Address::new(req.user_wallet);
    integrity::require_market(&state.store, &addr)?;

    let review = state
        .store
        .market_reviews
        .delete(&addr, &wallet)
        .ok_or_else(|| AppError::NotFound("review not found".to_string()))?;
    Ok(Json(json!({ "success": true, "marketReview": review })))
}

pub async fn delete_all_market_reviews(
    State(state): State<AppState>,
    AppJson(req): AppJson<MarketScopedRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address(
        "marketPlaceAddress",
        &req.market_place_address,
        "Enter a valid marketplace address",
    );
    v.finish()?;

    let addr = Address::new(req.market_place_address);
    let deleted = cascade::delete_all_market_reviews(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}
