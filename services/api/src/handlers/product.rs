//! Product operations

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::{
    CreateProductRequest, MarketScopedRequest, OwnerRequest, UpdateProductDataRequest,
};
use crate::rules::{cascade, integrity, rating};
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use store::SortOrder;
use types::Address;

pub async fn create_product(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<CreateProductRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.length("name", &req.name, 3, Some(100), "Enter a valid name")
        .length("description", &req.description, 5, None, "Enter a valid description")
        .min_int("productId", req.product_id, 1, "Invalid product id")
        .address("marketOwner", &req.market_owner, "Enter a valid wallet address")
        .length("productImage1", &req.product_image1, 5, None, "Invalid image-1")
        .length("productImage2", &req.product_image2, 5, None, "Invalid image-2")
        .length("productImage3", &req.product_image3, 5, None, "Invalid image-3")
        .min_int("quantity", req.quantity, 1, "Invalid quantity")
        .min_int("price", req.price, 1, "Invalid price");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner.clone());
    integrity::require_owned_market(&state.store, &addr, &owner)?;
    integrity::ensure_product_slots_free(&state.store, &addr, req.product_id, &req.name)?;

    let product = state.store.products.insert(req.into_product(addr))?;
    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn update_product_data(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<UpdateProductDataRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketOwner", &req.market_owner, "Enter a valid owner address");
    if let Some(quantity) = req.quantity {
        v.min_int("quantity", quantity, 1, "Invalid quantity");
    }
    if let Some(price) = req.price {
        v.min_int("price", price, 1, "Invalid price");
    }
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner.clone());
    integrity::require_owned_market(&state.store, &addr, &owner)?;
    integrity::require_product(&state.store, &addr, product_id)?;

    if let Some(name) = &req.name {
        integrity::ensure_product_name_free(&state.store, &addr, name)?;
    }

    let product = state
        .store
        .products
        .update(&addr, product_id, |p| {
            if let Some(name) = req.name {
                p.name = name;
            }
            if let Some(description) = req.description {
                p.description = description;
            }
            if let Some(image) = req.product_image1 {
                p.product_image1 = image;
            }
            if let Some(image) = req.product_image2 {
                p.product_image2 = image;
            }
            if let Some(image) = req.product_image3 {
                p.product_image3 = image;
            }
            if let Some(quantity) = req.quantity {
                p.quantity = quantity;
            }
            if let Some(price) = req.price {
                p.price = price;
            }
            if let Some(on_sale) = req.on_sale {
                p.on_sale = on_sale;
            }
        })?
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn update_product_rating(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let product = rating::recompute_product_rating(&state.store, &addr, product_id)?;
    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn market_products(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let products = state.store.products.for_market(&addr);
    Ok(Json(json!({ "success": true, "products": products })))
}

pub async fn market_product(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let product = integrity::require_product(&state.store, &addr, product_id)?;
    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn sorted_product_names(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let products = state
        .store
        .products
        .for_market_sorted_by_name(&addr, SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "products": products })))
}

pub async fn sorted_rating_products(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let products = state
        .store
        .products
        .for_market_sorted_by_rating(&addr, SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "products": products })))
}

pub async fn sorted_price_products(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    integrity::require_market(&state.store, &addr)?;
    let products = state
        .store
        .products
        .for_market_sorted_by_price(&addr, SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "products": products })))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path((market_place_address, product_id)): Path<(String, u64)>,
    AppJson(req): AppJson<OwnerRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketOwner", &req.market_owner, "Enter a valid owner address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner);
    integrity::require_owned_market(&state.store, &addr, &owner)?;

    let product = state
        .store
        .products
        .delete(&addr, product_id)
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn delete_all_market_products(
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
    let deleted = cascade::delete_all_products(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "deletedCount": deleted })))
}
