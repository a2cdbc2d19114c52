//! Market operations

use crate::error::AppError;
use crate::extract::AppJson;
use crate::handlers::path_address;
use crate::models::{
    CreateMarketRequest, OwnerRequest, UpdateMarketDataRequest, UpdateMarketOwnerRequest,
    UpdateTradedVolumeRequest,
};
use crate::rules::{cascade, integrity, rating};
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use store::SortOrder;
use types::Address;

pub async fn create_market(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMarketRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.length("name", &req.name, 3, Some(50), "Enter a valid name")
        .length("description", &req.description, 5, None, "Enter a valid description")
        .address("marketOwner", &req.market_owner, "Enter a valid owner address")
        .length("marketLogo", &req.market_logo, 5, None, "Enter a valid market logo")
        .length("marketBackground", &req.market_background, 5, None, "Enter a valid market background image")
        .length("marketTwitter", &req.market_twitter, 5, None, "Enter a valid twitter account")
        .length("marketInsta", &req.market_insta, 5, None, "Enter a valid insta page")
        .length("marketFacebook", &req.market_facebook, 5, None, "Enter a valid facebook account")
        .length("marketYoutube", &req.market_youtube, 5, None, "Enter a valid youtube channel")
        .email("marketMail", &req.market_mail, "Enter a valid email")
        .min_int("marketId", req.market_id, 1, "Enter a valid marketId")
        .address("marketPlaceAddress", &req.market_place_address, "Enter a valid market place address")
        .address("marketItemAddress", &req.market_item_address, "Enter a valid market item address");
    v.finish()?;

    let owner = Address::new(req.market_owner.clone());
    let addr = Address::new(req.market_place_address.clone());
    integrity::ensure_market_unclaimed(&state.store, &owner, &req.name, &addr, req.market_id)?;

    let market = state.store.markets.insert(req.into_market())?;
    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn update_market_data(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<UpdateMarketDataRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketOwner", &req.market_owner, "Enter a valid owner address");
    if let Some(mail) = &req.market_mail {
        v.email("marketMail", mail, "Enter a valid email");
    }
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner.clone());
    integrity::require_owned_market(&state.store, &addr, &owner)?;

    if let Some(name) = &req.name {
        integrity::ensure_market_name_free(&state.store, name)?;
    }

    let market = state
        .store
        .markets
        .update(&addr, |m| {
            if let Some(name) = req.name {
                m.name = name;
            }
            if let Some(description) = req.description {
                m.description = description;
            }
            if let Some(logo) = req.market_logo {
                m.market_logo = logo;
            }
            if let Some(background) = req.market_background {
                m.market_background = background;
            }
            if let Some(twitter) = req.market_twitter {
                m.market_twitter = twitter;
            }
            if let Some(insta) = req.market_insta {
                m.market_insta = insta;
            }
            if let Some(facebook) = req.market_facebook {
                m.market_facebook = facebook;
            }
            if let Some(youtube) = req.market_youtube {
                m.market_youtube = youtube;
            }
            if let Some(mail) = req.market_mail {
                m.market_mail = mail;
            }
        })?
        .ok_or_else(|| AppError::NotFound("market place address not found".to_string()))?;

    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn update_market_owner(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<UpdateMarketOwnerRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketOwner", &req.market_owner, "Invalid market owner")
        .address("newOwner", &req.new_owner, "Invalid new owner");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner);
    let new_owner = Address::new(req.new_owner);

    integrity::require_owned_market(&state.store, &addr, &owner)?;
    if state.store.markets.by_owner(&new_owner).is_some() {
        return Err(AppError::Conflict(
            "new owner already has a marketplace".to_string(),
        ));
    }

    let market = state
        .store
        .markets
        .update(&addr, |m| m.market_owner = new_owner)?
        .ok_or_else(|| AppError::NotFound("market place address not found".to_string()))?;

    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn update_market_rating(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let market = rating::recompute_market_rating(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn update_market_traded_volume(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<UpdateTradedVolumeRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.min_int("tradeVolume", req.trade_volume, 1, "Invalid volume");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let market = rating::accumulate_traded_volume(&state.store, &addr, req.trade_volume)?;
    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn all_markets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let markets = state.store.markets.all();
    Ok(Json(json!({ "success": true, "markets": markets })))
}

pub async fn get_market(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
) -> Result<Json<Value>, AppError> {
    let addr = path_address(&market_place_address)?;
    let market = integrity::require_market(&state.store, &addr)?;
    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn my_market(
    State(state): State<AppState>,
    Path(market_owner): Path<String>,
) -> Result<Json<Value>, AppError> {
    let owner = path_address(&market_owner)?;
    let market = state
        .store
        .markets
        .by_owner(&owner)
        .ok_or_else(|| AppError::NotFound("you do not have any marketplace".to_string()))?;
    Ok(Json(json!({ "success": true, "market": market })))
}

pub async fn sorted_market_names(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let markets = state.store.markets.all_sorted_by_name(SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "markets": markets })))
}

pub async fn sorted_rating_markets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let markets = state
        .store
        .markets
        .all_sorted_by_rating(SortOrder::Descending);
    Ok(Json(json!({ "success": true, "markets": markets })))
}

pub async fn sorted_trading_markets(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let markets = state
        .store
        .markets
        .all_sorted_by_volume(SortOrder::Ascending);
    Ok(Json(json!({ "success": true, "markets": markets })))
}

pub async fn delete_market(
    State(state): State<AppState>,
    Path(market_place_address): Path<String>,
    AppJson(req): AppJson<OwnerRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.address("marketOwner", &req.market_owner, "Enter a valid owner address");
    v.finish()?;

    let addr = path_address(&market_place_address)?;
    let owner = Address::new(req.market_owner);
    let (market, cascade) = cascade::delete_market(&state.store, &addr, &owner)?;

    Ok(Json(json!({
        "success": true,
        "market": market,
        "cascade": cascade,
    })))
}
