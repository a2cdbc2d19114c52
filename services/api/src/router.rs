//! Route table
//!
//! The full REST surface under `/api`, one nested router per entity.

use crate::handlers::{cart, item, market, market_review, product, product_review, report};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let market_routes = Router::new()
        .route("/createmarket", post(market::create_market))
        .route(
            "/updatemarketdata/:marketPlaceAddress",
            put(market::update_market_data),
        )
        .route(
            "/updatemarketowner/:marketPlaceAddress",
            put(market::update_market_owner),
        )
        .route(
            "/updatemarketrating/:marketPlaceAddress",
            put(market::update_market_rating),
        )
        .route(
            "/updatemarkettradedvolume/:marketPlaceAddress",
            put(market::update_market_traded_volume),
        )
        .route("/allmarkets", get(market::all_markets))
        .route("/market/:marketPlaceAddress", get(market::get_market))
        .route("/mymarket/:marketOwner", get(market::my_market))
        .route("/sortedmarketnames", get(market::sorted_market_names))
        .route("/sortedratingmarkets", get(market::sorted_rating_markets))
        .route("/sortedtradingmarkets", get(market::sorted_trading_markets))
        .route(
            "/deletemarket/:marketPlaceAddress",
            delete(market::delete_market),
        );

    let product_routes = Router::new()
        .route(
            "/createproduct/:marketPlaceAddress",
            post(product::create_product),
        )
        .route(
            "/updateproductdata/:marketPlaceAddress/:productId",
            put(product::update_product_data),
        )
        .route(
            "/updateproductrating/:marketPlaceAddress/:productId",
            put(product::update_product_rating),
        )
        .route(
            "/marketproducts/:marketPlaceAddress",
            get(product::market_products),
        )
        .route(
            "/marketproduct/:marketPlaceAddress/:productId",
            get(product::market_product),
        )
        .route(
            "/sortedproductnames/:marketPlaceAddress",
            get(product::sorted_product_names),
        )
        .route(
            "/sortedratingproducts/:marketPlaceAddress",
            get(product::sorted_rating_products),
        )
        .route(
            "/sortedpriceproducts/:marketPlaceAddress",
            get(product::sorted_price_products),
        )
        .route(
            "/deleteproduct/:marketPlaceAddress/:productId",
            delete(product::delete_product),
        )
        .route(
            "/deleteallmarketproducts",
            delete(product::delete_all_market_products),
        );

    let item_routes = Router::new()
        .route(
            "/createitem/:marketPlaceAddress/:productId",
            post(item::create_item),
        )
        .route("/soldeditems/:marketPlaceAddress", get(item::sold_items))
        .route(
            "/soldeditems/:marketPlaceAddress/:productId",
            get(item::sold_product_items),
        )
        .route(
            "/boughtitems/:marketPlaceAddress/:buyer",
            get(item::bought_items),
        )
        .route(
            "/owneditems/:marketPlaceAddress/:owner",
            get(item::owned_items),
        )
        .route("/getitem/:marketPlaceAddress/:itemId", get(item::get_item))
        .route("/myboughtitems/:buyer", get(item::my_bought_items))
        .route("/myowneditems/:owner", get(item::my_owned_items))
        .route(
            "/updatemarketname/:marketPlaceAddress",
            put(item::propagate_market_name),
        )
        .route(
            "/updateproductname/:marketPlaceAddress/:productId",
            put(item::propagate_product_name),
        );

    let market_review_routes = Router::new()
        .route(
            "/createmarketreview/:marketPlaceAddress",
            post(market_review::create_market_review),
        )
        .route(
            "/updatemarketreview/:marketPlaceAddress",
            put(market_review::update_market_review),
        )
        .route(
            "/marketreviews/:marketPlaceAddress",
            get(market_review::market_reviews),
        )
        .route(
            "/mymarketreview/:marketPlaceAddress/:userWallet",
            get(market_review::my_market_review),
        )
        .route(
            "/deletemymarketreview/:marketPlaceAddress",
            delete(market_review::delete_my_market_review),
        )
        .route(
            "/deleteallmarketreviews",
            delete(market_review::delete_all_market_reviews),
        );

    let product_review_routes = Router::new()
        .route(
            "/createproductreview/:marketPlaceAddress/:productId",
            post(product_review::create_product_review),
        )
        .route(
            "/updateproductreview/:marketPlaceAddress/:productId",
            put(product_review::update_product_review),
        )
        .route(
            "/productreviews/:marketPlaceAddress/:productId",
            get(product_review::product_reviews),
        )
        .route(
            "/myproductreview/:marketPlaceAddress/:userWallet/:productId",
            get(product_review::my_product_review),
        )
        .route(
            "/deletemyproductreview/:marketPlaceAddress/:productId",
            delete(product_review::delete_my_product_review),
        )
        .route(
            "/deleteallproductreviews",
            delete(product_review::delete_all_product_reviews),
        )
        .route(
            "/deleteallmarketproductreviews",
            delete(product_review::delete_all_market_product_reviews),
        );

    let cart_routes = Router::new()
        .route(
            "/addcartitem/:marketPlaceAddress/:productId",
            post(cart::add_cart_item),
        )
        .route(
            "/updatemarketname/:marketPlaceAddress",
            put(cart::propagate_market_name),
        )
        .route(
            "/updateproductdata/:marketPlaceAddress/:productId",
            put(cart::refresh_product_data),
        )
        .route("/mycartitems/:userWallet", get(cart::my_cart_items))
        .route(
            "/mymarketcartitems/:marketPlaceAddress/:userWallet",
            get(cart::my_market_cart_items),
        )
        .route("/sortedpricecarts/:userWallet", get(cart::sorted_price_carts))
        .route(
            "/sortedmarketnames/:userWallet",
            get(cart::sorted_market_names),
        )
        .route("/deletecartitem", delete(cart::delete_cart_item))
        .route(
            "/deleteallmarketcartitems",
            delete(cart::delete_all_market_cart_items),
        )
        .route(
            "/deleteallmycartitems",
            delete(cart::delete_all_my_cart_items),
        );

    let report_routes = Router::new()
        .route("/getissues", get(report::get_issues))
        .route("/reportissue", post(report::report_issue));

    Router::new()
        .route(
            "/api",
            get(|| async { Json(json!({ "success": true, "service": "marketplace directory" })) }),
        )
        .nest("/api/market", market_routes)
        .nest("/api/product", product_routes)
        .nest("/api/item", item_routes)
        .nest("/api/marketReview", market_review_routes)
        .nest("/api/productReview", product_review_routes)
        .nest("/api/mycart", cart_routes)
        .nest("/api/report", report_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
