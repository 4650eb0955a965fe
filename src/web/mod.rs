//! HTTP surface of the storefront.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | HTML home page with the popular products |
//! | GET | `/api/popular-products?limit=N` | `{"data": [ProductDetail, ...]}` |
//! | GET | `/products/{sku}` | HTML detail page |
//! | GET | `/api/products/{sku}` | `{"data": ProductDetail}` |
//! | GET | `/api/inventory` | `{"data": {sku: count, ...}}` |
//! | GET | `/api/inventory/{sku}` | `{"data": count}` |
//!
//! Errors map to 404 (unknown SKU), 400 (malformed `limit`) and 502
//! (queue service failure). JSON routes answer `{"error": "..."}`.

mod error;
pub mod handlers;
pub mod html;
mod state;

pub use error::HtmlError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the storefront router with the provided shared application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/popular-products", get(handlers::api_popular_products))
        .route("/products/{sku}", get(handlers::product_page))
        .route("/api/products/{sku}", get(handlers::api_product_detail))
        .route("/api/inventory", get(handlers::api_inventory))
        .route("/api/inventory/{sku}", get(handlers::api_inventory_item))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
