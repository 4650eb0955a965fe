//! Integration tests for the HTTP routes.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot` over a
//! small fixed catalog.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use storefront::catalog::{Catalog, CatalogEntry, Currency, Money, Product, Sku};
use storefront::web::{build_router, AppState};
use storefront::{QueryService, QueueClient, ViewTracker};
use tower::ServiceExt;

fn entry(sku: &str, title: &str, stock: u32, price_minor: i64) -> CatalogEntry {
    CatalogEntry {
        product: Product {
            sku: Sku::new(sku),
            title: title.to_string(),
            description: format!("{title} is a fine product."),
            price: Money::from_minor(price_minor, Currency::Dkk),
        },
        stock,
    }
}

/// Catalog: `a` (3 in stock), `b` (sold out), `c` (5 in stock).
fn test_state() -> AppState {
    let catalog = Catalog::from_entries(vec![
        entry("a", "Ada Jensen", 3, 12_500),
        entry("b", "Bo Hansen", 0, 5_000),
        entry("c", "Cleo Berg", 5, 99_000),
    ])
    .unwrap();
    let query = QueryService::new(Arc::new(catalog), Arc::new(ViewTracker::new()));
    let queue = QueueClient::from_host("localhost:3000").unwrap();
    AppState::new(query, queue, 10)
}

/// Catalog of `count` stocked products, `p00`, `p01`, ...
fn large_state(count: usize) -> AppState {
    let catalog = Catalog::from_entries(
        (0..count).map(|i| entry(&format!("p{i:02}"), &format!("Product {i}"), 1, 5_000)),
    )
    .unwrap();
    let query = QueryService::new(Arc::new(catalog), Arc::new(ViewTracker::new()));
    let queue = QueueClient::from_host("localhost:3000").unwrap();
    AppState::new(query, queue, 10)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

// ============================================================================
// JSON routes
// ============================================================================

#[tokio::test]
async fn test_api_product_detail_wraps_detail_in_data() {
    let app = build_router(test_state());

    let (status, body) = get_json(&app, "/api/products/a").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "product": {
                    "sku": "a",
                    "title": "Ada Jensen",
                    "description": "Ada Jensen is a fine product.",
                    "price": {"amount": "125.00", "currency_code": "DKK"}
                },
                "inventory": 3,
                "url": "/products/a",
                "views": 1
            }
        })
    );
}

#[tokio::test]
async fn test_api_product_detail_counts_every_request() {
    let app = build_router(test_state());

    get(&app, "/api/products/c").await;
    let (_, body) = get_json(&app, "/api/products/c").await;

    assert_eq!(body["data"]["views"], 2);
}

#[tokio::test]
async fn test_html_and_json_detail_routes_both_count_views() {
    let app = build_router(test_state());

    let (status, _) = get(&app, "/products/a").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get_json(&app, "/api/products/a").await;

    assert_eq!(body["data"]["views"], 2);
}

#[tokio::test]
async fn test_api_product_detail_unknown_sku_is_404() {
    let app = build_router(test_state());

    let (status, body) = get_json(&app, "/api/products/unknown-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("unknown-id"));
}

#[tokio::test]
async fn test_api_popular_products_ranks_by_views_and_skips_sold_out() {
    let app = build_router(test_state());
    for _ in 0..3 {
        get(&app, "/api/products/c").await;
    }
    get(&app, "/api/products/a").await;
    for _ in 0..5 {
        get(&app, "/api/products/b").await;
    }

    let (status, body) = get_json(&app, "/api/popular-products").await;

    assert_eq!(status, StatusCode::OK);
    let skus: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["product"]["sku"].as_str().unwrap())
        .collect();
    assert_eq!(skus, vec!["c", "a"]);
    assert_eq!(body["data"][0]["views"], 3);
}

#[tokio::test]
async fn test_api_popular_products_honours_limit() {
    let app = build_router(test_state());

    let (_, body) = get_json(&app, "/api/popular-products?limit=1").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = get_json(&app, "/api/popular-products?limit=0").await;
    assert_eq!(body["data"], json!([]));

    let (_, body) = get_json(&app, "/api/popular-products?limit=-3").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_api_popular_products_defaults_to_ten() {
    let app = build_router(large_state(12));

    let (status, body) = get_json(&app, "/api/popular-products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (_, body) = get_json(&app, "/api/popular-products?limit=12").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_api_popular_products_saturates_huge_limit() {
    let app = build_router(large_state(12));

    let (status, body) =
        get_json(&app, "/api/popular-products?limit=99999999999999999999999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_api_popular_products_rejects_malformed_limit() {
    let app = build_router(test_state());

    let (status, body) = get_json(&app, "/api/popular-products?limit=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_api_inventory_lists_every_sku() {
    let app = build_router(test_state());

    let (status, body) = get_json(&app, "/api/inventory").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": {"a": 3, "b": 0, "c": 5}}));
}

#[tokio::test]
async fn test_api_inventory_item() {
    let app = build_router(test_state());

    let (status, body) = get_json(&app, "/api/inventory/b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": 0}));

    let (status, _) = get_json(&app, "/api/inventory/zzz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_routes_do_not_count_views() {
    let app = build_router(test_state());

    get(&app, "/api/inventory/a").await;
    get(&app, "/api/inventory").await;
    let (_, body) = get_json(&app, "/api/products/a").await;

    assert_eq!(body["data"]["views"], 1);
}

// ============================================================================
// HTML routes
// ============================================================================

#[tokio::test]
async fn test_home_page_lists_stocked_products() {
    let app = build_router(test_state());

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/products/a\""));
    assert!(body.contains("href=\"/products/c\""));
    assert!(!body.contains("href=\"/products/b\""));
}

#[tokio::test]
async fn test_home_page_shows_ten_products() {
    let app = build_router(large_state(12));

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<li>").count(), 10);
}

#[tokio::test]
async fn test_home_page_does_not_count_views() {
    let app = build_router(test_state());

    get(&app, "/").await;
    let (_, body) = get_json(&app, "/api/products/a").await;

    assert_eq!(body["data"]["views"], 1);
}

#[tokio::test]
async fn test_product_page_renders_detail() {
    let app = build_router(test_state());

    let (status, body) = get(&app, "/products/c").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Cleo Berg"));
    assert!(body.contains("990.00 DKK"));
    assert!(body.contains("5 in stock"));
    assert!(body.contains("Viewed 1 times"));
}

#[tokio::test]
async fn test_product_page_unknown_sku_renders_html_404() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/products/unknown-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/inventory")
                .header(header::ORIGIN, "http://shop.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
