//! Route handlers.
//!
//! JSON routes wrap their payload in a `{"data": ...}` envelope. Both
//! product detail routes record a view, so requesting the HTML page and
//! the JSON variant for the same product counts two views.

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::Sku;
use crate::error::StorefrontError;
use crate::query::ProductDetail;

use super::error::HtmlError;
use super::html;
use super::state::AppState;

/// JSON response envelope.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Data<T> {
    /// The response payload.
    pub data: T,
}

impl<T> Data<T> {
    /// Wraps a payload.
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

/// Query parameters of `/api/popular-products`.
#[derive(Debug, Default, Deserialize)]
pub struct PopularParams {
    /// Maximum number of products, kept raw so [`parse_limit`] can report
    /// malformed input.
    pub limit: Option<String>,
}

/// Interprets the raw `limit` parameter.
///
/// Missing means `default`. Anything that is not an integer is rejected.
/// Zero and negative limits are valid and select nothing; integers too
/// large for the platform saturate.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidArgument`] for non-integer input.
pub fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, StorefrontError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<i64>() {
        Ok(limit) if limit <= 0 => Ok(0),
        Ok(limit) => Ok(usize::try_from(limit).unwrap_or(usize::MAX)),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Ok(usize::MAX),
            IntErrorKind::NegOverflow => Ok(0),
            _ => Err(StorefrontError::invalid_argument(
                "limit",
                raw,
                "expected an integer",
            )),
        },
    }
}

/// `GET /`
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let popular = state.query.get_popular_products(state.popular_limit);
    Html(html::home_page(&popular))
}

/// `GET /api/popular-products?limit=N`
pub async fn api_popular_products(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Result<Json<Data<Vec<ProductDetail>>>, StorefrontError> {
    let limit = parse_limit(params.limit.as_deref(), state.popular_limit)?;
    Ok(Json(Data::new(state.query.get_popular_products(limit))))
}

/// `GET /products/{sku}`, counts a view.
pub async fn product_page(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Html<String>, HtmlError> {
    let detail = state.query.get_product_detail(&sku)?;
    Ok(Html(html::product_page(&detail)))
}

/// `GET /api/products/{sku}`, counts a view.
pub async fn api_product_detail(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Data<ProductDetail>>, StorefrontError> {
    Ok(Json(Data::new(state.query.get_product_detail(&sku)?)))
}

/// `GET /api/inventory`
pub async fn api_inventory(State(state): State<AppState>) -> Json<Data<BTreeMap<Sku, u32>>> {
    Json(Data::new(state.query.inventory()))
}

/// `GET /api/inventory/{sku}`
pub async fn api_inventory_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Data<u32>>, StorefrontError> {
    Ok(Json(Data::new(state.query.inventory_for(&sku)?)))
}
