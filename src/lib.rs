//! # Storefront demo
//!
//! A small demonstration web shop: a synthetic in-memory product catalog,
//! per-product view tracking, a "popular products" query, an HTTP/JSON and
//! HTML surface, and an async client for an external job-queue service.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - A catalog of products and stock counts in [`catalog`], generated from a
//!   seedable random source
//! - Thread-safe view counting via [`ViewTracker`]
//! - Detail and popularity queries via [`QueryService`]
//! - An axum router over those queries in [`web`]
//! - A client for the job-queue service via [`QueueClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::catalog::{Catalog, RandomCatalogGenerator};
//! use storefront::{QueryService, ViewTracker};
//!
//! let mut generator = RandomCatalogGenerator::from_seed(42);
//! let catalog = Catalog::generate(&mut generator, 25).unwrap();
//! let service = QueryService::new(Arc::new(catalog), Arc::new(ViewTracker::new()));
//!
//! let sku = service.catalog().products().next().unwrap().sku.clone();
//! let detail = service.get_product_detail(sku.as_ref()).unwrap();
//! assert_eq!(detail.views, 1);
//!
//! let popular = service.get_popular_products(5);
//! assert!(popular.len() <= 5);
//! ```
//!
//! ## Serving HTTP
//!
//! ```rust,ignore
//! use storefront::web::{build_router, AppState};
//! use storefront::StorefrontConfig;
//!
//! let config = StorefrontConfig::builder().seed(7).build()?;
//! let state = AppState::from_config(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, build_router(state)).await?;
//! ```
//!
//! ## Talking to the Job Queue
//!
//! ```rust,ignore
//! use serde_json::json;
//! use storefront::QueueClient;
//!
//! let client = QueueClient::from_host("localhost:3000")?;
//! let job = client.create_job(42, &json!({"order": "sku-1"})).await?;
//! let queue = client.get_queue("orders").await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the catalog and view counts live in explicitly
//!   shared values
//! - **Fail-fast validation**: configuration and queue hosts validate on
//!   construction
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Immutable catalog**: products and stock never change after startup

pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod telemetry;
pub mod views;
pub mod web;

// Re-export public types at crate root for convenience
pub use catalog::{Currency, Money, Product, Sku};
pub use config::{LoggingConfig, QueueHost, StorefrontConfig, StorefrontConfigBuilder};
pub use error::{ConfigError, ErrorKind, StorefrontError};
pub use query::{ProductDetail, QueryService};
pub use views::ViewTracker;

pub use clients::{HttpResponseError, QueueClient, QueueError};
