//! Configuration types for the storefront.
//!
//! This module provides the configuration used to generate the catalog,
//! reach the job-queue service and serve HTTP.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`QueueHost`]: A validated job-queue host normalized to a base URI
//! - [`LoggingConfig`]: Log level and output format
//!
//! # Example
//!
//! ```rust
//! use storefront::{Currency, QueueHost, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .product_count(20)
//!     .currency(Currency::Eur)
//!     .queue_host(QueueHost::new("localhost:3000").unwrap())
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.product_count(), 20);
//! ```

mod newtypes;

pub use newtypes::QueueHost;

use std::net::{Ipv4Addr, SocketAddr};

use crate::catalog::{Currency, PriceRule};
use crate::error::ConfigError;

/// Log level filter and output format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `storefront=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration for the storefront.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    product_count: usize,
    currency: Currency,
    price_rule: PriceRule,
    max_stock: u32,
    popular_limit: usize,
    seed: Option<u64>,
    queue_host: QueueHost,
    bind_address: SocketAddr,
    logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Default number of generated products.
    pub const DEFAULT_PRODUCT_COUNT: usize = 100;
    /// Default number of popular products returned when no limit is given.
    pub const DEFAULT_POPULAR_LIMIT: usize = 10;
    /// Default listen port.
    pub const DEFAULT_PORT: u16 = 5000;

    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the number of products to generate.
    #[must_use]
    pub const fn product_count(&self) -> usize {
        self.product_count
    }

    /// Returns the currency of generated prices.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the price rule.
    #[must_use]
    pub const fn price_rule(&self) -> PriceRule {
        self.price_rule
    }

    /// Returns the inclusive upper bound of generated stock counts.
    #[must_use]
    pub const fn max_stock(&self) -> u32 {
        self.max_stock
    }

    /// Returns the number of popular products shown by default.
    #[must_use]
    pub const fn popular_limit(&self) -> usize {
        self.popular_limit
    }

    /// Returns the random seed, if one was configured.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the job-queue host.
    #[must_use]
    pub const fn queue_host(&self) -> &QueueHost {
        &self.queue_host
    }

    /// Returns the HTTP listen address.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Returns the logging configuration.
    #[must_use]
    pub const fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            product_count: Self::DEFAULT_PRODUCT_COUNT,
            currency: Currency::default(),
            price_rule: PriceRule::default(),
            max_stock: 10,
            popular_limit: Self::DEFAULT_POPULAR_LIMIT,
            seed: None,
            queue_host: QueueHost::default(),
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, Self::DEFAULT_PORT)),
            logging: LoggingConfig::default(),
        }
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// No field is required.
///
/// # Defaults
///
/// - `product_count`: 100
/// - `currency`: DKK
/// - `price_rule`: 5000..=250000 minor units, rounded up to multiples of 500
/// - `max_stock`: 10
/// - `popular_limit`: 10
/// - `seed`: `None` (OS entropy)
/// - `queue_host`: `localhost:3000`
/// - `bind_address`: `127.0.0.1:5000`
/// - `logging`: level `info`, plain text
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    product_count: Option<usize>,
    currency: Option<Currency>,
    price_rule: Option<PriceRule>,
    max_stock: Option<u32>,
    popular_limit: Option<usize>,
    seed: Option<u64>,
    queue_host: Option<QueueHost>,
    bind_address: Option<SocketAddr>,
    logging: Option<LoggingConfig>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of products to generate.
    #[must_use]
    pub const fn product_count(mut self, count: usize) -> Self {
        self.product_count = Some(count);
        self
    }

    /// Sets the currency of generated prices.
    #[must_use]
    pub const fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the price rule.
    #[must_use]
    pub const fn price_rule(mut self, rule: PriceRule) -> Self {
        self.price_rule = Some(rule);
        self
    }

    /// Sets the inclusive upper bound of generated stock counts.
    #[must_use]
    pub const fn max_stock(mut self, max_stock: u32) -> Self {
        self.max_stock = Some(max_stock);
        self
    }

    /// Sets the number of popular products shown by default.
    #[must_use]
    pub const fn popular_limit(mut self, limit: usize) -> Self {
        self.popular_limit = Some(limit);
        self
    }

    /// Sets the random seed for reproducible catalogs.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the job-queue host.
    #[must_use]
    pub fn queue_host(mut self, host: QueueHost) -> Self {
        self.queue_host = Some(host);
        self
    }

    /// Sets the HTTP listen address.
    #[must_use]
    pub const fn bind_address(mut self, address: SocketAddr) -> Self {
        self.bind_address = Some(address);
        self
    }

    /// Sets the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the [`StorefrontConfig`], validating the catalog settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCatalog`] if `product_count` is zero.
    /// Price rules are validated when they are created with
    /// [`PriceRule::new`].
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let defaults = StorefrontConfig::default();

        let product_count = self.product_count.unwrap_or(defaults.product_count);
        if product_count == 0 {
            return Err(ConfigError::EmptyCatalog);
        }

        Ok(StorefrontConfig {
            product_count,
            currency: self.currency.unwrap_or(defaults.currency),
            price_rule: self.price_rule.unwrap_or(defaults.price_rule),
            max_stock: self.max_stock.unwrap_or(defaults.max_stock),
            popular_limit: self.popular_limit.unwrap_or(defaults.popular_limit),
            seed: self.seed,
            queue_host: self.queue_host.unwrap_or(defaults.queue_host),
            bind_address: self.bind_address.unwrap_or(defaults.bind_address),
            logging: self.logging.unwrap_or(defaults.logging),
        })
    }
}
