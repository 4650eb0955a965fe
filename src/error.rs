//! Error types for the storefront.
//!
//! This module contains the configuration error type and the top-level
//! [`StorefrontError`] surfaced by catalog queries and the HTTP layer.
//!
//! # Error Kinds
//!
//! Every failure a requester can observe falls into one of three
//! [`ErrorKind`]s:
//!
//! - [`ErrorKind::NotFound`]: unknown product or inventory identifier
//! - [`ErrorKind::InvalidArgument`]: malformed key or limit input
//! - [`ErrorKind::Remote`]: non-success status or transport failure from
//!   the job-queue client
//!
//! Errors are surfaced directly to the caller. Nothing here retries.
//!
//! # Example
//!
//! ```rust
//! use storefront::{ErrorKind, StorefrontError};
//!
//! let error = StorefrontError::not_found("abc");
//! assert_eq!(error.kind(), ErrorKind::NotFound);
//! ```

use thiserror::Error;

use crate::clients::QueueError;

/// Errors that can occur while building the storefront configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The catalog must contain at least one product.
    #[error("Product count must be greater than zero.")]
    EmptyCatalog,

    /// The price range is empty or not positive.
    #[error("Invalid price range {min}..={max}. Bounds must be positive and min must not exceed max.")]
    InvalidPriceRange {
        /// Lower bound in minor units.
        min: i64,
        /// Upper bound in minor units.
        max: i64,
    },

    /// The price rounding granularity must be positive.
    #[error("Price granularity must be greater than zero, got {granularity}.")]
    InvalidGranularity {
        /// The rejected granularity in minor units.
        granularity: i64,
    },

    /// The currency code is not supported.
    #[error("Unsupported currency '{code}'. Expected one of DKK, EUR, USD, GBP, SEK, NOK.")]
    UnsupportedCurrency {
        /// The rejected currency code.
        code: String,
    },

    /// The job-queue host cannot be empty.
    #[error("Queue host cannot be empty. Provide a host such as 'localhost:3000' or 'http://queue.internal'.")]
    EmptyQueueHost,

    /// Duplicate SKU in a catalog fixture.
    #[error("Duplicate SKU '{sku}' in catalog entries.")]
    DuplicateSku {
        /// The SKU that appeared more than once.
        sku: String,
    },
}

/// Broad classification of a [`StorefrontError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested product or inventory entry does not exist.
    NotFound,
    /// The request carried a malformed key or limit.
    InvalidArgument,
    /// The remote job-queue service failed or could not be reached.
    Remote,
}

/// Top-level error returned by catalog queries and route handlers.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// No product with this SKU exists.
    #[error("Product '{sku}' not found.")]
    NotFound {
        /// The SKU that was looked up.
        sku: String,
    },

    /// A request parameter could not be interpreted.
    #[error("Invalid value '{value}' for '{parameter}': {reason}")]
    InvalidArgument {
        /// The parameter name, e.g. `limit`.
        parameter: &'static str,
        /// The raw value received.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An error from the job-queue client.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// The storefront could not be assembled from its configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Creates a [`StorefrontError::NotFound`] for the given SKU.
    pub fn not_found(sku: impl Into<String>) -> Self {
        Self::NotFound { sku: sku.into() }
    }

    /// Creates a [`StorefrontError::InvalidArgument`].
    pub fn invalid_argument(
        parameter: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            parameter,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the broad kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument { .. } | Self::Config(_) => ErrorKind::InvalidArgument,
            Self::Queue(e) => e.kind(),
        }
    }
}
