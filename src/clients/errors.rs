//! Error types for the job-queue client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the queue service
//! - [`QueueError`]: Unified error type for every client operation
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront::clients::{QueueClient, QueueError};
//!
//! match client.get_queue("emails").await {
//!     Ok(queue) => println!("Queue: {queue}"),
//!     Err(QueueError::Response(e)) => println!("Queue error {}: {}", e.code, e.message),
//!     Err(QueueError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::error::{ConfigError, ErrorKind};

/// Error returned when the queue service answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use storefront::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"no such queue"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"Queue service responded with 404: {"error":"no such queue"}"#);
/// ```
#[derive(Debug, Error)]
#[error("Queue service responded with {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for job-queue operations.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The job key is not an integer. Raised before any request is sent.
    #[error("Invalid job key '{key}'. Job keys must be integers.")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// The configured host could not be used.
    #[error(transparent)]
    InvalidHost(#[from] ConfigError),

    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not JSON.
    #[error("Could not decode queue response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response JSON has no `data` field.
    #[error("Queue response has no 'data' field.")]
    MissingData,
}

impl QueueError {
    /// Returns the broad kind of this error.
    ///
    /// Bad keys and hosts are [`ErrorKind::InvalidArgument`]; everything
    /// that went wrong on or on the way to the remote side is
    /// [`ErrorKind::Remote`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey { .. } | Self::InvalidHost(_) => ErrorKind::InvalidArgument,
            Self::Response(_) | Self::Network(_) | Self::Decode(_) | Self::MissingData => {
                ErrorKind::Remote
            }
        }
    }
}
