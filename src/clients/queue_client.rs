//! HTTP client for the miniq job-queue service.
//!
//! This module provides the [`QueueClient`] type, a thin wrapper over the
//! service's keyed job resource. Every endpoint answers with a JSON
//! envelope `{"data": ...}`; the client returns the `data` value.

use reqwest::RequestBuilder;
use serde_json::Value;
use std::fmt;

use crate::clients::errors::{HttpResponseError, QueueError};
use crate::config::QueueHost;

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the miniq job-queue service.
///
/// | Operation | Request |
/// |---|---|
/// | [`create_job`](Self::create_job) | `POST {base}/{int_key}` |
/// | [`get_queueset`](Self::get_queueset) | `GET {base}` |
/// | [`get_queue`](Self::get_queue) | `GET {base}/{key}` |
///
/// Requests have no timeout and are never retried.
///
/// # Thread Safety
///
/// `QueueClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use storefront::clients::QueueClient;
///
/// let client = QueueClient::from_host("localhost:3000")?;
/// assert_eq!(client.base_uri(), "http://localhost:3000");
///
/// let job = client.create_job(7, &serde_json::json!({"task": "reindex"})).await?;
/// ```
#[derive(Clone, Debug)]
pub struct QueueClient {
    client: reqwest::Client,
    base_uri: String,
}

// Verify QueueClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueueClient>();
};

impl QueueClient {
    /// Creates a client for an already validated host.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Network`] if the underlying HTTP client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(host: &QueueHost) -> Result<Self, QueueError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("storefront-demo v{CLIENT_VERSION} | Rust {rust_version}"))
            .build()?;

        Ok(Self {
            client,
            base_uri: host.base_uri().to_string(),
        })
    }

    /// Creates a client from a raw host string, normalizing it first.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidHost`] if the host is empty.
    pub fn from_host(host: &str) -> Result<Self, QueueError> {
        Self::new(&QueueHost::new(host)?)
    }

    /// Returns the normalized base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Submits a job under an integer key.
    ///
    /// The key is formatted with [`Display`](fmt::Display) and must parse as
    /// an integer; surrounding whitespace is ignored. The payload is sent as
    /// the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidKey`] without sending anything if the key
    /// is not an integer, and the remote error variants otherwise.
    pub async fn create_job<K: fmt::Display>(
        &self,
        key: K,
        payload: &Value,
    ) -> Result<Value, QueueError> {
        let key = key.to_string();
        let job_id: i64 = key
            .trim()
            .parse()
            .map_err(|_| QueueError::InvalidKey { key: key.clone() })?;

        let url = format!("{}/{job_id}", self.base_uri);
        tracing::debug!(%url, "creating queue job");
        self.send(self.client.post(&url).json(payload), &url).await
    }

    /// Fetches the set of queues.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Response`] on a non-2xx status, or another
    /// remote error variant.
    pub async fn get_queueset(&self) -> Result<Value, QueueError> {
        tracing::debug!(url = %self.base_uri, "fetching queue set");
        self.send(self.client.get(&self.base_uri), &self.base_uri)
            .await
    }

    /// Fetches a single queue. Unlike [`create_job`](Self::create_job), any
    /// key is accepted and appended to the base URI as is, so a key such as
    /// `orders/high` addresses the nested path.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Response`] on a non-2xx status, or another
    /// remote error variant.
    pub async fn get_queue(&self, key: &str) -> Result<Value, QueueError> {
        let url = format!("{}/{key}", self.base_uri);
        tracing::debug!(%url, "fetching queue");
        self.send(self.client.get(&url), &url).await
    }

    /// Sends the request and unwraps the `data` envelope.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Value, QueueError> {
        let res = request.send().await?;
        let code = res.status().as_u16();
        let success = res.status().is_success();
        let body_text = res.text().await?;

        if !success {
            tracing::warn!(%url, code, "queue service returned an error status");
            return Err(HttpResponseError {
                code,
                message: body_text,
            }
            .into());
        }

        match serde_json::from_str::<Value>(&body_text)? {
            Value::Object(mut body) => body.remove("data").ok_or(QueueError::MissingData),
            _ => Err(QueueError::MissingData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction_normalizes_host() {
        let client = QueueClient::from_host("localhost:3000").unwrap();
        assert_eq!(client.base_uri(), "http://localhost:3000");

        let client = QueueClient::from_host("https://queue.example.com/ignored").unwrap();
        assert_eq!(client.base_uri(), "https://queue.example.com");
    }

    #[test]
    fn test_client_construction_rejects_empty_host() {
        let result = QueueClient::from_host("");
        assert!(matches!(result, Err(QueueError::InvalidHost(_))));
    }

    #[tokio::test]
    async fn test_create_job_rejects_non_integer_key_before_sending() {
        // Port 9 (discard) is never contacted: validation fails first.
        let client = QueueClient::from_host("http://127.0.0.1:9").unwrap();

        let result = client.create_job("abc", &serde_json::json!({})).await;
        assert!(matches!(result, Err(QueueError::InvalidKey { key }) if key == "abc"));

        let result = client.create_job("1.5", &serde_json::json!({})).await;
        assert!(matches!(result, Err(QueueError::InvalidKey { .. })));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueueClient>();
    }
}
