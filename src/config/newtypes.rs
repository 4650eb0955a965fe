//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated job-queue host, normalized to a base URI.
///
/// # Accepted Formats
///
/// - `http://queue.internal:3000/ignored/path` - scheme, host and port are kept
/// - `localhost:3000` - no usable scheme and host, prefixed with `http://`
/// - `queue.internal` - prefixed with `http://`
///
/// The normalization happens once, on construction.
///
/// # Example
///
/// ```rust
/// use storefront::QueueHost;
///
/// let host = QueueHost::new("localhost:3000").unwrap();
/// assert_eq!(host.base_uri(), "http://localhost:3000");
///
/// let host = QueueHost::new("https://queue.example.com/api").unwrap();
/// assert_eq!(host.base_uri(), "https://queue.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueHost {
    raw: String,
    base_uri: String,
}

impl QueueHost {
    const DEFAULT_SCHEME: &'static str = "http";

    /// Creates a new validated queue host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyQueueHost`] if the host is empty.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = host.into().trim().to_string();
        if raw.is_empty() {
            return Err(ConfigError::EmptyQueueHost);
        }

        let base_uri = match Url::parse(&raw) {
            Ok(url) if url.host_str().is_some() => Self::origin(&url),
            _ => format!(
                "{}://{}",
                Self::DEFAULT_SCHEME,
                raw.trim_end_matches('/')
            ),
        };

        Ok(Self { raw, base_uri })
    }

    /// Returns `scheme://[userinfo@]host[:port]` for a parsed URL.
    fn origin(url: &Url) -> String {
        let mut origin = format!("{}://", url.scheme());
        if !url.username().is_empty() {
            origin.push_str(url.username());
            if let Some(password) = url.password() {
                origin.push(':');
                origin.push_str(password);
            }
            origin.push('@');
        }
        origin.push_str(url.host_str().unwrap_or_default());
        if let Some(port) = url.port() {
            origin.push_str(&format!(":{port}"));
        }
        origin
    }

    /// Returns the normalized base URI without a trailing slash.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl Default for QueueHost {
    fn default() -> Self {
        Self {
            raw: "localhost:3000".to_string(),
            base_uri: "http://localhost:3000".to_string(),
        }
    }
}

impl AsRef<str> for QueueHost {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for QueueHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_uri)
    }
}

impl Serialize for QueueHost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for QueueHost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
