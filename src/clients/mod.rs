//! HTTP client types for the miniq job-queue service.
//!
//! # Overview
//!
//! - [`QueueClient`]: async client over the keyed job resource
//! - [`QueueError`]: unified error type for client operations
//! - [`HttpResponseError`]: non-2xx responses from the service
//!
//! The storefront constructs one client at startup and keeps it in the
//! application state; no catalog route calls it yet.
//!
//! # Retry Behavior
//!
//! None. Failures are returned to the caller as-is, and requests carry no
//! timeout. Callers that need resilience should layer it on top.

mod errors;
mod queue_client;

pub use errors::{HttpResponseError, QueueError};
pub use queue_client::{QueueClient, CLIENT_VERSION};
