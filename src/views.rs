//! Per-product view counting.
//!
//! Counts live for the lifetime of the process and are lost on restart.
//! Increments are serialized through a mutex, so concurrent detail views
//! of the same product never lose an update.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::catalog::Sku;

/// Tracks how many times each product's detail has been viewed.
///
/// Unknown SKUs count as zero views. Callers are expected to validate the
/// SKU against the catalog before incrementing.
///
/// # Example
///
/// ```rust
/// use storefront::catalog::Sku;
/// use storefront::ViewTracker;
///
/// let tracker = ViewTracker::new();
/// let sku = Sku::new("abc");
/// assert_eq!(tracker.views("abc"), 0);
/// assert_eq!(tracker.increment(&sku), 1);
/// assert_eq!(tracker.increment(&sku), 2);
/// assert_eq!(tracker.views("abc"), 2);
/// ```
#[derive(Debug, Default)]
pub struct ViewTracker {
    counts: Mutex<HashMap<Sku, u64>>,
}

impl ViewTracker {
    /// Creates a tracker with every count at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with preset counts.
    #[must_use]
    pub fn with_counts(counts: impl IntoIterator<Item = (Sku, u64)>) -> Self {
        Self {
            counts: Mutex::new(counts.into_iter().collect()),
        }
    }

    /// Adds one view to `sku` and returns the new count.
    pub fn increment(&self, sku: &Sku) -> u64 {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        let count = counts.entry(sku.clone()).or_insert(0);
        *count += 1;
        tracing::debug!(sku = %sku, views = *count, "product viewed");
        *count
    }

    /// Returns the current count for `sku`, zero when never viewed.
    #[must_use]
    pub fn views(&self, sku: &str) -> u64 {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sku)
            .copied()
            .unwrap_or(0)
    }

    /// Returns a copy of every recorded count.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<Sku, u64> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

// Verify ViewTracker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ViewTracker>();
};
