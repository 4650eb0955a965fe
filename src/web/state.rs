//! Shared state handed to the router.

use std::sync::Arc;

use crate::catalog::{Catalog, RandomCatalogGenerator};
use crate::clients::QueueClient;
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::query::QueryService;
use crate::views::ViewTracker;

/// Shared application state passed to every route handler.
///
/// Cloning is cheap; all clones see the same catalog and view counts.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Catalog and view-count queries.
    pub query: QueryService,
    /// Constructed at startup; no catalog route uses it yet.
    pub queue: QueueClient,
    /// Number of popular products shown when no `limit` is given.
    pub popular_limit: usize,
}

impl AppState {
    /// Build a state container from its constituent parts.
    #[must_use]
    pub const fn new(query: QueryService, queue: QueueClient, popular_limit: usize) -> Self {
        Self {
            query,
            queue,
            popular_limit,
        }
    }

    /// Generate the catalog and construct every service from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Config`] if catalog generation fails and
    /// [`StorefrontError::Queue`] if the queue client cannot be built.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let mut generator = RandomCatalogGenerator::from_config(config);
        let catalog = Catalog::generate(&mut generator, config.product_count())?;
        tracing::info!(
            products = catalog.len(),
            currency = %config.currency(),
            seed = ?config.seed(),
            "catalog generated"
        );

        let queue = QueueClient::new(config.queue_host())?;
        tracing::info!(queue = %queue.base_uri(), "queue client configured");

        let query = QueryService::new(Arc::new(catalog), Arc::new(ViewTracker::new()));
        Ok(Self::new(query, queue, config.popular_limit()))
    }
}
