//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use coral_client::CatalogClient;
use coral_core::metrics::RequestMetrics;

use crate::config::CartConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool, the
/// catalog client, configuration, and the request metrics handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CartConfig,
    pool: PgPool,
    catalog: CatalogClient,
    metrics: RequestMetrics,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: CartConfig, pool: PgPool) -> Self {
        let catalog = CatalogClient::new(&config.catalog_base_url, coral_client::http_client());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                metrics: RequestMetrics::new("cart"),
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CartConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the catalog service client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the request metrics handle.
    #[must_use]
    pub fn metrics(&self) -> &RequestMetrics {
        &self.inner.metrics
    }
}
