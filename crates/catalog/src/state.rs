//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use coral_core::metrics::RequestMetrics;

use crate::config::CatalogConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool,
/// configuration, and the request metrics handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    pool: PgPool,
    metrics: RequestMetrics,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: CatalogConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                metrics: RequestMetrics::new("catalog"),
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the request metrics handle.
    #[must_use]
    pub fn metrics(&self) -> &RequestMetrics {
        &self.inner.metrics
    }
}
