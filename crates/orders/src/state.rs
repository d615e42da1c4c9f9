//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use coral_client::{CartClient, CatalogClient};
use coral_core::metrics::RequestMetrics;

use crate::config::OrdersConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool, the
/// sibling-service clients, configuration, and the request metrics handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: OrdersConfig,
    pool: PgPool,
    cart: CartClient,
    catalog: CatalogClient,
    metrics: RequestMetrics,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: OrdersConfig, pool: PgPool) -> Self {
        let http = coral_client::http_client();
        let cart = CartClient::new(&config.cart_base_url, http.clone());
        let catalog = CatalogClient::new(&config.catalog_base_url, http);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                cart,
                catalog,
                metrics: RequestMetrics::new("orders"),
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &OrdersConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the cart service client.
    #[must_use]
    pub fn cart(&self) -> &CartClient {
        &self.inner.cart
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
