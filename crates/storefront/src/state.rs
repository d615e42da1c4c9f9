//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use coral_client::{CartClient, CatalogClient, OrdersClient};
use coral_core::metrics::RequestMetrics;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the session-store pool,
/// the three backend clients, configuration, and the request metrics handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalog: CatalogClient,
    cart: CartClient,
    orders: OrdersClient,
    metrics: RequestMetrics,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let http = coral_client::http_client();
        let catalog = CatalogClient::new(&config.catalog_base_url, http.clone());
        let cart = CartClient::new(&config.cart_base_url, http.clone());
        let orders = OrdersClient::new(&config.orders_base_url, http);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                cart,
                orders,
                metrics: RequestMetrics::new("storefront"),
            }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
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

    /// Get a reference to the cart service client.
    #[must_use]
    pub fn cart(&self) -> &CartClient {
        &self.inner.cart
    }

    /// Get a reference to the order service client.
    #[must_use]
    pub fn orders(&self) -> &OrdersClient {
        &self.inner.orders
    }

    /// Get a reference to the request metrics handle.
    #[must_use]
    pub fn metrics(&self) -> &RequestMetrics {
        &self.inner.metrics
    }
}

/// Create a `PostgreSQL` connection pool for the session store.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
