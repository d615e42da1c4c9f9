//! Database access for the order service.
//!
//! # Database: `coral_orders`
//!
//! One table, `orders`, exclusively owned by this service. Migrations live
//! in `crates/orders/migrations/` and run via:
//! ```bash
//! cargo run -p coral-cli -- migrate orders
//! ```

pub mod orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use orders::OrderRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Stored status string is not a known lifecycle state.
    #[error("invalid order status: {0}")]
    InvalidStatus(String),

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
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
