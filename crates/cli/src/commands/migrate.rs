//! Database migration commands.
//!
//! Each service owns its database and its migrations directory; the CLI is
//! the only thing that runs them. Services do not migrate on boot.
//!
//! # Environment Variables
//!
//! - `CATALOG_DATABASE_URL` - catalog service database
//! - `CART_DATABASE_URL` - cart service database
//! - `ORDERS_DATABASE_URL` - order service database
//! - `STOREFRONT_DATABASE_URL` - storefront session store
//!
//! Each falls back to the generic `DATABASE_URL` when unset.

use sqlx::PgPool;
use thiserror::Error;
use tower_sessions_sqlx_store::PostgresStore;

/// Errors from migration commands.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database named by `key`, falling back to `DATABASE_URL`.
async fn connect(key: &'static str) -> Result<PgPool, MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var(key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar(key))?;

    Ok(PgPool::connect(&database_url).await?)
}

/// Run catalog database migrations.
pub async fn catalog() -> Result<(), MigrationError> {
    let pool = connect("CATALOG_DATABASE_URL").await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../catalog/migrations").run(&pool).await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}

/// Run cart database migrations.
pub async fn cart() -> Result<(), MigrationError> {
    let pool = connect("CART_DATABASE_URL").await?;

    tracing::info!("Running cart migrations...");
    sqlx::migrate!("../cart/migrations").run(&pool).await?;

    tracing::info!("Cart migrations complete");
    Ok(())
}

/// Run order database migrations.
pub async fn orders() -> Result<(), MigrationError> {
    let pool = connect("ORDERS_DATABASE_URL").await?;

    tracing::info!("Running order migrations...");
    sqlx::migrate!("../orders/migrations").run(&pool).await?;

    tracing::info!("Order migrations complete");
    Ok(())
}

/// Create the storefront session table.
///
/// The storefront keeps no tables of its own; tower-sessions manages the
/// schema for its `PostgreSQL` store.
pub async fn storefront() -> Result<(), MigrationError> {
    let pool = connect("STOREFRONT_DATABASE_URL").await?;

    tracing::info!("Creating storefront session table...");
    let store = PostgresStore::new(pool);
    store.migrate().await?;

    tracing::info!("Storefront session table ready");
    Ok(())
}
