//! Database seeding commands.

use sqlx::PgPool;
use thiserror::Error;

use coral_catalog::seed;

/// Errors from seed commands.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] coral_catalog::db::RepositoryError),
}

/// Seed the catalog with the sample product set.
///
/// Same behavior as the catalog service's first boot: an empty table gets
/// the sample products, anything else is left alone.
pub async fn catalog() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CATALOG_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| SeedError::MissingEnvVar("CATALOG_DATABASE_URL"))?;

    let pool = PgPool::connect(&database_url).await?;

    let seeded = seed::seed_if_empty(&pool).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "Catalog seeded with sample products");
    } else {
        tracing::info!("Catalog already has products, skipping seed");
    }

    Ok(())
}
