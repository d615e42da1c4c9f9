//! Cart repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use coral_core::{Cart, CartItem};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct CartRow {
    user_id: String,
    items: Json<Vec<CartItem>>,
    updated_at: DateTime<Utc>,
}

impl From<CartRow> for Cart {
    fn from(row: CartRow) -> Self {
        Self {
            user_id: row.user_id,
            items: row.items.0,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user's cart; `None` when no record exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, user_id: &str) -> Result<Option<Cart>, RepositoryError> {
        let row = sqlx::query_as::<_, CartRow>(
            "SELECT user_id, items, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Cart::from))
    }

    /// Write the full item list for a user, creating the row if needed.
    ///
    /// A single upsert, so each cart write is atomic at the store; callers
    /// sequence stock settlement around it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn put(&self, user_id: &str, items: &[CartItem]) -> Result<Cart, RepositoryError> {
        let row = sqlx::query_as::<_, CartRow>(
            r"
            INSERT INTO carts (user_id, items, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (user_id)
            DO UPDATE SET items = EXCLUDED.items, updated_at = now()
            RETURNING user_id, items, updated_at
            ",
        )
        .bind(user_id)
        .bind(Json(items))
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrite the cart with the empty list. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn clear(&self, user_id: &str) -> Result<(), RepositoryError> {
        self.put(user_id, &[]).await?;
        Ok(())
    }
}
