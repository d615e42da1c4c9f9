//! Product repository for database operations.

use sqlx::PgPool;

use coral_core::{Product, ProductId};

use super::RepositoryError;

/// Outcome of a conditional stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The guard held; the row was updated.
    Applied(Product),
    /// The adjustment would have driven stock below zero; nothing changed.
    Insufficient,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Full scan of the product table, ordered by id for stable pages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, description, image, stock FROM products ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, description, image, stock FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Replace an entire product record.
    ///
    /// This is the write half of the read-full-record / write-full-record
    /// stock overwrite: every column is rewritten, so a concurrent edit to
    /// any other field loses. The guarded [`Self::adjust_stock`] path exists
    /// for writers that care.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn replace(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $2, price = $3, description = $4, image = $5, stock = $6
            WHERE id = $1
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.stock)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Conditionally adjust stock by a signed delta in a single statement.
    ///
    /// The `stock + delta >= 0` predicate makes concurrent adjustments
    /// serialize on the row without a lost update: either the guard holds
    /// and the delta applies, or nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn adjust_stock(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<StockAdjustment, RepositoryError> {
        let updated = sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET stock = stock + $2
            WHERE id = $1 AND stock + $2 >= 0
            RETURNING id, name, price, description, image, stock
            ",
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(self.pool)
        .await?;

        if let Some(product) = updated {
            return Ok(StockAdjustment::Applied(product));
        }

        // Zero rows: either the product is missing or the guard rejected.
        match self.get(id).await? {
            Some(_) => Ok(StockAdjustment::Insufficient),
            None => Err(RepositoryError::NotFound),
        }
    }

    /// Number of products in the table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count.0)
    }

    /// Insert the given products in one transaction.
    ///
    /// Used by first-boot seeding; all-or-nothing so a crash mid-seed never
    /// leaves a partially populated catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn insert_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for product in products {
            sqlx::query(
                r"
                INSERT INTO products (id, name, price, description, image, stock)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO NOTHING
                ",
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(&product.image)
            .bind(product.stock)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
