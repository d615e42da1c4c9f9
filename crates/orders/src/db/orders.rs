//! Order repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use coral_core::{Customer, Order, OrderId, OrderItem, OrderStatus};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: String,
    date: DateTime<Utc>,
    customer: Json<Customer>,
    items: Json<Vec<OrderItem>>,
    total: Decimal,
    status: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::parse(&row.status)
            .ok_or_else(|| RepositoryError::InvalidStatus(row.status.clone()))?;

        Ok(Self {
            id: OrderId::from_uuid(row.id),
            user_id: row.user_id,
            date: row.date,
            customer: row.customer.0,
            items: row.items.0,
            total: row.total,
            status,
        })
    }
}

const SELECT_COLUMNS: &str = "id, user_id, date, customer, items, total, status";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order row exactly as given.
    ///
    /// Checkout inserts with `Pending` status and flips to `Confirmed` via
    /// [`Self::set_status`] once the cart has been cleared.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO orders (id, user_id, date, customer, items, total, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(order.id.as_uuid())
        .bind(&order.user_id)
        .bind(order.date)
        .bind(Json(&order.customer))
        .bind(Json(&order.items))
        .bind(order.total)
        .bind(order.status.as_str())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Move an order to a new lifecycle state, returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has that ID.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {SELECT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("order {id}")))?;

        row.try_into()
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    /// List a user's confirmed orders, newest first.
    ///
    /// Pending rows are checkout-in-flight markers, not purchases; they stay
    /// out of history and remain reachable by id via [`Self::get`] for
    /// reconciliation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders
             WHERE user_id = $1 AND status = $2
             ORDER BY date DESC"
        ))
        .bind(user_id)
        .bind(OrderStatus::Confirmed.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
