//! Client for the order service API.

use std::sync::Arc;

use tracing::instrument;

use coral_core::api::CreateOrderRequest;
use coral_core::{Customer, Order, OrderId};

use crate::error::{ClientError, decode};
use crate::join_url;

/// Client for the order service.
#[derive(Clone)]
pub struct OrdersClient {
    inner: Arc<OrdersClientInner>,
}

struct OrdersClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl OrdersClient {
    /// Create an orders client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(OrdersClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Run checkout for a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` when the cart is empty.
    #[instrument(skip(self, customer), fields(user_id = %user_id))]
    pub async fn create_order(
        &self,
        user_id: &str,
        customer: Customer,
    ) -> Result<Order, ClientError> {
        let url = join_url(&self.inner.base_url, "api/orders");
        let response = self
            .inner
            .client
            .post(url)
            .json(&CreateOrderRequest {
                user_id: user_id.to_string(),
                customer,
            })
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the order does not exist.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/orders/{id}"));
        let response = self.inner.client.get(url).send().await?;
        decode(response).await
    }

    /// Fetch the confirmed orders for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the order service is unreachable.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/orders/user/{user_id}"));
        let response = self.inner.client.get(url).send().await?;
        decode(response).await
    }
}
