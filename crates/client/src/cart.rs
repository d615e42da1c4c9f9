//! Client for the cart service API.

use std::sync::Arc;

use tracing::instrument;

use coral_core::api::{AddItemRequest, CartResponse, ReplaceCartRequest, UpdateItemRequest};
use coral_core::{Cart, CartItem, ProductId};

use crate::error::{ClientError, decode, expect_success};
use crate::join_url;

/// Client for the cart service.
#[derive(Clone)]
pub struct CartClient {
    inner: Arc<CartClientInner>,
}

struct CartClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CartClient {
    /// Create a cart client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(CartClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Fetch a user's cart; an empty cart if no record exists.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the cart service is unreachable.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_cart(&self, user_id: &str) -> Result<Cart, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/cart/{user_id}"));
        let response = self.inner.client.get(url).send().await?;
        let body: CartResponse = decode(response).await?;
        Ok(body.into())
    }

    /// Add a quantity of a product to the cart (merge-on-add).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` on insufficient stock or an
    /// unknown product.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id, quantity))]
    pub async fn add_item(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Cart, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/cart/{user_id}/add"));
        let response = self
            .inner
            .client
            .post(url)
            .json(&AddItemRequest {
                product_id,
                quantity,
            })
            .send()
            .await?;
        let body: CartResponse = decode(response).await?;
        Ok(body.into())
    }

    /// Set a cart line to an exact quantity; 0 removes the line. The cart
    /// service settles the stock delta against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` when the increase exceeds available
    /// stock.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id, quantity))]
    pub async fn update_item(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Cart, ClientError> {
        let url = join_url(
            &self.inner.base_url,
            &format!("api/cart/{user_id}/items/{product_id}"),
        );
        let response = self
            .inner
            .client
            .put(url)
            .json(&UpdateItemRequest { quantity })
            .send()
            .await?;
        let body: CartResponse = decode(response).await?;
        Ok(body.into())
    }

    /// Unconditionally overwrite the stored item list.
    ///
    /// No stock side effects; callers settle stock first.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the cart service is unreachable.
    #[instrument(skip(self, items), fields(user_id = %user_id, lines = items.len()))]
    pub async fn replace_cart(
        &self,
        user_id: &str,
        items: Vec<CartItem>,
    ) -> Result<Cart, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/cart/{user_id}"));
        let response = self
            .inner
            .client
            .put(url)
            .json(&ReplaceCartRequest { items })
            .send()
            .await?;
        let body: CartResponse = decode(response).await?;
        Ok(body.into())
    }

    /// Clear the cart. Idempotent; does not restore stock.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the cart service is unreachable.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn clear_cart(&self, user_id: &str) -> Result<(), ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/cart/{user_id}"));
        let response = self.inner.client.delete(url).send().await?;
        expect_success(response).await
    }
}
