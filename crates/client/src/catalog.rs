//! Client for the catalog service API.

use std::sync::Arc;

use tracing::instrument;

use coral_core::api::{AdjustStockRequest, SetStockRequest};
use coral_core::{Product, ProductId};

use crate::error::{ClientError, decode};
use crate::join_url;

/// Client for the catalog service (products and stock).
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a catalog client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the catalog service is unreachable or
    /// responds non-2xx.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = join_url(&self.inner.base_url, "api/products");
        let response = self.inner.client.get(url).send().await?;
        decode(response).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the product does not exist.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/products/{id}"));
        let response = self.inner.client.get(url).send().await?;
        decode(response).await
    }

    /// Blindly overwrite a product's stock (last-writer-wins).
    ///
    /// Sibling services should prefer [`Self::adjust_stock`]; this endpoint
    /// exists for operator tooling and contract fidelity.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the product does not exist.
    #[instrument(skip(self), fields(product_id = %id, stock))]
    pub async fn set_stock(&self, id: ProductId, stock: i32) -> Result<Product, ClientError> {
        let url = join_url(&self.inner.base_url, &format!("api/products/{id}/stock"));
        let response = self
            .inner
            .client
            .put(url)
            .json(&SetStockRequest { stock })
            .send()
            .await?;
        decode(response).await
    }

    /// Conditionally adjust a product's stock by a signed delta.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` when the adjustment would drive
    /// stock below zero, `ClientError::NotFound` for a missing product.
    #[instrument(skip(self), fields(product_id = %id, delta))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i32) -> Result<Product, ClientError> {
        let url = join_url(
            &self.inner.base_url,
            &format!("api/products/{id}/stock/adjust"),
        );
        let response = self
            .inner
            .client
            .post(url)
            .json(&AdjustStockRequest { delta })
            .send()
            .await?;
        decode(response).await
    }
}
