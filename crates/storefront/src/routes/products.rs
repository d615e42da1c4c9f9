//! Product listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use tracing::instrument;

use coral_client::ClientError;
use coral_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub stock: i32,
}

impl ProductView {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            image: product.image,
            stock: product.stock,
        }
    }
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Display the product listing.
///
/// A catalog outage renders an empty listing rather than an error page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.catalog().list_products().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch product listing: {e}");
            Vec::new()
        },
        |products| products.into_iter().map(ProductView::from).collect(),
    );

    ProductIndexTemplate { products }
}

/// Display a single product with its add-to-cart form.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<ProductShowTemplate> {
    let product = state.catalog().get_product(id).await.map_err(|e| match e {
        ClientError::NotFound(_) => AppError::NotFound(format!("product {id}")),
        other => AppError::Service(other),
    })?;

    Ok(ProductShowTemplate {
        product: product.into(),
    })
}
