//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use coral_core::api::{AdjustStockRequest, SetStockRequest};
use coral_core::{Product, ProductId};

use crate::db::ProductRepository;
use crate::db::products::StockAdjustment;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get a product by ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;

    Ok(Json(product))
}

/// Blindly overwrite a product's stock.
///
/// Reads the full record, mutates the stock field, and writes the full
/// record back, last-writer-wins. Two concurrent writes race and the later
/// one silently wins; writers that need the guard use the adjust endpoint
/// instead.
#[instrument(skip(state), fields(product_id = %id, stock = body.stock))]
pub async fn set_stock(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(body): Json<SetStockRequest>,
) -> Result<Json<Product>> {
    let repo = ProductRepository::new(state.pool());

    let mut product = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;

    product.stock = body.stock;
    repo.replace(&product).await?;

    Ok(Json(product))
}

/// Conditionally adjust a product's stock by a signed delta.
///
/// 409 when the adjustment would drive stock below zero.
#[instrument(skip(state), fields(product_id = %id, delta = body.delta))]
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(body): Json<AdjustStockRequest>,
) -> Result<Json<Product>> {
    let outcome = ProductRepository::new(state.pool())
        .adjust_stock(id, body.delta)
        .await?;

    match outcome {
        StockAdjustment::Applied(product) => Ok(Json(product)),
        StockAdjustment::Insufficient => Err(AppError::InsufficientStock),
    }
}
