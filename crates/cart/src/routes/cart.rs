//! Cart handlers.
//!
//! This service owns every stock mutation that originates from shopping
//! activity. Adding to a cart reserves units at the catalog before the cart
//! row is rewritten; lowering a line releases them. A failed reservation
//! leaves the cart untouched, so stock is never oversold by a cart write.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use coral_core::api::{AddItemRequest, CartResponse, ReplaceCartRequest, UpdateItemRequest};
use coral_core::{Cart, ProductId};

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// GET /api/cart/{user_id} - fetch a user's cart.
///
/// Users with no stored cart get an empty one; the route never 404s.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CartResponse>> {
    let repo = CartRepository::new(state.pool());
    let cart = repo
        .get(&user_id)
        .await?
        .unwrap_or_else(|| Cart::empty(&user_id));

    Ok(Json(cart.into()))
}

/// POST /api/cart/{user_id}/add - merge a quantity into the cart.
///
/// Reserves the units at the catalog first. If the catalog refuses
/// (insufficient stock, unknown product) the cart is left untouched and the
/// refusal surfaces as a 400.
#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn add_item(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<AddItemRequest>,
) -> Result<Json<CartResponse>> {
    if body.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be positive".to_string(),
        ));
    }

    // Reserve before persisting. If the write below fails the units stay
    // reserved; that errs on the side of never overselling.
    state
        .catalog()
        .adjust_stock(body.product_id, -body.quantity)
        .await?;

    let repo = CartRepository::new(state.pool());
    let mut cart = repo
        .get(&user_id)
        .await?
        .unwrap_or_else(|| Cart::empty(&user_id));
    cart.merge_item(body.product_id, body.quantity);

    let cart = repo.put(&user_id, &cart.items).await?;

    tracing::info!(
        product_id = %body.product_id,
        quantity = body.quantity,
        "Added item to cart"
    );

    Ok(Json(cart.into()))
}

/// PUT /api/cart/{user_id}/items/{product_id} - set a line to an exact
/// quantity; 0 removes the line.
///
/// Settles stock for the difference against the current line, ordered by
/// the sign of the difference: raising a quantity reserves the extra units
/// before the cart is rewritten, lowering it releases them only after. A
/// failure between the two writes then always leaves stock over-reserved,
/// never available for units a cart still holds.
#[instrument(skip(state), fields(user_id = %user_id, product_id = %product_id))]
pub async fn update_item(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, ProductId)>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<CartResponse>> {
    if body.quantity < 0 {
        return Err(AppError::BadRequest(
            "quantity must not be negative".to_string(),
        ));
    }

    let repo = CartRepository::new(state.pool());
    let mut cart = repo
        .get(&user_id)
        .await?
        .unwrap_or_else(|| Cart::empty(&user_id));

    let delta = body.quantity - cart.quantity_of(product_id);
    if delta > 0 {
        state.catalog().adjust_stock(product_id, -delta).await?;
    }

    cart.set_quantity(product_id, body.quantity);
    let cart = repo.put(&user_id, &cart.items).await?;

    if delta < 0 {
        state.catalog().adjust_stock(product_id, -delta).await?;
    }

    Ok(Json(cart.into()))
}

/// PUT /api/cart/{user_id} - unconditional item-list overwrite.
///
/// No stock settlement happens here: the caller is asserting the cart's
/// contents wholesale, as the checkout flow does after it has settled stock
/// line by line. Quantities must still be positive.
#[instrument(skip(state, body), fields(user_id = %user_id))]
pub async fn replace(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ReplaceCartRequest>,
) -> Result<Json<CartResponse>> {
    if body.items.iter().any(|item| item.quantity <= 0) {
        return Err(AppError::BadRequest(
            "item quantities must be positive".to_string(),
        ));
    }

    let repo = CartRepository::new(state.pool());
    let cart = repo.put(&user_id, &body.items).await?;

    Ok(Json(cart.into()))
}

/// DELETE /api/cart/{user_id} - clear the cart. Idempotent; always 204.
///
/// Clearing does not release stock: the one caller is the order service,
/// which clears after the purchased units have left the shelf for good.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode> {
    let repo = CartRepository::new(state.pool());
    repo.clear(&user_id).await?;

    tracing::info!(user_id = %user_id, "Cleared cart");

    Ok(StatusCode::NO_CONTENT)
}
