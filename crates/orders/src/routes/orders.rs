//! Order handlers.
//!
//! Checkout runs as a small saga: the order row is written first with
//! `Pending` status, the cart is cleared at the cart service, and only then
//! does the row flip to `Confirmed`. A crash between the steps leaves a
//! `Pending` order and an intact cart, which is reconcilable; it never
//! leaves a charged customer with no record.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::instrument;

use coral_core::api::CreateOrderRequest;
use coral_core::{Order, OrderId, OrderItem, OrderLineProduct, OrderStatus};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// POST /api/orders - checkout a user's cart.
///
/// Prices are read from the catalog at this moment and denormalized into
/// the order; the units themselves were already reserved when the cart was
/// built, so no stock is touched here.
#[instrument(skip(state, body), fields(user_id = %body.user_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let cart = state.cart().get_cart(&body.user_id).await?;
    if cart.items.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let mut items = Vec::with_capacity(cart.items.len());
    let mut total = Decimal::ZERO;
    for line in &cart.items {
        let product = state.catalog().get_product(line.product_id).await?;
        let item_total = product.price * Decimal::from(line.quantity);
        total += item_total;
        items.push(OrderItem {
            product: OrderLineProduct {
                id: product.id,
                name: product.name,
                price: product.price,
            },
            quantity: line.quantity,
            item_total,
        });
    }

    let order = Order {
        id: OrderId::generate(),
        user_id: body.user_id.clone(),
        date: Utc::now(),
        customer: body.customer,
        items,
        total,
        status: OrderStatus::Pending,
    };

    let repo = OrderRepository::new(state.pool());
    repo.insert(&order).await?;

    // The order exists from here on. Clearing the cart before confirming
    // means a crash can only leave a Pending order with its cart intact,
    // never a cleared cart with no order.
    state.cart().clear_cart(&body.user_id).await?;
    let order = repo.set_status(order.id, OrderStatus::Confirmed).await?;

    tracing::info!(
        order_id = %order.id,
        total = %order.total,
        lines = order.items.len(),
        "Order confirmed"
    );

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/{id} - fetch a single order.
#[instrument(skip(state), fields(order_id = %id))]
pub async fn show(State(state): State<AppState>, Path(id): Path<OrderId>) -> Result<Json<Order>> {
    let repo = OrderRepository::new(state.pool());
    let order = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(order))
}

/// GET /api/orders/user/{user_id} - a user's order history, newest first.
#[instrument(skip(state))]
pub async fn index_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.pool());
    let orders = repo.list_for_user(&user_id).await?;

    Ok(Json(orders))
}
