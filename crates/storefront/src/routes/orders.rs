//! Checkout flow and order history pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coral_client::ClientError;
use coral_core::{Customer, Order, OrderId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::current_user_id;
use crate::routes::cart::{CartView, build_cart_view};
use crate::state::AppState;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
}

/// Order confirmation / detail template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order: Order,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrderIndexTemplate {
    pub orders: Vec<Order>,
}

/// Display the checkout form with a cart summary.
///
/// An empty cart has nothing to check out; redirect back to the cart page.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Response> {
    let user_id = current_user_id(&session).await?;

    let cart = state.cart().get_cart(&user_id).await?;
    if cart.items.is_empty() {
        return Ok(Redirect::to("/cart?error=empty").into_response());
    }

    let cart = build_cart_view(&state, &cart).await;
    Ok(CheckoutTemplate { cart }.into_response())
}

/// Place the order and redirect to its confirmation page.
#[instrument(skip(state, session, form))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let name = form.name.trim();
    let email = form.email.trim();
    let address = form.address.trim();
    if name.is_empty() || email.is_empty() || address.is_empty() {
        return Err(AppError::BadRequest(
            "name, email, and address are required".to_string(),
        ));
    }

    let user_id = current_user_id(&session).await?;
    let customer = Customer {
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    };

    match state.orders().create_order(&user_id, customer).await {
        Ok(order) => {
            Ok(Redirect::to(&format!("/orders/confirmation/{}", order.id)).into_response())
        }
        // Raced with another tab emptying the cart
        Err(ClientError::Validation(_)) => Ok(Redirect::to("/cart?error=empty").into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Display the order history for this session, newest first.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<OrderIndexTemplate> {
    let user_id = current_user_id(&session).await?;

    let orders = state
        .orders()
        .list_orders_for_user(&user_id)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch order history for {user_id}: {e}");
            Vec::new()
        });

    Ok(OrderIndexTemplate { orders })
}

/// Display a single order.
///
/// The order ID is unguessable, but the session check keeps one shopper's
/// confirmation URL from rendering in another shopper's session.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<OrderId>,
) -> Result<ConfirmationTemplate> {
    let user_id = current_user_id(&session).await?;

    let order = state.orders().get_order(id).await.map_err(|e| match e {
        ClientError::NotFound(_) => AppError::NotFound(format!("order {id}")),
        other => AppError::Service(other),
    })?;

    if order.user_id != user_id {
        return Err(AppError::NotFound(format!("order {id}")));
    }

    Ok(ConfirmationTemplate { order })
}
