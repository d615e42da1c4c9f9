//! Cart page and cart mutation handlers.
//!
//! Mutations post regular forms and redirect back to the cart page; a
//! refusal from the cart service (insufficient stock, unknown product)
//! comes back as an error code in the query string and renders as a banner.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coral_client::ClientError;
use coral_core::{Cart, ProductId};

use crate::error::Result;
use crate::filters;
use crate::models::session::current_user_id;
use crate::state::AppState;

/// A single cart line joined with its catalog product.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: i32,
    pub line_total: Decimal,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub item_count: i64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Join a cart against the catalog for display.
///
/// Products that have vanished from the catalog since they were added
/// render as placeholders rather than breaking the page.
pub async fn build_cart_view(state: &AppState, cart: &Cart) -> CartView {
    let products = state.catalog().list_products().await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch products for cart view: {e}");
        Vec::new()
    });

    let mut lines = Vec::with_capacity(cart.items.len());
    let mut total = Decimal::ZERO;
    for item in &cart.items {
        let product = products.iter().find(|p| p.id == item.product_id);
        let (name, price, image) = product.map_or_else(
            || {
                (
                    format!("Product {}", item.product_id),
                    Decimal::ZERO,
                    String::new(),
                )
            },
            |p| (p.name.clone(), p.price, p.image.clone()),
        );

        let line_total = price * Decimal::from(item.quantity);
        total += line_total;
        lines.push(CartLineView {
            product_id: item.product_id,
            name,
            price,
            image,
            quantity: item.quantity,
            line_total,
        });
    }

    CartView {
        lines,
        total,
        item_count: cart.total_quantity(),
    }
}

/// Translate a cart-service refusal into a redirect back to the cart page.
fn refusal_redirect(err: &ClientError) -> Option<Redirect> {
    match err {
        ClientError::Validation(_) | ClientError::NotFound(_) => {
            Some(Redirect::to("/cart?error=stock"))
        }
        _ => None,
    }
}

/// Cart page query parameters.
#[derive(Debug, Deserialize)]
pub struct ShowParams {
    pub error: Option<String>,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: ProductId,
    pub quantity: Option<i32>,
}

/// Update line form data; the product id travels in the path.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub quantity: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub error: Option<String>,
}

/// Display the cart page.
#[instrument(skip(state, session, params))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ShowParams>,
) -> Result<CartShowTemplate> {
    let user_id = current_user_id(&session).await?;

    let cart = match state.cart().get_cart(&user_id).await {
        Ok(cart) => build_cart_view(&state, &cart).await,
        Err(e) => {
            tracing::error!("Failed to fetch cart for {user_id}: {e}");
            CartView::empty()
        }
    };

    let error = params.error.as_deref().map(|code| {
        match code {
            "stock" => "Not enough stock available for that item.",
            "empty" => "Your cart is empty.",
            _ => "Something went wrong. Please try again.",
        }
        .to_string()
    });

    Ok(CartShowTemplate { cart, error })
}

/// Add an item to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Result<Response> {
    let user_id = current_user_id(&session).await?;
    let quantity = form.quantity.unwrap_or(1);

    match state
        .cart()
        .add_item(&user_id, form.product_id, quantity)
        .await
    {
        Ok(_) => Ok(Redirect::to("/cart").into_response()),
        Err(e) => match refusal_redirect(&e) {
            Some(redirect) => Ok(redirect.into_response()),
            None => Err(e.into()),
        },
    }
}

/// Set a cart line to an exact quantity.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
    Form(form): Form<UpdateForm>,
) -> Result<Response> {
    let user_id = current_user_id(&session).await?;

    match state
        .cart()
        .update_item(&user_id, product_id, form.quantity)
        .await
    {
        Ok(_) => Ok(Redirect::to("/cart").into_response()),
        Err(e) => match refusal_redirect(&e) {
            Some(redirect) => Ok(redirect.into_response()),
            None => Err(e.into()),
        },
    }
}

/// Remove a line from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<Response> {
    let user_id = current_user_id(&session).await?;

    match state.cart().update_item(&user_id, product_id, 0).await {
        Ok(_) => Ok(Redirect::to("/cart").into_response()),
        Err(e) => match refusal_redirect(&e) {
            Some(redirect) => Ok(redirect.into_response()),
            None => Err(e.into()),
        },
    }
}

/// Empty the cart, returning every line's units to the shelf.
///
/// Stock is released line by line through the cart service's quantity
/// update before the record is deleted; the delete alone would strand the
/// reserved units. A line whose product has vanished from the catalog is
/// skipped rather than wedging the whole clear.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Response> {
    let user_id = current_user_id(&session).await?;

    let cart = state.cart().get_cart(&user_id).await?;
    for item in &cart.items {
        if let Err(e) = state.cart().update_item(&user_id, item.product_id, 0).await {
            tracing::warn!(
                product_id = %item.product_id,
                "Failed to release stock while clearing cart: {e}"
            );
        }
    }
    state.cart().clear_cart(&user_id).await?;

    Ok(Redirect::to("/cart").into_response())
}
