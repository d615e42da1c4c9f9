//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page (featured products)
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness check (probes session store)
//! GET  /metrics            - Request counters, text exposition
//!
//! # Products
//! GET  /products           - Product listing
//! GET  /products/{id}      - Product detail with add-to-cart form
//!
//! # Cart
//! GET  /cart                  - Cart page
//! POST /cart/add              - Add to cart, redirects back to /cart
//! POST /cart/update/{id}      - Set a line quantity, redirects back to /cart
//! POST /cart/remove/{id}      - Remove a line, redirects back to /cart
//! POST /cart/clear            - Release every line's stock, then empty the cart
//!
//! # Checkout and orders
//! GET  /orders/checkout          - Checkout form with cart summary
//! POST /orders/place             - Place the order, redirects to confirmation
//! GET  /orders                   - Order history for this session
//! GET  /orders/confirmation/{id} - Order confirmation / detail
//! ```

pub mod cart;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update/{id}", post(cart::update))
        .route("/remove/{id}", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/checkout", get(orders::checkout))
        .route("/place", post(orders::place))
        .route("/confirmation/{id}", get(orders::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout and order history
        .nest("/orders", order_routes())
}
