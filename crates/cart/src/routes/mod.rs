//! HTTP route handlers for the cart service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                               - Liveness check
//! GET    /health/ready                         - Readiness check (probes database)
//! GET    /metrics                              - Request counters, text exposition
//!
//! GET    /api/cart/{user_id}                   - Fetch a cart (empty if absent)
//! POST   /api/cart/{user_id}/add               - Add quantity (reserves stock first)
//! PUT    /api/cart/{user_id}/items/{product_id}- Set a line to an exact quantity
//! PUT    /api/cart/{user_id}                   - Unconditional item-list overwrite
//! DELETE /api/cart/{user_id}                   - Clear the cart
//! ```

pub mod cart;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};

use coral_core::api::HealthResponse;

use crate::state::AppState;

/// Create the cart API router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}",
            get(cart::show).put(cart::replace).delete(cart::clear),
        )
        .route("/{user_id}/add", post(cart::add_item))
        .route("/{user_id}/items/{product_id}", put(cart::update_item))
}

/// Create all routes for the cart service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .nest("/api/cart", cart_routes())
}

/// Liveness health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok("cart"))
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Request counters in text exposition format.
async fn metrics(State(state): State<AppState>) -> String {
    state.metrics().render()
}
