//! HTTP route handlers for the order service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (probes database)
//! GET  /metrics                   - Request counters, text exposition
//!
//! POST /api/orders                - Checkout a user's cart (201)
//! GET  /api/orders/{id}           - Order by id (404 if absent)
//! GET  /api/orders/user/{user_id} - Order history, newest first
//! ```

pub mod orders;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use coral_core::api::HealthResponse;

use crate::state::AppState;

/// Create the order API router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{id}", get(orders::show))
        .route("/user/{user_id}", get(orders::index_for_user))
}

/// Create all routes for the order service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .nest("/api/orders", order_routes())
}

/// Liveness health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok("orders"))
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
