//! HTTP route handlers for the catalog service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (probes database)
//! GET  /metrics                         - Request counters, text exposition
//!
//! GET  /api/products                    - List all products
//! GET  /api/products/{id}               - Product by id (404 if absent)
//! PUT  /api/products/{id}/stock         - Blind stock overwrite
//! POST /api/products/{id}/stock/adjust  - Conditional stock delta
//! ```

pub mod products;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};

use coral_core::api::HealthResponse;

use crate::state::AppState;

/// Create the product API router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/stock", put(products::set_stock))
        .route("/{id}/stock/adjust", post(products::adjust_stock))
}

/// Create all routes for the catalog service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .nest("/api/products", product_routes())
}

/// Liveness health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok("catalog"))
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
