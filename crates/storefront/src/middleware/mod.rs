//! Request middleware: sessions and request tracking.

pub mod session;

pub use session::create_session_layer;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Count every completed request into the injected metrics handle.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    state.metrics().record(response.status().as_u16());
    response
}
