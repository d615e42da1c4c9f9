//! Unified error handling for the cart service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use coral_client::ClientError;
use coral_core::api::ErrorBody;

use crate::db::RepositoryError;

/// Application-level error type for the cart service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Catalog service call failed.
    #[error("Upstream error: {0}")]
    Upstream(ClientError),

    /// Bad request from client: insufficient stock, unknown product,
    /// malformed quantity.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            // The catalog saying "no" is this caller's fault, not ours:
            // surface it as a 400 with the downstream message.
            ClientError::Validation(msg) | ClientError::NotFound(msg) => Self::BadRequest(msg),
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_) | Self::Upstream(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "internal server error".to_string(),
            Self::Upstream(_) => "upstream service error".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_insufficient_stock_from_catalog_maps_to_400() {
        let err: AppError = ClientError::Validation("insufficient stock".to_string()).into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_product_maps_to_400() {
        let err: AppError = ClientError::NotFound("product 999 not found".to_string()).into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transport_failure_maps_to_502() {
        let err: AppError = AppError::Upstream(ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(get_status(err), StatusCode::BAD_GATEWAY);
    }
}
