//! Unified error handling for the order service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use coral_client::ClientError;
use coral_core::api::ErrorBody;

use crate::db::RepositoryError;

/// Application-level error type for the order service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Checkout attempted against an empty cart.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Cart or catalog call failed.
    #[error("Upstream error: {0}")]
    Upstream(ClientError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::NotFound(what),
            other => Self::Database(other),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            // A sibling service rejecting our input is this caller's fault.
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
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyCart | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "internal server error".to_string(),
            Self::Upstream(_) => "upstream service error".to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::EmptyCart => "cart is empty".to_string(),
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
    fn test_empty_cart_maps_to_400() {
        assert_eq!(get_status(AppError::EmptyCart), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_order_maps_to_404() {
        let err: AppError = RepositoryError::NotFound("order 123".to_string()).into();
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unreachable_cart_service_maps_to_502() {
        let err = AppError::Upstream(ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(get_status(err), StatusCode::BAD_GATEWAY);
    }
}
