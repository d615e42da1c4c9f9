//! Shared error taxonomy for downstream service calls.

use coral_core::api::ErrorBody;
use thiserror::Error;

/// Error from a call to a sibling Coral Cart service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The entity does not exist downstream (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The downstream service rejected the request (HTTP 400/409),
    /// e.g. insufficient stock or an empty cart.
    #[error("validation: {0}")]
    Validation(String),

    /// Any other non-success response.
    #[error("upstream returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure: connect error, timeout, or body decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether the failure is the downstream saying "no such entity".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Decode a response: 2xx bodies parse as `T`, everything else maps into
/// the [`ClientError`] taxonomy using the JSON error envelope when present.
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.error);

    Err(match status.as_u16() {
        404 => ClientError::NotFound(message),
        400 | 409 => ClientError::Validation(message),
        code => ClientError::Api {
            status: code,
            message,
        },
    })
}

/// Like [`decode`] but for endpoints that return no body on success.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.error);

    Err(match status.as_u16() {
        404 => ClientError::NotFound(message),
        400 | 409 => ClientError::Validation(message),
        code => ClientError::Api {
            status: code,
            message,
        },
    })
}
