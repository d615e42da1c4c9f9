//! Session-stored shopper identity.
//!
//! There are no accounts; each browser session gets a generated user ID on
//! first use, and the cart and order services key their records on it.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;

/// Session keys.
pub mod keys {
    /// Key for the anonymous shopper's user ID.
    pub const USER_ID: &str = "user_id";
}

/// Get the session's user ID, generating and storing one on first use.
///
/// The ID is the only capability a browser needs to reach its cart and
/// order history, so it is random rather than sequential.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store is unavailable.
pub async fn current_user_id(session: &Session) -> Result<String, AppError> {
    if let Some(user_id) = session.get::<String>(keys::USER_ID).await? {
        return Ok(user_id);
    }

    let user_id = format!("user-{}", Uuid::new_v4());
    session.insert(keys::USER_ID, &user_id).await?;

    tracing::debug!(user_id = %user_id, "Assigned session user ID");
    Ok(user_id)
}
