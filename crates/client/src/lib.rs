//! HTTP clients for the Coral Cart service APIs.
//!
//! One thin reqwest wrapper per backend service. Every client shares the
//! same construction shape: an `Arc` inner holding the connection pool and
//! the resolved base URL, cheaply cloneable into handler state.
//!
//! Error mapping is uniform across clients (see [`ClientError`]): 404 maps
//! to `NotFound`, 400/409 to `Validation` carrying the downstream message,
//! anything else non-2xx to `Api`, and transport failures to `Http`.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart;
mod catalog;
mod error;
mod orders;

use std::time::Duration;

pub use cart::CartClient;
pub use catalog::CatalogClient;
pub use error::ClientError;
pub use orders::OrdersClient;

/// Connect timeout for service-to-service calls.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total per-request timeout for service-to-service calls.
///
/// The platform sets no server-side deadline, so the caller bounds the wait;
/// a stalled sibling otherwise wedges the request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared reqwest client used by all service clients in a process.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized; this is a startup-time
/// construction and has no reasonable fallback.
#[must_use]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

/// Join a base URL and a path without doubling slashes.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:3001/", "/api/products"),
            "http://localhost:3001/api/products"
        );
        assert_eq!(
            join_url("http://localhost:3001", "api/products"),
            "http://localhost:3001/api/products"
        );
    }
}
