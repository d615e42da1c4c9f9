//! Integration tests for Coral Cart.
//!
//! # Running Tests
//!
//! The tests run against live services and their databases:
//!
//! ```bash
//! # Migrate and seed
//! cargo run -p coral-cli -- migrate all
//! cargo run -p coral-cli -- seed catalog
//!
//! # Start the services (each in its own terminal)
//! cargo run -p coral-catalog
//! cargo run -p coral-cart
//! cargo run -p coral-orders
//! cargo run -p coral-storefront
//!
//! # Run the ignored integration tests
//! cargo test -p coral-integration-tests -- --ignored
//! ```
//!
//! Base URLs default to the local ports and can be overridden with
//! `CATALOG_BASE_URL`, `CART_BASE_URL`, `ORDERS_BASE_URL`, and
//! `STOREFRONT_BASE_URL`.
//!
//! Tests create their own throwaway users, so they can run against a shared
//! database without clobbering each other's carts. They do adjust the
//! seeded products' stock, so a given run assumes no other traffic.

use coral_client::{CartClient, CatalogClient, OrdersClient};

/// Base URL for the catalog service.
#[must_use]
pub fn catalog_base_url() -> String {
    std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the cart service.
#[must_use]
pub fn cart_base_url() -> String {
    std::env::var("CART_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}

/// Base URL for the order service.
#[must_use]
pub fn orders_base_url() -> String {
    std::env::var("ORDERS_BASE_URL").unwrap_or_else(|_| "http://localhost:3003".to_string())
}

/// Base URL for the storefront.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A catalog client against the test catalog service.
#[must_use]
pub fn catalog_client() -> CatalogClient {
    CatalogClient::new(&catalog_base_url(), coral_client::http_client())
}

/// A cart client against the test cart service.
#[must_use]
pub fn cart_client() -> CartClient {
    CartClient::new(&cart_base_url(), coral_client::http_client())
}

/// An orders client against the test order service.
#[must_use]
pub fn orders_client() -> OrdersClient {
    OrdersClient::new(&orders_base_url(), coral_client::http_client())
}

/// A fresh user ID so tests never share a cart or order history.
#[must_use]
pub fn fresh_user_id() -> String {
    format!("test-user-{}", uuid::Uuid::new_v4())
}
