//! Integration tests for the storefront pages and session-backed shopping.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - All four services running
//!
//! Run with: cargo test -p coral-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

use coral_integration_tests::storefront_base_url;

/// A browser-like client: cookie jar for the session, follows redirects.
fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_home_page_renders() {
    let resp = browser()
        .get(storefront_base_url())
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Coral Cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_product_listing_shows_seeded_catalog() {
    let resp = browser()
        .get(format!("{}/products", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Smartphone"));
    assert!(body.contains("$699.99"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_unknown_product_page_is_404() {
    let resp = browser()
        .get(format!("{}/products/999999", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_session_cart_add_and_remove() {
    let client = browser();
    let base = storefront_base_url();

    // Add via the product form; the redirect lands on the cart page
    let resp = client
        .post(format!("{base}/cart/add"))
        .form(&[("product_id", "3"), ("quantity", "1")])
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Wireless Headphones"));

    // The same session sees its cart on a fresh request
    let resp = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Wireless Headphones"));

    // Remove the line again (also releases the reserved unit)
    let resp = client
        .post(format!("{base}/cart/remove/3"))
        .send()
        .await
        .expect("Failed to remove from cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_clear_cart_empties_and_releases_stock() {
    let client = browser();
    let base = storefront_base_url();

    client
        .post(format!("{base}/cart/add"))
        .form(&[("product_id", "4"), ("quantity", "2")])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base}/cart/clear"))
        .send()
        .await
        .expect("Failed to clear cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_fresh_session_has_empty_cart() {
    let resp = browser()
        .get(format!("{}/cart", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get cart page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_checkout_with_empty_cart_redirects_back() {
    let client = browser();
    let base = storefront_base_url();

    // Following the redirect lands back on the cart page with the banner
    let resp = client
        .get(format!("{base}/orders/checkout"))
        .send()
        .await
        .expect("Failed to reach checkout");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_full_purchase_through_the_storefront() {
    let client = browser();
    let base = storefront_base_url();

    client
        .post(format!("{base}/cart/add"))
        .form(&[("product_id", "5"), ("quantity", "1")])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base}/orders/place"))
        .form(&[
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("address", "1 Analytical Way"),
        ])
        .send()
        .await
        .expect("Failed to place order");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Thank you for your order"));
    assert!(body.contains("Tablet"));

    // The order shows up in this session's history
    let resp = client
        .get(format!("{base}/orders"))
        .send()
        .await
        .expect("Failed to get order history");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("confirmed"));
}

#[tokio::test]
#[ignore = "Requires running storefront and backend services"]
async fn test_metrics_exposition() {
    let resp = browser()
        .get(format!("{}/metrics", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach metrics");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("service=\"storefront\""));
}
