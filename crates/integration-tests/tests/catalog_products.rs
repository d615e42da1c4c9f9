//! Integration tests for the catalog service.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The catalog service running (cargo run -p coral-catalog)
//!
//! Run with: cargo test -p coral-integration-tests -- --ignored

use coral_client::ClientError;
use coral_core::ProductId;
use rust_decimal::Decimal;

use coral_integration_tests::{catalog_base_url, catalog_client};

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_health_endpoint() {
    let resp = reqwest::get(format!("{}/health", catalog_base_url()))
        .await
        .expect("Failed to reach catalog");

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.expect("Invalid health body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog");
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_seeded_catalog_is_listed() {
    let products = catalog_client()
        .list_products()
        .await
        .expect("Failed to list products");

    assert!(products.len() >= 5, "expected the seeded catalog");

    let smartphone = products
        .iter()
        .find(|p| p.id == ProductId::new(1))
        .expect("seeded product 1 missing");
    assert_eq!(smartphone.name, "Smartphone");
    assert_eq!(smartphone.price, Decimal::new(69999, 2));
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_get_product_by_id() {
    let product = catalog_client()
        .get_product(ProductId::new(2))
        .await
        .expect("Failed to get product 2");

    assert_eq!(product.id, ProductId::new(2));
    assert_eq!(product.name, "Laptop");
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_unknown_product_is_404() {
    let err = catalog_client()
        .get_product(ProductId::new(999_999))
        .await
        .expect_err("expected a not-found error");

    assert!(matches!(err, ClientError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_adjust_stock_reserve_then_release() {
    let client = catalog_client();
    let id = ProductId::new(3);

    let before = client.get_product(id).await.expect("get product").stock;

    let reserved = client.adjust_stock(id, -5).await.expect("reserve 5");
    assert_eq!(reserved.stock, before - 5);

    let released = client.adjust_stock(id, 5).await.expect("release 5");
    assert_eq!(released.stock, before);
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_adjust_stock_never_goes_negative() {
    let client = catalog_client();
    let id = ProductId::new(4);

    let before = client.get_product(id).await.expect("get product").stock;

    let err = client
        .adjust_stock(id, -1_000_000)
        .await
        .expect_err("expected the adjustment to be refused");
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");

    // Refusal must leave stock untouched
    let after = client.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before);
}

#[tokio::test]
#[ignore = "Requires running catalog service"]
async fn test_set_stock_overwrites() {
    let client = catalog_client();
    let id = ProductId::new(5);

    let before = client.get_product(id).await.expect("get product").stock;

    let bumped = client.set_stock(id, before + 10).await.expect("set stock");
    assert_eq!(bumped.stock, before + 10);

    let restored = client.set_stock(id, before).await.expect("restore stock");
    assert_eq!(restored.stock, before);
}
