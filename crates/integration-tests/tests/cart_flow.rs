//! Integration tests for the cart service and its stock settlement.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The catalog and cart services running
//!
//! Run with: cargo test -p coral-integration-tests -- --ignored

use coral_client::ClientError;
use coral_core::{CartItem, ProductId};

use coral_integration_tests::{cart_client, catalog_client, fresh_user_id};

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_unknown_user_gets_empty_cart() {
    let cart = cart_client()
        .get_cart(&fresh_user_id())
        .await
        .expect("Failed to get cart");

    assert!(cart.items.is_empty());
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_add_item_reserves_stock() {
    let carts = cart_client();
    let catalog = catalog_client();
    let user = fresh_user_id();
    let id = ProductId::new(1);

    let before = catalog.get_product(id).await.expect("get product").stock;

    let cart = carts.add_item(&user, id, 2).await.expect("add 2");
    assert_eq!(cart.quantity_of(id), 2);

    let after = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before - 2);

    // Removing the line releases the units
    carts.update_item(&user, id, 0).await.expect("remove line");
    let restored = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(restored, before);
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_add_merges_into_one_line() {
    let carts = cart_client();
    let user = fresh_user_id();
    let id = ProductId::new(3);

    carts.add_item(&user, id, 1).await.expect("add 1");
    let cart = carts.add_item(&user, id, 2).await.expect("add 2 more");

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.quantity_of(id), 3);

    carts.update_item(&user, id, 0).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_add_beyond_stock_is_rejected() {
    let carts = cart_client();
    let user = fresh_user_id();

    let err = carts
        .add_item(&user, ProductId::new(2), 1_000_000)
        .await
        .expect_err("expected an insufficient-stock refusal");
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");

    // The refused add must not touch the cart
    let cart = carts.get_cart(&user).await.expect("get cart");
    assert!(cart.items.is_empty());
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_add_unknown_product_is_rejected() {
    let err = cart_client()
        .add_item(&fresh_user_id(), ProductId::new(999_999), 1)
        .await
        .expect_err("expected an unknown-product refusal");

    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_update_item_settles_the_difference() {
    let carts = cart_client();
    let catalog = catalog_client();
    let user = fresh_user_id();
    let id = ProductId::new(5);

    let before = catalog.get_product(id).await.expect("get product").stock;

    carts.add_item(&user, id, 2).await.expect("add 2");
    let cart = carts.update_item(&user, id, 5).await.expect("raise to 5");
    assert_eq!(cart.quantity_of(id), 5);
    let after = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before - 5);

    let cart = carts.update_item(&user, id, 1).await.expect("lower to 1");
    assert_eq!(cart.quantity_of(id), 1);
    let after = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before - 1);

    carts.update_item(&user, id, 0).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_negative_quantity_is_rejected() {
    let user = fresh_user_id();
    let url = format!(
        "{}/api/cart/{user}/items/1",
        coral_integration_tests::cart_base_url()
    );

    let resp = reqwest::Client::new()
        .put(url)
        .json(&serde_json::json!({ "quantity": -1 }))
        .send()
        .await
        .expect("Failed to reach cart service");

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_replace_overwrites_without_touching_stock() {
    let carts = cart_client();
    let catalog = catalog_client();
    let user = fresh_user_id();
    let id = ProductId::new(2);

    let before = catalog.get_product(id).await.expect("get product").stock;

    let cart = carts
        .replace_cart(
            &user,
            vec![CartItem {
                product_id: id,
                quantity: 3,
            }],
        )
        .await
        .expect("replace cart");
    assert_eq!(cart.quantity_of(id), 3);

    // The overwrite asserts contents wholesale; stock settlement is the
    // caller's responsibility
    let after = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before);

    carts.clear_cart(&user).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_replace_rejects_non_positive_quantities() {
    let err = cart_client()
        .replace_cart(
            &fresh_user_id(),
            vec![CartItem {
                product_id: ProductId::new(1),
                quantity: 0,
            }],
        )
        .await
        .expect_err("expected a refusal");

    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires running catalog and cart services"]
async fn test_clear_is_idempotent() {
    let carts = cart_client();
    let user = fresh_user_id();

    carts.clear_cart(&user).await.expect("clear unknown cart");
    carts.clear_cart(&user).await.expect("clear again");

    let cart = carts.get_cart(&user).await.expect("get cart");
    assert!(cart.items.is_empty());
}
