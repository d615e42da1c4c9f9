//! Integration tests for checkout and order history.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The catalog, cart, and order services running
//!
//! Run with: cargo test -p coral-integration-tests -- --ignored

use coral_client::ClientError;
use coral_core::{Customer, OrderId, OrderStatus, ProductId};
use rust_decimal::Decimal;

use coral_integration_tests::{cart_client, catalog_client, fresh_user_id, orders_client};

fn test_customer() -> Customer {
    Customer {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "1 Analytical Way".to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires running catalog, cart, and order services"]
async fn test_checkout_prices_and_clears_the_cart() {
    let carts = cart_client();
    let orders = orders_client();
    let catalog = catalog_client();
    let user = fresh_user_id();
    let id = ProductId::new(1);

    let price = catalog.get_product(id).await.expect("get product").price;
    carts.add_item(&user, id, 2).await.expect("add 2");

    let order = orders
        .create_order(&user, test_customer())
        .await
        .expect("checkout");

    assert_eq!(order.user_id, user);
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.items.len(), 1);
    let line = order.items.first().expect("order line");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.product.price, price);
    assert_eq!(line.item_total, price * Decimal::from(2));
    assert_eq!(order.total, price * Decimal::from(2));

    // Checkout consumes the cart
    let cart = carts.get_cart(&user).await.expect("get cart");
    assert!(cart.items.is_empty());

    // And the order is readable by ID
    let fetched = orders.get_order(order.id).await.expect("get order");
    assert_eq!(fetched.id, order.id);
    assert_eq!(fetched.total, order.total);
}

#[tokio::test]
#[ignore = "Requires running catalog, cart, and order services"]
async fn test_checkout_with_empty_cart_is_rejected() {
    let err = orders_client()
        .create_order(&fresh_user_id(), test_customer())
        .await
        .expect_err("expected an empty-cart refusal");

    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires running catalog, cart, and order services"]
async fn test_order_history_is_newest_first() {
    let carts = cart_client();
    let orders = orders_client();
    let user = fresh_user_id();
    let id = ProductId::new(3);

    carts.add_item(&user, id, 1).await.expect("add for order 1");
    let first = orders
        .create_order(&user, test_customer())
        .await
        .expect("first checkout");

    carts.add_item(&user, id, 1).await.expect("add for order 2");
    let second = orders
        .create_order(&user, test_customer())
        .await
        .expect("second checkout");

    let history = orders.list_orders_for_user(&user).await.expect("history");
    assert_eq!(history.len(), 2);

    // History only ever shows completed checkouts
    assert!(
        history
            .iter()
            .all(|order| order.status == OrderStatus::Confirmed)
    );

    let newest = history.first().expect("newest order");
    let oldest = history.last().expect("oldest order");
    assert_eq!(newest.id, second.id);
    assert_eq!(oldest.id, first.id);
    assert!(newest.date >= oldest.date);
}

#[tokio::test]
#[ignore = "Requires running catalog, cart, and order services"]
async fn test_unknown_order_is_404() {
    let err = orders_client()
        .get_order(OrderId::generate())
        .await
        .expect_err("expected a not-found error");

    assert!(matches!(err, ClientError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires running catalog, cart, and order services"]
async fn test_checkout_does_not_touch_stock() {
    let carts = cart_client();
    let catalog = catalog_client();
    let user = fresh_user_id();
    let id = ProductId::new(4);

    let before = catalog.get_product(id).await.expect("get product").stock;
    carts.add_item(&user, id, 1).await.expect("add 1");
    let reserved = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(reserved, before - 1);

    orders_client()
        .create_order(&user, test_customer())
        .await
        .expect("checkout");

    // The units left the shelf when they entered the cart; checkout itself
    // must not move stock again.
    let after = catalog.get_product(id).await.expect("get product").stock;
    assert_eq!(after, before - 1);
}
