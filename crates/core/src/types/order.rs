//! Immutable order records created at checkout.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};

/// Customer details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Product snapshot denormalized into an order line.
///
/// Name and price are copied at creation time, not live references; later
/// catalog edits never change a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: OrderLineProduct,
    pub quantity: i32,
    /// `product.price * quantity`, computed once at checkout.
    pub item_total: Decimal,
}

/// Lifecycle state of an order.
///
/// `Pending` is the checkout-in-flight marker: the order row exists but the
/// cart has not yet been cleared. A crash mid-checkout leaves a `Pending`
/// row that can be detected and reconciled instead of silently diverging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
}

impl OrderStatus {
    /// Stable string form used in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }

    /// Parse the database string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_roundtrip() {
        for status in [OrderStatus::Pending, OrderStatus::Confirmed] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("shipped"), None);
    }

    #[test]
    fn test_order_status_serde_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Confirmed).expect("serialize");
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn test_order_serde_roundtrip() {
        let order = Order {
            id: OrderId::generate(),
            user_id: "u1".to_string(),
            date: Utc::now(),
            customer: Customer {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                address: "1 Reef Way".to_string(),
            },
            items: vec![OrderItem {
                product: OrderLineProduct {
                    id: ProductId::new(1),
                    name: "Smartphone".to_string(),
                    price: Decimal::new(69999, 2),
                },
                quantity: 2,
                item_total: Decimal::new(139998, 2),
            }],
            total: Decimal::new(139998, 2),
            status: OrderStatus::Confirmed,
        };

        let json = serde_json::to_string(&order).expect("serialize");
        let back: Order = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, order);
    }
}
