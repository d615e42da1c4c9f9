//! Request and response bodies shared by the service HTTP APIs.
//!
//! Every backend service speaks JSON with these shapes; the client crate and
//! the handlers both deserialize from here so the wire contract lives in one
//! place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CartItem, Customer, ProductId};

/// `GET /health` response, identical across services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}

/// JSON error envelope returned by every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `PUT /api/products/:id/stock`: blind overwrite of the stock field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetStockRequest {
    pub stock: i32,
}

/// `POST /api/products/:id/stock/adjust`: conditional stock delta.
///
/// Negative deltas reserve stock and fail if the result would go below zero;
/// positive deltas release it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i32,
}

/// `POST /api/cart/:user_id/add` body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// `PUT /api/cart/:user_id` body: unconditional item-list overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceCartRequest {
    pub items: Vec<CartItem>,
}

/// `PUT /api/cart/:user_id/items/:product_id` body: set a line to an exact
/// quantity; 0 removes the line. The cart service settles stock for the
/// delta before rewriting the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i32,
}

/// `GET /api/cart/:user_id` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::types::Cart> for CartResponse {
    fn from(cart: crate::types::Cart) -> Self {
        Self {
            user_id: cart.user_id,
            items: cart.items,
            updated_at: cart.updated_at,
        }
    }
}

impl From<CartResponse> for crate::types::Cart {
    fn from(resp: CartResponse) -> Self {
        Self {
            user_id: resp.user_id,
            items: resp.items,
            updated_at: resp.updated_at,
        }
    }
}

/// `POST /api/orders` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub customer: Customer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_request_wire_shape() {
        let body: AddItemRequest =
            serde_json::from_str(r#"{"product_id": 1, "quantity": 2}"#).expect("deserialize");
        assert_eq!(body.product_id, ProductId::new(1));
        assert_eq!(body.quantity, 2);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "insufficient stock".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).expect("serialize"),
            r#"{"error":"insufficient stock"}"#
        );
    }

    #[test]
    fn test_create_order_request_roundtrip() {
        let json = r#"{"user_id":"u1","customer":{"name":"A","email":"a@x.com","address":"1 Reef Way"}}"#;
        let body: CreateOrderRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(body.user_id, "u1");
        assert_eq!(body.customer.email, "a@x.com");
    }
}
