//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable item in the catalog.
///
/// Owned and mutated exclusively by the catalog service. Stock writes via
/// the blind `setStock` path replace the entire record; the conditional
/// adjust path touches only the `stock` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency (decimal, never floating point).
    /// Serializes as a string on the wire (`rust_decimal` `serde-with-str`).
    pub price: Decimal,
    pub description: String,
    /// Path to the product image, served by the storefront.
    pub image: String,
    /// Units currently available. The store layer does not enforce
    /// `stock >= 0` on the overwrite path; the conditional adjust path does.
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serde_roundtrip() {
        let product = Product {
            id: ProductId::new(1),
            name: "Smartphone".to_string(),
            price: Decimal::new(69999, 2),
            description: "Latest model".to_string(),
            image: "/static/images/products/smartphone.jpg".to_string(),
            stock: 50,
        };

        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], "699.99");
        assert_eq!(json["stock"], 50);

        let back: Product = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, product);
    }
}
