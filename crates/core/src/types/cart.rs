//! Cart records: per-user ordered item lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A single line in a user's cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// A user's cart: an ordered sequence of items keyed by user ID.
///
/// The store enforces no per-product uniqueness; the cart service maintains
/// it by merging on add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// An empty cart for a user with no stored record.
    #[must_use]
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    /// Quantity of a given product in the cart, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> i32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Merge a quantity into the cart: increment an existing line for the
    /// product, or append a new one. Line order is preserved.
    pub fn merge_item(&mut self, product_id: ProductId, quantity: i32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product_id,
                quantity,
            });
        }
    }

    /// Set a line to an exact quantity; 0 removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i32) {
        if quantity <= 0 {
            self.items.retain(|item| item.product_id != product_id);
        } else if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = quantity;
        } else {
            self.items.push(CartItem {
                product_id,
                quantity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_item_appends_then_accumulates() {
        let mut cart = Cart::empty("u1");
        cart.merge_item(ProductId::new(1), 2);
        cart.merge_item(ProductId::new(2), 1);
        cart.merge_item(ProductId::new(1), 3);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.quantity_of(ProductId::new(2)), 1);
        // First-added line keeps its position after the merge.
        assert_eq!(cart.items.first().map(|i| i.product_id), Some(ProductId::new(1)));
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::empty("u1");
        cart.merge_item(ProductId::new(1), 2);
        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites_rather_than_merges() {
        let mut cart = Cart::empty("u1");
        cart.merge_item(ProductId::new(1), 2);
        cart.set_quantity(ProductId::new(1), 7);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 7);
    }

    #[test]
    fn test_quantity_of_missing_product_is_zero() {
        let cart = Cart::empty("u1");
        assert_eq!(cart.quantity_of(ProductId::new(99)), 0);
    }
}
