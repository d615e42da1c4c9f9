//! Core types for Coral Cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::*;
pub use order::{Customer, Order, OrderItem, OrderLineProduct, OrderStatus};
pub use product::Product;
