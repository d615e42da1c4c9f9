//! Coral Cart Core - Shared types library.
//!
//! This crate provides common types used across all Coral Cart services:
//! - `storefront` - Browser-facing edge service (port 3000)
//! - `catalog` - Product table owner (port 3001)
//! - `cart` - Per-user cart owner (port 3002)
//! - `orders` - Checkout and order history (port 3003)
//!
//! # Architecture
//!
//! The core crate contains only types and a metrics handle - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain types: products, carts, orders, type-safe IDs
//! - [`api`] - Request/response bodies shared by the service APIs
//! - [`metrics`] - Per-process request counters with text exposition

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod metrics;
pub mod types;

pub use types::*;
