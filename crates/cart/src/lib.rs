//! Coral Cart cart service library.
//!
//! This crate provides the cart service as a library so its handlers and
//! repositories can be unit tested.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
