//! Coral Cart catalog service library.
//!
//! This crate provides the catalog service as a library, allowing it to be
//! tested and reused by the CLI (seeding).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;
