//! Naked Pineapple Core - Shared value types.
//!
//! This crate provides the value types used across the basket components:
//! - `basket` - Cart and wishlist stores with persistence
//! - `cli` - Command-line driver for the stores
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, colors, quantities, prices
//!   and catalog product snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
