//! Core types for Naked Pineapple.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use price::{CurrencyCode, Price, PriceError, UnitPrice};
pub use product::Product;
pub use quantity::{Quantity, QuantityError};
