//! Integration tests for Naked Pineapple.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p naked-pineapple-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `basket_persistence` - Stores surviving restarts through real key-value stores
//! - `cart_properties` - Cart and wishlist invariants exercised through the public API
//!
//! This crate only provides shared fixtures; the tests live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use naked_pineapple_basket::{LineItem, WishlistItem};
use naked_pineapple_core::{Color, Product, ProductId, Quantity, UnitPrice};

/// Build a catalog product; panics on invalid fixture data.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: &str, price: &str, colors: &[&str]) -> Product {
    Product {
        id: ProductId::parse(id).unwrap(),
        name: format!("Product {id}"),
        price: UnitPrice::parse(price).unwrap(),
        image_url: format!("https://cdn.example.test/{id}.jpg"),
        colors: colors.iter().map(|c| Color::parse(c).unwrap()).collect(),
    }
}

/// Build a line item; panics on invalid fixture data.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn line(id: &str, price: &str, quantity: u32, color: Option<&str>) -> LineItem {
    let colors: Vec<&str> = color.into_iter().collect();
    LineItem::from_product(
        &product(id, price, &colors),
        color.map(|c| Color::parse(c).unwrap()),
        Quantity::new(quantity).unwrap(),
    )
    .unwrap()
}

/// Build a wishlist entry with an explicit name and price.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn saved(id: &str, name: &str, price: &str) -> WishlistItem {
    WishlistItem::new(
        ProductId::parse(id).unwrap(),
        name,
        UnitPrice::parse(price).unwrap(),
        format!("https://cdn.example.test/{id}.jpg"),
    )
}

/// Parse a product ID; panics on invalid fixture data.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn pid(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}
