//! Errors raised while building basket items.
//!
//! Store operations themselves never fail. Invalid input is rejected here,
//! before any store is touched.

use naked_pineapple_core::{Color, ProductId};
use thiserror::Error;

/// Error building a [`LineItem`](crate::LineItem) or
/// [`WishlistItem`](crate::WishlistItem).
#[derive(Debug, Error)]
pub enum ItemError {
    /// The selected color is not offered by the product.
    #[error(
        "Product {product_id} is not offered in {}",
        .color.as_ref().map_or("no color", Color::as_str)
    )]
    UnknownColor {
        product_id: ProductId,
        color: Option<Color>,
    },
}

/// Result type alias for `ItemError`.
pub type Result<T> = std::result::Result<T, ItemError>;
