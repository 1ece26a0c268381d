//! Cart line items and wishlist entries.
//!
//! Both types snapshot catalog data at the moment the shopper picks a
//! product. The snapshot is never re-synced with the catalog.

use naked_pineapple_core::{Color, Product, ProductId, Quantity, UnitPrice};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ItemError, Result};

/// One row in the cart: a product variant and how many of it.
///
/// Identity within a cart is `(product_id, selected_color)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: UnitPrice,
    pub image_url: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<Color>,
}

impl LineItem {
    /// Create a line item from already-validated parts.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: UnitPrice,
        image_url: impl Into<String>,
        quantity: Quantity,
        selected_color: Option<Color>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price,
            image_url: image_url.into(),
            quantity,
            selected_color,
        }
    }

    /// Build a line item from a catalog product.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::UnknownColor`] if `color` is not one of the
    /// product's variants, or if a color is omitted for a product that has
    /// variants.
    pub fn from_product(
        product: &Product,
        color: Option<Color>,
        quantity: Quantity,
    ) -> Result<Self> {
        if !product.offers(color.as_ref()) {
            return Err(ItemError::UnknownColor {
                product_id: product.id.clone(),
                color,
            });
        }
        Ok(Self::new(
            product.id.clone(),
            product.name.clone(),
            product.price,
            product.image_url.clone(),
            quantity,
            color,
        ))
    }

    /// Whether this item is the `(product_id, color)` variant.
    #[must_use]
    pub fn is_variant(&self, product_id: &ProductId, color: Option<&Color>) -> bool {
        &self.product_id == product_id && self.selected_color.as_ref() == color
    }

    /// `unit_price * quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.times(self.quantity.get())
    }
}

/// A saved product on the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: UnitPrice,
    pub image_url: String,
}

impl WishlistItem {
    /// Create a wishlist entry from already-validated parts.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: UnitPrice,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }

    /// Turn the saved snapshot into a cart line item.
    #[must_use]
    pub fn into_line_item(self, color: Option<Color>, quantity: Quantity) -> LineItem {
        LineItem::new(
            self.product_id,
            self.name,
            self.price,
            self.image_url,
            quantity,
            color,
        )
    }
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self::new(
            product.id.clone(),
            product.name.clone(),
            product.price,
            product.image_url.clone(),
        )
    }
}
