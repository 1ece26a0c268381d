//! Display data for the cart and wishlist.
//!
//! Stores keep exact decimal amounts; rounding to currency precision only
//! happens here.

use naked_pineapple_core::{CurrencyCode, Price};
use serde::Serialize;

use crate::cart::Cart;
use crate::item::{LineItem, WishlistItem};
use crate::wishlist::Wishlist;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: String,
    pub title: String,
    pub color: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image_url: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            subtotal: Price::new(cart.total_price(), currency).display(),
            item_count: cart.total_item_count(),
        }
    }
}

impl CartItemView {
    #[must_use]
    pub fn new(line: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            title: line.name.clone(),
            color: line.selected_color.as_ref().map(ToString::to_string),
            quantity: line.quantity.get(),
            price: Price::new(line.unit_price.amount(), currency).display(),
            line_price: Price::new(line.line_total(), currency).display(),
            image_url: line.image_url.clone(),
        }
    }
}

/// Wishlist entry display data.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistItemView {
    pub product_id: String,
    pub title: String,
    pub price: String,
    pub image_url: String,
}

/// Wishlist display data.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistView {
    pub items: Vec<WishlistItemView>,
}

impl WishlistView {
    #[must_use]
    pub fn new(wishlist: &Wishlist, currency: CurrencyCode) -> Self {
        Self {
            items: wishlist
                .items()
                .iter()
                .map(|item| WishlistItemView::new(item, currency))
                .collect(),
        }
    }
}

impl WishlistItemView {
    #[must_use]
    pub fn new(item: &WishlistItem, currency: CurrencyCode) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            title: item.name.clone(),
            price: Price::new(item.price.amount(), currency).display(),
            image_url: item.image_url.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naked_pineapple_core::{Color, ProductId, Quantity, UnitPrice};

    use super::*;

    #[test]
    fn test_cart_view_rounds_for_display() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new(
            ProductId::parse("p1").unwrap(),
            "Sticker",
            UnitPrice::parse("0.335").unwrap(),
            "img",
            Quantity::new(3).unwrap(),
            Some(Color::parse("gold").unwrap()),
        ));

        let view = CartView::new(&cart, CurrencyCode::USD);
        assert_eq!(view.subtotal, "$1.01");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.items[0].price, "$0.34");
        assert_eq!(view.items[0].line_price, "$1.01");
        assert_eq!(view.items[0].color.as_deref(), Some("gold"));
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::new(&Cart::new(), CurrencyCode::EUR);
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "€0.00");
    }

    #[test]
    fn test_wishlist_view() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(WishlistItem::new(
            ProductId::parse("w1").unwrap(),
            "Hat",
            UnitPrice::parse("15").unwrap(),
            "img",
        ));
        let view = WishlistView::new(&wishlist, CurrencyCode::GBP);
        assert_eq!(view.items[0].price, "£15.00");
    }
}
