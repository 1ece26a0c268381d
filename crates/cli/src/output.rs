//! Command output on stdout.

#![allow(clippy::print_stdout)]

use std::fmt::Write as _;

use naked_pineapple_basket::view::{CartView, WishlistView};
use naked_pineapple_basket::{Cart, Wishlist};
use naked_pineapple_core::CurrencyCode;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn print_cart(cart: &Cart, currency: CurrencyCode, format: Format) -> serde_json::Result<()> {
    let view = CartView::new(cart, currency);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        Format::Text => print!("{}", render_cart(&view)),
    }
    Ok(())
}

pub fn print_wishlist(
    wishlist: &Wishlist,
    currency: CurrencyCode,
    format: Format,
) -> serde_json::Result<()> {
    let view = WishlistView::new(wishlist, currency);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        Format::Text => print!("{}", render_wishlist(&view)),
    }
    Ok(())
}

pub fn print_contains(saved: bool, format: Format) -> serde_json::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::json!({ "saved": saved })),
        Format::Text => println!("{saved}"),
    }
    Ok(())
}

fn render_cart(view: &CartView) -> String {
    if view.items.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in &view.items {
        let color = item
            .color
            .as_deref()
            .map_or_else(String::new, |c| format!(" ({c})"));
        let _ = writeln!(
            out,
            "{}{color}  {} x{}  {} each  {}",
            item.product_id, item.title, item.quantity, item.price, item.line_price
        );
    }
    let _ = writeln!(out, "Items: {}  Subtotal: {}", view.item_count, view.subtotal);
    out
}

fn render_wishlist(view: &WishlistView) -> String {
    if view.items.is_empty() {
        return "Wishlist is empty\n".to_string();
    }

    let mut out = String::new();
    for item in &view.items {
        let _ = writeln!(out, "{}  {}  {}", item.product_id, item.title, item.price);
    }
    out
}
