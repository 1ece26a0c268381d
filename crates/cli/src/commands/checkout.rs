//! Checkout hooks.
//!
//! Payment itself happens at the provider; this only reacts to a confirmed
//! order.

use naked_pineapple_basket::Basket;
use tracing::info;

/// Clear the cart once the order is confirmed.
pub fn complete(basket: &mut Basket) {
    let total = basket.cart().total_price();
    basket.complete_checkout();
    info!(%total, "Cart cleared after checkout");
}
