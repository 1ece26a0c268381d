//! Application root owning the shopper's stores.

use std::rc::Rc;

use naked_pineapple_core::{Color, ProductId, Quantity};
use tracing::{debug, info};

use crate::cart::Cart;
use crate::item::{LineItem, WishlistItem};
use crate::persistence::{KeyValueStore, PersistenceAdapter, keys, load_collection};
use crate::wishlist::Wishlist;

/// The cart and wishlist for one running application.
///
/// Build it once at startup and hand references to whatever needs the
/// stores. Each store is persisted independently under its own key.
#[derive(Debug, Default)]
pub struct Basket {
    cart: Cart,
    wishlist: Wishlist,
}

impl Basket {
    /// Rehydrate both stores from `store` and persist every later change
    /// back to it.
    #[must_use]
    pub fn open(store: Rc<dyn KeyValueStore>) -> Self {
        let mut cart = Cart::from_items(load_collection::<LineItem>(&*store, keys::CART));
        cart.subscribe(PersistenceAdapter::<LineItem>::new(
            Rc::clone(&store),
            keys::CART,
        ));

        let mut wishlist =
            Wishlist::from_items(load_collection::<WishlistItem>(&*store, keys::WISHLIST));
        wishlist.subscribe(PersistenceAdapter::<WishlistItem>::new(
            store,
            keys::WISHLIST,
        ));

        info!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "basket restored"
        );
        Self { cart, wishlist }
    }

    /// Empty stores that are never persisted.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    /// Called once the payment provider confirms the order.
    pub fn complete_checkout(&mut self) {
        info!(
            lines = self.cart.len(),
            items = self.cart.total_item_count(),
            "checkout completed, clearing cart"
        );
        self.cart.clear();
    }

    /// Move a saved product from the wishlist into the cart.
    ///
    /// The wishlist snapshot becomes the line item. Returns `false` if the
    /// product is not on the wishlist.
    pub fn move_to_cart(
        &mut self,
        product_id: &ProductId,
        color: Option<Color>,
        quantity: Quantity,
    ) -> bool {
        let Some(saved) = self.wishlist.get(product_id).cloned() else {
            debug!(%product_id, "move_to_cart: not on wishlist");
            return false;
        };
        self.cart.add_item(saved.into_line_item(color, quantity));
        self.wishlist.remove_item(product_id);
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naked_pineapple_core::UnitPrice;
    use rust_decimal::Decimal;

    use super::*;
    use crate::persistence::MemoryStore;

    fn pid(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn line(id: &str, quantity: u32) -> LineItem {
        LineItem::new(
            pid(id),
            "Tee",
            UnitPrice::parse("20").unwrap(),
            "img",
            Quantity::new(quantity).unwrap(),
            None,
        )
    }

    fn saved(id: &str) -> WishlistItem {
        WishlistItem::new(pid(id), "Hat", UnitPrice::parse("15").unwrap(), "img")
    }

    #[test]
    fn test_open_restores_previous_session() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());

        {
            let mut basket = Basket::open(Rc::clone(&store));
            basket.cart_mut().add_item(line("p1", 2));
            basket.wishlist_mut().add_item(saved("w1"));
        }

        let basket = Basket::open(store);
        assert_eq!(basket.cart().total_item_count(), 2);
        assert!(basket.wishlist().contains(&pid("w1")));
    }

    #[test]
    fn test_complete_checkout_clears_cart_only() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
        let mut basket = Basket::open(Rc::clone(&store));
        basket.cart_mut().add_item(line("p1", 1));
        basket.wishlist_mut().add_item(saved("w1"));

        basket.complete_checkout();
        assert!(basket.cart().is_empty());
        assert_eq!(basket.wishlist().len(), 1);

        let reopened = Basket::open(store);
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let mut basket = Basket::detached();
        basket.wishlist_mut().add_item(saved("w1"));

        assert!(basket.move_to_cart(&pid("w1"), None, Quantity::new(2).unwrap()));
        assert!(!basket.wishlist().contains(&pid("w1")));
        assert_eq!(basket.cart().total_price(), Decimal::new(30, 0));

        assert!(!basket.move_to_cart(&pid("w1"), None, Quantity::ONE));
        assert_eq!(basket.cart().total_item_count(), 2);
    }

    #[test]
    fn test_detached_does_not_persist() {
        let mut basket = Basket::detached();
        basket.cart_mut().add_item(line("p1", 1));
        assert_eq!(basket.cart().len(), 1);
    }
}
