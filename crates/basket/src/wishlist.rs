//! Wishlist store.
//!
//! A deduplicated list of saved products. The first snapshot saved for a
//! product wins; saving it again does nothing.

use naked_pineapple_core::ProductId;
use tracing::debug;

use crate::item::WishlistItem;
use crate::subscribe::{Subscriber, Subscribers};

/// The shopper's wishlist.
#[derive(Debug, Default)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
    subscribers: Subscribers<[WishlistItem]>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from stored items, keeping the first entry per product.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = WishlistItem>) -> Self {
        let mut wishlist = Self::new();
        for item in items {
            wishlist.insert(item);
        }
        wishlist
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber<[WishlistItem]> + 'static) {
        self.subscribers.push(subscriber);
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&WishlistItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Save a product unless it is already on the list.
    ///
    /// Returns `false` when the product was already saved.
    pub fn add_item(&mut self, item: WishlistItem) -> bool {
        let product_id = item.product_id.clone();
        if !self.insert(item) {
            return false;
        }
        debug!(%product_id, "wishlist add");
        self.publish();
        true
    }

    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        if self.items.len() != before {
            debug!(%product_id, "wishlist remove");
            self.publish();
        }
    }

    /// Save the product if absent, remove it if present.
    ///
    /// Returns `true` when the product is saved afterwards.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.product_id) {
            self.remove_item(&item.product_id);
            false
        } else {
            self.add_item(item)
        }
    }

    pub fn clear(&mut self) {
        debug!(entries = self.items.len(), "wishlist clear");
        self.items.clear();
        self.publish();
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    fn insert(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.product_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    fn publish(&self) {
        self.subscribers.publish(&self.items);
    }
}
