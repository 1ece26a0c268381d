//! Cart store.
//!
//! Holds the ordered line items for the active session and derives totals.
//! Line items are unique per `(product_id, selected_color)`; adding an
//! existing variant increases its quantity.
//!
//! `remove_item` and `set_quantity` match on `product_id` alone and therefore
//! touch every color variant of a product. Use [`Cart::remove_variant`] and
//! [`Cart::set_variant_quantity`] to address a single variant.

use naked_pineapple_core::{Color, ProductId, Quantity};
use rust_decimal::Decimal;
use tracing::debug;

use crate::item::LineItem;
use crate::subscribe::{Subscriber, Subscribers};

/// The shopper's cart.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    subscribers: Subscribers<[LineItem]>,
}

impl Cart {
    /// Create an empty cart with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a cart from previously stored items.
    ///
    /// Items are merged with the same rules as [`Cart::add_item`], so stored
    /// data that repeats a variant collapses into one line. No subscriber is
    /// notified.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.merge(item);
        }
        cart
    }

    /// Register a subscriber notified after every change.
    pub fn subscribe(&mut self, subscriber: impl Subscriber<[LineItem]> + 'static) {
        self.subscribers.push(subscriber);
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line item for one variant.
    #[must_use]
    pub fn get(&self, product_id: &ProductId, color: Option<&Color>) -> Option<&LineItem> {
        self.items.iter().find(|i| i.is_variant(product_id, color))
    }

    /// Add a line item, or increase the quantity of the matching variant.
    ///
    /// When the variant is already present only its quantity changes; the
    /// name, price and image captured first are kept.
    pub fn add_item(&mut self, item: LineItem) {
        debug!(
            product_id = %item.product_id,
            color = ?item.selected_color,
            quantity = item.quantity.get(),
            "cart add"
        );
        self.merge(item);
        self.publish();
    }

    /// Remove every line item for `product_id`, whatever its color.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(%product_id, removed, "cart remove");
            self.publish();
        }
    }

    /// Remove the line item for exactly one variant.
    pub fn remove_variant(&mut self, product_id: &ProductId, color: Option<&Color>) {
        let before = self.items.len();
        self.items.retain(|i| !i.is_variant(product_id, color));
        if self.items.len() != before {
            debug!(%product_id, ?color, "cart remove variant");
            self.publish();
        }
    }

    /// Set the quantity of every line item for `product_id`.
    ///
    /// A quantity of zero or less removes the product, exactly like
    /// [`Cart::remove_item`]. Values above `u32::MAX` saturate.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        let Some(quantity) = Quantity::saturating_from_i64(quantity) else {
            self.remove_item(product_id);
            return;
        };

        let mut changed = false;
        let mut matched = 0_usize;
        for item in self.items.iter_mut().filter(|i| &i.product_id == product_id) {
            matched += 1;
            if item.quantity != quantity {
                item.quantity = quantity;
                changed = true;
            }
        }

        if matched > 1 {
            debug!(%product_id, variants = matched, "set_quantity applied to all color variants");
        }
        if changed {
            debug!(%product_id, quantity = quantity.get(), "cart set quantity");
            self.publish();
        }
    }

    /// Set the quantity of exactly one variant; zero or less removes it.
    pub fn set_variant_quantity(
        &mut self,
        product_id: &ProductId,
        color: Option<&Color>,
        quantity: i64,
    ) {
        let Some(quantity) = Quantity::saturating_from_i64(quantity) else {
            self.remove_variant(product_id, color);
            return;
        };

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.is_variant(product_id, color))
            && item.quantity != quantity
        {
            item.quantity = quantity;
            debug!(%product_id, ?color, quantity = quantity.get(), "cart set variant quantity");
            self.publish();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "cart clear");
        self.items.clear();
        self.publish();
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Sum of `unit_price * quantity`, unrounded.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn merge(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.is_variant(&item.product_id, item.selected_color.as_ref()))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    fn publish(&self) {
        self.subscribers.publish(&self.items);
    }
}
