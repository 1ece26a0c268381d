//! Naked Pineapple Basket library.
//!
//! Shopper-side state for the storefront: the cart and the wishlist, each
//! persisted to a key-value store and rehydrated on startup.
//!
//! # Architecture
//!
//! - [`Cart`] and [`Wishlist`] hold pure in-memory state. They never touch
//!   storage directly; after every change they notify their subscribers.
//! - [`persistence::PersistenceAdapter`] subscribes to a store and writes the
//!   whole collection under a fixed key of a [`persistence::KeyValueStore`].
//! - [`Basket`] is the application root: built once, it rehydrates both
//!   stores and wires their persistence.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod item;
pub mod persistence;
pub mod state;
pub mod subscribe;
pub mod view;
pub mod wishlist;

pub use cart::Cart;
pub use error::ItemError;
pub use item::{LineItem, WishlistItem};
pub use state::Basket;
pub use subscribe::Subscriber;
pub use wishlist::Wishlist;
