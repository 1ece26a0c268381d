//! Command implementations.
//!
//! Every command opens the basket from the configured data directory, so
//! changes persist between invocations.

pub mod cart;
pub mod checkout;
pub mod wishlist;

use std::rc::Rc;

use naked_pineapple_basket::Basket;
use naked_pineapple_basket::ItemError;
use naked_pineapple_basket::config::BasketConfig;
use naked_pineapple_basket::persistence::{FileStore, KeyValueStore, StorageError};
use naked_pineapple_core::{ProductId, QuantityError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The line item could not be built.
    #[error("{0}")]
    Item(#[from] ItemError),

    /// Quantity was zero.
    #[error("{0}")]
    Quantity(#[from] QuantityError),

    /// The product is not on the wishlist.
    #[error("Product {0} is not on the wishlist")]
    NotOnWishlist(ProductId),
}

/// Open the basket stored in the configured data directory.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn open_basket(config: &BasketConfig) -> Result<Basket, StorageError> {
    let store: Rc<dyn KeyValueStore> = Rc::new(FileStore::open(&config.data_dir)?);
    Ok(Basket::open(store))
}
