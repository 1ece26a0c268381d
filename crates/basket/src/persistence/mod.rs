//! Key-value persistence for basket collections.
//!
//! Each store is saved as one JSON blob under a fixed key and read back
//! wholesale on startup. Writes go through [`PersistenceAdapter`], which is a
//! [`Subscriber`] of the store it saves.
//!
//! # Blob format
//!
//! ```json
//! {"version":1,"items":[
//!   {"productId":"p1","name":"Mug","unitPrice":"10","imageUrl":"...","quantity":2}
//! ]}
//! ```
//!
//! Anything that cannot be read back (absent key, I/O failure, malformed
//! JSON, unknown version) is treated as an empty collection.

pub mod file;
pub mod memory;

use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, trace, warn};

use crate::subscribe::Subscriber;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Fixed storage keys.
pub mod keys {
    /// Key for the cart collection.
    pub const CART: &str = "cart";

    /// Key for the wishlist collection.
    pub const WISHLIST: &str = "wishlist";
}

/// Current envelope version.
pub const FORMAT_VERSION: u32 = 1;

/// Errors from a key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the store cannot address.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The store has no room for the value.
    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// The collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for `StorageError`.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A string key-value store read and written wholesale per key.
pub trait KeyValueStore {
    /// Read the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be written.
    fn set(&self, key: &str, blob: &str) -> Result<()>;
}

/// Versioned wrapper written around every collection.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    version: u32,
    items: Vec<T>,
}

/// Serialize a collection into a blob.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if an item cannot be serialized.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    #[derive(Serialize)]
    struct EnvelopeRef<'a, T> {
        version: u32,
        items: &'a [T],
    }

    Ok(serde_json::to_string(&EnvelopeRef {
        version: FORMAT_VERSION,
        items,
    })?)
}

/// Parse a blob written by [`encode`].
///
/// Returns `None` for malformed JSON, invalid items or an unknown version.
#[must_use]
pub fn decode<T: DeserializeOwned>(blob: &str) -> Option<Vec<T>> {
    match serde_json::from_str::<Envelope<T>>(blob) {
        Ok(envelope) if envelope.version == FORMAT_VERSION => Some(envelope.items),
        Ok(envelope) => {
            warn!(version = envelope.version, "unsupported stored collection version");
            None
        }
        Err(e) => {
            warn!(error = %e, "malformed stored collection");
            None
        }
    }
}

/// Read the collection stored under `key`.
///
/// Never fails: unreadable or corrupt data yields an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Ok(Some(blob)) => decode(&blob).unwrap_or_else(|| {
            warn!(key, "discarding unreadable stored collection");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read stored collection");
            Vec::new()
        }
    }
}

/// Writes a store's collection under a fixed key after every change.
///
/// Failed writes are logged and dropped; the in-memory store stays
/// authoritative.
pub struct PersistenceAdapter<T> {
    store: Rc<dyn KeyValueStore>,
    key: &'static str,
    _items: PhantomData<fn(&[T])>,
}

impl<T> PersistenceAdapter<T> {
    #[must_use]
    pub fn new(store: Rc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _items: PhantomData,
        }
    }
}

impl<T: Serialize> PersistenceAdapter<T> {
    /// Write the collection, reporting failures to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn save(&self, items: &[T]) -> Result<()> {
        let blob = encode(items)?;
        self.store.set(self.key, &blob)?;
        trace!(key = self.key, bytes = blob.len(), "collection saved");
        Ok(())
    }
}

impl<T: Serialize> Subscriber<[T]> for PersistenceAdapter<T> {
    fn notify(&self, snapshot: &[T]) {
        if let Err(e) = self.save(snapshot) {
            error!(key = self.key, error = %e, "failed to persist collection");
        }
    }
}

impl<T> std::fmt::Debug for PersistenceAdapter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
