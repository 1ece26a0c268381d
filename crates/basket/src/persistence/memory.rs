//! In-memory key-value store.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, Result, StorageError};

/// Key-value store backed by a `HashMap`.
///
/// An optional byte quota makes writes fail once the total size of stored
/// values would exceed it, the way browser storage does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes beyond `bytes` of stored values.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota: Some(bytes),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let available = quota.saturating_sub(others);
            if blob.len() > available {
                return Err(StorageError::QuotaExceeded {
                    needed: blob.len(),
                    available,
                });
            }
        }
        entries.insert(key.to_owned(), blob.to_owned());
        Ok(())
    }
}
