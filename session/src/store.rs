//! Persistent slot holding the single bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backs this with `localStorage` (see the `client` crate). Writes
//! are visible to every other tab of the same origin through `storage`
//! events; [`MemoryStorage`] reproduces those semantics in-process so the
//! cross-tab flow can be exercised without a browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Error returned by [`TokenStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (private mode, non-browser host).
    #[error("token storage is unavailable")]
    Unavailable,
    /// The backend refused the write (quota, security policy).
    #[error("token storage rejected the write: {0}")]
    Rejected(String),
}

/// A single named slot for the raw bearer token.
///
/// No expiry metadata is stored next to the token; expiry is re-derived from
/// the token claims on every read.
pub trait TokenStore: Send + Sync {
    /// Name of the storage slot; storage-change events are matched against it.
    fn key(&self) -> &str;

    fn get(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unavailable or rejects the write.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unavailable or rejects the write.
    fn clear(&self) -> Result<(), StoreError>;
}

type Watcher = Arc<dyn Fn(Option<&str>) + Send + Sync>;

#[derive(Default)]
struct StorageInner {
    items: HashMap<String, String>,
    watchers: Vec<(u64, Watcher)>,
}

/// In-process stand-in for origin-scoped browser storage shared by tabs.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<StorageInner>>,
    next_tab: Arc<AtomicU64>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a token slot as seen from a new tab.
    #[must_use]
    pub fn tab(&self, key: impl Into<String>) -> MemoryTokenStore {
        MemoryTokenStore {
            storage: self.clone(),
            key: key.into(),
            tab: self.next_tab.fetch_add(1, Ordering::Relaxed),
        }
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.lock().items.get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StorageInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a write from `origin_tab` and notify every other tab if the value changed.
    fn write(&self, origin_tab: u64, key: &str, value: Option<&str>) {
        let watchers: Vec<Watcher> = {
            let mut inner = self.lock();
            let previous = match value {
                Some(v) => inner.items.insert(key.to_owned(), v.to_owned()),
                None => inner.items.remove(key),
            };
            if previous.as_deref() == value {
                return;
            }
            inner
                .watchers
                .iter()
                .filter(|(tab, _)| *tab != origin_tab)
                .map(|(_, watcher)| Arc::clone(watcher))
                .collect()
        };
        for watcher in watchers {
            watcher(Some(key));
        }
    }

    fn watch(&self, tab: u64, watcher: Watcher) {
        self.lock().watchers.push((tab, watcher));
    }
}

/// One tab's handle on a [`MemoryStorage`] slot.
#[derive(Clone)]
pub struct MemoryTokenStore {
    storage: MemoryStorage,
    key: String,
    tab: u64,
}

impl MemoryTokenStore {
    /// A slot on fresh, unshared storage.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        MemoryStorage::new().tab(key)
    }

    #[must_use]
    pub fn storage(&self) -> &MemoryStorage {
        &self.storage
    }

    /// Register a listener for writes made by *other* tabs, like a browser
    /// `storage` event. The listener receives the changed key.
    pub fn watch<F>(&self, listener: F)
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.storage.watch(self.tab, Arc::new(listener));
    }
}

impl TokenStore for MemoryTokenStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> Option<String> {
        self.storage.get_item(&self.key)
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.storage.write(self.tab, &self.key, Some(token));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.storage.write(self.tab, &self.key, None);
        Ok(())
    }
}
