//! `localStorage`-backed token slot and the cross-tab change feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only read/write behavior is centralized here so the session store
//! only ever sees the `session::TokenStore` seam. Native builds get an empty,
//! read-only slot.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{SessionStore, StoreError, TokenStore};

/// The token slot in `window.localStorage` under `key`.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .ok_or(StoreError::Unavailable)?
                .set_item(&self.key, token)
                .map_err(|e| StoreError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .ok_or(StoreError::Unavailable)?
                .remove_item(&self.key)
                .map_err(|e| StoreError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// Re-validate `session` whenever another tab of this origin changes storage.
///
/// The browser fires `storage` only in tabs other than the writer, so a
/// logout or token swap elsewhere reaches this tab without polling.
pub fn watch_other_tabs(session: SessionStore) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_storage = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
            session.handle_storage_change(event.key().as_deref());
        });
        if window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("storage events unavailable; other tabs will not sync the session");
        }
        // Lives for the whole page.
        on_storage.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}
