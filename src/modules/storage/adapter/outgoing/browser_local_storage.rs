//! `window.localStorage` backend for wasm builds (feature `browser`).

use crate::storage::application::ports::outgoing::{KeyValueStore, StoreError};

/// Resolves `localStorage` on every call, like the page scripts do, so the
/// adapter degrades to "unavailable" when there is no window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocalStorage;

impl BrowserLocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn require() -> Result<web_sys::Storage, StoreError> {
        Self::storage().ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserLocalStorage {
    fn is_available(&self) -> bool {
        Self::storage().is_some()
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::require()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // The browser signals QuotaExceededError as a DOMException; it is the
        // only failure setItem raises in practice.
        Self::require()?
            .set_item(key, value)
            .map_err(|_| StoreError::QuotaExceeded {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::require()?
            .remove_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let storage = Self::require()?;
        let len = storage
            .length()
            .map_err(|e| StoreError::Backend(format!("{e:?}")))?;

        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = storage
                .key(index)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
