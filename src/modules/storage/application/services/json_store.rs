use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::storage::application::ports::outgoing::{KeyValueStore, StoreError};

/// Typed JSON view over a [`KeyValueStore`].
///
/// Nothing here fails past its own boundary: an unavailable backend, a
/// corrupt value or a rejected write is logged and reported as `None` /
/// `false`.
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for JsonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore")
            .field("available", &self.backend.is_available())
            .finish()
    }
}

impl JsonStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                error!(key, error = %e, "Error getting item from storage");
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(written) => written,
            Err(e) => {
                error!(key, error = %e, "Error setting item in storage");
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        if !self.backend.is_available() {
            return false;
        }

        match self.backend.remove(key) {
            Ok(()) => true,
            Err(e) => {
                error!(key, error = %e, "Error removing item from storage");
                false
            }
        }
    }

    /// Raw read for sentinel values that are not JSON documents.
    pub fn get_flag(&self, key: &str) -> Option<String> {
        if !self.backend.is_available() {
            return None;
        }

        self.backend.get_raw(key).unwrap_or_else(|e| {
            error!(key, error = %e, "Error reading flag from storage");
            None
        })
    }

    pub fn set_flag(&self, key: &str, value: &str) -> bool {
        if !self.backend.is_available() {
            return false;
        }

        match self.backend.set_raw(key, value) {
            Ok(()) => true,
            Err(e) => {
                error!(key, error = %e, "Error writing flag to storage");
                false
            }
        }
    }

    /// Keys starting with `prefix`, with the prefix stripped.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        if !self.backend.is_available() {
            return Vec::new();
        }

        match self.backend.keys() {
            Ok(keys) => keys
                .into_iter()
                .filter_map(|key| key.strip_prefix(prefix).map(str::to_string))
                .collect(),
            Err(e) => {
                error!(prefix, error = %e, "Error listing storage keys");
                Vec::new()
            }
        }
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        if !self.backend.is_available() {
            return Ok(None);
        }

        let raw = match self.backend.get_raw(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Backend(format!("malformed JSON: {e}")))
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<bool, StoreError> {
        if !self.backend.is_available() {
            debug!(key, "Storage unavailable, write skipped");
            return Ok(false);
        }

        let raw =
            serde_json::to_string(value).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.backend.set_raw(key, &raw)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    use crate::storage::adapter::outgoing::{InMemoryStore, UnavailableStore};
    use crate::tests::support::stubs::FailingStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "guide".to_string(),
            count: 3,
        }
    }

    #[test]
    fn get_missing_key_returns_none() {
        // Arrange
        let store = JsonStore::new(Arc::new(InMemoryStore::new()));

        // Act
        let value: Option<Sample> = store.get("nonexistent_key");

        // Assert
        assert!(value.is_none());
    }

    #[test]
    fn set_then_get_decodes_the_stored_json() {
        let store = JsonStore::new(Arc::new(InMemoryStore::new()));

        assert!(store.set("sample", &sample()));

        assert_eq!(store.get::<Sample>("sample"), Some(sample()));
    }

    #[test]
    fn set_writes_json_text_to_the_backend() {
        let backend = Arc::new(InMemoryStore::new());
        let store = JsonStore::new(backend.clone());

        store.set("sample", &sample());

        let raw = backend.get_raw("sample").unwrap().unwrap();
        assert_eq!(raw, r#"{"name":"guide","count":3}"#);
    }

    #[test]
    fn malformed_json_is_treated_as_absent() {
        // Arrange
        let backend = Arc::new(InMemoryStore::new());
        backend.set_raw("sample", "{not json").unwrap();
        let store = JsonStore::new(backend);

        // Act
        let value: Option<Sample> = store.get("sample");

        // Assert
        assert!(value.is_none());
    }

    #[test]
    fn empty_string_is_treated_as_absent() {
        let backend = Arc::new(InMemoryStore::new());
        backend.set_raw("sample", "").unwrap();
        let store = JsonStore::new(backend);

        assert!(store.get::<Sample>("sample").is_none());
    }

    #[test]
    fn unavailable_backend_degrades_to_none_and_false() {
        let store = JsonStore::new(Arc::new(UnavailableStore));

        assert!(store.get::<Sample>("sample").is_none());
        assert!(!store.set("sample", &sample()));
        assert!(!store.remove("sample"));
        assert!(store.get_flag("dbInitialized").is_none());
        assert!(!store.set_flag("dbInitialized", "true"));
        assert!(store.keys_with_prefix("page_").is_empty());
    }

    #[test]
    fn quota_exceeded_write_returns_false_and_keeps_previous_value() {
        // Arrange
        let backend = Arc::new(InMemoryStore::with_quota(40));
        let store = JsonStore::new(backend);
        assert!(store.set("sample", &sample()));

        let oversized = Sample {
            name: "x".repeat(200),
            count: 1,
        };

        // Act
        let written = store.set("sample", &oversized);

        // Assert
        assert!(!written);
        assert_eq!(store.get::<Sample>("sample"), Some(sample()));
    }

    #[test]
    fn backend_errors_never_escape() {
        let store = JsonStore::new(Arc::new(FailingStore));

        assert!(store.get::<Sample>("sample").is_none());
        assert!(!store.set("sample", &sample()));
        assert!(!store.remove("sample"));
        assert!(store.keys_with_prefix("page_").is_empty());
    }

    #[test]
    fn remove_deletes_the_key() {
        let store = JsonStore::new(Arc::new(InMemoryStore::new()));
        store.set("sample", &sample());

        assert!(store.remove("sample"));

        assert!(store.get::<Sample>("sample").is_none());
    }

    #[test]
    fn keys_with_prefix_strips_the_prefix() {
        let store = JsonStore::new(Arc::new(InMemoryStore::new()));
        store.set("page_home", &sample());
        store.set("page_about", &sample());
        store.set("editor_home", &sample());
        store.set("news", &sample());

        let mut ids = store.keys_with_prefix("page_");
        ids.sort();

        assert_eq!(ids, vec!["about".to_string(), "home".to_string()]);
    }

    #[test]
    fn flags_are_stored_verbatim() {
        let backend = Arc::new(InMemoryStore::new());
        let store = JsonStore::new(backend.clone());

        assert!(store.set_flag("dbInitialized", "true"));

        assert_eq!(backend.get_raw("dbInitialized").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get_flag("dbInitialized").as_deref(), Some("true"));
    }
}
