use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use crate::storage::application::ports::outgoing::{KeyValueStore, StoreError};

/// Whole key space kept in one JSON object on disk, the native counterpart
/// of a browser profile's `localStorage`.
///
/// Every write rewrites the file through a sibling temp file and a rename,
/// so a crash leaves either the old or the new document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                StoreError::Backend(format!("{} is not a key-value document: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Content store file absent, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(StoreError::Backend(e.to_string())),
        };

        info!(path = %path.display(), keys = entries.len(), "Opened content store file");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Backend(e.to_string()))?;
            }
        }

        let document =
            serde_json::to_string_pretty(entries).map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, document).map_err(|e| StoreError::Backend(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn mutate<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("file store lock poisoned".to_string()))?;

        let mut next = entries.clone();
        change(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("file store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("file store lock poisoned".to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();

        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();

        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn writes_survive_reopening() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile").join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set_raw("dbInitialized", "true").unwrap();
            store.set_raw("news", "[]").unwrap();
            store.remove("news").unwrap();
        }

        // Act
        let reopened = JsonFileStore::open(&path).unwrap();

        // Assert
        assert_eq!(
            reopened.get_raw("dbInitialized").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(reopened.get_raw("news").unwrap(), None);
    }

    #[test]
    fn corrupt_document_is_rejected_on_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileStore::open(&path);

        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[test]
    fn no_temp_file_is_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();

        store.set_raw("key", "\"value\"").unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("store.json.tmp").exists());
    }
}
