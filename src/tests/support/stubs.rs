use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::content::domain::PageContent;
use crate::editor::application::ports::outgoing::{PageSaveHandler, SaveError};
use crate::notification::application::ports::outgoing::ChangeNotifier;
use crate::notification::domain::ContentEvent;
use crate::storage::adapter::outgoing::InMemoryStore;
use crate::storage::application::ports::outgoing::{KeyValueStore, StoreError};

/// Backend that reports itself available but fails every call.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_raw(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("disk on fire".to_string()))
    }

    fn set_raw(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk on fire".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk on fire".to_string()))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Backend("disk on fire".to_string()))
    }
}

/// In-memory backend that refuses writes to a single key.
pub struct RejectingStore {
    inner: InMemoryStore,
    rejected: String,
}

impl RejectingStore {
    pub fn rejecting(key: &str) -> Self {
        Self {
            inner: InMemoryStore::new(),
            rejected: key.to_string(),
        }
    }
}

impl KeyValueStore for RejectingStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key == self.rejected {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
            });
        }
        self.inner.set_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys()
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<ContentEvent>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<ContentEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event_type: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type() == event_type)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn publish(&self, event: &ContentEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Save handler that records what it was given and answers `result`.
#[derive(Clone)]
pub struct StubSaveHandler {
    result: Result<bool, SaveError>,
    saved: Arc<Mutex<Vec<PageContent>>>,
}

impl StubSaveHandler {
    pub fn accepting() -> Self {
        Self {
            result: Ok(true),
            saved: Arc::default(),
        }
    }

    pub fn refusing() -> Self {
        Self {
            result: Ok(false),
            saved: Arc::default(),
        }
    }

    pub fn failing(error: SaveError) -> Self {
        Self {
            result: Err(error),
            saved: Arc::default(),
        }
    }

    pub fn saved(&self) -> Vec<PageContent> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSaveHandler for StubSaveHandler {
    async fn save(&self, content: &PageContent) -> Result<bool, SaveError> {
        self.saved.lock().unwrap().push(content.clone());
        self.result.clone()
    }
}
