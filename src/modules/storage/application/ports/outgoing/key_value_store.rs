/// Failure raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Persistent storage is not available in this execution context")]
    Unavailable,

    #[error("Storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Raw string key-value storage with browser `localStorage` semantics:
/// synchronous, single writer, no transactions across keys.
pub trait KeyValueStore: Send + Sync {
    /// `false` when no persistent store exists (e.g. server-side rendering).
    fn is_available(&self) -> bool {
        true
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently stored, in backend order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
