mod in_memory_store;
mod json_file_store;
mod unavailable_store;

#[cfg(feature = "browser")]
mod browser_local_storage;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use unavailable_store::UnavailableStore;

#[cfg(feature = "browser")]
pub use browser_local_storage::BrowserLocalStorage;
