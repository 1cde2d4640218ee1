use std::path::PathBuf;
use std::sync::Arc;

use crate::content::domain::Language;
use crate::storage::adapter::outgoing::{InMemoryStore, JsonFileStore, UnavailableStore};
use crate::storage::application::ports::outgoing::{KeyValueStore, StoreError};

pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown CONTENT_STORE value: {0}")]
    InvalidStoreBackend(String),

    #[error("CONTENT_STORE_PATH is not set")]
    MissingStorePath,

    #[error("Unknown CONTENT_UI_LANGUAGE value: {0}")]
    InvalidLanguage(String),

    #[error("Browser storage requires the `browser` feature")]
    BrowserUnsupported,

    #[error("Failed to open content store: {0}")]
    Store(#[from] StoreError),
}

/// Where the key space lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
    Browser,
    /// No persistent storage, as when running outside a browser.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub store: StoreBackend,
    pub ui_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            store: StoreBackend::Memory,
            ui_language: Language::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let environment = var("RUST_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let store = match var("CONTENT_STORE")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("memory") => StoreBackend::Memory,
            Some("file") => {
                let path = var("CONTENT_STORE_PATH").ok_or(ConfigError::MissingStorePath)?;
                StoreBackend::File(PathBuf::from(path))
            }
            Some("browser") => StoreBackend::Browser,
            Some("none") => StoreBackend::Disabled,
            Some(other) => return Err(ConfigError::InvalidStoreBackend(other.to_string())),
        };

        let ui_language = match var("CONTENT_UI_LANGUAGE") {
            None => Language::default(),
            Some(code) => Language::parse(&code).ok_or(ConfigError::InvalidLanguage(code))?,
        };

        Ok(Self {
            environment,
            store,
            ui_language,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Opens the configured backend.
    pub fn open_backend(&self) -> Result<Arc<dyn KeyValueStore>, ConfigError> {
        match &self.store {
            StoreBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
            StoreBackend::File(path) => Ok(Arc::new(JsonFileStore::open(path.clone())?)),
            StoreBackend::Disabled => Ok(Arc::new(UnavailableStore)),
            #[cfg(feature = "browser")]
            StoreBackend::Browser => Ok(Arc::new(
                crate::storage::adapter::outgoing::BrowserLocalStorage,
            )),
            #[cfg(not(feature = "browser"))]
            StoreBackend::Browser => Err(ConfigError::BrowserUnsupported),
        }
    }
}

/// Try `.env.{environment}` first, then fall back to `.env`.
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
