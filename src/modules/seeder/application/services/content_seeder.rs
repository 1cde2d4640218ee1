use std::sync::Arc;

use tracing::{debug, error, info};

use crate::content::application::services::ContentRepository;
use crate::content::domain::{keys, PageContent};
use crate::seeder::application::services::page_migrations;
use crate::seeder::domain::{catalog, default_content};
use crate::shared::Clock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("Persistent storage is not available")]
    StorageUnavailable,

    #[error("Failed to seed {0}")]
    WriteFailed(String),
}

/// First-run population of the store.
#[derive(Clone)]
pub struct ContentSeeder {
    repository: ContentRepository,
    clock: Arc<dyn Clock>,
}

impl ContentSeeder {
    pub fn new(repository: ContentRepository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub fn create_default_page_content(&self, page_id: &str) -> Option<PageContent> {
        default_content::create_default_page_content(page_id)
    }

    pub fn update_home_page_with_all_sections(&self) -> bool {
        page_migrations::update_home_page_with_all_sections(&self.repository)
    }

    pub fn update_about_page_with_all_sections(&self) -> bool {
        page_migrations::update_about_page_with_all_sections(&self.repository)
    }

    pub fn is_initialized(&self) -> bool {
        self.repository.store().get_flag(keys::DB_INITIALIZED).as_deref()
            == Some(keys::DB_INITIALIZED_VALUE)
    }

    /// Seeds navigation, shared strings, media, the default pages and the
    /// sample news/resources, then sets the `dbInitialized` flag.
    ///
    /// Does nothing once the flag is set. A failed run leaves the flag
    /// unset so the next start seeds again.
    pub fn initialize_database(&self) -> bool {
        if self.is_initialized() {
            debug!("Content store already initialized");
            return true;
        }

        match self.seed() {
            Ok(()) => {
                info!("Content store initialized with default content");
                true
            }
            Err(e) => {
                error!(error = %e, "Error initializing content store");
                false
            }
        }
    }

    fn seed(&self) -> Result<(), SeedError> {
        let repo = &self.repository;
        let store = repo.store();
        if !store.is_available() {
            return Err(SeedError::StorageUnavailable);
        }

        ensure(
            repo.set_website_structure(&catalog::website_structure()),
            keys::WEBSITE_STRUCTURE,
        )?;

        let global = catalog::global_content();
        ensure(repo.set_global_content(&global), keys::GLOBAL_CONTENT)?;
        seed_editor_copy(repo, keys::GLOBAL_CONTENT, &global)?;

        let media = catalog::media_library(&self.clock.today());
        ensure(repo.set_media_library(&media), keys::MEDIA_LIBRARY)?;
        seed_editor_copy(repo, keys::MEDIA_LIBRARY, &media)?;

        for page in default_content::SEEDED_PAGES
            .iter()
            .filter_map(|id| default_content::create_default_page_content(id))
        {
            ensure(repo.set_page_content(&page), &keys::page_key(&page.id))?;
            seed_editor_copy(repo, &page.id, &page)?;
        }

        let news = catalog::sample_news();
        ensure(repo.set_news(&news), keys::NEWS)?;
        seed_editor_copy(repo, keys::NEWS, &news)?;

        let resources = catalog::sample_resources();
        ensure(repo.set_resources(&resources), keys::RESOURCES)?;
        seed_editor_copy(repo, keys::RESOURCES, &resources)?;

        ensure(
            store.set_flag(keys::DB_INITIALIZED, keys::DB_INITIALIZED_VALUE),
            keys::DB_INITIALIZED,
        )
    }
}

fn ensure(written: bool, key: &str) -> Result<(), SeedError> {
    if written {
        Ok(())
    } else {
        Err(SeedError::WriteFailed(key.to_string()))
    }
}

fn seed_editor_copy<T: serde::Serialize + ?Sized>(
    repository: &ContentRepository,
    key: &str,
    value: &T,
) -> Result<(), SeedError> {
    let editor_key = keys::editor_key(key);
    ensure(repository.store().set(&editor_key, value), &editor_key)
}
