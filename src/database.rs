//! Wires a backend into the repository, seeder and event bus, and runs the
//! first-load seeding.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{AppConfig, ConfigError};
use crate::content::application::services::ContentRepository;
use crate::content::domain::{Language, Publication};
use crate::editor::adapter::outgoing::RepositorySaveHandler;
use crate::editor::application::services::{load_recent_edits, PageContentEditor};
use crate::editor::domain::RecentEdit;
use crate::notification::adapter::outgoing::EventBus;
use crate::seeder::application::services::ContentSeeder;
use crate::seeder::domain::catalog;
use crate::shared::{Clock, SystemClock};
use crate::storage::adapter::outgoing::InMemoryStore;
use crate::storage::application::ports::outgoing::KeyValueStore;
use crate::storage::application::services::JsonStore;
use crate::views::PageView;

#[derive(Clone)]
pub struct ContentDatabase {
    repository: ContentRepository,
    seeder: ContentSeeder,
    bus: EventBus,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ContentDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDatabase")
            .field("repository", &self.repository)
            .field("bus", &self.bus)
            .finish()
    }
}

impl ContentDatabase {
    /// Seeds an empty store, then brings the home page up to date. Both
    /// steps are skipped when the backend has no persistent storage.
    pub fn open(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let bus = EventBus::new();
        let repository = ContentRepository::new(JsonStore::new(backend), Arc::new(bus.clone()));
        let seeder = ContentSeeder::new(repository.clone(), Arc::clone(&clock));

        if repository.store().is_available() {
            seeder.initialize_database();
            seeder.update_home_page_with_all_sections();
        } else {
            debug!("No persistent storage, skipping content seeding");
        }

        Self {
            repository,
            seeder,
            bus,
            clock,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let backend = config.open_backend()?;
        info!(store = ?config.store, "Opening content database");
        Ok(Self::open(backend, Arc::new(SystemClock)))
    }

    pub fn in_memory() -> Self {
        Self::open(Arc::new(InMemoryStore::new()), Arc::new(SystemClock))
    }

    pub fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    pub fn seeder(&self) -> &ContentSeeder {
        &self.seeder
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// A view of `page_id` that follows every later save.
    pub fn mount_view(&self, page_id: &str, language: Language) -> PageView {
        PageView::mount(self.repository.clone(), &self.bus, page_id, language)
    }

    /// An editor loaded with the page's draft, saving through the
    /// repository.
    pub fn editor(
        &self,
        page_id: &str,
        language: Language,
    ) -> PageContentEditor<RepositorySaveHandler> {
        let initial = self.repository.get_exact_page_content(page_id);
        PageContentEditor::new(
            page_id,
            Some(initial),
            RepositorySaveHandler::new(self.repository.clone()),
            self.repository.store().clone(),
            Arc::clone(&self.clock),
        )
        .with_language(language)
    }

    pub fn recent_edits(&self) -> Vec<RecentEdit> {
        load_recent_edits(self.repository.store())
    }

    /// Review page catalog. Served from the built-in sample set, never
    /// stored.
    pub fn publications(&self) -> Vec<Publication> {
        catalog::sample_publications()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::NewsItem;
    use crate::seeder::domain::default_content::{HOME_REQUIRED_SECTIONS, SEEDED_PAGES};
    use crate::storage::adapter::outgoing::UnavailableStore;
    use crate::tests::support::fixtures::{fixed_clock, page, section};

    #[test]
    fn open_seeds_every_default_page() {
        let db = ContentDatabase::in_memory();

        assert!(db.seeder().is_initialized());
        for page_id in SEEDED_PAGES {
            assert!(db.repository().get_page_content(page_id).is_some(), "{page_id}");
        }
    }

    #[test]
    fn editor_news_stays_a_news_list() {
        // Arrange
        let db = ContentDatabase::open(Arc::new(InMemoryStore::new()), Arc::new(fixed_clock()));
        let store = db.repository().store();
        let seeded = store.get::<Vec<NewsItem>>("editor_news");

        // Act
        let page = db.repository().get_exact_page_content("news");

        // Assert
        assert_eq!(seeded.as_ref().map(|news| news.len()), Some(3));
        assert_eq!(page.id, "news");
        assert_eq!(store.get::<Vec<NewsItem>>("editor_news"), seeded);
    }

    #[test]
    fn reopening_upgrades_old_home_page_without_reseeding() {
        // Arrange
        let backend = Arc::new(InMemoryStore::new());
        let first = ContentDatabase::open(backend.clone(), Arc::new(fixed_clock()));
        first
            .repository()
            .set_page_content(&page("home", vec![section("hero", "Bienvenue", "مرحبا")]));

        // Act
        let reopened = ContentDatabase::open(backend, Arc::new(fixed_clock()));

        // Assert
        let home = reopened.repository().get_page_content("home").unwrap();
        assert_eq!(home.sections[0].content.fr, "Bienvenue");
        assert_eq!(home.sections.len(), HOME_REQUIRED_SECTIONS.len());
    }

    #[test]
    fn open_without_storage_degrades_quietly() {
        let db = ContentDatabase::open(Arc::new(UnavailableStore), Arc::new(fixed_clock()));

        assert!(!db.seeder().is_initialized());
        assert!(db.repository().get_page_content("home").is_none());

        let view = db.mount_view("home", Language::Fr);
        assert_eq!(view.title(), "Accueil");
    }

    #[test]
    fn from_config_uses_configured_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            store: crate::config::StoreBackend::File(dir.path().join("store.json")),
            ..AppConfig::default()
        };

        let db = ContentDatabase::from_config(&config).unwrap();

        assert!(db.seeder().is_initialized());
        assert!(dir.path().join("store.json").exists());
    }

    #[tokio::test]
    async fn editor_save_reaches_mounted_view_and_recent_edits() {
        // Arrange
        let db = ContentDatabase::open(Arc::new(InMemoryStore::new()), Arc::new(fixed_clock()));
        let view = db.mount_view("contact", Language::Fr);
        let mut editor = db.editor("contact", Language::Fr);

        // Act
        editor.set_title(Language::Fr, "Écrivez-nous");
        editor.save().await.unwrap();

        // Assert
        assert_eq!(view.title(), "Écrivez-nous");
        let edits = db.recent_edits();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].page, "Écrivez-nous");
        assert_eq!(edits[0].date, "2025-03-14");
    }

    #[test]
    fn publications_come_from_sample_catalog() {
        let db = ContentDatabase::in_memory();

        assert_eq!(db.publications(), catalog::sample_publications());
    }
}
