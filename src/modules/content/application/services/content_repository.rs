// src/modules/content/application/services/content_repository.rs

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::content::domain::keys;
use crate::content::domain::{PageContent, TranslatedText};
use crate::notification::application::ports::outgoing::ChangeNotifier;
use crate::notification::domain::ContentEvent;
use crate::seeder::application::services::page_migrations;
use crate::seeder::domain::default_content;
use crate::storage::application::services::JsonStore;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Invalid page content: missing id")]
    MissingPageId,

    #[error("Storage rejected write for key {0}")]
    WriteRejected(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

//
// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────
//

/// Typed access to every persisted record.
///
/// Public operations never fail past their own boundary; they log and
/// answer `false` / `None` / an empty collection instead.
#[derive(Clone)]
pub struct ContentRepository {
    pub(super) store: JsonStore,
    notifier: Arc<dyn ChangeNotifier>,
}

impl std::fmt::Debug for ContentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRepository")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl ContentRepository {
    pub const DEFAULT_SECTION_TITLE_FR: &'static str = "Section";
    pub const DEFAULT_SECTION_TITLE_AR: &'static str = "قسم";

    pub fn new(store: JsonStore, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn ChangeNotifier> {
        &self.notifier
    }

    /// Live copy of a page, `None` if it was never stored.
    pub fn get_page_content(&self, page_id: &str) -> Option<PageContent> {
        self.store.get(&keys::page_key(page_id))
    }

    /// Saves `content` as both the draft and the live copy, then notifies.
    ///
    /// Sections without a title get `{fr: "Section", ar: "قسم"}`. Pages
    /// named after a catalog record only get the live copy, see
    /// [`keys::has_page_draft`].
    pub fn set_page_content(&self, content: &PageContent) -> bool {
        match self.save_page(content) {
            Ok(saved) => {
                info!(page_id = %saved.id, "Content updated, notifying listeners");
                true
            }
            Err(e) => {
                error!(page_id = %content.id, error = %e, "Error saving page content");
                false
            }
        }
    }

    /// The editor's authoritative read; always yields a page with a section list.
    ///
    /// Resolution order: draft copy, then live copy (home and about first
    /// receive any newly required sections), then the seeded default, then
    /// an empty page persisted under both keys. Pages named after a catalog
    /// record skip the draft copy on both the read and the write side.
    pub fn get_exact_page_content(&self, page_id: &str) -> PageContent {
        let draft_key = keys::has_page_draft(page_id).then(|| keys::editor_key(page_id));
        if let Some(draft) = draft_key
            .as_deref()
            .and_then(|key| self.store.get::<PageContent>(key))
        {
            return draft;
        }

        let resolved = match self.get_page_content(page_id) {
            Some(live) => Some(self.with_required_sections(page_id).unwrap_or(live)),
            None => default_content::create_default_page_content(page_id)
                .map(|default| self.with_required_sections(page_id).unwrap_or(default)),
        };

        if let Some(content) = resolved {
            if let Some(key) = &draft_key {
                self.store.set(key, &content);
            }
            return content;
        }

        warn!(page_id, "No content found, creating default empty content");
        let empty = PageContent::new(
            page_id,
            TranslatedText::new(capitalize(page_id), page_id),
            Vec::new(),
        );
        if let Some(key) = &draft_key {
            self.store.set(key, &empty);
        }
        self.store.set(&keys::page_key(page_id), &empty);
        empty
    }

    /// Ids of every stored live page, in backend key order.
    pub fn get_all_page_ids(&self) -> Vec<String> {
        self.store.keys_with_prefix(keys::PAGE_PREFIX)
    }

    pub fn get_all_pages(&self) -> Vec<PageContent> {
        self.get_all_page_ids()
            .iter()
            .filter_map(|id| self.get_page_content(id))
            .collect()
    }

    fn save_page(&self, content: &PageContent) -> Result<PageContent, RepositoryError> {
        if content.id.is_empty() {
            return Err(RepositoryError::MissingPageId);
        }

        let mut normalized = content.clone();
        for section in normalized.sections.iter_mut() {
            section.title.get_or_insert_with(|| {
                TranslatedText::new(Self::DEFAULT_SECTION_TITLE_FR, Self::DEFAULT_SECTION_TITLE_AR)
            });
        }

        let page_key = keys::page_key(&normalized.id);
        if keys::has_page_draft(&normalized.id) {
            self.write(&keys::editor_key(&normalized.id), &normalized)?;
        }
        self.write(&page_key, &normalized)?;

        let payload = serde_json::to_string(&normalized)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.notifier.publish(&ContentEvent::ContentUpdated);
        self.notifier
            .publish(&ContentEvent::storage_changed(page_key, Some(payload)));

        Ok(normalized)
    }

    /// Runs the section migration for pages that have one and re-reads the
    /// live copy.
    fn with_required_sections(&self, page_id: &str) -> Option<PageContent> {
        let migrated = match page_id {
            "home" => page_migrations::update_home_page_with_all_sections(self),
            "about" => page_migrations::update_about_page_with_all_sections(self),
            _ => return None,
        };

        if !migrated {
            warn!(page_id, "Section migration failed, using content as found");
        }
        self.get_page_content(page_id)
    }

    pub(super) fn write<T: serde::Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), RepositoryError> {
        if self.store.set(key, value) {
            Ok(())
        } else {
            Err(RepositoryError::WriteRejected(key.to_string()))
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*, Sequence};

    use crate::content::domain::NewsItem;
    use crate::seeder::domain::catalog;
    use crate::storage::adapter::outgoing::{InMemoryStore, UnavailableStore};
    use crate::storage::application::ports::outgoing::KeyValueStore;
    use crate::tests::support::fixtures::{page, repository, section, text};
    use crate::tests::support::stubs::RecordingNotifier;

    mock! {
        pub Notifier {}

        impl ChangeNotifier for Notifier {
            fn publish(&self, event: &ContentEvent);
        }
    }

    #[test]
    fn get_page_content_on_empty_store_is_none() {
        let h = repository();

        assert!(h.repository.get_page_content("about").is_none());
    }

    #[test]
    fn set_then_get_round_trips_with_default_section_titles() {
        // Arrange
        let h = repository();
        let titled = section("s2", "b", "ج").with_title(text("Deux", "اثنان"));
        let content = PageContent::new(
            "contact",
            text("X", "ص"),
            vec![section("s1", "a", "ب"), titled.clone()],
        );

        // Act
        let saved = h.repository.set_page_content(&content);
        let stored = h.repository.get_page_content("contact").unwrap();

        // Assert
        assert!(saved);
        assert_eq!(stored.title, content.title);
        assert_eq!(stored.sections[0].title, Some(text("Section", "قسم")));
        assert_eq!(stored.sections[0].content, text("a", "ب"));
        assert_eq!(stored.sections[1], titled);
    }

    #[test]
    fn set_writes_identical_draft_and_live_copies() {
        let h = repository();

        h.repository
            .set_page_content(&page("programs", vec![section("intro", "a", "ب")]));

        let draft = h.backend.get_raw("editor_programs").unwrap();
        let live = h.backend.get_raw("page_programs").unwrap();
        assert!(draft.is_some());
        assert_eq!(draft, live);
    }

    #[test]
    fn set_rejects_content_without_id() {
        let h = repository();

        let saved = h.repository.set_page_content(&page("", vec![]));

        assert!(!saved);
        assert!(h.backend.is_empty());
        assert!(h.notifier.events().is_empty());
    }

    #[test]
    fn set_accepts_whitespace_id() {
        let h = repository();

        let saved = h.repository.set_page_content(&page(" ", vec![]));

        assert!(saved);
        assert!(h.backend.get_raw("page_ ").unwrap().is_some());
        assert_eq!(h.notifier.count(ContentEvent::CONTENT_UPDATED), 1);
    }

    #[test]
    fn set_publishes_one_update_and_one_storage_event() {
        // Arrange
        let h = repository();

        // Act
        h.repository.set_page_content(&page("news", vec![]));

        // Assert
        assert_eq!(h.notifier.count(ContentEvent::CONTENT_UPDATED), 1);
        assert_eq!(h.notifier.count(ContentEvent::STORAGE), 1);
        match &h.notifier.events()[1] {
            ContentEvent::StorageChanged { key, new_value } => {
                assert_eq!(key, "page_news");
                let decoded: PageContent =
                    serde_json::from_str(new_value.as_deref().unwrap()).unwrap();
                assert_eq!(decoded.id, "news");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn set_notifies_in_order_through_the_port() {
        // Arrange
        let mut notifier = MockNotifier::new();
        let mut seq = Sequence::new();
        notifier
            .expect_publish()
            .with(eq(ContentEvent::ContentUpdated))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        notifier
            .expect_publish()
            .withf(|e| matches!(e, ContentEvent::StorageChanged { key, .. } if key == "page_news"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let repository = ContentRepository::new(
            JsonStore::new(Arc::new(InMemoryStore::new())),
            Arc::new(notifier),
        );

        // Act
        let saved = repository.set_page_content(&page("news", vec![section("1", "a", "ب")]));

        // Assert
        assert!(saved);
    }

    #[test]
    fn every_save_notifies_without_coalescing() {
        let h = repository();
        let content = page("news", vec![]);

        for _ in 0..3 {
            h.repository.set_page_content(&content);
        }

        assert_eq!(h.notifier.count(ContentEvent::CONTENT_UPDATED), 3);
        assert_eq!(h.notifier.count(ContentEvent::STORAGE), 3);
    }

    #[test]
    fn failed_write_returns_false_and_stays_silent() {
        let notifier = RecordingNotifier::default();
        let repository = ContentRepository::new(
            JsonStore::new(Arc::new(UnavailableStore)),
            Arc::new(notifier.clone()),
        );

        let saved = repository.set_page_content(&page("home", vec![]));

        assert!(!saved);
        assert!(notifier.events().is_empty());
    }

    #[test]
    fn exact_content_prefers_the_draft_copy() {
        // Arrange
        let h = repository();
        let draft = page("contact", vec![section("draft", "brouillon", "مسودة")]);
        h.repository.store().set("editor_contact", &draft);
        h.repository
            .store()
            .set("page_contact", &page("contact", vec![section("live", "a", "ب")]));

        // Act
        let content = h.repository.get_exact_page_content("contact");

        // Assert
        assert_eq!(content, draft);
    }

    #[test]
    fn exact_content_copies_live_page_into_draft() {
        let h = repository();
        let live = page("programs", vec![section("intro", "a", "ب")]);
        h.repository.store().set("page_programs", &live);

        let content = h.repository.get_exact_page_content("programs");

        assert_eq!(content, live);
        assert_eq!(h.repository.store().get::<PageContent>("editor_programs"), Some(live));
    }

    #[test]
    fn exact_content_seeds_about_on_empty_store() {
        // Arrange
        let h = repository();
        assert!(h.repository.get_page_content("about").is_none());

        // Act
        let content = h.repository.get_exact_page_content("about");

        // Assert
        assert_eq!(content.id, "about");
        assert!(!content.sections.is_empty());
        assert!(content.has_section("history"));
        assert!(h.repository.store().get::<PageContent>("editor_about").is_some());
    }

    #[test]
    fn exact_content_backfills_home_sections_on_live_copy() {
        // Arrange
        let h = repository();
        let custom = section("hero", "Mon héros", "بطلي");
        h.repository
            .store()
            .set("page_home", &page("home", vec![custom.clone()]));

        // Act
        let content = h.repository.get_exact_page_content("home");

        // Assert
        assert_eq!(content.sections[0].content, custom.content);
        assert!(content.has_section("newsletter"));
        assert_eq!(content.section_ids().iter().filter(|id| **id == "hero").count(), 1);
    }

    #[test]
    fn exact_content_uses_generic_default_for_known_slug() {
        let h = repository();

        let content = h.repository.get_exact_page_content("news");

        assert_eq!(content.title, text("Actualités", "الأخبار"));
        assert_eq!(content.sections.len(), 1);
        assert!(h.backend.get_raw("editor_news").unwrap().is_none());
    }

    #[test]
    fn exact_content_leaves_catalog_draft_untouched() {
        // Arrange
        let h = repository();
        let news = catalog::sample_news();
        h.repository.store().set("editor_news", &news);

        // Act
        let content = h.repository.get_exact_page_content("news");

        // Assert
        assert_eq!(content.id, "news");
        assert_eq!(h.repository.store().get::<Vec<NewsItem>>("editor_news"), Some(news));
    }

    #[test]
    fn saving_catalog_named_page_writes_live_copy_only() {
        // Arrange
        let h = repository();
        h.repository.store().set("editor_resources", &Vec::<serde_json::Value>::new());

        // Act
        let saved = h
            .repository
            .set_page_content(&page("resources", vec![section("1", "a", "ب")]));

        // Assert
        assert!(saved);
        assert!(h.repository.get_page_content("resources").is_some());
        assert_eq!(h.backend.get_raw("editor_resources").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn exact_content_synthesizes_empty_page_for_unknown_slug() {
        // Arrange
        let h = repository();

        // Act
        let content = h.repository.get_exact_page_content("partenaires");

        // Assert
        assert_eq!(content.id, "partenaires");
        assert_eq!(content.title, text("Partenaires", "partenaires"));
        assert!(content.sections.is_empty());
        assert_eq!(h.repository.get_page_content("partenaires"), Some(content.clone()));
        assert_eq!(
            h.repository.store().get::<PageContent>("editor_partenaires"),
            Some(content)
        );
    }

    #[test]
    fn exact_content_always_has_a_section_list() {
        let h = repository();
        h.backend
            .set_raw("editor_broken", r#"{"id":"broken","title":{"fr":"B","ar":"ب"}}"#)
            .unwrap();

        for page_id in ["broken", "", "home", "review", "zzz"] {
            let content = h.repository.get_exact_page_content(page_id);
            assert_eq!(content.id, page_id);
        }

        assert!(h.repository.get_exact_page_content("broken").sections.is_empty());
        assert!(!h.repository.get_exact_page_content("review").sections.is_empty());
    }

    #[test]
    fn all_page_ids_lists_live_pages_only() {
        // Arrange
        let h = repository();
        h.repository.set_page_content(&page("home", vec![]));
        h.repository.set_page_content(&page("contact", vec![]));
        h.repository.store().set("editor_review", &page("review", vec![]));

        // Act
        let mut ids = h.repository.get_all_page_ids();
        ids.sort();
        let pages = h.repository.get_all_pages();

        // Assert
        assert_eq!(ids, vec!["contact", "home"]);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("équipe"), "Équipe");
        assert_eq!(capitalize(""), "");
    }
}
