use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::content::application::services::ContentRepository;
use crate::content::domain::{Language, PageContent, PageSection};
use crate::notification::adapter::outgoing::{EventBus, Subscription};
use crate::seeder::domain::default_content;

struct ViewState {
    repository: ContentRepository,
    page_id: String,
    snapshot: RwLock<Option<PageContent>>,
    refreshes: AtomicU64,
}

impl ViewState {
    fn refresh(&self) {
        let fresh = self.repository.get_page_content(&self.page_id);
        match self.snapshot.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        debug!(page_id = %self.page_id, "Page view refreshed");
    }

    fn snapshot(&self) -> Option<PageContent> {
        match self.snapshot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Read side of one public page.
///
/// Every accessor prefers the stored value and falls back to the default
/// content table when the store has nothing (or only a blank string) for
/// that field. A mounted view re-reads the store whenever an event
/// concerning its page is published.
pub struct PageView {
    state: Arc<ViewState>,
    language: Language,
    subscription: Option<Subscription>,
}

impl std::fmt::Debug for PageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageView")
            .field("page_id", &self.state.page_id)
            .field("language", &self.language)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl PageView {
    /// One-off read, not kept in sync with later writes.
    pub fn new(repository: ContentRepository, page_id: impl Into<String>, language: Language) -> Self {
        let state = Arc::new(ViewState {
            repository,
            page_id: page_id.into(),
            snapshot: RwLock::new(None),
            refreshes: AtomicU64::new(0),
        });
        state.refresh();

        Self {
            state,
            language,
            subscription: None,
        }
    }

    /// Reads the page and keeps it fresh until the view is dropped.
    pub fn mount(
        repository: ContentRepository,
        bus: &EventBus,
        page_id: impl Into<String>,
        language: Language,
    ) -> Self {
        let mut view = Self::new(repository, page_id, language);

        let state = Arc::clone(&view.state);
        view.subscription = Some(bus.subscribe(move |event| {
            if event.concerns_page(&state.page_id) {
                state.refresh();
            }
        }));
        view
    }

    pub fn page_id(&self) -> &str {
        &self.state.page_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Times the store was read, including the initial read.
    pub fn refresh_count(&self) -> u64 {
        self.state.refreshes.load(Ordering::Relaxed)
    }

    pub fn refresh(&self) {
        self.state.refresh();
    }

    /// What the store held at the last refresh.
    pub fn stored(&self) -> Option<PageContent> {
        self.state.snapshot()
    }

    pub fn title(&self) -> String {
        let stored = self
            .stored()
            .and_then(|page| page.title.non_empty(self.language).map(str::to_string));

        stored
            .or_else(|| {
                default_content::default_page_title(self.page_id())
                    .map(|title| title.get(self.language).to_string())
            })
            .unwrap_or_else(|| self.page_id().to_string())
    }

    /// Stored sections in display order; the default list when nothing is
    /// stored.
    pub fn sections(&self) -> Vec<PageSection> {
        match self.stored() {
            Some(page) if !page.sections.is_empty() => page.sections,
            _ => default_content::create_default_page_content(self.page_id())
                .map(|page| page.sections)
                .unwrap_or_default(),
        }
    }

    pub fn section(&self, section_id: &str) -> Option<PageSection> {
        self.stored_section(section_id)
            .or_else(|| default_content::default_section(self.page_id(), section_id))
    }

    /// Body text of a section; empty when neither the store nor the
    /// defaults have any.
    pub fn section_text(&self, section_id: &str) -> String {
        self.stored_section(section_id)
            .and_then(|s| s.content.non_empty(self.language).map(str::to_string))
            .or_else(|| default_content::default_text(self.page_id(), section_id, self.language))
            .unwrap_or_default()
    }

    pub fn section_title(&self, section_id: &str) -> Option<String> {
        let language = self.language;
        let title_of = |section: PageSection| {
            section
                .title
                .and_then(|t| t.non_empty(language).map(str::to_string))
        };

        self.stored_section(section_id)
            .and_then(title_of)
            .or_else(|| default_content::default_section(self.page_id(), section_id).and_then(title_of))
    }

    pub fn section_image(&self, section_id: &str) -> Option<String> {
        let image_of = |section: PageSection| section.image.filter(|img| !img.trim().is_empty());

        self.stored_section(section_id)
            .and_then(image_of)
            .or_else(|| default_content::default_section(self.page_id(), section_id).and_then(image_of))
    }

    fn stored_section(&self, section_id: &str) -> Option<PageSection> {
        self.stored()?
            .sections
            .into_iter()
            .find(|section| section.id == section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::ports::outgoing::ChangeNotifier;
    use crate::notification::domain::ContentEvent;
    use crate::storage::adapter::outgoing::InMemoryStore;
    use crate::storage::application::services::JsonStore;
    use crate::tests::support::fixtures::{page, repository, section, text};

    fn bus_repository() -> (ContentRepository, EventBus) {
        let bus = EventBus::new();
        let repository = ContentRepository::new(
            JsonStore::new(Arc::new(InMemoryStore::new())),
            Arc::new(bus.clone()),
        );
        (repository, bus)
    }

    #[test]
    fn empty_store_falls_back_to_defaults() {
        // Arrange
        let h = repository();

        // Act
        let view = PageView::new(h.repository.clone(), "home", Language::Fr);

        // Assert
        assert!(view.stored().is_none());
        assert_eq!(view.title(), "Accueil");
        assert_eq!(
            view.section_text("slogan"),
            "Ensemble, pour des droits connus, reconnus et défendus."
        );
        assert_eq!(
            view.sections().len(),
            default_content::HOME_REQUIRED_SECTIONS.len()
        );
    }

    #[test]
    fn stored_values_win_over_defaults() {
        // Arrange
        let h = repository();
        let mut slogan = section("slogan", "Notre slogan", "شعارنا");
        slogan.title = Some(text("Slogan", "شعار"));
        slogan.image = Some("/images/slogan.png".to_string());
        h.repository.set_page_content(&page("home", vec![slogan]));

        // Act
        let view = PageView::new(h.repository.clone(), "home", Language::Ar);

        // Assert
        assert_eq!(view.title(), "عنوان");
        assert_eq!(view.section_text("slogan"), "شعارنا");
        assert_eq!(view.section_title("slogan").as_deref(), Some("شعار"));
        assert_eq!(view.section_image("slogan").as_deref(), Some("/images/slogan.png"));
        assert_eq!(view.sections().len(), 1);
        assert!(view.is_rtl());
    }

    #[test]
    fn blank_stored_fields_fall_back_per_field() {
        // Arrange
        let h = repository();
        let mut content = page("home", vec![section("slogan", "", "شعارنا")]);
        content.title = text(" ", "عنوان");
        h.repository.set_page_content(&content);

        // Act
        let view = PageView::new(h.repository.clone(), "home", Language::Fr);

        // Assert
        assert_eq!(view.title(), "Accueil");
        assert_eq!(
            view.section_text("slogan"),
            default_content::default_text("home", "slogan", Language::Fr).unwrap()
        );
        // missing from the stored page entirely
        assert_eq!(view.section("mission"), default_content::default_section("home", "mission"));
    }

    #[test]
    fn unknown_page_without_content_is_blank() {
        let h = repository();

        let view = PageView::new(h.repository.clone(), "archives", Language::Fr);

        assert_eq!(view.title(), "archives");
        assert_eq!(view.section_text("intro"), "");
        assert!(view.section_title("intro").is_none());
        assert!(view.sections().is_empty());
    }

    #[test]
    fn mounted_view_refreshes_after_save() {
        // Arrange
        let (repository, bus) = bus_repository();
        let view = PageView::mount(repository.clone(), &bus, "contact", Language::Fr);
        assert_eq!(view.title(), "Contact");

        // Act
        let mut content = page("contact", vec![section("s1", "Écrivez-nous", "راسلونا")]);
        content.title = text("Nous joindre", "تواصل");
        repository.set_page_content(&content);

        // Assert
        assert_eq!(view.title(), "Nous joindre");
        assert_eq!(view.section_text("s1"), "Écrivez-nous");
        // initial read, then one per published event
        assert_eq!(view.refresh_count(), 3);
    }

    #[test]
    fn storage_events_for_other_pages_are_ignored() {
        let (repository, bus) = bus_repository();
        let view = PageView::mount(repository, &bus, "contact", Language::Fr);

        bus.publish(&ContentEvent::storage_changed("page_home", None));
        bus.publish(&ContentEvent::storage_changed("news", None));
        assert_eq!(view.refresh_count(), 1);

        bus.publish(&ContentEvent::storage_changed("editor_contact", None));
        assert_eq!(view.refresh_count(), 2);
    }

    #[test]
    fn every_mounted_view_is_notified() {
        let (repository, bus) = bus_repository();
        let home = PageView::mount(repository.clone(), &bus, "home", Language::Fr);
        let about = PageView::mount(repository.clone(), &bus, "about", Language::Ar);

        bus.publish(&ContentEvent::ContentUpdated);

        assert_eq!(home.refresh_count(), 2);
        assert_eq!(about.refresh_count(), 2);
    }

    #[test]
    fn dropping_view_unsubscribes() {
        let (repository, bus) = bus_repository();
        let view = PageView::mount(repository, &bus, "home", Language::Fr);
        assert_eq!(bus.listener_count(), 1);
        assert!(view.is_mounted());

        drop(view);

        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn unmounted_view_keeps_its_snapshot() {
        let (repository, _bus) = bus_repository();
        let view = PageView::new(repository.clone(), "contact", Language::Fr);

        repository.set_page_content(&page("contact", vec![section("s1", "a", "ب")]));

        assert!(view.stored().is_none());
        view.refresh();
        assert!(view.stored().is_some());
    }
}
