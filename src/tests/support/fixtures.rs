use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::content::application::services::ContentRepository;
use crate::content::domain::{PageContent, PageSection, TranslatedText};
use crate::shared::FixedClock;
use crate::storage::adapter::outgoing::InMemoryStore;
use crate::storage::application::services::JsonStore;
use crate::tests::support::stubs::RecordingNotifier;

pub struct RepositoryHarness {
    pub repository: ContentRepository,
    pub backend: Arc<InMemoryStore>,
    pub notifier: RecordingNotifier,
}

pub fn repository() -> RepositoryHarness {
    let backend = Arc::new(InMemoryStore::new());
    let notifier = RecordingNotifier::default();
    let repository = ContentRepository::new(
        JsonStore::new(backend.clone()),
        Arc::new(notifier.clone()),
    );

    RepositoryHarness {
        repository,
        backend,
        notifier,
    }
}

/// 2025-03-14 09:30:00 UTC
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
}

pub fn text(fr: &str, ar: &str) -> TranslatedText {
    TranslatedText::new(fr, ar)
}

pub fn section(id: &str, fr: &str, ar: &str) -> PageSection {
    PageSection::new(id, text(fr, ar))
}

pub fn page(id: &str, sections: Vec<PageSection>) -> PageContent {
    PageContent::new(id, text("Titre", "عنوان"), sections)
}
