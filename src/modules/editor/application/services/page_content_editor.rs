use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info, warn};

use crate::content::domain::{keys, Language, PageContent, PageSection, TranslatedText};
use crate::editor::application::ports::outgoing::{PageSaveHandler, SaveError};
use crate::editor::domain::validation::{self, FieldErrors};
use crate::editor::domain::{messages, recent_edits, ImageError, ImagePolicy, RecentEdit};
use crate::shared::Clock;
use crate::storage::application::services::JsonStore;

/// How long the "saved" banner stays up.
pub const SUCCESS_MESSAGE_SECONDS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("{0} field(s) failed validation")]
    Invalid(usize),

    #[error("Section {0} does not exist")]
    SectionOutOfRange(usize),

    #[error("Save was not accepted")]
    NotSaved,

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Form state behind the admin page editor.
///
/// Holds a working copy of one page. Nothing reaches the store until
/// [`save`](Self::save) validates the copy and hands it to the
/// [`PageSaveHandler`].
pub struct PageContentEditor<H>
where
    H: PageSaveHandler,
{
    page_id: String,
    content: PageContent,
    language: Language,
    errors: FieldErrors,
    success_until: Option<DateTime<Utc>>,
    handler: H,
    store: JsonStore,
    clock: Arc<dyn Clock>,
    image_policy: ImagePolicy,
}

impl<H> PageContentEditor<H>
where
    H: PageSaveHandler,
{
    /// Starts from `initial`, or from a blank page when there is none.
    pub fn new(
        page_id: impl Into<String>,
        initial: Option<PageContent>,
        handler: H,
        store: JsonStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let page_id = page_id.into();
        let content = initial.unwrap_or_else(|| {
            PageContent::new(page_id.clone(), TranslatedText::default(), Vec::new())
        });

        Self {
            page_id,
            content,
            language: Language::default(),
            errors: FieldErrors::new(),
            success_until: None,
            handler,
            store,
            clock,
            image_policy: ImagePolicy::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    // ─── Field edits ────────────────────────────────────────

    pub fn set_title(&mut self, language: Language, value: impl Into<String>) {
        self.content.title.set(language, value);
        self.errors.remove(&validation::title_field(language));
    }

    pub fn set_section_title(
        &mut self,
        index: usize,
        language: Language,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let section = self.section_mut(index)?;
        section
            .title
            .get_or_insert_with(TranslatedText::default)
            .set(language, value);
        self.errors
            .remove(&validation::section_title_field(index, language));
        Ok(())
    }

    pub fn set_section_content(
        &mut self,
        index: usize,
        language: Language,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.section_mut(index)?.content.set(language, value);
        self.errors
            .remove(&validation::section_content_field(index, language));
        Ok(())
    }

    /// Sets (or with `None` clears) the image reference of a section.
    pub fn set_section_image(
        &mut self,
        index: usize,
        image: Option<String>,
    ) -> Result<(), EditorError> {
        self.section_mut(index)?.image = image;
        Ok(())
    }

    /// Inlines a picked file as a `data:` URI on the section.
    pub fn attach_section_image(
        &mut self,
        index: usize,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<(), EditorError> {
        self.section_mut(index)?;
        let uri = self.image_policy.to_data_uri(mime_type, bytes)?;
        self.set_section_image(index, Some(uri))
    }

    // ─── Section list ───────────────────────────────────────

    /// Appends a blank section and returns its id.
    pub fn add_section(&mut self) -> String {
        let mut stamp = self.clock.now_millis();
        let mut id = format!("section_{stamp}");
        while self.content.has_section(&id) {
            stamp += 1;
            id = format!("section_{stamp}");
        }

        self.content.sections.push(
            PageSection::new(id.clone(), TranslatedText::default())
                .with_title(messages::new_section_title()),
        );
        id
    }

    /// Removes the section at `index` once `confirm` accepts the localized
    /// prompt. Returns whether a section was removed.
    pub fn delete_section<F>(&mut self, index: usize, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if index >= self.content.sections.len() {
            return false;
        }
        if !confirm(messages::confirm_delete_section(self.language)) {
            return false;
        }

        self.content.sections.remove(index);
        self.clear_section_errors();
        true
    }

    pub fn can_move_up(&self, index: usize) -> bool {
        index > 0 && index < self.content.sections.len()
    }

    pub fn can_move_down(&self, index: usize) -> bool {
        index + 1 < self.content.sections.len()
    }

    pub fn move_section_up(&mut self, index: usize) -> bool {
        if !self.can_move_up(index) {
            return false;
        }
        self.content.sections.swap(index - 1, index);
        self.clear_section_errors();
        true
    }

    pub fn move_section_down(&mut self, index: usize) -> bool {
        if !self.can_move_down(index) {
            return false;
        }
        self.content.sections.swap(index, index + 1);
        self.clear_section_errors();
        true
    }

    // ─── Save ───────────────────────────────────────────────

    /// Re-runs validation over the working copy. Returns `true` when the
    /// page can be saved.
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate_page(&self.content, self.language);
        self.errors.is_empty()
    }

    pub async fn save(&mut self) -> Result<(), EditorError> {
        if !self.validate() {
            return Err(EditorError::Invalid(self.errors.len()));
        }

        match self.handler.save(&self.content).await {
            Ok(true) => {
                let now = self.clock.now();
                self.success_until = Some(now + Duration::seconds(SUCCESS_MESSAGE_SECONDS));
                self.record_recent_edit();
                info!(page_id = %self.page_id, "Page content saved from editor");
                Ok(())
            }
            Ok(false) => {
                error!(page_id = %self.page_id, "Failed to save content");
                Err(EditorError::NotSaved)
            }
            Err(e) => {
                error!(page_id = %self.page_id, error = %e, "Error saving content");
                Err(e.into())
            }
        }
    }

    /// The localized "saved" banner while it is still showing.
    pub fn success_message(&self) -> Option<&'static str> {
        self.success_until
            .filter(|until| self.clock.now() < *until)
            .map(|_| messages::save_succeeded(self.language))
    }

    fn record_recent_edit(&self) {
        let edit = RecentEdit::new(
            self.clock.now_millis(),
            self.content.title.get(self.language),
            self.clock.today(),
        );
        let log = recent_edits::record(load_recent_edits(&self.store), edit);

        if !self.store.set(keys::RECENT_EDITS, &log) {
            warn!(page_id = %self.page_id, "Recent edits log not updated");
        }
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut PageSection, EditorError> {
        self.content
            .sections
            .get_mut(index)
            .ok_or(EditorError::SectionOutOfRange(index))
    }

    // Section errors are keyed by position.
    fn clear_section_errors(&mut self) {
        self.errors.retain(|field, _| !field.starts_with("section_"));
    }
}

/// Reads the recent-edits log; a missing or unreadable log is empty.
pub fn load_recent_edits(store: &JsonStore) -> Vec<RecentEdit> {
    store.get(keys::RECENT_EDITS).unwrap_or_default()
}
