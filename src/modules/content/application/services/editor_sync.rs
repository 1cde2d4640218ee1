//! Copies between the live records and their `editor_` counterparts.

use tracing::{error, info, warn};

use super::content_repository::{ContentRepository, RepositoryError};
use crate::content::domain::keys;
use crate::content::domain::PageContent;
use crate::notification::domain::ContentEvent;

impl ContentRepository {
    /// Snapshots every live record into the draft workspace.
    ///
    /// Each copy is attempted on its own; a rejected write is logged and
    /// the rest still go through. `false` only when there is no storage.
    pub fn sync_content_to_editor(&self) -> bool {
        if !self.store.is_available() {
            warn!("No persistent storage, nothing to sync to editor");
            return false;
        }

        let mut copied = 0;
        let mut failed = 0;
        let mut tally = |ok: bool| if ok { copied += 1 } else { failed += 1 };

        for page_id in self.get_all_page_ids() {
            if !keys::has_page_draft(&page_id) {
                continue;
            }
            if let Some(page) = self.get_page_content(&page_id) {
                tally(self.copy_to_editor(&page_id, &page));
            }
        }

        tally(self.copy_to_editor(keys::NEWS, &self.get_news()));
        tally(self.copy_to_editor(keys::RESOURCES, &self.get_resources()));
        tally(self.copy_to_editor(keys::GLOBAL_CONTENT, &self.get_global_content()));
        if let Some(structure) = self.get_website_structure() {
            tally(self.copy_to_editor(keys::WEBSITE_STRUCTURE, &structure));
        }
        tally(self.copy_to_editor(keys::MEDIA_LIBRARY, &self.get_media_library()));

        info!(copied, failed, "Synced live content to editor workspace");
        true
    }

    /// Promotes the draft copy of `page_id` to the live key.
    ///
    /// `false` when there is no draft, including pages named after a
    /// catalog record.
    pub fn apply_editor_changes(&self, page_id: &str) -> bool {
        if !keys::has_page_draft(page_id) {
            return false;
        }
        let Some(draft) = self.store.get::<PageContent>(&keys::editor_key(page_id)) else {
            return false;
        };

        match self.publish_draft(page_id, &draft) {
            Ok(()) => true,
            Err(e) => {
                error!(page_id, error = %e, "Error applying editor changes");
                false
            }
        }
    }

    fn copy_to_editor<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.write(&keys::editor_key(key), value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Error copying record to editor workspace");
                false
            }
        }
    }

    fn publish_draft(&self, page_id: &str, draft: &PageContent) -> Result<(), RepositoryError> {
        let page_key = keys::page_key(page_id);
        self.write(&page_key, draft)?;

        let payload = serde_json::to_string(draft)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.notifier().publish(&ContentEvent::ContentUpdated);
        self.notifier()
            .publish(&ContentEvent::storage_changed(page_key, Some(payload)));
        Ok(())
    }
}
