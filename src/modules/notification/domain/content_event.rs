use serde::Serialize;

use crate::content::domain::keys;

/// Invalidation signal published after a content write.
///
/// Neither variant carries the record itself; listeners re-read what they
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ContentEvent {
    /// Same-process "something changed" ping.
    #[serde(rename = "content_updated")]
    ContentUpdated,

    /// Shape of a native storage-change notification.
    #[serde(rename = "storage", rename_all = "camelCase")]
    StorageChanged {
        key: String,
        new_value: Option<String>,
    },
}

impl ContentEvent {
    pub const CONTENT_UPDATED: &'static str = "content_updated";
    pub const STORAGE: &'static str = "storage";

    pub fn storage_changed(key: impl Into<String>, new_value: Option<String>) -> Self {
        ContentEvent::StorageChanged {
            key: key.into(),
            new_value,
        }
    }

    /// Event type name as dispatched in the browser.
    pub fn event_type(&self) -> &'static str {
        match self {
            ContentEvent::ContentUpdated => Self::CONTENT_UPDATED,
            ContentEvent::StorageChanged { .. } => Self::STORAGE,
        }
    }

    /// Whether a view showing `page_id` has to re-read the store.
    pub fn concerns_page(&self, page_id: &str) -> bool {
        match self {
            ContentEvent::ContentUpdated => true,
            ContentEvent::StorageChanged { key, .. } => {
                *key == keys::page_key(page_id) || *key == keys::editor_key(page_id)
            }
        }
    }
}
