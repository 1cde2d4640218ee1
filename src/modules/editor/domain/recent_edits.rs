use serde::{Deserialize, Serialize};

pub const MAX_RECENT_EDITS: usize = 10;
pub const DEFAULT_EDITOR_USER: &str = "admin";

/// One line of the dashboard's "recent edits" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEdit {
    /// Epoch millis of the save.
    pub id: i64,
    /// Page title in the language the administrator was editing in.
    pub page: String,
    pub date: String,
    pub user: String,
}

impl RecentEdit {
    pub fn new(id: i64, page: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            page: page.into(),
            date: date.into(),
            user: DEFAULT_EDITOR_USER.to_string(),
        }
    }
}

/// Puts `edit` first, drops older entries for the same page and keeps at
/// most [`MAX_RECENT_EDITS`].
pub fn record(log: Vec<RecentEdit>, edit: RecentEdit) -> Vec<RecentEdit> {
    let mut updated = Vec::with_capacity(MAX_RECENT_EDITS);
    let page = edit.page.clone();
    updated.push(edit);
    updated.extend(log.into_iter().filter(|e| e.page != page));
    updated.truncate(MAX_RECENT_EDITS);
    updated
}
