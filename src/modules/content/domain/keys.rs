//! The persisted key space.

pub const PAGE_PREFIX: &str = "page_";
pub const EDITOR_PREFIX: &str = "editor_";

pub const NEWS: &str = "news";
pub const RESOURCES: &str = "resources";
pub const GLOBAL_CONTENT: &str = "global_content";
pub const MEDIA_LIBRARY: &str = "media_library";
pub const WEBSITE_STRUCTURE: &str = "websiteStructure";
pub const RECENT_EDITS: &str = "recentEdits";

/// Sentinel written once seeding completed; value is the raw string `"true"`.
pub const DB_INITIALIZED: &str = "dbInitialized";
pub const DB_INITIALIZED_VALUE: &str = "true";

pub fn page_key(page_id: &str) -> String {
    format!("{PAGE_PREFIX}{page_id}")
}

/// Draft workspace copy of any record key (`editor_<key>`).
pub fn editor_key(key: &str) -> String {
    format!("{EDITOR_PREFIX}{key}")
}

/// Records whose draft copy shares the `editor_` namespace with page drafts.
pub const CATALOG_KEYS: [&str; 5] = [
    NEWS,
    RESOURCES,
    GLOBAL_CONTENT,
    MEDIA_LIBRARY,
    WEBSITE_STRUCTURE,
];

/// Whether `editor_<page_id>` can hold a page draft. Pages named after a
/// catalog record share its draft key and keep no draft of their own.
pub fn has_page_draft(page_id: &str) -> bool {
    !CATALOG_KEYS.contains(&page_id)
}
