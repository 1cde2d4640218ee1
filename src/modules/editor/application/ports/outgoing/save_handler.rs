use async_trait::async_trait;

use crate::content::domain::PageContent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Save rejected: {0}")]
    Rejected(String),
}

/// Persists a page on behalf of the editor. The editor never writes the
/// page itself; the handler is also responsible for notifying views.
///
/// `Ok(false)` means the save did not happen and nothing went wrong
/// worth reporting.
#[async_trait]
pub trait PageSaveHandler: Send + Sync {
    async fn save(&self, content: &PageContent) -> Result<bool, SaveError>;
}
