use async_trait::async_trait;

use crate::content::application::services::ContentRepository;
use crate::content::domain::PageContent;
use crate::editor::application::ports::outgoing::{PageSaveHandler, SaveError};

/// Saves through [`ContentRepository::set_page_content`], which writes
/// both copies and notifies listening views.
#[derive(Debug, Clone)]
pub struct RepositorySaveHandler {
    repository: ContentRepository,
}

impl RepositorySaveHandler {
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PageSaveHandler for RepositorySaveHandler {
    async fn save(&self, content: &PageContent) -> Result<bool, SaveError> {
        if !self.repository.store().is_available() {
            return Err(SaveError::Storage("storage is not available".to_string()));
        }

        Ok(self.repository.set_page_content(content))
    }
}
