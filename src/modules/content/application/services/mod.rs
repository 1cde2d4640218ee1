mod catalogs;
mod content_repository;
mod editor_sync;

pub use content_repository::{ContentRepository, RepositoryError};
