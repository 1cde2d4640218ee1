pub mod repository_save_handler;

pub use repository_save_handler::RepositorySaveHandler;
