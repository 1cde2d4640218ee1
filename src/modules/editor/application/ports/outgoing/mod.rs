pub mod save_handler;

pub use save_handler::{PageSaveHandler, SaveError};
