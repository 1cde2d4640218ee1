pub mod catalog;
pub mod default_content;
mod page_literals;

pub use default_content::{create_default_page_content, KNOWN_PAGES, SEEDED_PAGES};
