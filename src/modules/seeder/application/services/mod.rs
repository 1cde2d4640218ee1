mod content_seeder;
pub mod page_migrations;

pub use content_seeder::{ContentSeeder, SeedError};
