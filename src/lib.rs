pub mod modules;
pub use modules::content;
pub use modules::editor;
pub use modules::notification;
pub use modules::seeder;
pub use modules::storage;
pub use modules::views;

pub mod config;
pub mod database;
pub mod shared;
pub mod telemetry;

pub use config::AppConfig;
pub use database::ContentDatabase;

#[cfg(test)]
mod tests;
