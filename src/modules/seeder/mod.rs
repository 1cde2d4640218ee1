//! Default content, first-run seeding and section migrations.

pub mod application;
pub mod domain;
