//! Typed bilingual records over the key-value store.

pub mod application;
pub mod domain;
