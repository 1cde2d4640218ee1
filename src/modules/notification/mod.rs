//! Publish/subscribe invalidation between content writers and views.

pub mod adapter;
pub mod application;
pub mod domain;
