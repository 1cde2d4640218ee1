pub mod image_policy;
pub mod messages;
pub mod recent_edits;
pub mod validation;

pub use image_policy::{ImageError, ImagePolicy};
pub use recent_edits::{RecentEdit, MAX_RECENT_EDITS};
pub use validation::FieldErrors;
