pub mod content_event;

pub use content_event::ContentEvent;
