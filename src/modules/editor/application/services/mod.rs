mod page_content_editor;

pub use page_content_editor::{
    load_recent_edits, EditorError, PageContentEditor, SUCCESS_MESSAGE_SECONDS,
};
