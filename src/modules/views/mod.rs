//! Public page read models.

mod page_view;

pub use page_view::PageView;
