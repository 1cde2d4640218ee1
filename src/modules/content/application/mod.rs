pub mod listing_filter;
pub mod services;
