pub mod entities;
pub mod keys;

pub use entities::{
    FooterLink, FooterSection, GlobalContent, Language, MediaItem, MenuItem, NewsItem,
    PageContent, PageSection, Publication, PublicationType, Resource, TranslatedText,
    WebsiteStructure,
};
