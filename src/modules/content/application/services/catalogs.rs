//! News, resources, global strings, media library and site navigation.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::content_repository::ContentRepository;
use crate::content::domain::keys;
use crate::content::domain::{GlobalContent, MediaItem, NewsItem, Resource, WebsiteStructure};

impl ContentRepository {
    pub fn get_news(&self) -> Vec<NewsItem> {
        self.list(keys::NEWS)
    }

    pub fn set_news(&self, news: &[NewsItem]) -> bool {
        self.store.set(keys::NEWS, news)
    }

    pub fn get_news_item(&self, id: i64) -> Option<NewsItem> {
        self.get_news().into_iter().find(|item| item.id == id)
    }

    /// Replaces the item with the same id; `false` when there is none.
    pub fn update_news_item(&self, item: &NewsItem) -> bool {
        self.replace(keys::NEWS, item, |stored| stored.id == item.id)
    }

    pub fn delete_news_item(&self, id: i64) -> bool {
        self.retain(keys::NEWS, |item: &NewsItem| item.id != id)
    }

    pub fn get_resources(&self) -> Vec<Resource> {
        self.list(keys::RESOURCES)
    }

    pub fn set_resources(&self, resources: &[Resource]) -> bool {
        self.store.set(keys::RESOURCES, resources)
    }

    pub fn get_resource(&self, id: i64) -> Option<Resource> {
        self.get_resources().into_iter().find(|item| item.id == id)
    }

    /// Replaces the resource with the same id; `false` when there is none.
    pub fn update_resource(&self, item: &Resource) -> bool {
        self.replace(keys::RESOURCES, item, |stored| stored.id == item.id)
    }

    pub fn delete_resource(&self, id: i64) -> bool {
        self.retain(keys::RESOURCES, |item: &Resource| item.id != id)
    }

    pub fn get_global_content(&self) -> Vec<GlobalContent> {
        self.list(keys::GLOBAL_CONTENT)
    }

    pub fn set_global_content(&self, content: &[GlobalContent]) -> bool {
        self.store.set(keys::GLOBAL_CONTENT, content)
    }

    pub fn get_global_content_item(&self, category: &str, key: &str) -> Option<GlobalContent> {
        self.get_global_content()
            .into_iter()
            .find(|item| item.category == category && item.key == key)
    }

    /// Upsert by id.
    pub fn update_global_content_item(&self, item: &GlobalContent) -> bool {
        self.upsert(keys::GLOBAL_CONTENT, item, |stored| stored.id == item.id)
    }

    pub fn get_category_content(&self, category: &str) -> Vec<GlobalContent> {
        self.get_global_content()
            .into_iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn delete_global_content_item(&self, id: &str) -> bool {
        self.retain(keys::GLOBAL_CONTENT, |item: &GlobalContent| item.id != id)
    }

    pub fn get_media_library(&self) -> Vec<MediaItem> {
        self.list(keys::MEDIA_LIBRARY)
    }

    pub fn set_media_library(&self, media: &[MediaItem]) -> bool {
        self.store.set(keys::MEDIA_LIBRARY, media)
    }

    pub fn get_media_item(&self, id: &str) -> Option<MediaItem> {
        self.get_media_library().into_iter().find(|item| item.id == id)
    }

    /// Upsert by id.
    pub fn update_media_item(&self, item: &MediaItem) -> bool {
        self.upsert(keys::MEDIA_LIBRARY, item, |stored| stored.id == item.id)
    }

    pub fn delete_media_item(&self, id: &str) -> bool {
        self.retain(keys::MEDIA_LIBRARY, |item: &MediaItem| item.id != id)
    }

    pub fn get_website_structure(&self) -> Option<WebsiteStructure> {
        self.store.get(keys::WEBSITE_STRUCTURE)
    }

    pub fn set_website_structure(&self, structure: &WebsiteStructure) -> bool {
        self.store.set(keys::WEBSITE_STRUCTURE, structure)
    }

    fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.store.get(key).unwrap_or_default()
    }

    fn replace<T, F>(&self, key: &str, item: &T, same: F) -> bool
    where
        T: Serialize + DeserializeOwned + Clone,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.list(key);
        match items.iter_mut().find(|stored| same(stored)) {
            Some(slot) => {
                *slot = item.clone();
                self.store.set(key, &items)
            }
            None => {
                debug!(key, "Update skipped, no item with that id");
                false
            }
        }
    }

    fn upsert<T, F>(&self, key: &str, item: &T, same: F) -> bool
    where
        T: Serialize + DeserializeOwned + Clone,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.list(key);
        match items.iter_mut().find(|stored| same(stored)) {
            Some(slot) => *slot = item.clone(),
            None => items.push(item.clone()),
        }
        self.store.set(key, &items)
    }

    fn retain<T, F>(&self, key: &str, keep: F) -> bool
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.list(key);
        items.retain(|item| keep(item));
        self.store.set(key, &items)
    }
}
