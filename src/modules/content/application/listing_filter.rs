use crate::content::domain::{Language, NewsItem, Publication, PublicationType, Resource, TranslatedText};

/// Search box plus type/category tabs of the public listing pages.
///
/// The query matches case-insensitively as a substring of the title or
/// the excerpt/description in the active language. The selector `"all"`
/// disables the type/category restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    language: Language,
    query: String,
    selector: String,
}

impl ListingFilter {
    pub const ALL: &'static str = "all";

    pub fn new(language: Language) -> Self {
        Self {
            language,
            query: String::new(),
            selector: Self::ALL.to_string(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Resources whose `type` equals the selector.
    pub fn resources<'a>(&self, items: &'a [Resource]) -> Vec<&'a Resource> {
        items
            .iter()
            .filter(|r| self.selects(&r.kind))
            .filter(|r| self.matches_text(&r.title, &r.description))
            .collect()
    }

    /// News whose category label, in the active language, equals the label
    /// of the selected entry of `categories`.
    pub fn news<'a>(&self, items: &'a [NewsItem], categories: &[PublicationType]) -> Vec<&'a NewsItem> {
        let wanted = if self.is_unrestricted() {
            None
        } else {
            match categories.iter().find(|c| c.id == self.selector) {
                Some(category) => Some(category.label(self.language).to_lowercase()),
                None => return Vec::new(),
            }
        };

        items
            .iter()
            .filter(|n| match &wanted {
                Some(label) => n.category.get(self.language).to_lowercase() == *label,
                None => true,
            })
            .filter(|n| self.matches_text(&n.title, &n.excerpt))
            .collect()
    }

    /// Publications (and media entries) whose `type.id` equals the selector.
    pub fn publications<'a>(&self, items: &'a [Publication]) -> Vec<&'a Publication> {
        items
            .iter()
            .filter(|p| self.selects(&p.kind.id))
            .filter(|p| self.matches_text(&p.title, &p.excerpt))
            .collect()
    }

    fn is_unrestricted(&self) -> bool {
        self.selector == Self::ALL
    }

    fn selects(&self, value: &str) -> bool {
        self.is_unrestricted() || self.selector == value
    }

    fn matches_text(&self, title: &TranslatedText, body: &TranslatedText) -> bool {
        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        [title, body]
            .iter()
            .any(|text| text.get(self.language).to_lowercase().contains(&needle))
    }
}
