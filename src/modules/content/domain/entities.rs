use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A French/Arabic string pair. A key missing from stored JSON decodes as
/// an empty string, which readers treat as "not provided".
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedText {
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub ar: String,
}

impl TranslatedText {
    pub fn new(fr: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }

    pub fn set(&mut self, language: Language, value: impl Into<String>) {
        match language {
            Language::Fr => self.fr = value.into(),
            Language::Ar => self.ar = value.into(),
        }
    }

    /// Text for `language`, or `None` when blank.
    pub fn non_empty(&self, language: Language) -> Option<&str> {
        let text = self.get(language);
        (!text.trim().is_empty()).then_some(text)
    }

    pub fn is_complete(&self) -> bool {
        Language::ALL.iter().all(|l| self.non_empty(*l).is_some())
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TranslatedText>,
    #[serde(default)]
    pub content: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl PageSection {
    pub fn new(id: impl Into<String>, content: TranslatedText) -> Self {
        Self {
            id: id.into(),
            content,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: TranslatedText) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: TranslatedText,
    #[serde(default)]
    pub sections: Vec<PageSection>,
}

impl PageContent {
    pub fn new(id: impl Into<String>, title: TranslatedText, sections: Vec<PageSection>) -> Self {
        Self {
            id: id.into(),
            title,
            sections,
        }
    }

    pub fn section(&self, section_id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn has_section(&self, section_id: &str) -> bool {
        self.section(section_id).is_some()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: TranslatedText,
    pub date: TranslatedText,
    pub author: TranslatedText,
    pub category: TranslatedText,
    pub excerpt: TranslatedText,
    pub image: String,
    pub slug: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub title: TranslatedText,
    pub description: TranslatedText,
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub download_url: String,
    pub date: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Bilingual tag used for publication types and categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationType {
    pub id: String,
    pub fr: String,
    pub ar: String,
}

impl PublicationType {
    pub fn new(id: &str, fr: &str, ar: &str) -> Self {
        Self {
            id: id.to_string(),
            fr: fr.to_string(),
            ar: ar.to_string(),
        }
    }

    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: i64,
    pub title: TranslatedText,
    pub date: TranslatedText,
    pub excerpt: TranslatedText,
    pub category: PublicationType,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
    pub pdf_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Shared UI string (button label, error message, image alt text, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalContent {
    pub id: String,
    pub category: String,
    pub key: String,
    pub text: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub path: String,
    pub url: String,
    /// image, video, document, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub alt: TranslatedText,
    #[serde(default)]
    pub tags: Vec<String>,
    pub upload_date: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteStructure {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub main_menu: Vec<MenuItem>,
    #[serde(default)]
    pub footer: Vec<FooterSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: TranslatedText,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub id: String,
    pub title: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<TranslatedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: TranslatedText,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_without_sections_decodes_to_empty_list() {
        let page: PageContent =
            serde_json::from_value(json!({"id": "home", "title": {"fr": "Accueil", "ar": "الرئيسية"}}))
                .unwrap();

        assert!(page.sections.is_empty());
    }

    #[test]
    fn translated_text_tolerates_missing_language() {
        let text: TranslatedText = serde_json::from_value(json!({"fr": "Bonjour"})).unwrap();

        assert_eq!(text.get(Language::Fr), "Bonjour");
        assert_eq!(text.non_empty(Language::Ar), None);
        assert!(!text.is_complete());
    }

    #[test]
    fn section_optional_fields_are_omitted_when_absent() {
        let section = PageSection::new("s1", TranslatedText::new("a", "ب"));

        let value = serde_json::to_value(&section).unwrap();

        assert_eq!(value, json!({"id": "s1", "content": {"fr": "a", "ar": "ب"}}));
    }

    #[test]
    fn resource_uses_browser_field_names() {
        let resource = Resource {
            id: 1,
            title: TranslatedText::new("Guide", "دليل"),
            description: TranslatedText::default(),
            kind: "guide".to_string(),
            format: "pdf".to_string(),
            thumbnail: None,
            download_url: "/downloads/guide.pdf".to_string(),
            date: TranslatedText::default(),
            file_size: Some("2.4 MB".to_string()),
            featured: None,
        };

        let value = serde_json::to_value(&resource).unwrap();

        assert_eq!(value["type"], "guide");
        assert_eq!(value["downloadUrl"], "/downloads/guide.pdf");
        assert_eq!(value["fileSize"], "2.4 MB");
        assert!(value.get("featured").is_none());
    }

    #[test]
    fn section_metadata_keeps_free_form_values() {
        let raw = json!({
            "id": "partner",
            "content": {"fr": "x", "ar": "y"},
            "metadata": {"country": {"fr": "Algérie", "ar": "الجزائر"}, "type": "ngo"}
        });

        let section: PageSection = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(section.metadata.as_ref().unwrap()["type"], "ngo");
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn language_parse_is_case_insensitive() {
        assert_eq!(Language::parse("AR"), Some(Language::Ar));
        assert_eq!(Language::parse(" fr "), Some(Language::Fr));
        assert_eq!(Language::parse("en"), None);
        assert!(Language::Ar.is_rtl());
    }
}
