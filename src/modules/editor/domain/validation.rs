use std::collections::BTreeMap;

use crate::content::domain::{Language, PageContent};

use super::messages;

/// Field key → localized message. Keys follow the form field names:
/// `title_fr`, `section_2_content_ar`, …
pub type FieldErrors = BTreeMap<String, String>;

pub fn title_field(language: Language) -> String {
    format!("title_{}", language.code())
}

pub fn section_title_field(index: usize, language: Language) -> String {
    format!("section_{}_title_{}", index, language.code())
}

pub fn section_content_field(index: usize, language: Language) -> String {
    format!("section_{}_content_{}", index, language.code())
}

/// Page title and every section body are required in both languages.
/// Section titles are optional.
pub fn validate_page(content: &PageContent, ui: Language) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for language in Language::ALL {
        if content.title.get(language).trim().is_empty() {
            errors.insert(
                title_field(language),
                messages::title_required(language, ui).to_string(),
            );
        }
    }

    for (index, section) in content.sections.iter().enumerate() {
        for language in Language::ALL {
            if section.content.get(language).trim().is_empty() {
                errors.insert(
                    section_content_field(index, language),
                    messages::content_required(language, ui).to_string(),
                );
            }
        }
    }

    errors
}
