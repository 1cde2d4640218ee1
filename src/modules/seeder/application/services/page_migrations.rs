//! Append-only section migrations.
//!
//! When the default template of a page gains sections, stored pages pick
//! them up here without losing what the administrator already edited:
//! sections are only ever appended, never replaced or reordered.

use tracing::{error, info};

use crate::content::application::services::ContentRepository;
use crate::content::domain::{keys, PageContent, TranslatedText};
use crate::seeder::domain::default_content::{
    create_default_page_content, ABOUT_REQUIRED_SECTIONS, HOME_REQUIRED_SECTIONS,
};

/// Appends the template sections listed in `required` that `page` lacks.
/// Returns how many were added.
pub fn append_missing_sections(
    page: &mut PageContent,
    template: &PageContent,
    required: &[&str],
) -> usize {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|id| !page.has_section(id))
        .collect();

    let before = page.sections.len();
    for id in missing {
        if let Some(section) = template.section(id) {
            page.sections.push(section.clone());
        }
    }
    page.sections.len() - before
}

/// Brings the stored home page up to the current section list.
///
/// Saves through [`ContentRepository::set_page_content`], so listeners
/// are notified when something was added.
pub fn update_home_page_with_all_sections(repository: &ContentRepository) -> bool {
    let Some(template) = create_default_page_content("home") else {
        return false;
    };

    let Some(mut home) = repository.get_page_content("home") else {
        info!("Home page missing, storing full default");
        return repository.set_page_content(&template);
    };

    let added = append_missing_sections(&mut home, &template, &HOME_REQUIRED_SECTIONS);
    if added == 0 {
        return true;
    }

    info!(added, "Adding missing home page sections");
    repository.set_page_content(&home)
}

/// Brings the stored about page up to the current section list.
///
/// Writes the live and draft copies directly, without notification.
pub fn update_about_page_with_all_sections(repository: &ContentRepository) -> bool {
    let Some(template) = create_default_page_content("about") else {
        return false;
    };

    let mut about = repository.get_page_content("about").unwrap_or_else(|| {
        PageContent::new("about", TranslatedText::new("À Propos", "من نحن"), Vec::new())
    });

    let added = append_missing_sections(&mut about, &template, &ABOUT_REQUIRED_SECTIONS);
    if added > 0 {
        info!(added, "Adding missing about page sections");
    }

    let store = repository.store();
    let written = store.set(&keys::page_key("about"), &about)
        && store.set(&keys::editor_key("about"), &about);
    if !written {
        error!("Error updating about page sections");
    }
    written
}
