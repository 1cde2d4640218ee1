//! The one table of default bilingual content, keyed by page slug.
//!
//! The seeder stores it and page views fall back to it, so both always
//! show the same copy.

use crate::content::domain::{Language, PageContent, PageSection, TranslatedText};

use super::page_literals;

/// Every page slug the site knows, in navigation order.
pub const KNOWN_PAGES: [&str; 8] = [
    "home",
    "about",
    "programs",
    "news",
    "resources",
    "contact",
    "testimonials",
    "review",
];

/// Pages stored on first load. News and resources are listed by their
/// catalogs and resolve to a generic page on demand.
pub const SEEDED_PAGES: [&str; 6] = [
    "home",
    "about",
    "programs",
    "contact",
    "testimonials",
    "review",
];

/// Section ids the home page must carry.
pub const HOME_REQUIRED_SECTIONS: [&str; 12] = [
    "hero",
    "slogan",
    "mission",
    "droits_egaux",
    "objectives",
    "impact",
    "actualites",
    "objectifs_details",
    "mission_details",
    "programmes",
    "identite_visuelle",
    "newsletter",
];

/// Section ids the about page must carry.
pub const ABOUT_REQUIRED_SECTIONS: [&str; 9] = [
    "intro",
    "mission",
    "vision",
    "justice",
    "objectives",
    "objectives_intro",
    "target_audience",
    "history",
    "founder",
];

/// Navigation label of a known page.
pub fn default_page_title(page_id: &str) -> Option<TranslatedText> {
    let (fr, ar) = match page_id {
        "home" => ("Accueil", "الرئيسية"),
        "about" => ("À Propos", "من نحن"),
        "programs" => ("Programmes", "البرامج"),
        "news" => ("Actualités", "الأخبار"),
        "resources" => ("Ressources", "الموارد"),
        "testimonials" => ("Témoignages", "الشهادات"),
        "review" => ("Revue & Publications", "المراجعة والمنشورات"),
        "contact" => ("Contact", "اتصل بنا"),
        _ => return None,
    };
    Some(TranslatedText::new(fr, ar))
}

/// Default content for a known page slug, `None` for anything else.
pub fn create_default_page_content(page_id: &str) -> Option<PageContent> {
    let title = default_page_title(page_id)?;

    let content = match page_id {
        "home" => page_literals::home(),
        "about" => page_literals::about(),
        "programs" => page_literals::programs(),
        "contact" => page_literals::contact(),
        "testimonials" => page_literals::testimonials(),
        "review" => page_literals::review(),
        _ => generic_page(page_id, title),
    };
    Some(content)
}

/// Single placeholder section for pages without hand-written copy.
fn generic_page(page_id: &str, title: TranslatedText) -> PageContent {
    let body = TranslatedText::new(
        format!("Contenu de la page {}", title.fr),
        format!("محتوى صفحة {}", title.ar),
    );
    PageContent::new(
        page_id,
        title.clone(),
        vec![PageSection::new("1", body).with_title(title)],
    )
}

/// Default section of a page, if the table has one.
pub fn default_section(page_id: &str, section_id: &str) -> Option<PageSection> {
    create_default_page_content(page_id)?
        .sections
        .into_iter()
        .find(|section| section.id == section_id)
}

/// Default body text of a section in `language`.
pub fn default_text(page_id: &str, section_id: &str, language: Language) -> Option<String> {
    default_section(page_id, section_id).map(|s| s.content.get(language).to_string())
}
