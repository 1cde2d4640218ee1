//! Editor strings, in the administrator's UI language.

use crate::content::domain::{Language, TranslatedText};

pub fn title_required(field_language: Language, ui: Language) -> &'static str {
    match (field_language, ui) {
        (Language::Fr, Language::Fr) => "Le titre en français est requis",
        (Language::Fr, Language::Ar) => "العنوان بالفرنسية مطلوب",
        (Language::Ar, Language::Fr) => "Le titre en arabe est requis",
        (Language::Ar, Language::Ar) => "العنوان بالعربية مطلوب",
    }
}

pub fn content_required(field_language: Language, ui: Language) -> &'static str {
    match (field_language, ui) {
        (Language::Fr, Language::Fr) => "Le contenu en français est requis",
        (Language::Fr, Language::Ar) => "المحتوى بالفرنسية مطلوب",
        (Language::Ar, Language::Fr) => "Le contenu en arabe est requis",
        (Language::Ar, Language::Ar) => "المحتوى بالعربية مطلوب",
    }
}

pub fn confirm_delete_section(ui: Language) -> &'static str {
    match ui {
        Language::Fr => "Êtes-vous sûr de vouloir supprimer cette section ?",
        Language::Ar => "هل أنت متأكد أنك تريد حذف هذا القسم؟",
    }
}

pub fn save_succeeded(ui: Language) -> &'static str {
    match ui {
        Language::Fr => "Contenu enregistré avec succès",
        Language::Ar => "تم حفظ المحتوى بنجاح",
    }
}

pub fn new_section_title() -> TranslatedText {
    TranslatedText::new("Nouvelle section", "قسم جديد")
}
