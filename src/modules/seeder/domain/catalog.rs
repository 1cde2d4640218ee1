//! Seed records other than pages: navigation, shared strings, media,
//! sample news/resources and the read-only publication catalog.

use crate::content::domain::{
    FooterLink, FooterSection, GlobalContent, MediaItem, MenuItem, NewsItem, Publication,
    PublicationType, Resource, TranslatedText, WebsiteStructure,
};

use super::default_content::{default_page_title, KNOWN_PAGES};

fn text(fr: &str, ar: &str) -> TranslatedText {
    TranslatedText::new(fr, ar)
}

fn page_href(page_id: &str) -> String {
    match page_id {
        "home" => "/".to_string(),
        other => format!("/{other}"),
    }
}

/// Main menu order differs from [`KNOWN_PAGES`]: review and testimonials
/// come before contact.
const MENU_ORDER: [&str; 8] = [
    "home",
    "about",
    "programs",
    "news",
    "resources",
    "review",
    "testimonials",
    "contact",
];

pub fn website_structure() -> WebsiteStructure {
    let menu_titles = MENU_ORDER
        .iter()
        .filter_map(|id| default_page_title(id).map(|title| (*id, title)));

    let main_menu = menu_titles
        .clone()
        .map(|(id, title)| MenuItem {
            id: id.to_string(),
            title,
            href: page_href(id),
            children: None,
        })
        .collect();

    let quick_links = menu_titles
        .map(|(id, title)| FooterLink {
            text: title,
            href: page_href(id),
        })
        .collect();

    WebsiteStructure {
        pages: KNOWN_PAGES.iter().map(|p| p.to_string()).collect(),
        main_menu,
        footer: vec![
            FooterSection {
                id: "about".to_string(),
                title: text("À propos de nous", "عن المؤسسة"),
                links: None,
                content: Some(text(
                    "La Fondation pour la promotion des droits est une organisation indépendante dédiée à la promotion et la protection des droits fondamentaux.",
                    "مؤسسة تعزيز الحقوق هي منظمة مستقلة مكرسة لتعزيز وحماية الحقوق الأساسية.",
                )),
            },
            FooterSection {
                id: "links".to_string(),
                title: text("Liens rapides", "روابط سريعة"),
                links: Some(quick_links),
                content: None,
            },
            FooterSection {
                id: "contact".to_string(),
                title: text("Contact", "اتصل بنا"),
                links: None,
                content: Some(text(
                    "Email: contact@fondation-droits.org\nAdresse: 123 Avenue de la République, Alger, Algérie",
                    "البريد الإلكتروني: contact@fondation-droits.org\nالعنوان: 123 شارع الجمهورية، الجزائر، الجزائر",
                )),
            },
        ],
    }
}

pub fn global_content() -> Vec<GlobalContent> {
    let entry = |id: &str, category: &str, key: &str, fr: &str, ar: &str| GlobalContent {
        id: id.to_string(),
        category: category.to_string(),
        key: key.to_string(),
        text: text(fr, ar),
        image: None,
    };

    vec![
        entry("btn_read_more", "buttons", "read_more", "Lire la suite", "قراءة المزيد"),
        entry("btn_submit", "buttons", "submit", "Soumettre", "إرسال"),
        entry("btn_download", "buttons", "download", "Télécharger", "تحميل"),
        entry("btn_search", "buttons", "search", "Rechercher", "بحث"),
        entry("btn_subscribe", "buttons", "subscribe", "S'abonner", "اشتراك"),
        entry("nav_prev", "navigation", "previous", "Précédent", "السابق"),
        entry("nav_next", "navigation", "next", "Suivant", "التالي"),
        entry("nav_back", "navigation", "back", "Retour", "رجوع"),
        entry("label_name", "labels", "name", "Nom", "الاسم"),
        entry("label_email", "labels", "email", "Email", "البريد الإلكتروني"),
        entry("label_phone", "labels", "phone", "Téléphone", "الهاتف"),
        entry("label_message", "labels", "message", "Message", "الرسالة"),
        entry("label_date", "labels", "date", "Date", "التاريخ"),
        entry("label_author", "labels", "author", "Auteur", "الكاتب"),
        entry("label_category", "labels", "category", "Catégorie", "الفئة"),
        entry("error_required", "errors", "required", "Ce champ est requis", "هذا الحقل مطلوب"),
        entry(
            "error_invalid_email",
            "errors",
            "invalid_email",
            "Email invalide",
            "البريد الإلكتروني غير صالح",
        ),
        entry(
            "success_contact_sent",
            "success",
            "contact_sent",
            "Votre message a été envoyé avec succès",
            "تم إرسال رسالتك بنجاح",
        ),
        entry("section_recent_news", "sections", "recent_news", "Actualités récentes", "آخر الأخبار"),
        entry(
            "section_featured_resources",
            "sections",
            "featured_resources",
            "Ressources en vedette",
            "موارد مميزة",
        ),
        entry("section_testimonials", "sections", "testimonials", "Témoignages", "شهادات"),
        entry("section_partners", "sections", "partners", "Nos partenaires", "شركاؤنا"),
        entry("social_follow", "social", "follow_us", "Suivez-nous", "تابعنا"),
        entry("social_share", "social", "share", "Partager", "مشاركة"),
        GlobalContent {
            image: Some("/images/logo.png".to_string()),
            ..entry("img_logo", "images", "logo", "Logo de la Fondation", "شعار المؤسسة")
        },
        GlobalContent {
            image: Some("/images/hero-background.jpg".to_string()),
            ..entry("img_banner", "images", "banner", "Bannière principale", "الشعار الرئيسي")
        },
    ]
}

/// Media library seed; every entry is stamped with `upload_date` (YYYY-MM-DD).
pub fn media_library(upload_date: &str) -> Vec<MediaItem> {
    let entry = |id: &str, name: &str, path: &str, alt: TranslatedText, tags: &[&str]| MediaItem {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
        url: path.to_string(),
        kind: "image".to_string(),
        alt,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        upload_date: upload_date.to_string(),
    };

    vec![
        entry(
            "media_1",
            "Hero Background",
            "/images/hero-background.jpg",
            text("Arrière-plan de la bannière principale", "خلفية البانر الرئيسي"),
            &["hero", "banner", "background"],
        ),
        entry(
            "media_2",
            "Droits Egaux",
            "/images/droits-egaux.jpg",
            text("Droits égaux pour tous", "حقوق متساوية للجميع"),
            &["rights", "equality"],
        ),
        entry(
            "media_3",
            "Justice Law Scales",
            "/images/law/justice-law-scales.jpg",
            text("Balance de la justice", "ميزان العدالة"),
            &["justice", "law"],
        ),
        entry(
            "media_4",
            "Research Program",
            "/images/programs/research.jpg",
            text("Programme de recherche", "برنامج البحث"),
            &["programs", "research"],
        ),
        entry(
            "media_5",
            "Training Program",
            "/images/programs/training.jpg",
            text("Programme de formation", "برنامج التدريب"),
            &["programs", "training"],
        ),
        entry(
            "media_6",
            "Advocacy Program",
            "/images/programs/advocacy.jpg",
            text("Programme de plaidoyer", "برنامج المناصرة"),
            &["programs", "advocacy"],
        ),
    ]
}

pub fn sample_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: text(
                "Lancement de notre nouvelle plateforme de formation en ligne",
                "إطلاق منصة التدريب عبر الإنترنت الجديدة",
            ),
            date: text("15 mai 2023", "15 مايو 2023"),
            author: text("Équipe de la Fondation", "فريق المؤسسة"),
            category: text("Formation", "تدريب"),
            excerpt: text(
                "Notre nouvelle plateforme permet désormais d'accéder à des formations de qualité sur les droits fondamentaux, partout et à tout moment.",
                "تتيح منصتنا الجديدة الآن الوصول إلى تدريب عالي الجودة حول الحقوق الأساسية، في أي مكان وفي أي وقت.",
            ),
            image: "/images/news/elearning.jpg".to_string(),
            slug: "lancement-plateforme-formation".to_string(),
            content: "Contenu détaillé de l'article de blog...".to_string(),
        },
        NewsItem {
            id: 2,
            title: text(
                "Rapport annuel 2023 sur les droits et libertés",
                "التقرير السنوي 2023 عن الحقوق والحريات",
            ),
            date: text("20 avril 2023", "20 أبريل 2023"),
            author: text("Service de recherche", "قسم البحث"),
            category: text("Rapport", "تقرير"),
            excerpt: text(
                "Notre rapport annuel présente une analyse détaillée de la situation des droits et des libertés au cours de l'année écoulée.",
                "يقدم تقريرنا السنوي تحليلاً مفصلاً لحالة الحقوق والحريات خلال العام الماضي.",
            ),
            image: "/images/news/report.jpg".to_string(),
            slug: "rapport-annuel-2023".to_string(),
            content: "Contenu détaillé du rapport annuel...".to_string(),
        },
        NewsItem {
            id: 3,
            title: text(
                "Conférence internationale sur les droits des femmes",
                "المؤتمر الدولي لحقوق المرأة",
            ),
            date: text("8 mars 2023", "8 مارس 2023"),
            author: text("Département événements", "قسم الفعاليات"),
            category: text("Événement", "حدث"),
            excerpt: text(
                "Notre fondation a participé à la conférence internationale sur les droits des femmes, présentant nos dernières recherches et initiatives.",
                "شاركت مؤسستنا في المؤتمر الدولي لحقوق المرأة، حيث قدمت أحدث أبحاثنا ومبادراتنا.",
            ),
            image: "/images/news/women-rights.jpg".to_string(),
            slug: "conference-droits-femmes".to_string(),
            content: "Compte rendu détaillé de la conférence...".to_string(),
        },
    ]
}

pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: text("Guide des droits fondamentaux", "دليل الحقوق الأساسية"),
            description: text(
                "Un guide complet expliquant les droits fondamentaux dans un langage accessible à tous.",
                "دليل شامل يشرح الحقوق الأساسية بلغة يسهل فهمها للجميع.",
            ),
            kind: "guide".to_string(),
            format: "pdf".to_string(),
            thumbnail: Some("/images/resources/guide-thumbnail.jpg".to_string()),
            download_url: "/downloads/guide-droits-fondamentaux.pdf".to_string(),
            date: text("10 janvier 2023", "10 يناير 2023"),
            file_size: Some("2.4 MB".to_string()),
            featured: Some(true),
        },
        Resource {
            id: 2,
            title: text("Modèles de lettres juridiques", "نماذج الرسائل القانونية"),
            description: text(
                "Ensemble de modèles de lettres pour différentes situations juridiques courantes.",
                "مجموعة من نماذج الرسائل للمواقف القانونية المختلفة الشائعة.",
            ),
            kind: "template".to_string(),
            format: "docx".to_string(),
            thumbnail: Some("/images/resources/templates-thumbnail.jpg".to_string()),
            download_url: "/downloads/modeles-lettres-juridiques.zip".to_string(),
            date: text("15 février 2023", "15 فبراير 2023"),
            file_size: Some("1.8 MB".to_string()),
            featured: None,
        },
        Resource {
            id: 3,
            title: text("Rapport sur la liberté d'expression", "تقرير عن حرية التعبير"),
            description: text(
                "Analyse approfondie de l'état de la liberté d'expression et des défis actuels.",
                "تحليل متعمق لحالة حرية التعبير والتحديات الحالية.",
            ),
            kind: "report".to_string(),
            format: "pdf".to_string(),
            thumbnail: Some("/images/resources/report-thumbnail.jpg".to_string()),
            download_url: "/downloads/rapport-liberte-expression.pdf".to_string(),
            date: text("22 mars 2023", "22 مارس 2023"),
            file_size: Some("3.6 MB".to_string()),
            featured: Some(true),
        },
    ]
}

fn tag(id: &str, fr: &str, ar: &str) -> PublicationType {
    PublicationType::new(id, fr, ar)
}

/// Category tabs of the news listing; `all` first.
pub fn news_categories() -> Vec<PublicationType> {
    vec![
        tag("all", "Tous", "الكل"),
        tag("formation", "Formation", "تدريب"),
        tag("rapports", "Rapports", "تقارير"),
        tag("partenariats", "Partenariats", "شراكات"),
        tag("evenements", "Événements", "فعاليات"),
        tag("programmes", "Programmes", "برامج"),
    ]
}

/// Type tabs of the resources listing; `all` first.
pub fn resource_types() -> Vec<PublicationType> {
    vec![
        tag("all", "Toutes les ressources", "جميع الموارد"),
        tag("guides", "Guides pratiques", "أدلة عملية"),
        tag("toolkits", "Boîtes à outils", "مجموعات أدوات"),
        tag("legal", "Textes juridiques", "نصوص قانونية"),
        tag("training", "Matériel de formation", "مواد تدريبية"),
        tag("multimedia", "Ressources multimédias", "موارد متعددة الوسائط"),
    ]
}

pub fn publication_types() -> Vec<PublicationType> {
    vec![
        tag("all", "Tout", "الكل"),
        tag("publications", "Publications", "منشورات"),
        tag("rapports", "Rapports", "تقارير"),
        tag("guides", "Guides", "أدلة"),
    ]
}

pub fn publication_categories() -> Vec<PublicationType> {
    vec![
        tag("all", "Tous", "الكل"),
        tag("juridique", "Juridique", "قانوني"),
        tag("droits-humains", "Droits humains", "حقوق الإنسان"),
        tag("social", "Social", "اجتماعي"),
    ]
}

pub fn media_types() -> Vec<PublicationType> {
    vec![
        tag("all", "Tout", "الكل"),
        tag("videos", "Vidéos", "فيديوهات"),
        tag("podcasts", "Podcasts", "بودكاست"),
        tag("infographies", "Infographies", "إنفوغرافيك"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn publication(
    id: i64,
    title: TranslatedText,
    date: TranslatedText,
    excerpt: TranslatedText,
    category: PublicationType,
    kind: PublicationType,
    slug: &str,
    pdf_url: &str,
) -> Publication {
    Publication {
        id,
        title,
        date,
        excerpt,
        category,
        kind,
        pages: 0,
        image: None,
        slug: slug.to_string(),
        pdf_url: pdf_url.to_string(),
        views: None,
        listens: None,
        downloads: None,
        featured: None,
        duration: None,
    }
}

/// Documents listed on the review page. Never persisted.
pub fn sample_publications() -> Vec<Publication> {
    vec![
        Publication {
            pages: 120,
            featured: Some(true),
            ..publication(
                1,
                text("Rapport annuel 2023", "التقرير السنوي 2023"),
                text("Mai 2023", "مايو 2023"),
                text(
                    "Ce rapport présente un aperçu complet de l'état des droits humains en Algérie en 2023. Il aborde les avancées et défis dans différents domaines, notamment les libertés civiles, les droits économiques et sociaux, et l'accès à la justice.",
                    "يقدم هذا التقرير نظرة شاملة عن حالة حقوق الإنسان في الجزائر في عام 2023. ويتناول التقدم والتحديات في مختلف المجالات، بما في ذلك الحريات المدنية والحقوق الاقتصادية والاجتماعية والوصول إلى العدالة.",
                ),
                tag("droits-humains", "Rapport annuel", "التقرير السنوي"),
                tag("rapports", "Rapport", "تقرير"),
                "/review/rapport-annuel-2023",
                "/documents/rapport-annuel-2023.pdf",
            )
        },
        Publication {
            pages: 45,
            ..publication(
                2,
                text("État des lieux de l'égalité des genres", "واقع المساواة بين الجنسين"),
                text("Mars 2023", "مارس 2023"),
                text(
                    "Analyse des progrès réalisés et des défis persistants en matière d'égalité hommes-femmes.",
                    "تحليل التقدم المحرز والتحديات المستمرة في مجال المساواة بين الجنسين.",
                ),
                tag("droits-humains", "Rapport", "تقرير"),
                tag("rapports", "Rapport", "تقرير"),
                "/review/egalite-genres",
                "/documents/egalite-genres.pdf",
            )
        },
        Publication {
            pages: 85,
            ..publication(
                3,
                text("Guide pratique des droits de l'enfant", "دليل عملي لحقوق الطفل"),
                text("Février 2023", "فبراير 2023"),
                text(
                    "Ressource complète pour parents, éducateurs et professionnels travaillant avec les enfants.",
                    "مورد شامل للآباء والمعلمين والمختصين العاملين مع الأطفال.",
                ),
                tag("social", "Guide", "دليل"),
                tag("guides", "Guide", "دليل"),
                "/review/guide-droits-enfant",
                "/documents/guide-droits-enfant.pdf",
            )
        },
        Publication {
            pages: 60,
            ..publication(
                4,
                text(
                    "Réformes juridiques et accès à la justice",
                    "الإصلاحات القانونية والوصول إلى العدالة",
                ),
                text("Janvier 2023", "يناير 2023"),
                text(
                    "Analyse des récentes réformes juridiques et leur impact sur l'accès des citoyens à la justice.",
                    "تحليل الإصلاحات القانونية الأخيرة وتأثيرها على وصول المواطنين إلى العدالة.",
                ),
                tag("juridique", "Analyse", "تحليل"),
                tag("publications", "Analyse", "تحليل"),
                "/review/reformes-juridiques",
                "/documents/reformes-juridiques.pdf",
            )
        },
    ]
}

/// Audio-visual entries of the review page's media library. Never persisted.
pub fn sample_media_content() -> Vec<Publication> {
    vec![
        Publication {
            views: Some(2456),
            duration: Some("24:15".to_string()),
            ..publication(
                1,
                text(
                    "Les droits humains : Enjeux et perspectives en Algérie",
                    "حقوق الإنسان: التحديات والآفاق في الجزائر",
                ),
                text("Mai 2023", "مايو 2023"),
                text(
                    "Conférence-débat sur l'état des droits humains en Algérie, avec la participation d'experts nationaux et internationaux.",
                    "ندوة-نقاش حول وضع حقوق الإنسان في الجزائر، بمشاركة خبراء وطنيين ودوليين.",
                ),
                tag("droits-humains", "Vidéo à la une", "فيديو بارز"),
                tag("videos", "Vidéo", "فيديو"),
                "/review/media/droits-humains-enjeux",
                "#",
            )
        },
        Publication {
            views: Some(1245),
            duration: Some("18:32".to_string()),
            ..publication(
                2,
                text("L'engagement des jeunes pour les droits", "التزام الشباب بالحقوق"),
                text("Mars 2023", "مارس 2023"),
                text(
                    "Comment les jeunes s'engagent pour la défense et la promotion des droits humains en Algérie.",
                    "كيف يلتزم الشباب بالدفاع عن حقوق الإنسان وتعزيزها في الجزائر.",
                ),
                tag("droits-humains", "Vidéo", "فيديو"),
                tag("videos", "Vidéo", "فيديو"),
                "/review/media/engagement-jeunes",
                "#",
            )
        },
        Publication {
            listens: Some(856),
            duration: Some("45:10".to_string()),
            ..publication(
                3,
                text("Les défis de l'accès à la justice", "تحديات الوصول إلى العدالة"),
                text("Février 2023", "فبراير 2023"),
                text(
                    "Entretien avec des experts juridiques sur les obstacles à l'accès à la justice et les solutions possibles.",
                    "مقابلة مع خبراء قانونيين حول العقبات التي تعترض الوصول إلى العدالة والحلول الممكنة.",
                ),
                tag("juridique", "Podcast", "بودكاست"),
                tag("podcasts", "Podcast", "بودكاست"),
                "/review/media/defis-acces-justice",
                "#",
            )
        },
        Publication {
            downloads: Some(378),
            ..publication(
                4,
                text("L'égalité des genres en chiffres", "المساواة بين الجنسين بالأرقام"),
                text("Janvier 2023", "يناير 2023"),
                text(
                    "Infographie présentant les statistiques clés sur l'égalité des genres en Algérie et dans le monde.",
                    "إنفوغرافيك يقدم الإحصاءات الرئيسية حول المساواة بين الجنسين في الجزائر وفي العالم.",
                ),
                tag("droits-humains", "Infographie", "إنفوغرافيك"),
                tag("infographies", "Infographie", "إنفوغرافيك"),
                "/review/media/egalite-genres-chiffres",
                "/documents/infographie-egalite-genres.pdf",
            )
        },
    ]
}
