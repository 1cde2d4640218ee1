use crate::content::domain::{PageContent, PageSection, TranslatedText};

fn text(fr: &str, ar: &str) -> TranslatedText {
    TranslatedText::new(fr, ar)
}

fn section(id: &str, title: (&str, &str), content: (&str, &str)) -> PageSection {
    PageSection::new(id, text(content.0, content.1)).with_title(text(title.0, title.1))
}

pub(super) fn home() -> PageContent {
    PageContent::new(
        "home",
        text("Accueil", "الرئيسية"),
        vec![
            section(
                "hero",
                ("Bannière principale", "البانر الرئيسي"),
                ("Fondation pour la Promotion des Droits", "مؤسسة تعزيز الحقوق"),
            )
            .with_image("/images/hero-background.jpg"),
            section(
                "slogan",
                ("Notre slogan", "شعارنا"),
                (
                    "Ensemble, pour des droits connus, reconnus et défendus.",
                    "معاً، من أجل حقوق معروفة ومعترف بها ومحمية.",
                ),
            ),
            section(
                "mission",
                ("Notre mission", "مهمتنا"),
                (
                    "Notre mission est de promouvoir et défendre les droits par la sensibilisation, la formation, la documentation des violations et le soutien aux acteurs de la société civile.",
                    "مهمتنا هي تعزيز والدفاع عن الحقوق من خلال التوعية والتدريب وتوثيق الانتهاكات ودعم الفاعلين في المجتمع المدني.",
                ),
            )
            .with_image("/images/droits-egaux.jpg"),
            section(
                "droits_egaux",
                ("Droits égaux", "حقوق متساوية"),
                (
                    "\"La dignité humaine n'est pas un privilège accordé par l'État, mais un droit inhérent à chaque individu.\"",
                    "\"الكرامة الإنسانية ليست امتيازاً تمنحه الدولة، بل هي حق متأصل في كل فرد.\"",
                ),
            ),
            section(
                "objectives",
                ("Nos objectifs", "أهدافنا"),
                (
                    "La Fondation pour la promotion des droits poursuit les objectifs suivants pour concrétiser sa vision d'une société juste et respectueuse des droits fondamentaux.",
                    "تسعى مؤسسة تعزيز الحقوق لتحقيق الأهداف التالية لتجسيد رؤيتها لمجتمع عادل يحترم الحقوق الأساسية.",
                ),
            ),
            section(
                "impact",
                ("Notre Impact", "تأثيرنا"),
                (
                    "38+ Formations\n760+ Bénéficiaires\n25+ Partenaires\n\nLes chiffres qui reflètent notre engagement et notre impact dans la promotion et la défense des droits.",
                    "+38 تدريب\n+760 مستفيد\n+25 شريك\n\nالأرقام التي تعكس التزامنا وتأثيرنا في تعزيز والدفاع عن الحقوق.",
                ),
            ),
            section(
                "actualites",
                ("Actualités Récentes", "آخر الأخبار"),
                (
                    "Découvrez les dernières informations sur nos activités, projets et engagements.",
                    "اكتشف أحدث المعلومات حول أنشطتنا ومشاريعنا والتزاماتنا.",
                ),
            ),
            section(
                "objectifs_details",
                ("Détails de nos objectifs", "تفاصيل أهدافنا"),
                (
                    "Formations et recherches: Organiser des formations continues et des forums et réaliser des recherches et des études dans le domaine de la promotion des droits.\n\nSensibilisation et médias: Réaliser toute activité de sensibilisation et médiatique liée à la promotion des droits pour informer et éduquer le public.\n\nConstruction d'un État de droit: Contribuer et œuvrer à la construction d'un État de droit en exhortant les citoyens à s'engager à faire appliquer et respecter la loi et à promouvoir les droits.",
                    "التدريب والبحث: تنظيم دورات تدريبية مستمرة ومنتديات وإجراء بحوث ودراسات في مجال تعزيز الحقوق.\n\nالتوعية والإعلام: تنفيذ جميع أنشطة التوعية والإعلام المتعلقة بتعزيز الحقوق لإعلام وتثقيف الجمهور.\n\nبناء دولة القانون: المساهمة والعمل على بناء دولة القانون من خلال حث المواطنين على الالتزام بتطبيق واحترام القانون وتعزيز الحقوق.",
                ),
            ),
            section(
                "mission_details",
                ("Détails de notre mission", "تفاصيل مهمتنا"),
                (
                    "Promotion des principes démocratiques et de l'état de droit\nProtection des droits des populations vulnérables\nÉducation et sensibilisation aux droits\nRenforcement des capacités de la société civile",
                    "تعزيز المبادئ الديمقراطية وسيادة القانون\nحماية حقوق الفئات الضعيفة\nالتعليم والتوعية بالحقوق\nتعزيز قدرات المجتمع المدني",
                ),
            ),
            section(
                "programmes",
                ("Nos Programmes", "برامجنا"),
                (
                    "Découvrez les différents programmes à travers lesquels nous travaillons pour promouvoir et protéger les droits fondamentaux.\n\nÉducation aux droits: Sensibilisation et formation aux principes des droits fondamentaux pour différents publics.\n\nAssistance juridique: Soutien juridique aux individus et organisations dans la défense de leurs droits.\n\nPlaidoyer: Actions de plaidoyer auprès des décideurs pour l'amélioration des politiques liées aux droits.",
                    "اكتشف البرامج المختلفة التي نعمل من خلالها على تعزيز وحماية الحقوق الأساسية.\n\nالتثقيف بالحقوق: التوعية والتدريب على مبادئ الحقوق الأساسية لمختلف الجماهير.\n\nالمساعدة القانونية: الدعم القانوني للأفراد والمنظمات في الدفاع عن حقوقهم.\n\nالمناصرة: أنشطة المناصرة مع صناع القرار لتحسين السياسات المتعلقة بالحقوق.",
                ),
            ),
            section(
                "identite_visuelle",
                ("Notre identité visuelle", "هويتنا البصرية"),
                (
                    "Notre identité visuelle reflète nos valeurs d'équilibre, de durabilité et d'action positive. Les couleurs de notre logo représentent notre engagement envers ces principes.\n\nTurquoise: R60 / V180 / B150 #3cb496\nOrange: R243 / V146 / B7 #f39207",
                    "تعكس هويتنا البصرية قيمنا المتمثلة في التوازن والاستدامة والعمل الإيجابي. تمثل ألوان شعارنا التزامنا بهذه المبادئ.\n\nتركواز: R60 / V180 / B150 #3cb496\nبرتقالي: R243 / V146 / B7 #f39207",
                ),
            ),
            section(
                "newsletter",
                ("Restez informé(e)", "ابق على اطلاع"),
                (
                    "Inscrivez-vous à notre newsletter pour recevoir les dernières actualités, publications et événements de la Fondation pour la promotion des droits.",
                    "اشترك في نشرتنا الإخبارية لتلقي آخر الأخبار والمنشورات والفعاليات من مؤسسة تعزيز الحقوق.",
                ),
            ),
        ],
    )
}

pub(super) fn about() -> PageContent {
    PageContent::new(
        "about",
        text("À Propos", "من نحن"),
        vec![
            section(
                "intro",
                ("Introduction", "مقدمة"),
                (
                    "Découvrez notre mission, nos valeurs et notre équipe dédiée à la promotion et à la défense des droits humains.",
                    "اكتشف مهمتنا وقيمنا وفريقنا المكرس لتعزيز وحماية حقوق الإنسان.",
                ),
            ),
            section(
                "mission",
                ("Notre mission", "مهمتنا"),
                (
                    "Notre mission principale est de contribuer à la construction d'un État de droit solide et inclusif. Pour cela, nous mettons en place des actions de plaidoyer, des campagnes de sensibilisation, des formations juridiques et des programmes d'éducation civique. Nous exhortons les citoyennes et citoyens à s'engager activement, à faire respecter la loi et à défendre leurs droits avec responsabilité et solidarité.",
                    "مهمتنا هي تعزيز والدفاع عن الحقوق من خلال التوعية والتدريب وتوثيق الانتهاكات ودعم الفاعلين في المجتمع المدني.",
                ),
            ),
            section(
                "vision",
                ("Notre vision", "رؤيتنا"),
                (
                    "\"Contribuer à l'édification d'une société où la dignité humaine est respectée et où les droits sont garantis pour tous, sans discrimination.\"",
                    "\"المساهمة في بناء مجتمع تُحترم فيه كرامة الإنسان وتُضمن فيه الحقوق للجميع، دون تمييز.\"",
                ),
            ),
            section(
                "justice",
                ("Justice et Droits", "العدالة والحقوق"),
                (
                    "Face aux défis, nous restons engagés et mobilisés pour faire avancer la justice et promouvoir le respect des droits fondamentaux.",
                    "في مواجهة التحديات، نبقى ملتزمين ومجندين لدفع العدالة وتعزيز احترام الحقوق الأساسية.",
                ),
            )
            .with_image("/images/law/justice-law-scales.jpg"),
            section(
                "objectives",
                ("Nos objectifs", "أهدافنا"),
                (
                    "Contribuer et œuvrer à la construction d'un État de droit en exhortant les citoyens à s'engager à faire appliquer et respecter la loi et à promouvoir les droits.",
                    "المساهمة والعمل على بناء دولة القانون من خلال حث المواطنين على الالتزام بتطبيق واحترام القانون وتعزيز الحقوق.",
                ),
            ),
            section(
                "objectives_intro",
                ("Introduction aux objectifs", "مقدمة الأهداف"),
                (
                    "La Fondation pour la promotion des droits poursuit les objectifs suivants pour concrétiser sa vision d'une société juste et respectueuse des droits fondamentaux.",
                    "تسعى مؤسسة تعزيز الحقوق لتحقيق الأهداف التالية لتجسيد رؤيتها لمجتمع عادل يحترم الحقوق الأساسية.",
                ),
            ),
            section(
                "target_audience",
                ("Notre public cible", "جمهورنا المستهدف"),
                (
                    "Nos actions et programmes sont conçus pour répondre aux besoins spécifiques de différentes catégories de personnes concernées par les droits humains.",
                    "تم تصميم إجراءاتنا وبرامجنا لتلبية الاحتياجات المحددة لمختلف فئات الأشخاص المعنيين بحقوق الإنسان.",
                ),
            ),
            section(
                "history",
                ("Notre histoire", "تاريخنا"),
                (
                    "Notre histoire est avant tout celle d'un engagement collectif. Face aux défis persistants liés au respect des droits fondamentaux, nous avons choisi d'unir nos expertises et nos convictions pour créer une structure indépendante, transparente et active. Depuis sa création, la Fondation œuvre pour renforcer la culture des droits humains, sensibiliser les citoyennes et citoyens à leurs droits et devoirs, et promouvoir une société fondée sur la loi, la justice et l'égalité.",
                    "تاريخنا هو قبل كل شيء تاريخ التزام جماعي. في مواجهة التحديات المستمرة المرتبطة باحترام الحقوق الأساسية، اخترنا توحيد خبراتنا وقناعاتنا لإنشاء هيكل مستقل وشفاف ونشط.",
                ),
            ),
            section(
                "founder",
                ("Mot du Gérant", "كلمة المدير"),
                (
                    "C'est avec une grande fierté et une profonde conviction que je vous adresse ces quelques mots en tant que gérant de la Fondation pour la promotion des droits. Notre monde traverse une période où les droits fondamentaux sont souvent remis en question, ignorés, voire bafoués. Face à ces défis, il est impératif de ne pas rester silencieux.",
                    "بكل فخر وقناعة عميقة أخاطبكم بهذه الكلمات القليلة كمدير لمؤسسة تعزيز الحقوق. يمر عالمنا بفترة يتم فيها غالبًا التشكيك في الحقوق الأساسية أو تجاهلها أو حتى انتهاكها. في مواجهة هذه التحديات، من الضروري عدم البقاء صامتين.",
                ),
            )
            .with_image("/images/zakaria.jpg"),
        ],
    )
}

pub(super) fn programs() -> PageContent {
    PageContent::new(
        "programs",
        text("Nos Programmes", "برامجنا"),
        vec![
            section(
                "intro",
                ("Nos Programmes", "برامجنا"),
                (
                    "Découvrez les différents programmes à travers lesquels nous travaillons pour promouvoir et protéger les droits fondamentaux.",
                    "اكتشف البرامج المختلفة التي نعمل من خلالها على تعزيز وحماية الحقوق الأساسية.",
                ),
            ),
            section(
                "research",
                ("Recherche & Documentation", "البحث والتوثيق"),
                (
                    "Notre programme de recherche documente systématiquement les situations des droits humains et mène des études sur les questions liées aux droits pour informer le plaidoyer et le développement des politiques.",
                    "يوثق برنامج البحث لدينا بشكل منهجي حالات حقوق الإنسان ويجري دراسات حول القضايا المتعلقة بالحقوق لإثراء المناصرة وتطوير السياسات.",
                ),
            )
            .with_image("/images/programs/research.jpg"),
            section(
                "training",
                ("Formation & Éducation", "التدريب والتعليم"),
                (
                    "Nous renforçons les compétences des défenseurs des droits, des organisations de la société civile et du grand public grâce à des ateliers, des formations et des ressources éducatives.",
                    "نقوم بتعزيز مهارات المدافعين عن الحقوق والمنظمات المجتمعية والجمهور العام من خلال ورش العمل والتدريبات والموارد التعليمية.",
                ),
            )
            .with_image("/images/programs/training.jpg"),
            section(
                "advocacy",
                ("Plaidoyer & Campagnes", "المناصرة والحملات"),
                (
                    "Nous défendons des changements systémiques en engageant les décideurs politiques, en sensibilisant le public et en mobilisant des actions collectives pour les droits fondamentaux.",
                    "ندافع عن التغييرات المنهجية من خلال إشراك صناع السياسات ورفع الوعي العام وتعبئة العمل الجماعي للحقوق الأساسية.",
                ),
            )
            .with_image("/images/programs/advocacy.jpg"),
        ],
    )
}

pub(super) fn contact() -> PageContent {
    PageContent::new(
        "contact",
        text("Contactez-nous", "اتصل بنا"),
        vec![
            section(
                "contact_info",
                ("Nos coordonnées", "معلومات الاتصال"),
                (
                    "Pour toute question ou information complémentaire, n'hésitez pas à nous contacter par email, téléphone ou en remplissant le formulaire ci-dessous.",
                    "لأي استفسار أو معلومات إضافية، لا تتردد في التواصل معنا عبر البريد الإلكتروني أو الهاتف أو عن طريق ملء النموذج أدناه.",
                ),
            ),
            section(
                "address",
                ("Adresse", "العنوان"),
                (
                    "123 Avenue de la République\nAlger, Algérie",
                    "123 شارع الجمهورية\nالجزائر، الجزائر",
                ),
            ),
            section(
                "email",
                ("Email", "البريد الإلكتروني"),
                ("contact@fondation-droits.org", "contact@fondation-droits.org"),
            ),
            section(
                "phone",
                ("Téléphone", "الهاتف"),
                ("+213 12 345 6789", "+213 12 345 6789"),
            ),
            section(
                "hours",
                ("Heures d'ouverture", "ساعات العمل"),
                ("Lundi - Vendredi: 9h00 - 17h00", "الاثنين - الجمعة: 9:00 - 17:00"),
            ),
        ],
    )
}

pub(super) fn testimonials() -> PageContent {
    PageContent::new(
        "testimonials",
        text("Témoignages", "الشهادات"),
        vec![
            section(
                "intro",
                ("Témoignages", "الشهادات"),
                (
                    "Découvrez ce que nos bénéficiaires, partenaires et volontaires disent de notre travail",
                    "اكتشف ما يقوله المستفيدون وشركاؤنا ومتطوعونا عن عملنا",
                ),
            ),
            section(
                "header",
                ("Ce qu'ils disent de nous", "ما يقولونه عنا"),
                (
                    "Voici les témoignages de personnes et d'organisations qui ont bénéficié de nos programmes et collaboré avec nous.",
                    "فيما يلي شهادات من الأشخاص والمنظمات التي استفادت من برامجنا وتعاونت معنا.",
                ),
            ),
            section(
                "categories",
                ("Catégories", "الفئات"),
                (
                    "Tous\nBénéficiaires\nPartenaires\nVolontaires\nExperts",
                    "الكل\nالمستفيدون\nالشركاء\nالمتطوعون\nالخبراء",
                ),
            ),
            section(
                "coming_soon",
                ("Témoignages à venir", "شهادات قادمة"),
                (
                    "Nous sommes en train de recueillir des témoignages de nos bénéficiaires, partenaires et volontaires. Revenez bientôt pour découvrir leurs expériences avec notre fondation.",
                    "نحن نجمع الشهادات من المستفيدين وشركائنا ومتطوعينا. عد قريبًا لاكتشاف تجاربهم مع مؤسستنا.",
                ),
            ),
            section(
                "share",
                ("Partagez votre expérience", "شارك تجربتك"),
                (
                    "Avez-vous participé à l'un de nos programmes ou collaboré avec nous ? Nous serions ravis d'entendre votre histoire.",
                    "هل شاركت في أحد برامجنا أو تعاونت معنا؟ يسعدنا سماع قصتك.",
                ),
            ),
            section(
                "form",
                ("Formulaire de témoignage", "نموذج الشهادة"),
                (
                    "Nom complet\nEmail\nOrganisation\nRôle / Fonction\nVotre expérience avec nous\nPartagez votre expérience en détail...\nVotre évaluation\nSoumettre votre témoignage",
                    "الاسم الكامل\nالبريد الإلكتروني\nالمنظمة\nالدور / الوظيفة\nتجربتك معنا\nشارك تجربتك بالتفصيل...\nتقييمك\nإرسال شهادتك",
                ),
            ),
        ],
    )
}

pub(super) fn review() -> PageContent {
    PageContent::new(
        "review",
        text("Revue & Publications", "المراجعة والمنشورات"),
        vec![
            section(
                "intro",
                ("Revue & Publications", "المراجعة والمنشورات"),
                (
                    "Explorez nos analyses et publications sur les droits humains et les enjeux juridiques actuels",
                    "استكشف تحليلاتنا ومنشوراتنا حول حقوق الإنسان والقضايا القانونية الحالية",
                ),
            ),
            section(
                "coming_soon",
                (
                    "Notre première revue arrive en juillet 2025 !",
                    "تصدر مجلتنا الأولى في يوليو 2025!",
                ),
                (
                    "Nous avons le plaisir de vous annoncer que la première édition de notre revue sera publiée en juillet 2025. Cette revue trimestrielle abordera les questions juridiques, les droits humains et les enjeux sociaux actuels.",
                    "يسرنا أن نعلن أن العدد الأول من مجلتنا سيصدر في يوليو 2025. ستتناول هذه المجلة الفصلية القضايا القانونية وحقوق الإنسان والقضايا الاجتماعية الحالية.",
                ),
            ),
            section(
                "contribution",
                ("Vous souhaitez contribuer ?", "هل ترغب في المساهمة؟"),
                (
                    "Nous invitons les chercheurs, juristes, académiciens et experts à contribuer à notre revue. Si vous souhaitez soumettre un article ou partager votre expertise, n'hésitez pas à nous contacter via notre formulaire de contact ou sur nos réseaux sociaux.",
                    "ندعو الباحثين والمحامين والأكاديميين والخبراء للمساهمة في مجلتنا. إذا كنت ترغب في تقديم مقالة أو مشاركة خبرتك، فلا تتردد في الاتصال بنا من خلال نموذج الاتصال الخاص بنا أو على وسائل التواصل الاجتماعي.",
                ),
            ),
            section(
                "recent_publications",
                ("Publications récentes", "المنشورات الحديثة"),
                (
                    "Découvrez l'ensemble de nos ressources documentaires sur les droits humains et les questions juridiques.",
                    "اكتشف جميع مواردنا الوثائقية حول حقوق الإنسان والقضايا القانونية.",
                ),
            ),
            section(
                "media_library",
                ("Médiathèque", "مكتبة الوسائط"),
                (
                    "Explorez notre collection de ressources audiovisuelles sur les droits humains.",
                    "استكشف مجموعتنا من الموارد السمعية البصرية حول حقوق الإنسان.",
                ),
            ),
            section(
                "featured",
                ("Publication à la une", "المنشور المميز"),
                (
                    "Notre rapport annuel présente un aperçu complet de l'état des droits humains en Algérie.\n\nRapport annuel 2023\nMai 2023 | 120 pages\nCe rapport présente un aperçu complet de l'état des droits humains en Algérie en 2023. Il aborde les avancées et défis dans différents domaines, notamment les libertés civiles, les droits économiques et sociaux, et l'accès à la justice.",
                    "يقدم تقريرنا السنوي نظرة شاملة عن حالة حقوق الإنسان في الجزائر.\n\nالتقرير السنوي 2023\nمايو 2023 | 120 صفحة\nيقدم هذا التقرير نظرة شاملة عن حالة حقوق الإنسان في الجزائر في عام 2023. ويتناول التقدم والتحديات في مختلف المجالات، بما في ذلك الحريات المدنية والحقوق الاقتصادية والاجتماعية والوصول إلى العدالة.",
                ),
            ),
        ],
    )
}
