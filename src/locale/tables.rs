//! Term tables, one static per locale.

use super::{Labels, SectionTitles, Terms};
use crate::model::Locale;

const NUMERIC_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

pub static EN: Terms = Terms {
    locale: Locale::English,
    sections: SectionTitles {
        basics: "Basics",
        location: "Location",
        profiles: "Profiles",
        summary: "Summary",
        education: "Education",
        work: "Work",
        languages: "Languages",
        skills: "Skills",
        awards: "Awards",
        certificates: "Certificates",
        publications: "Publications",
        references: "References",
        projects: "Projects",
        interests: "Interests",
        volunteer: "Volunteer",
    },
    labels: Labels {
        keywords: "Keywords",
        courses: "Courses",
        score: "Score",
        email: "Email",
        phone: "Phone",
        url: "URL",
        location: "Location",
        profiles: "Profiles",
    },
    degrees: [
        "Middle School",
        "High School",
        "Diploma",
        "Associate",
        "Bachelor",
        "Master",
        "Doctor",
    ],
    fluencies: [
        "Elementary Proficiency",
        "Limited Working Proficiency",
        "Minimum Professional Proficiency",
        "Full Professional Proficiency",
        "Native or Bilingual Proficiency",
    ],
    levels: ["Novice", "Beginner", "Intermediate", "Advanced", "Expert", "Master"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    list_separator: ", ",
    babel: Some("english"),
    html_lang: "en",
};

pub static ZH_HANS: Terms = Terms {
    locale: Locale::SimplifiedChinese,
    sections: SectionTitles {
        basics: "基本信息",
        location: "所在地",
        profiles: "社交账号",
        summary: "个人简介",
        education: "教育经历",
        work: "工作经历",
        languages: "语言能力",
        skills: "专业技能",
        awards: "所获奖项",
        certificates: "资格证书",
        publications: "出版作品",
        references: "推荐人",
        projects: "项目经历",
        interests: "兴趣爱好",
        volunteer: "志愿经历",
    },
    labels: Labels {
        keywords: "关键词",
        courses: "课程",
        score: "成绩",
        email: "邮箱",
        phone: "电话",
        url: "网址",
        location: "所在地",
        profiles: "社交账号",
    },
    degrees: ["初中", "高中", "文凭", "大专", "学士", "硕士", "博士"],
    fluencies: [
        "初级水平",
        "有限工作水平",
        "基本专业水平",
        "完全专业水平",
        "母语或双语",
    ],
    levels: ["入门", "初级", "中级", "高级", "专家", "大师"],
    months: NUMERIC_MONTHS,
    list_separator: "、",
    babel: None,
    html_lang: "zh-Hans",
};

pub static ZH_HANT_HK: Terms = Terms {
    locale: Locale::TraditionalChineseHongKong,
    sections: SectionTitles {
        basics: "基本資料",
        location: "所在地",
        profiles: "社交帳號",
        summary: "個人簡介",
        education: "教育經歷",
        work: "工作經驗",
        languages: "語言能力",
        skills: "專業技能",
        awards: "所獲獎項",
        certificates: "專業證書",
        publications: "出版作品",
        references: "推薦人",
        projects: "項目經驗",
        interests: "興趣愛好",
        volunteer: "義工經驗",
    },
    labels: Labels {
        keywords: "關鍵詞",
        courses: "課程",
        score: "成績",
        email: "電郵",
        phone: "電話",
        url: "網址",
        location: "所在地",
        profiles: "社交帳號",
    },
    degrees: ["初中", "高中", "文憑", "副學士", "學士", "碩士", "博士"],
    fluencies: [
        "初級水平",
        "有限工作水平",
        "基本專業水平",
        "完全專業水平",
        "母語或雙語",
    ],
    levels: ["入門", "初級", "中級", "高級", "專家", "大師"],
    months: NUMERIC_MONTHS,
    list_separator: "、",
    babel: None,
    html_lang: "zh-Hant-HK",
};

pub static ZH_HANT_TW: Terms = Terms {
    locale: Locale::TraditionalChineseTaiwan,
    sections: SectionTitles {
        basics: "基本資料",
        location: "所在地",
        profiles: "社群帳號",
        summary: "個人簡介",
        education: "學歷",
        work: "工作經歷",
        languages: "語言能力",
        skills: "專業技能",
        awards: "獲獎紀錄",
        certificates: "專業證照",
        publications: "出版著作",
        references: "推薦人",
        projects: "專案經歷",
        interests: "興趣",
        volunteer: "志工經歷",
    },
    labels: Labels {
        keywords: "關鍵字",
        courses: "修習課程",
        score: "成績",
        email: "電子郵件",
        phone: "電話",
        url: "網址",
        location: "所在地",
        profiles: "社群帳號",
    },
    degrees: ["國中", "高中", "文憑", "副學士", "學士", "碩士", "博士"],
    fluencies: [
        "初級程度",
        "有限工作程度",
        "基本專業程度",
        "完全專業程度",
        "母語或雙語",
    ],
    levels: ["入門", "初學", "中等", "進階", "專家", "大師"],
    months: NUMERIC_MONTHS,
    list_separator: "、",
    babel: None,
    html_lang: "zh-Hant-TW",
};

pub static ES: Terms = Terms {
    locale: Locale::Spanish,
    sections: SectionTitles {
        basics: "Datos básicos",
        location: "Ubicación",
        profiles: "Perfiles",
        summary: "Resumen",
        education: "Educación",
        work: "Experiencia laboral",
        languages: "Idiomas",
        skills: "Habilidades",
        awards: "Premios",
        certificates: "Certificados",
        publications: "Publicaciones",
        references: "Referencias",
        projects: "Proyectos",
        interests: "Intereses",
        volunteer: "Voluntariado",
    },
    labels: Labels {
        keywords: "Palabras clave",
        courses: "Cursos",
        score: "Calificación",
        email: "Correo",
        phone: "Teléfono",
        url: "URL",
        location: "Ubicación",
        profiles: "Perfiles",
    },
    degrees: [
        "Educación secundaria",
        "Bachillerato",
        "Diploma",
        "Técnico superior",
        "Grado",
        "Máster",
        "Doctorado",
    ],
    fluencies: [
        "Competencia elemental",
        "Competencia profesional limitada",
        "Competencia profesional mínima",
        "Competencia profesional completa",
        "Nativo o bilingüe",
    ],
    levels: ["Novato", "Principiante", "Intermedio", "Avanzado", "Experto", "Maestro"],
    months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    list_separator: ", ",
    babel: Some("spanish"),
    html_lang: "es",
};

pub static FR: Terms = Terms {
    locale: Locale::French,
    sections: SectionTitles {
        basics: "Informations de base",
        location: "Adresse",
        profiles: "Profils",
        summary: "Résumé",
        education: "Formation",
        work: "Expérience professionnelle",
        languages: "Langues",
        skills: "Compétences",
        awards: "Prix",
        certificates: "Certifications",
        publications: "Publications",
        references: "Références",
        projects: "Projets",
        interests: "Centres d'intérêt",
        volunteer: "Bénévolat",
    },
    labels: Labels {
        keywords: "Mots-clés",
        courses: "Cours",
        score: "Note",
        email: "E-mail",
        phone: "Téléphone",
        url: "URL",
        location: "Adresse",
        profiles: "Profils",
    },
    degrees: [
        "Collège",
        "Lycée",
        "Diplôme",
        "DUT",
        "Licence",
        "Master",
        "Doctorat",
    ],
    fluencies: [
        "Compétence élémentaire",
        "Compétence professionnelle limitée",
        "Compétence professionnelle minimale",
        "Compétence professionnelle complète",
        "Langue maternelle ou bilingue",
    ],
    levels: ["Novice", "Débutant", "Intermédiaire", "Avancé", "Expert", "Maître"],
    months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    list_separator: ", ",
    babel: Some("french"),
    html_lang: "fr",
};

pub static NO: Terms = Terms {
    locale: Locale::Norwegian,
    sections: SectionTitles {
        basics: "Grunnleggende",
        location: "Adresse",
        profiles: "Profiler",
        summary: "Sammendrag",
        education: "Utdanning",
        work: "Arbeidserfaring",
        languages: "Språk",
        skills: "Ferdigheter",
        awards: "Priser",
        certificates: "Sertifikater",
        publications: "Publikasjoner",
        references: "Referanser",
        projects: "Prosjekter",
        interests: "Interesser",
        volunteer: "Frivillig arbeid",
    },
    labels: Labels {
        keywords: "Nøkkelord",
        courses: "Emner",
        score: "Karakter",
        email: "E-post",
        phone: "Telefon",
        url: "URL",
        location: "Adresse",
        profiles: "Profiler",
    },
    degrees: [
        "Ungdomsskole",
        "Videregående skole",
        "Diplom",
        "Fagskole",
        "Bachelor",
        "Master",
        "Doktorgrad",
    ],
    fluencies: [
        "Grunnleggende ferdigheter",
        "Begrensede arbeidsferdigheter",
        "Minimale profesjonelle ferdigheter",
        "Fulle profesjonelle ferdigheter",
        "Morsmål eller tospråklig",
    ],
    levels: ["Nybegynner", "Begynner", "Middels", "Avansert", "Ekspert", "Mester"],
    months: [
        "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "des",
    ],
    list_separator: ", ",
    babel: Some("norsk"),
    html_lang: "no",
};

pub static JA: Terms = Terms {
    locale: Locale::Japanese,
    sections: SectionTitles {
        basics: "基本情報",
        location: "所在地",
        profiles: "プロフィール",
        summary: "概要",
        education: "学歴",
        work: "職歴",
        languages: "語学",
        skills: "スキル",
        awards: "受賞歴",
        certificates: "資格",
        publications: "出版物",
        references: "推薦者",
        projects: "プロジェクト",
        interests: "趣味",
        volunteer: "ボランティア",
    },
    labels: Labels {
        keywords: "キーワード",
        courses: "履修科目",
        score: "成績",
        email: "メール",
        phone: "電話",
        url: "URL",
        location: "所在地",
        profiles: "プロフィール",
    },
    degrees: ["中学校", "高等学校", "ディプロマ", "準学士", "学士", "修士", "博士"],
    fluencies: [
        "初級",
        "限定的な業務レベル",
        "基本的な業務レベル",
        "完全な業務レベル",
        "ネイティブ・バイリンガル",
    ],
    levels: ["初心者", "入門", "中級", "上級", "エキスパート", "マスター"],
    months: NUMERIC_MONTHS,
    list_separator: "、",
    babel: None,
    html_lang: "ja",
};

pub static DE: Terms = Terms {
    locale: Locale::German,
    sections: SectionTitles {
        basics: "Basisdaten",
        location: "Anschrift",
        profiles: "Profile",
        summary: "Zusammenfassung",
        education: "Ausbildung",
        work: "Berufserfahrung",
        languages: "Sprachen",
        skills: "Fähigkeiten",
        awards: "Auszeichnungen",
        certificates: "Zertifikate",
        publications: "Publikationen",
        references: "Referenzen",
        projects: "Projekte",
        interests: "Interessen",
        volunteer: "Ehrenamt",
    },
    labels: Labels {
        keywords: "Schlüsselwörter",
        courses: "Kurse",
        score: "Note",
        email: "E-Mail",
        phone: "Telefon",
        url: "URL",
        location: "Anschrift",
        profiles: "Profile",
    },
    degrees: [
        "Mittelschule",
        "Abitur",
        "Diplom",
        "Associate",
        "Bachelor",
        "Master",
        "Doktor",
    ],
    fluencies: [
        "Grundkenntnisse",
        "Eingeschränkte Berufskenntnisse",
        "Grundlegende Berufskenntnisse",
        "Volle Berufskenntnisse",
        "Muttersprache oder zweisprachig",
    ],
    levels: ["Neuling", "Anfänger", "Fortgeschritten", "Erfahren", "Experte", "Meister"],
    months: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    list_separator: ", ",
    babel: Some("ngerman"),
    html_lang: "de",
};

pub static ID: Terms = Terms {
    locale: Locale::Indonesian,
    sections: SectionTitles {
        basics: "Data Dasar",
        location: "Lokasi",
        profiles: "Profil",
        summary: "Ringkasan",
        education: "Pendidikan",
        work: "Pengalaman Kerja",
        languages: "Bahasa",
        skills: "Keahlian",
        awards: "Penghargaan",
        certificates: "Sertifikat",
        publications: "Publikasi",
        references: "Referensi",
        projects: "Proyek",
        interests: "Minat",
        volunteer: "Relawan",
    },
    labels: Labels {
        keywords: "Kata Kunci",
        courses: "Mata Kuliah",
        score: "Nilai",
        email: "Email",
        phone: "Telepon",
        url: "URL",
        location: "Lokasi",
        profiles: "Profil",
    },
    degrees: ["SMP", "SMA", "Diploma", "Ahli Madya", "Sarjana", "Magister", "Doktor"],
    fluencies: [
        "Kemahiran Dasar",
        "Kemahiran Kerja Terbatas",
        "Kemahiran Profesional Minimum",
        "Kemahiran Profesional Penuh",
        "Penutur Asli atau Dwibahasa",
    ],
    levels: ["Pemula", "Awal", "Menengah", "Mahir", "Ahli", "Master"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
    ],
    list_separator: ", ",
    babel: Some("bahasai"),
    html_lang: "id",
};
