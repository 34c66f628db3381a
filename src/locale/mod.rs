//! Localized term tables.
//!
//! Every supported [`Locale`] has one static [`Terms`] table holding section
//! titles, static labels, translations of enumerated values and the date
//! and list conventions used when composing text.

mod tables;

use crate::model::{Degree, Fluency, Locale, Section, SkillLevel};

/// Section titles in one language.
#[derive(Debug)]
pub struct SectionTitles {
    pub basics: &'static str,
    pub location: &'static str,
    pub profiles: &'static str,
    pub summary: &'static str,
    pub education: &'static str,
    pub work: &'static str,
    pub languages: &'static str,
    pub skills: &'static str,
    pub awards: &'static str,
    pub certificates: &'static str,
    pub publications: &'static str,
    pub references: &'static str,
    pub projects: &'static str,
    pub interests: &'static str,
    pub volunteer: &'static str,
}

/// Static labels printed next to values.
#[derive(Debug)]
pub struct Labels {
    pub keywords: &'static str,
    pub courses: &'static str,
    pub score: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub url: &'static str,
    pub location: &'static str,
    pub profiles: &'static str,
}

/// All localized text for one language.
#[derive(Debug)]
pub struct Terms {
    pub locale: Locale,
    pub sections: SectionTitles,
    pub labels: Labels,
    /// Indexed like `Degree::ALL`
    pub degrees: [&'static str; 7],
    /// Indexed like `Fluency::ALL`
    pub fluencies: [&'static str; 5],
    /// Indexed like `SkillLevel::ALL`
    pub levels: [&'static str; 6],
    /// Abbreviated month names, January first
    pub months: [&'static str; 12],
    /// Separator between joined list items
    pub list_separator: &'static str,
    /// babel language option, `None` for locales typeset with xeCJK
    pub babel: Option<&'static str>,
    /// Value of the HTML `lang` attribute
    pub html_lang: &'static str,
}

impl Terms {
    pub fn section_title(&self, section: Section) -> &'static str {
        let s = &self.sections;
        match section {
            Section::Basics => s.basics,
            Section::Location => s.location,
            Section::Profiles => s.profiles,
            Section::Summary => s.summary,
            Section::Education => s.education,
            Section::Work => s.work,
            Section::Languages => s.languages,
            Section::Skills => s.skills,
            Section::Awards => s.awards,
            Section::Certificates => s.certificates,
            Section::Publications => s.publications,
            Section::References => s.references,
            Section::Projects => s.projects,
            Section::Interests => s.interests,
            Section::Volunteer => s.volunteer,
        }
    }

    pub fn degree(&self, degree: Degree) -> &'static str {
        self.degrees[degree as usize]
    }

    pub fn fluency(&self, fluency: Fluency) -> &'static str {
        self.fluencies[fluency as usize]
    }

    pub fn level(&self, level: SkillLevel) -> &'static str {
        self.levels[level as usize]
    }

    /// Abbreviated name of a 1-based month.
    pub fn month(&self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index).copied()
    }

    /// Format a month and year, e.g. `Mar 2020` or `2020年3月`.
    pub fn month_year(&self, month: u32, year: i32) -> String {
        match self.month(month) {
            Some(name) if self.is_cjk() => format!("{year}年{name}"),
            Some(name) => format!("{name} {year}"),
            None => year.to_string(),
        }
    }

    /// Join items with the list separator.
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(self.list_separator)
    }

    pub fn is_cjk(&self) -> bool {
        self.locale.is_cjk()
    }
}

/// Term table of a locale.
pub fn terms_for(locale: Locale) -> &'static Terms {
    match locale {
        Locale::English => &tables::EN,
        Locale::SimplifiedChinese => &tables::ZH_HANS,
        Locale::TraditionalChineseHongKong => &tables::ZH_HANT_HK,
        Locale::TraditionalChineseTaiwan => &tables::ZH_HANT_TW,
        Locale::Spanish => &tables::ES,
        Locale::French => &tables::FR,
        Locale::Norwegian => &tables::NO,
        Locale::Japanese => &tables::JA,
        Locale::German => &tables::DE,
        Locale::Indonesian => &tables::ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_a_table() {
        for locale in Locale::ALL {
            let terms = terms_for(*locale);
            assert_eq!(terms.locale, *locale);
            assert_eq!(terms.babel.is_none(), locale.is_cjk());
            assert!(!terms.section_title(Section::Work).is_empty());
        }
    }

    #[test]
    fn test_english_terms() {
        let terms = terms_for(Locale::English);
        assert_eq!(terms.section_title(Section::Education), "Education");
        assert_eq!(terms.labels.keywords, "Keywords");
        assert_eq!(terms.degree(Degree::Bachelor), "Bachelor");
        assert_eq!(terms.month_year(3, 2020), "Mar 2020");
        assert_eq!(terms.join(&["Rust", "Go"]), "Rust, Go");
    }

    #[test]
    fn test_translated_terms() {
        let fr = terms_for(Locale::French);
        assert_eq!(fr.section_title(Section::Education), "Formation");
        assert_eq!(fr.level(SkillLevel::Expert), "Expert");

        let zh = terms_for(Locale::SimplifiedChinese);
        assert_eq!(zh.section_title(Section::Work), "工作经历");
        assert_eq!(zh.month_year(3, 2020), "2020年3月");
        assert_eq!(zh.join(&["Rust", "Go"]), "Rust、Go");
        assert_eq!(zh.fluency(Fluency::Native), "母语或双语");
    }

    #[test]
    fn test_month_out_of_range() {
        let terms = terms_for(Locale::German);
        assert_eq!(terms.month(0), None);
        assert_eq!(terms.month(13), None);
        assert_eq!(terms.month_year(13, 2020), "2020");
    }
}
