//! Computed view: render-ready text derived from a resume for one layout.
//!
//! [`ComputedResume::build`] is called once per render. It resolves the
//! layout, picks the term table, merges the section order, formats dates,
//! joins keywords and runs every string through either the summary parser
//! or the escaper. Renderers read nothing else.

mod dates;
mod entries;
mod order;

pub use dates::{date_range, format_date, RANGE_SEPARATOR};
pub use entries::{
    ComputedAward, ComputedBasics, ComputedCertificate, ComputedEducation, ComputedInterest,
    ComputedLanguage, ComputedLocation, ComputedProfile, ComputedProject, ComputedPublication,
    ComputedReference, ComputedSkill, ComputedVolunteer, ComputedWork,
};
pub use order::{merge_order, CORE_SECTIONS, DEFAULT_ORDER};

use std::collections::BTreeMap;

use crate::error::Result;
use crate::locale::{terms_for, Terms};
use crate::markup::{Escaper, SummaryParser};
use crate::model::{Layout, Locale, Location, Resume, Section};

/// Derived, render-ready view of a resume for one layout.
#[derive(Debug, Clone)]
pub struct ComputedResume<'a> {
    pub layout: &'a Layout,
    pub layout_index: usize,
    pub locale: Locale,
    pub terms: &'static Terms,
    /// Body sections to render, merged order, empty ones removed
    pub order: Vec<Section>,
    section_names: BTreeMap<Section, String>,
    pub basics: ComputedBasics,
    pub location: Option<ComputedLocation>,
    pub profiles: Vec<ComputedProfile>,
    pub education: Vec<ComputedEducation>,
    pub work: Vec<ComputedWork>,
    pub languages: Vec<ComputedLanguage>,
    pub skills: Vec<ComputedSkill>,
    pub awards: Vec<ComputedAward>,
    pub certificates: Vec<ComputedCertificate>,
    pub publications: Vec<ComputedPublication>,
    pub references: Vec<ComputedReference>,
    pub projects: Vec<ComputedProject>,
    pub interests: Vec<ComputedInterest>,
    pub volunteer: Vec<ComputedVolunteer>,
}

/// Applies the parser and escaper with the blank-means-absent rule.
struct Text<'t> {
    parser: &'t dyn SummaryParser,
    escaper: &'t dyn Escaper,
    terms: &'static Terms,
}

impl Text<'_> {
    fn plain(&self, text: &str) -> String {
        self.escaper.escape(text.trim())
    }

    fn optional(&self, text: Option<&str>) -> Option<String> {
        non_blank(text).map(|t| self.escaper.escape(t))
    }

    fn url(&self, url: Option<&str>) -> Option<String> {
        non_blank(url).map(|u| self.escaper.escape_url(u))
    }

    fn summary(&self, text: Option<&str>) -> Option<String> {
        non_blank(text)
            .map(|t| self.parser.parse(t))
            .filter(|s| !s.trim().is_empty())
    }

    fn date(&self, date: Option<&str>) -> Option<String> {
        non_blank(date).map(|d| self.plain(&format_date(d, self.terms)))
    }

    fn range(&self, start: &str, end: Option<&str>) -> String {
        self.plain(&date_range(start, end, self.terms))
    }

    fn list(&self, items: &[String]) -> Option<String> {
        let escaped: Vec<String> = items
            .iter()
            .filter_map(|i| self.optional(Some(i.as_str())))
            .collect();
        if escaped.is_empty() {
            None
        } else {
            Some(self.terms.join(&escaped))
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Join the non-empty location parts with `", "`.
pub fn full_address(location: &Location) -> String {
    [
        location.address.as_deref(),
        Some(location.city.as_str()),
        location.region.as_deref(),
        location.country.as_deref(),
        location.postal_code.as_deref(),
    ]
    .into_iter()
    .filter_map(non_blank)
    .collect::<Vec<_>>()
    .join(", ")
}

impl<'a> ComputedResume<'a> {
    /// Build the view for one layout of a resume.
    ///
    /// Fails only when `layout_index` is out of range.
    pub fn build(
        resume: &'a Resume,
        layout_index: usize,
        parser: &dyn SummaryParser,
        escaper: &dyn Escaper,
    ) -> Result<Self> {
        let layout = resume.layout(layout_index)?;
        let locale = layout.locale();
        let terms = terms_for(locale);
        let text = Text {
            parser,
            escaper,
            terms,
        };
        let content = &resume.content;
        log::debug!(
            "computing view for layout {layout_index} ({}, {locale})",
            layout.engine
        );

        let basics = ComputedBasics {
            name: text.plain(&content.basics.name),
            headline: text.optional(content.basics.headline.as_deref()),
            email: text.optional(content.basics.email.as_deref()),
            phone: text.optional(content.basics.phone.as_deref()),
            url: text.url(content.basics.url.as_deref()),
            summary: text.summary(content.basics.summary.as_deref()),
        };

        let location = content
            .location
            .as_ref()
            .filter(|l| !l.is_empty())
            .map(|l| ComputedLocation {
                address: text.optional(l.address.as_deref()),
                city: text.optional(Some(l.city.as_str())),
                region: text.optional(l.region.as_deref()),
                country: text.optional(l.country.as_deref()),
                postal_code: text.optional(l.postal_code.as_deref()),
                full_address: text.plain(&full_address(l)),
            });

        let profiles = content
            .profiles
            .iter()
            .map(|p| ComputedProfile {
                network: text.plain(p.network.as_str()),
                username: text.plain(&p.username),
                url: text.url(p.url.as_deref()),
            })
            .collect();

        let education = content
            .education
            .iter()
            .map(|e| ComputedEducation {
                institution: text.plain(&e.institution),
                area: text.plain(&e.area),
                degree: text.plain(terms.degree(e.degree)),
                date_range: text.range(&e.start_date, e.end_date.as_deref()),
                url: text.url(e.url.as_deref()),
                score: text.optional(e.score.as_deref()),
                courses: text.list(&e.courses),
                summary: text.summary(e.summary.as_deref()),
            })
            .collect();

        let work = content
            .work
            .iter()
            .map(|w| ComputedWork {
                name: text.plain(&w.name),
                position: text.plain(&w.position),
                date_range: text.range(&w.start_date, w.end_date.as_deref()),
                url: text.url(w.url.as_deref()),
                keywords: text.list(&w.keywords),
                summary: text.summary(Some(w.summary.as_str())),
            })
            .collect();

        let languages = content
            .languages
            .iter()
            .map(|l| ComputedLanguage {
                language: text.plain(&l.language),
                fluency: text.plain(terms.fluency(l.fluency)),
                keywords: text.list(&l.keywords),
            })
            .collect();

        let skills = content
            .skills
            .iter()
            .map(|s| ComputedSkill {
                name: text.plain(&s.name),
                level: text.plain(terms.level(s.level)),
                keywords: text.list(&s.keywords),
            })
            .collect();

        let awards = content
            .awards
            .iter()
            .map(|a| ComputedAward {
                title: text.plain(&a.title),
                awarder: text.plain(&a.awarder),
                date: text.date(a.date.as_deref()),
                summary: text.summary(a.summary.as_deref()),
            })
            .collect();

        let certificates = content
            .certificates
            .iter()
            .map(|c| ComputedCertificate {
                name: text.plain(&c.name),
                issuer: text.plain(&c.issuer),
                date: text.date(c.date.as_deref()),
                url: text.url(c.url.as_deref()),
            })
            .collect();

        let publications = content
            .publications
            .iter()
            .map(|p| ComputedPublication {
                name: text.plain(&p.name),
                publisher: text.plain(&p.publisher),
                release_date: text.date(p.release_date.as_deref()),
                url: text.url(p.url.as_deref()),
                summary: text.summary(p.summary.as_deref()),
            })
            .collect();

        let references = content
            .references
            .iter()
            .map(|r| ComputedReference {
                name: text.plain(&r.name),
                relationship: text.optional(r.relationship.as_deref()),
                email: text.optional(r.email.as_deref()),
                phone: text.optional(r.phone.as_deref()),
                summary: text.summary(Some(r.summary.as_str())),
            })
            .collect();

        let projects = content
            .projects
            .iter()
            .map(|p| ComputedProject {
                name: text.plain(&p.name),
                description: text.optional(p.description.as_deref()),
                date_range: text.range(&p.start_date, p.end_date.as_deref()),
                url: text.url(p.url.as_deref()),
                keywords: text.list(&p.keywords),
                summary: text.summary(p.summary.as_deref()),
            })
            .collect();

        let interests = content
            .interests
            .iter()
            .map(|i| ComputedInterest {
                name: text.plain(&i.name),
                keywords: text.list(&i.keywords),
            })
            .collect();

        let volunteer = content
            .volunteer
            .iter()
            .map(|v| ComputedVolunteer {
                organization: text.plain(&v.organization),
                position: text.plain(&v.position),
                date_range: text.range(&v.start_date, v.end_date.as_deref()),
                url: text.url(v.url.as_deref()),
                summary: text.summary(Some(v.summary.as_str())),
            })
            .collect();

        let section_names = Section::ALL
            .iter()
            .map(|section| {
                let name = layout
                    .sections
                    .aliases
                    .get(section)
                    .map(String::as_str)
                    .and_then(|alias| non_blank(Some(alias)))
                    .unwrap_or_else(|| terms.section_title(*section));
                (*section, text.plain(name))
            })
            .collect();

        let mut computed = Self {
            layout,
            layout_index,
            locale,
            terms,
            order: Vec::new(),
            section_names,
            basics,
            location,
            profiles,
            education,
            work,
            languages,
            skills,
            awards,
            certificates,
            publications,
            references,
            projects,
            interests,
            volunteer,
        };
        let order = merge_order(&layout.sections.order, |s| computed.has_section(s));
        computed.order = order;
        Ok(computed)
    }

    /// Localized, alias-aware title of a section.
    pub fn section_name(&self, section: Section) -> &str {
        self.section_names
            .get(&section)
            .map(String::as_str)
            .unwrap_or_else(|| self.terms.section_title(section))
    }

    /// Whether a section has anything to render.
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Basics => true,
            Section::Location => self.location.is_some(),
            Section::Profiles => !self.profiles.is_empty(),
            Section::Summary => self.basics.summary.is_some(),
            Section::Education => !self.education.is_empty(),
            Section::Work => !self.work.is_empty(),
            Section::Languages => !self.languages.is_empty(),
            Section::Skills => !self.skills.is_empty(),
            Section::Awards => !self.awards.is_empty(),
            Section::Certificates => !self.certificates.is_empty(),
            Section::Publications => !self.publications.is_empty(),
            Section::References => !self.references.is_empty(),
            Section::Projects => !self.projects.is_empty(),
            Section::Interests => !self.interests.is_empty(),
            Section::Volunteer => !self.volunteer.is_empty(),
        }
    }

    /// Every section to render: header sections, then the ordered body.
    pub fn sections(&self) -> Vec<Section> {
        CORE_SECTIONS
            .iter()
            .copied()
            .filter(|s| self.has_section(*s))
            .chain(self.order.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{HtmlEscaper, IdentityEscaper, MarkdownSummary};
    use crate::model::{Content, Degree, Education, Engine, Work};
    use crate::Error;

    fn education() -> Education {
        Education {
            institution: "University of London".into(),
            area: "Mathematics".into(),
            degree: Degree::Bachelor,
            start_date: "1832".into(),
            end_date: Some("1835-06".into()),
            url: None,
            score: None,
            courses: vec!["Analysis".into(), "Logic".into()],
            summary: None,
        }
    }

    fn work() -> Work {
        Work {
            name: "Analytical Engine Co".into(),
            position: "Programmer".into(),
            start_date: "1842-10".into(),
            end_date: None,
            url: None,
            keywords: vec!["Bernoulli".into(), "Notes".into()],
            summary: "Wrote the first published algorithm.".into(),
        }
    }

    fn resume(layout: Layout) -> Resume {
        let mut content = Content::default();
        content.basics.name = "Ada Lovelace".into();
        content.education.push(education());
        content.work.push(work());
        Resume::new(content, vec![layout])
    }

    #[test]
    fn test_build_formats_fields() {
        let resume = resume(Layout::new(Engine::Markdown));
        let view = ComputedResume::build(
            &resume,
            0,
            &MarkdownSummary::markdown(),
            &IdentityEscaper,
        )
        .unwrap();

        assert_eq!(view.education[0].date_range, "1832 – Jun 1835");
        assert_eq!(view.education[0].courses.as_deref(), Some("Analysis, Logic"));
        assert_eq!(view.work[0].date_range, "Oct 1842");
        assert_eq!(view.work[0].keywords.as_deref(), Some("Bernoulli, Notes"));
        assert_eq!(view.section_name(Section::Work), "Work");
        assert_eq!(view.order, vec![Section::Education, Section::Work]);
        assert_eq!(
            view.sections(),
            vec![Section::Basics, Section::Education, Section::Work]
        );
    }

    #[test]
    fn test_layout_out_of_range() {
        let resume = resume(Layout::default());
        let err = ComputedResume::build(&resume, 3, &MarkdownSummary::markdown(), &IdentityEscaper)
            .unwrap_err();
        assert!(matches!(err, Error::LayoutOutOfRange(3, 1)));
    }

    #[test]
    fn test_custom_order_and_alias() {
        let layout = Layout::new(Engine::Html)
            .with_order(vec![Section::Work])
            .with_alias(Section::Work, "Experience & Jobs");
        let resume = resume(layout);
        let view =
            ComputedResume::build(&resume, 0, &MarkdownSummary::html(), &HtmlEscaper).unwrap();
        assert_eq!(view.order, vec![Section::Work, Section::Education]);
        assert_eq!(view.section_name(Section::Work), "Experience &amp; Jobs");
    }

    #[test]
    fn test_summary_parsed_not_escaped() {
        let mut resume = resume(Layout::new(Engine::Html));
        resume.content.basics.summary = Some("Mathematician & **writer**.".into());
        let view =
            ComputedResume::build(&resume, 0, &MarkdownSummary::html(), &HtmlEscaper).unwrap();
        assert_eq!(
            view.basics.summary.as_deref(),
            Some("<p>Mathematician &amp; <strong>writer</strong>.</p>")
        );
        assert!(view.has_section(Section::Summary));
    }

    #[test]
    fn test_localized_terms() {
        let resume = resume(Layout::new(Engine::Markdown).with_locale(Locale::French));
        let view = ComputedResume::build(
            &resume,
            0,
            &MarkdownSummary::markdown(),
            &IdentityEscaper,
        )
        .unwrap();
        assert_eq!(view.education[0].degree, "Licence");
        assert_eq!(view.section_name(Section::Education), "Formation");
        assert_eq!(view.education[0].date_range, "1832 – juin 1835");
    }

    #[test]
    fn test_full_address() {
        let location = Location {
            address: Some("12 St James's Square".into()),
            city: "London".into(),
            region: Some("  ".into()),
            country: Some("United Kingdom".into()),
            postal_code: None,
        };
        assert_eq!(
            full_address(&location),
            "12 St James's Square, London, United Kingdom"
        );
    }

    #[test]
    fn test_blank_location_is_absent() {
        let mut resume = resume(Layout::default());
        resume.content.location = Some(Location::default());
        let view = ComputedResume::build(
            &resume,
            0,
            &MarkdownSummary::latex(),
            &crate::markup::LatexEscaper,
        )
        .unwrap();
        assert!(view.location.is_none());
        assert!(!view.has_section(Section::Location));
    }
}
