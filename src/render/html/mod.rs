//! HTML rendering.
//!
//! Produces a standalone document with the stylesheet of the selected
//! template inlined into the head. Every block element is emitted on its
//! own line so [`pretty_print`] can indent the result.

mod css;
mod pretty;

pub use pretty::pretty_print;

use crate::compute::ComputedResume;
use crate::error::{Error, Result};
use crate::model::{Section, Template};

use super::{join_blocks, Renderer};

const EMAIL_ICON: &str = "\u{2709}";
const PHONE_ICON: &str = "\u{260E}";
const URL_ICON: &str = "\u{1F517}";
const LOCATION_ICON: &str = "\u{1F4CD}";
const PROFILE_ICON: &str = "\u{1F464}";

/// HTML visual template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTemplate {
    #[default]
    Calm,
    Minimal,
}

impl HtmlTemplate {
    pub fn from_template(template: Template) -> Result<Self> {
        match template {
            Template::Calm => Ok(HtmlTemplate::Calm),
            Template::Minimal => Ok(HtmlTemplate::Minimal),
            other => Err(Error::UnsupportedTemplate {
                engine: "html".to_string(),
                template: other.to_string(),
            }),
        }
    }

    /// Class set on `<body>`.
    pub fn class_name(&self) -> &'static str {
        match self {
            HtmlTemplate::Calm => "template-calm",
            HtmlTemplate::Minimal => "template-minimal",
        }
    }

    pub fn stylesheet(&self) -> &'static str {
        css::stylesheet(*self)
    }
}

fn link(text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!("<a href=\"{url}\">{text}</a>"),
        None => text.to_string(),
    }
}

/// One entry of a section.
#[derive(Default)]
struct Entry<'e> {
    title: &'e str,
    url: Option<&'e str>,
    date: Option<&'e str>,
    subtitle: Option<&'e str>,
    /// Ready-made HTML blocks below the header
    details: Vec<String>,
}

impl Entry<'_> {
    fn render(&self) -> String {
        let mut lines = vec![
            "<div class=\"entry\">".to_string(),
            "<div class=\"entry-header\">".to_string(),
            format!("<h3>{}</h3>", link(self.title, self.url)),
        ];
        if let Some(date) = self.date {
            lines.push(format!("<span class=\"date\">{date}</span>"));
        }
        lines.push("</div>".to_string());
        if let Some(subtitle) = self.subtitle {
            lines.push(format!("<p class=\"subtitle\">{subtitle}</p>"));
        }
        lines.extend(self.details.iter().cloned());
        lines.push("</div>".to_string());
        lines.join("\n")
    }
}

/// HTML renderer producing a complete document.
pub struct HtmlRenderer<'a> {
    view: ComputedResume<'a>,
    template: HtmlTemplate,
    pretty: bool,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(view: ComputedResume<'a>, template: HtmlTemplate) -> Self {
        Self {
            view,
            template,
            pretty: true,
        }
    }

    /// Enable or disable indentation of the output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn template(&self) -> HtmlTemplate {
        self.template
    }

    fn icon(&self, symbol: &str) -> String {
        if self.view.layout.show_icons() {
            format!("<span class=\"icon\" aria-hidden=\"true\">{symbol}</span>")
        } else {
            String::new()
        }
    }

    fn section(&self, section: Section, entries: Vec<String>) -> String {
        if entries.is_empty() {
            return String::new();
        }
        format!(
            "<section class=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
            section,
            self.view.section_name(section),
            entries.join("\n")
        )
    }

    fn meta(&self, label: &str, value: Option<&str>) -> Option<String> {
        value.map(|v| format!("<p class=\"meta\"><strong>{label}:</strong> {v}</p>"))
    }

    fn footer(&self) -> String {
        format!(
            "<footer>\n<p>{}</p>\n</footer>",
            self.view.basics.name
        )
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn view(&self) -> &ComputedResume<'_> {
        &self.view
    }

    fn render_preamble(&self) -> String {
        let name = &self.view.basics.name;
        let description = match &self.view.basics.headline {
            Some(headline) => format!("{name}, {headline}"),
            None => name.clone(),
        };
        [
            "<head>".to_string(),
            "<meta charset=\"utf-8\">".to_string(),
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
            format!("<meta name=\"description\" content=\"{description}\">"),
            format!("<meta name=\"author\" content=\"{name}\">"),
            format!(
                "<meta name=\"generator\" content=\"resumark {}\">",
                env!("CARGO_PKG_VERSION")
            ),
            format!("<title>{name}</title>"),
            "<style>".to_string(),
            self.template.stylesheet().to_string(),
            "</style>".to_string(),
            "</head>".to_string(),
        ]
        .join("\n")
    }

    fn render_basics(&self) -> String {
        let basics = &self.view.basics;
        let mut lines = vec![format!("<h1>{}</h1>", basics.name)];
        if let Some(headline) = &basics.headline {
            lines.push(format!("<p class=\"headline\">{headline}</p>"));
        }

        let mut contact = Vec::new();
        if let Some(email) = &basics.email {
            contact.push(format!(
                "<li>{}<a href=\"mailto:{email}\">{email}</a></li>",
                self.icon(EMAIL_ICON)
            ));
        }
        if let Some(phone) = &basics.phone {
            contact.push(format!(
                "<li>{}<a href=\"tel:{}\">{phone}</a></li>",
                self.icon(PHONE_ICON),
                phone.replace(' ', "")
            ));
        }
        if let Some(url) = &basics.url {
            contact.push(format!(
                "<li>{}<a href=\"{url}\">{url}</a></li>",
                self.icon(URL_ICON)
            ));
        }
        if !contact.is_empty() {
            lines.push("<ul class=\"contact\">".to_string());
            lines.extend(contact);
            lines.push("</ul>".to_string());
        }
        lines.join("\n")
    }

    fn render_summary(&self) -> String {
        match &self.view.basics.summary {
            Some(summary) => format!(
                "<section class=\"summary\">\n<h2>{}</h2>\n{summary}\n</section>",
                self.view.section_name(Section::Summary)
            ),
            None => String::new(),
        }
    }

    fn render_location(&self) -> String {
        match &self.view.location {
            Some(location) => format!(
                "<p class=\"location\">{}{}</p>",
                self.icon(LOCATION_ICON),
                location.full_address
            ),
            None => String::new(),
        }
    }

    fn render_profiles(&self) -> String {
        if self.view.profiles.is_empty() {
            return String::new();
        }
        let mut lines = vec!["<ul class=\"profiles\">".to_string()];
        for profile in &self.view.profiles {
            lines.push(format!(
                "<li>{}{}: {}</li>",
                self.icon(PROFILE_ICON),
                profile.network,
                link(&profile.username, profile.url.as_deref())
            ));
        }
        lines.push("</ul>".to_string());
        lines.join("\n")
    }

    fn render_education(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .education
            .iter()
            .map(|e| {
                let subtitle = format!("{}, {}", e.degree, e.area);
                Entry {
                    title: &e.institution,
                    url: e.url.as_deref(),
                    date: Some(e.date_range.as_str()),
                    subtitle: Some(subtitle.as_str()),
                    details: [
                        self.meta(labels.score, e.score.as_deref()),
                        self.meta(labels.courses, e.courses.as_deref()),
                        e.summary.clone(),
                    ]
                    .into_iter()
                    .flatten()
                    .collect(),
                }
                .render()
            })
            .collect();
        self.section(Section::Education, entries)
    }

    fn render_work(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .work
            .iter()
            .map(|w| {
                Entry {
                    title: &w.name,
                    url: w.url.as_deref(),
                    date: Some(w.date_range.as_str()),
                    subtitle: Some(w.position.as_str()),
                    details: [
                        w.summary.clone(),
                        self.meta(labels.keywords, w.keywords.as_deref()),
                    ]
                    .into_iter()
                    .flatten()
                    .collect(),
                }
                .render()
            })
            .collect();
        self.section(Section::Work, entries)
    }

    fn render_languages(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .languages
            .iter()
            .map(|l| {
                Entry {
                    title: &l.language,
                    subtitle: Some(l.fluency.as_str()),
                    details: self
                        .meta(labels.keywords, l.keywords.as_deref())
                        .into_iter()
                        .collect(),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::Languages, entries)
    }

    fn render_skills(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .skills
            .iter()
            .map(|s| {
                Entry {
                    title: &s.name,
                    subtitle: Some(s.level.as_str()),
                    details: self
                        .meta(labels.keywords, s.keywords.as_deref())
                        .into_iter()
                        .collect(),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::Skills, entries)
    }

    fn render_awards(&self) -> String {
        let entries = self
            .view
            .awards
            .iter()
            .map(|a| {
                Entry {
                    title: &a.title,
                    date: a.date.as_deref(),
                    subtitle: Some(a.awarder.as_str()),
                    details: a.summary.iter().cloned().collect(),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::Awards, entries)
    }

    fn render_certificates(&self) -> String {
        let entries = self
            .view
            .certificates
            .iter()
            .map(|c| {
                Entry {
                    title: &c.name,
                    url: c.url.as_deref(),
                    date: c.date.as_deref(),
                    subtitle: Some(c.issuer.as_str()),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::Certificates, entries)
    }

    fn render_publications(&self) -> String {
        let entries = self
            .view
            .publications
            .iter()
            .map(|p| {
                Entry {
                    title: &p.name,
                    url: p.url.as_deref(),
                    date: p.release_date.as_deref(),
                    subtitle: Some(p.publisher.as_str()),
                    details: p.summary.iter().cloned().collect(),
                }
                .render()
            })
            .collect();
        self.section(Section::Publications, entries)
    }

    fn render_references(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .references
            .iter()
            .map(|r| {
                Entry {
                    title: &r.name,
                    subtitle: r.relationship.as_deref(),
                    details: [
                        r.summary.clone(),
                        self.meta(labels.email, r.email.as_deref()),
                        self.meta(labels.phone, r.phone.as_deref()),
                    ]
                    .into_iter()
                    .flatten()
                    .collect(),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::References, entries)
    }

    fn render_projects(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .projects
            .iter()
            .map(|p| {
                Entry {
                    title: &p.name,
                    url: p.url.as_deref(),
                    date: Some(p.date_range.as_str()),
                    subtitle: p.description.as_deref(),
                    details: [
                        p.summary.clone(),
                        self.meta(labels.keywords, p.keywords.as_deref()),
                    ]
                    .into_iter()
                    .flatten()
                    .collect(),
                }
                .render()
            })
            .collect();
        self.section(Section::Projects, entries)
    }

    fn render_interests(&self) -> String {
        let entries = self
            .view
            .interests
            .iter()
            .map(|i| {
                Entry {
                    title: &i.name,
                    subtitle: i.keywords.as_deref(),
                    ..Default::default()
                }
                .render()
            })
            .collect();
        self.section(Section::Interests, entries)
    }

    fn render_volunteer(&self) -> String {
        let entries = self
            .view
            .volunteer
            .iter()
            .map(|v| {
                Entry {
                    title: &v.organization,
                    url: v.url.as_deref(),
                    date: Some(v.date_range.as_str()),
                    subtitle: Some(v.position.as_str()),
                    details: v.summary.iter().cloned().collect(),
                }
                .render()
            })
            .collect();
        self.section(Section::Volunteer, entries)
    }

    fn render(&self) -> String {
        let header = join_blocks([
            self.render_basics(),
            self.render_location(),
            self.render_profiles(),
        ]);
        let main = join_blocks([self.render_summary(), self.render_ordered_sections()]);

        let document = [
            "<!DOCTYPE html>".to_string(),
            format!("<html lang=\"{}\">", self.view.terms.html_lang),
            self.render_preamble(),
            format!("<body class=\"{}\">", self.template.class_name()),
            "<div class=\"page\">".to_string(),
            format!("<header>\n{header}\n</header>"),
            format!("<main>\n{main}\n</main>"),
            self.footer(),
            "</div>".to_string(),
            "</body>".to_string(),
            "</html>".to_string(),
        ]
        .join("\n");

        if self.pretty {
            pretty_print(&document)
        } else {
            document + "\n"
        }
    }
}
