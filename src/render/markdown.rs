//! Markdown rendering.
//!
//! Summaries are already Markdown and are emitted unchanged. Every section
//! becomes a `##` heading; list-like sections (languages, skills,
//! interests) render as bullet lists, the rest as `###` entries.

use crate::compute::ComputedResume;
use crate::model::Section;

use super::{join_blocks, Renderer};

fn link(text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!("[{text}]({url})"),
        None => text.to_string(),
    }
}

/// `### Title` followed by an optional byline and detail paragraphs.
fn entry(title: &str, byline: &[Option<&str>], details: &[Option<String>]) -> String {
    let mut blocks = vec![format!("### {title}")];
    let byline: Vec<&str> = byline.iter().flatten().copied().collect();
    if !byline.is_empty() {
        blocks.push(format!("*{}*", byline.join(" | ")));
    }
    blocks.extend(details.iter().flatten().cloned());
    join_blocks(blocks)
}

/// `- **Name**: detail (keywords)` list item.
fn item(name: &str, detail: Option<&str>, keywords: Option<&str>) -> String {
    let mut line = format!("- **{name}**");
    if let Some(detail) = detail {
        line.push_str(": ");
        line.push_str(detail);
    }
    if let Some(keywords) = keywords {
        line.push_str(&format!(" ({keywords})"));
    }
    line
}

/// Markdown renderer.
pub struct MarkdownRenderer<'a> {
    view: ComputedResume<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(view: ComputedResume<'a>) -> Self {
        Self { view }
    }

    fn section(&self, section: Section, body: Vec<String>, separator: &str) -> String {
        if body.is_empty() {
            return String::new();
        }
        format!(
            "## {}\n\n{}",
            self.view.section_name(section),
            body.join(separator)
        )
    }

    fn labelled(&self, label: &str, value: Option<&str>) -> Option<String> {
        value.map(|v| format!("**{label}:** {v}"))
    }
}

impl Renderer for MarkdownRenderer<'_> {
    fn view(&self) -> &ComputedResume<'_> {
        &self.view
    }

    /// Markdown has no preamble.
    fn render_preamble(&self) -> String {
        String::new()
    }

    fn render_basics(&self) -> String {
        let basics = &self.view.basics;
        let labels = &self.view.terms.labels;
        let mut blocks = vec![format!("# {}", basics.name)];
        if let Some(headline) = &basics.headline {
            blocks.push(format!("*{headline}*"));
        }
        let contact: Vec<String> = [
            basics
                .email
                .as_ref()
                .map(|e| format!("- {}: [{e}](mailto:{e})", labels.email)),
            basics.phone.as_ref().map(|p| format!("- {}: {p}", labels.phone)),
            basics.url.as_ref().map(|u| format!("- {}: <{u}>", labels.url)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !contact.is_empty() {
            blocks.push(contact.join("\n"));
        }
        join_blocks(blocks)
    }

    fn render_summary(&self) -> String {
        match &self.view.basics.summary {
            Some(summary) => format!(
                "## {}\n\n{summary}",
                self.view.section_name(Section::Summary)
            ),
            None => String::new(),
        }
    }

    fn render_location(&self) -> String {
        match &self.view.location {
            Some(location) => format!(
                "{}: {}",
                self.view.terms.labels.location, location.full_address
            ),
            None => String::new(),
        }
    }

    fn render_profiles(&self) -> String {
        self.view
            .profiles
            .iter()
            .map(|p| format!("- {}: {}", p.network, link(&p.username, p.url.as_deref())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_education(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .education
            .iter()
            .map(|e| {
                let degree = format!("{}, {}", e.degree, e.area);
                entry(
                    &link(&e.institution, e.url.as_deref()),
                    &[Some(degree.as_str()), Some(e.date_range.as_str())],
                    &[
                        self.labelled(labels.score, e.score.as_deref()),
                        self.labelled(labels.courses, e.courses.as_deref()),
                        e.summary.clone(),
                    ],
                )
            })
            .collect();
        self.section(Section::Education, entries, "\n\n")
    }

    fn render_work(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .work
            .iter()
            .map(|w| {
                entry(
                    &link(&w.name, w.url.as_deref()),
                    &[Some(w.position.as_str()), Some(w.date_range.as_str())],
                    &[
                        w.summary.clone(),
                        self.labelled(labels.keywords, w.keywords.as_deref()),
                    ],
                )
            })
            .collect();
        self.section(Section::Work, entries, "\n\n")
    }

    fn render_languages(&self) -> String {
        let items = self
            .view
            .languages
            .iter()
            .map(|l| item(&l.language, Some(l.fluency.as_str()), l.keywords.as_deref()))
            .collect();
        self.section(Section::Languages, items, "\n")
    }

    fn render_skills(&self) -> String {
        let items = self
            .view
            .skills
            .iter()
            .map(|s| item(&s.name, Some(s.level.as_str()), s.keywords.as_deref()))
            .collect();
        self.section(Section::Skills, items, "\n")
    }

    fn render_awards(&self) -> String {
        let entries = self
            .view
            .awards
            .iter()
            .map(|a| {
                entry(
                    &a.title,
                    &[Some(a.awarder.as_str()), a.date.as_deref()],
                    &[a.summary.clone()],
                )
            })
            .collect();
        self.section(Section::Awards, entries, "\n\n")
    }

    fn render_certificates(&self) -> String {
        let entries = self
            .view
            .certificates
            .iter()
            .map(|c| {
                entry(
                    &link(&c.name, c.url.as_deref()),
                    &[Some(c.issuer.as_str()), c.date.as_deref()],
                    &[],
                )
            })
            .collect();
        self.section(Section::Certificates, entries, "\n\n")
    }

    fn render_publications(&self) -> String {
        let entries = self
            .view
            .publications
            .iter()
            .map(|p| {
                entry(
                    &link(&p.name, p.url.as_deref()),
                    &[Some(p.publisher.as_str()), p.release_date.as_deref()],
                    &[p.summary.clone()],
                )
            })
            .collect();
        self.section(Section::Publications, entries, "\n\n")
    }

    fn render_references(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .references
            .iter()
            .map(|r| {
                entry(
                    &r.name,
                    &[r.relationship.as_deref()],
                    &[
                        r.summary.clone(),
                        self.labelled(labels.email, r.email.as_deref()),
                        self.labelled(labels.phone, r.phone.as_deref()),
                    ],
                )
            })
            .collect();
        self.section(Section::References, entries, "\n\n")
    }

    fn render_projects(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .projects
            .iter()
            .map(|p| {
                entry(
                    &link(&p.name, p.url.as_deref()),
                    &[p.description.as_deref(), Some(p.date_range.as_str())],
                    &[
                        p.summary.clone(),
                        self.labelled(labels.keywords, p.keywords.as_deref()),
                    ],
                )
            })
            .collect();
        self.section(Section::Projects, entries, "\n\n")
    }

    fn render_interests(&self) -> String {
        let items = self
            .view
            .interests
            .iter()
            .map(|i| item(&i.name, i.keywords.as_deref(), None))
            .collect();
        self.section(Section::Interests, items, "\n")
    }

    fn render_volunteer(&self) -> String {
        let entries = self
            .view
            .volunteer
            .iter()
            .map(|v| {
                entry(
                    &link(&v.organization, v.url.as_deref()),
                    &[Some(v.position.as_str()), Some(v.date_range.as_str())],
                    &[v.summary.clone()],
                )
            })
            .collect();
        self.section(Section::Volunteer, entries, "\n\n")
    }

    fn render(&self) -> String {
        let mut out = join_blocks([
            self.render_preamble(),
            self.render_basics(),
            self.render_location(),
            self.render_profiles(),
            self.render_summary(),
            self.render_ordered_sections(),
        ]);
        out.push('\n');
        out
    }
}
