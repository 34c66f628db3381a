//! LaTeX rendering with the moderncv document class.
//!
//! One renderer serves the three moderncv styles. Styles differ only in
//! the `\moderncvstyle` token and an optional command override applied to
//! CJK documents, see [`LatexStyle::cjk_override`].

use crate::compute::ComputedResume;
use crate::error::{Error, Result};
use crate::model::{FontspecNumbers, Locale, Network, Section, Template};

use super::{join_blocks, Renderer};

/// Main font, used when installed.
const MAIN_FONT: &str = "Roboto";

/// Fallback main font shipped with every TeX distribution.
const FALLBACK_FONT: &str = "Latin Modern Sans";

/// moderncv style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatexStyle {
    #[default]
    Banking,
    Casual,
    Classic,
}

impl LatexStyle {
    /// Style of a LaTeX template.
    pub fn from_template(template: Template) -> Result<Self> {
        match template {
            Template::ModerncvBanking => Ok(LatexStyle::Banking),
            Template::ModerncvCasual => Ok(LatexStyle::Casual),
            Template::ModerncvClassic => Ok(LatexStyle::Classic),
            other => Err(Error::UnsupportedTemplate {
                engine: "latex".to_string(),
                template: other.to_string(),
            }),
        }
    }

    /// Argument of `\moderncvstyle`.
    pub fn token(&self) -> &'static str {
        match self {
            LatexStyle::Banking => "banking",
            LatexStyle::Casual => "casual",
            LatexStyle::Classic => "classic",
        }
    }

    /// Command emitted for CJK locales only.
    ///
    /// The banking style sets the name in small caps, which CJK fonts lack.
    pub fn cjk_override(&self) -> Option<&'static str> {
        match self {
            LatexStyle::Banking => {
                Some(r"\renewcommand*{\namefont}{\fontsize{34}{36}\mdseries\upshape}")
            }
            LatexStyle::Casual | LatexStyle::Classic => None,
        }
    }
}

/// CJK main font and its fallback.
fn cjk_fonts(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::Japanese => ("Noto Sans CJK JP", "Noto Serif CJK JP"),
        Locale::TraditionalChineseHongKong => ("Noto Sans CJK HK", "Noto Sans CJK TC"),
        Locale::TraditionalChineseTaiwan => ("Noto Sans CJK TC", "Noto Serif CJK TC"),
        _ => ("Noto Sans CJK SC", "Noto Serif CJK SC"),
    }
}

/// `\social` account types known to moderncv.
fn social_type(network: &str) -> Option<&'static str> {
    match Network::parse(network)? {
        Network::GitHub => Some("github"),
        Network::Gitlab => Some("gitlab"),
        Network::LinkedIn => Some("linkedin"),
        Network::Twitter => Some("twitter"),
        Network::StackOverflow => Some("stackoverflow"),
        Network::Telegram => Some("telegram"),
        _ => None,
    }
}

/// Braced macro argument, empty braces for a missing value.
fn arg(value: Option<&str>) -> String {
    format!("{{{}}}", value.unwrap_or_default())
}

/// Join lines of a macro argument. moderncv entry macros do not accept
/// paragraph breaks, and `\newline` is invalid right after a list.
fn join_lines<'s, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'s str>,
{
    let mut out = String::new();
    for line in lines.into_iter().map(str::trim).filter(|l| !l.is_empty()) {
        if !out.is_empty() {
            let after_list = out.ends_with(r"\end{itemize}") || out.ends_with(r"\end{enumerate}");
            out.push_str(if after_list { "\n" } else { "\\newline\n" });
        }
        out.push_str(line);
    }
    out
}

fn href(text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(r"\href{{{url}}}{{{text}}}"),
        None => text.to_string(),
    }
}

/// LaTeX renderer producing a moderncv document.
pub struct LatexRenderer<'a> {
    view: ComputedResume<'a>,
    style: LatexStyle,
}

impl<'a> LatexRenderer<'a> {
    pub fn new(view: ComputedResume<'a>, style: LatexStyle) -> Self {
        Self { view, style }
    }

    pub fn style(&self) -> LatexStyle {
        self.style
    }

    fn section(&self, section: Section, body: Vec<String>) -> String {
        if body.is_empty() {
            return String::new();
        }
        format!(
            "\\section{{{}}}\n{}",
            self.view.section_name(section),
            body.join("\n")
        )
    }

    /// A labelled line such as `Keywords: Rust, Go` inside an entry.
    fn labelled(&self, label: &str, value: Option<&str>) -> Option<String> {
        value.map(|v| format!(r"\textit{{{label}}}: {v}"))
    }

    /// Description argument: labelled lines and summary, one per line.
    fn description(&self, parts: Vec<Option<String>>) -> Option<String> {
        let parts: Vec<String> = parts.into_iter().flatten().collect();
        let joined = join_lines(parts.iter().flat_map(|p| p.split("\n\n")));
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }

    fn cventry(
        years: Option<&str>,
        title: Option<&str>,
        employer: Option<&str>,
        localization: Option<&str>,
        grade: Option<&str>,
        description: Option<&str>,
    ) -> String {
        format!(
            r"\cventry{}{}{}{}{}{}",
            arg(years),
            arg(title),
            arg(employer),
            arg(localization),
            arg(grade),
            arg(description)
        )
    }

    fn font_block(&self) -> String {
        let numbers = match self.view.layout.advanced.fontspec.numbers {
            Some(FontspecNumbers::Auto) | None => String::new(),
            Some(numbers) => format!("[Numbers={numbers}]"),
        };
        format!(
            "\\usepackage{{fontspec}}\n\
             \\IfFontExistsTF{{{MAIN_FONT}}}{{\\setmainfont{numbers}{{{MAIN_FONT}}}}}\
             {{\\setmainfont{numbers}{{{FALLBACK_FONT}}}}}"
        )
    }

    fn language_block(&self) -> String {
        let locale = self.view.locale;
        if locale.is_cjk() {
            let (font, fallback) = cjk_fonts(locale);
            let mut block = format!(
                "\\usepackage{{xeCJK}}\n\
                 \\IfFontExistsTF{{{font}}}{{\\setCJKmainfont{{{font}}}}}{{\\setCJKmainfont{{{fallback}}}}}"
            );
            if let Some(command) = self.style.cjk_override() {
                block.push('\n');
                block.push_str(command);
            }
            block
        } else {
            let babel = self.view.terms.babel.unwrap_or("english");
            format!("\\usepackage[{babel}]{{babel}}")
        }
    }
}

impl Renderer for LatexRenderer<'_> {
    fn view(&self) -> &ComputedResume<'_> {
        &self.view
    }

    fn render_preamble(&self) -> String {
        let layout = self.view.layout;
        let margins = &layout.margins;
        let mut lines = vec![
            format!(
                "\\documentclass[{},a4paper,sans]{{moderncv}}",
                layout.font_size()
            ),
            format!("\\moderncvstyle{{{}}}", self.style.token()),
            "\\moderncvcolor{blue}".to_string(),
            format!(
                "\\usepackage[top={},bottom={},left={},right={}]{{geometry}}",
                margins.top(),
                margins.bottom(),
                margins.left(),
                margins.right()
            ),
            self.font_block(),
            self.language_block(),
        ];
        if !layout.show_page_numbers() {
            lines.push("\\nopagenumbers{}".to_string());
        }
        lines.join("\n")
    }

    fn render_basics(&self) -> String {
        let basics = &self.view.basics;
        let mut lines = vec![format!("\\name{{{}}}{{}}", basics.name)];
        if let Some(headline) = &basics.headline {
            lines.push(format!("\\title{{{headline}}}"));
        }
        if let Some(phone) = &basics.phone {
            lines.push(format!("\\phone[mobile]{{{phone}}}"));
        }
        if let Some(email) = &basics.email {
            lines.push(format!("\\email{{{email}}}"));
        }
        if let Some(url) = &basics.url {
            lines.push(format!("\\homepage{{{url}}}"));
        }
        lines.join("\n")
    }

    fn render_summary(&self) -> String {
        match &self.view.basics.summary {
            Some(summary) => format!(
                "\\section{{{}}}\n{summary}",
                self.view.section_name(Section::Summary)
            ),
            None => String::new(),
        }
    }

    fn render_location(&self) -> String {
        match &self.view.location {
            Some(location) => format!("\\address{{{}}}{{}}{{}}", location.full_address),
            None => String::new(),
        }
    }

    fn render_profiles(&self) -> String {
        let mut lines = Vec::new();
        let mut others = Vec::new();
        for profile in &self.view.profiles {
            match social_type(&profile.network) {
                Some(kind) => lines.push(format!("\\social[{kind}]{{{}}}", profile.username)),
                None => others.push(format!("{}: {}", profile.network, profile.username)),
            }
        }
        if !others.is_empty() {
            lines.push(format!("\\extrainfo{{{}}}", others.join(" | ")));
        }
        lines.join("\n")
    }

    fn render_education(&self) -> String {
        let labels = &self.view.terms.labels;
        let entries = self
            .view
            .education
            .iter()
            .map(|e| {
                let description = self.description(vec![
                    self.labelled(labels.courses, e.courses.as_deref()),
                    e.summary.clone(),
                ]);
                let score = e.score.as_ref().map(|s| format!("{}: {s}", labels.score));
                Self::cventry(
                    Some(e.date_range.as_str()),
                    Some(format!("{}, {}", e.degree, e.area).as_str()),
                    Some(href(&e.institution, e.url.as_deref()).as_str()),
                    None,
                    score.as_deref(),
                    description.as_deref(),
                )
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
                let description = self.description(vec![
                    w.summary.clone(),
                    self.labelled(labels.keywords, w.keywords.as_deref()),
                ]);
                Self::cventry(
                    Some(w.date_range.as_str()),
                    Some(w.position.as_str()),
                    Some(href(&w.name, w.url.as_deref()).as_str()),
                    None,
                    None,
                    description.as_deref(),
                )
            })
            .collect();
        self.section(Section::Work, entries)
    }

    fn render_languages(&self) -> String {
        let entries = self
            .view
            .languages
            .iter()
            .map(|l| {
                format!(
                    r"\cvitemwithcomment{}{}{}",
                    arg(Some(l.language.as_str())),
                    arg(Some(l.fluency.as_str())),
                    arg(l.keywords.as_deref())
                )
            })
            .collect();
        self.section(Section::Languages, entries)
    }

    fn render_skills(&self) -> String {
        let entries = self
            .view
            .skills
            .iter()
            .map(|s| {
                format!(
                    r"\cvitemwithcomment{}{}{}",
                    arg(Some(s.name.as_str())),
                    arg(Some(s.level.as_str())),
                    arg(s.keywords.as_deref())
                )
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
                let description = self.description(vec![a.summary.clone()]);
                Self::cventry(
                    a.date.as_deref(),
                    Some(a.title.as_str()),
                    Some(a.awarder.as_str()),
                    None,
                    None,
                    description.as_deref(),
                )
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
                Self::cventry(
                    c.date.as_deref(),
                    Some(href(&c.name, c.url.as_deref()).as_str()),
                    Some(c.issuer.as_str()),
                    None,
                    None,
                    None,
                )
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
                let description = self.description(vec![p.summary.clone()]);
                Self::cventry(
                    p.release_date.as_deref(),
                    Some(href(&p.name, p.url.as_deref()).as_str()),
                    Some(p.publisher.as_str()),
                    None,
                    None,
                    description.as_deref(),
                )
            })
            .collect();
        self.section(Section::Publications, entries)
    }

    fn render_references(&self) -> String {
        let entries = self
            .view
            .references
            .iter()
            .map(|r| {
                let description = self.description(vec![r.summary.clone()]);
                Self::cventry(
                    None,
                    Some(r.name.as_str()),
                    r.relationship.as_deref(),
                    r.email.as_deref(),
                    r.phone.as_deref(),
                    description.as_deref(),
                )
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
                let description = self.description(vec![
                    p.summary.clone(),
                    self.labelled(labels.keywords, p.keywords.as_deref()),
                ]);
                Self::cventry(
                    Some(p.date_range.as_str()),
                    Some(href(&p.name, p.url.as_deref()).as_str()),
                    p.description.as_deref(),
                    None,
                    None,
                    description.as_deref(),
                )
            })
            .collect();
        self.section(Section::Projects, entries)
    }

    fn render_interests(&self) -> String {
        let entries = self
            .view
            .interests
            .iter()
            .map(|i| format!(r"\cvitem{}{}", arg(Some(i.name.as_str())), arg(i.keywords.as_deref())))
            .collect();
        self.section(Section::Interests, entries)
    }

    fn render_volunteer(&self) -> String {
        let entries = self
            .view
            .volunteer
            .iter()
            .map(|v| {
                let description = self.description(vec![v.summary.clone()]);
                Self::cventry(
                    Some(v.date_range.as_str()),
                    Some(v.position.as_str()),
                    Some(href(&v.organization, v.url.as_deref()).as_str()),
                    None,
                    None,
                    description.as_deref(),
                )
            })
            .collect();
        self.section(Section::Volunteer, entries)
    }

    fn render(&self) -> String {
        let header = join_blocks([
            self.render_preamble(),
            self.render_basics(),
            self.render_location(),
            self.render_profiles(),
        ]);
        let body = join_blocks([
            "\\makecvtitle".to_string(),
            self.render_summary(),
            self.render_ordered_sections(),
        ]);
        format!("{header}\n\n\\begin{{document}}\n\n{body}\n\n\\end{{document}}\n")
    }
}
