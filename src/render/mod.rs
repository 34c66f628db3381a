//! Rendering module for converting resumes to LaTeX, HTML and Markdown.
//!
//! A [`Renderer`] owns the [`ComputedResume`] of one layout and exposes one
//! method per section. [`render_layout`] picks the summary parser, escaper
//! and renderer for a layout; [`render_all`] renders every layout of a
//! resume in parallel.

mod html;
mod latex;
mod markdown;
mod options;
mod result;

pub use html::{pretty_print, HtmlRenderer, HtmlTemplate};
pub use latex::{LatexRenderer, LatexStyle};
pub use markdown::MarkdownRenderer;
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};

use std::sync::Arc;

use rayon::prelude::*;

use crate::compute::ComputedResume;
use crate::error::{Error, Result};
use crate::markup::{
    Escaper, HtmlEscaper, IdentityEscaper, LatexEscaper, MarkdownSummary, MarkupTarget,
    SummaryParser,
};
use crate::model::{Engine, Resume, Section, Template};

/// Output of one format, one method per section.
///
/// Section methods return an empty string when the section has no data.
pub trait Renderer {
    /// The view being rendered.
    fn view(&self) -> &ComputedResume<'_>;

    fn render_preamble(&self) -> String;
    fn render_basics(&self) -> String;
    fn render_summary(&self) -> String;
    fn render_location(&self) -> String;
    fn render_profiles(&self) -> String;
    fn render_education(&self) -> String;
    fn render_work(&self) -> String;
    fn render_languages(&self) -> String;
    fn render_skills(&self) -> String;
    fn render_awards(&self) -> String;
    fn render_certificates(&self) -> String;
    fn render_publications(&self) -> String;
    fn render_references(&self) -> String;
    fn render_projects(&self) -> String;
    fn render_interests(&self) -> String;
    fn render_volunteer(&self) -> String;

    /// The complete document.
    fn render(&self) -> String;

    /// Dispatch to the method of one section.
    fn render_section(&self, section: Section) -> String {
        match section {
            Section::Basics => self.render_basics(),
            Section::Location => self.render_location(),
            Section::Profiles => self.render_profiles(),
            Section::Summary => self.render_summary(),
            Section::Education => self.render_education(),
            Section::Work => self.render_work(),
            Section::Languages => self.render_languages(),
            Section::Skills => self.render_skills(),
            Section::Awards => self.render_awards(),
            Section::Certificates => self.render_certificates(),
            Section::Publications => self.render_publications(),
            Section::References => self.render_references(),
            Section::Projects => self.render_projects(),
            Section::Interests => self.render_interests(),
            Section::Volunteer => self.render_volunteer(),
        }
    }

    /// Body sections in merged order, blank output dropped, separated by
    /// one blank line.
    fn render_ordered_sections(&self) -> String {
        join_blocks(self.view().order.iter().map(|s| self.render_section(*s)))
    }
}

/// Join non-blank blocks with one blank line.
pub(crate) fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summary parser and escaper for an engine.
fn markup_for(
    engine: Engine,
    options: &RenderOptions,
) -> (Arc<dyn SummaryParser>, Box<dyn Escaper>) {
    let (target, escaper): (MarkupTarget, Box<dyn Escaper>) = match engine {
        Engine::Latex => (MarkupTarget::Latex, Box::new(LatexEscaper)),
        Engine::Html => (MarkupTarget::Html, Box::new(HtmlEscaper)),
        Engine::Markdown => (MarkupTarget::Markdown, Box::new(IdentityEscaper)),
    };
    let parser: Arc<dyn SummaryParser> = match &options.summary_parser {
        Some(parser) => Arc::clone(parser),
        None => Arc::new(
            MarkdownSummary::new(target).with_escape_html(options.escape_summaries),
        ),
    };
    (parser, escaper)
}

/// Pick the renderer for a view.
///
/// The template must belong to the layout engine, otherwise this fails with
/// [`Error::UnsupportedTemplate`].
pub fn renderer_for<'a>(
    view: ComputedResume<'a>,
    options: &RenderOptions,
) -> Result<Box<dyn Renderer + 'a>> {
    let template = view.layout.resolved_template()?;
    let renderer: Box<dyn Renderer + 'a> = match (view.layout.engine, template) {
        (Engine::Latex, Some(template)) => {
            Box::new(LatexRenderer::new(view, LatexStyle::from_template(template)?))
        }
        (Engine::Latex, None) => Box::new(LatexRenderer::new(view, LatexStyle::default())),
        (Engine::Html, template) => {
            let template = template
                .map(HtmlTemplate::from_template)
                .transpose()?
                .unwrap_or_default();
            Box::new(HtmlRenderer::new(view, template).with_pretty(options.pretty_html))
        }
        (Engine::Markdown, None) => Box::new(MarkdownRenderer::new(view)),
        (Engine::Markdown, Some(template)) => {
            return Err(Error::UnsupportedTemplate {
                engine: Engine::Markdown.to_string(),
                template: template.to_string(),
            })
        }
    };
    Ok(renderer)
}

/// Render one layout of a resume.
pub fn render_layout(
    resume: &Resume,
    layout_index: usize,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let layout = resume.layout(layout_index)?;
    let engine = layout.engine;
    let template: Option<Template> = layout.resolved_template()?;
    log::debug!("rendering layout {layout_index} with the {engine} engine");

    let (parser, escaper) = markup_for(engine, options);
    let view = ComputedResume::build(resume, layout_index, parser.as_ref(), escaper.as_ref())?;

    let mut stats = RenderStats::new();
    if options.collect_stats {
        stats.section_count = view.sections().len() as u32;
        stats.entry_count = entry_count(&view) as u32;
    }

    let renderer = renderer_for(view, options)?;
    let content = renderer.render();

    if options.collect_stats {
        stats.count_text(&content);
    }

    Ok(RenderResult::new(content, layout_index, engine, template, stats))
}

/// Render the layout selected by `options.layout_index`.
pub fn render(resume: &Resume, options: &RenderOptions) -> Result<RenderResult> {
    render_layout(resume, options.layout_index, options)
}

/// Render every layout of a resume in parallel, in layout order.
pub fn render_all(resume: &Resume, options: &RenderOptions) -> Result<Vec<RenderResult>> {
    (0..resume.layout_count())
        .into_par_iter()
        .map(|index| render_layout(resume, index, options))
        .collect()
}

fn entry_count(view: &ComputedResume<'_>) -> usize {
    view.profiles.len()
        + view.education.len()
        + view.work.len()
        + view.languages.len()
        + view.skills.len()
        + view.awards.len()
        + view.certificates.len()
        + view.publications.len()
        + view.references.len()
        + view.projects.len()
        + view.interests.len()
        + view.volunteer.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Content, Education, Degree, Layout};

    fn resume(layouts: Vec<Layout>) -> Resume {
        let mut content = Content::default();
        content.basics.name = "Ada Lovelace".into();
        content.education.push(Education {
            institution: "University of London".into(),
            area: "Mathematics".into(),
            degree: Degree::Bachelor,
            start_date: "1832".into(),
            end_date: None,
            url: None,
            score: None,
            courses: Vec::new(),
            summary: None,
        });
        Resume::new(content, layouts)
    }

    #[test]
    fn test_join_blocks_drops_blank() {
        let joined = join_blocks(vec!["a\n".to_string(), "  ".to_string(), "b".to_string()]);
        assert_eq!(joined, "a\n\nb");
    }

    #[test]
    fn test_render_all_keeps_layout_order() {
        let resume = resume(vec![
            Layout::new(Engine::Markdown),
            Layout::new(Engine::Html),
            Layout::new(Engine::Latex),
        ]);
        let results = render_all(&resume, &RenderOptions::default()).unwrap();
        let engines: Vec<Engine> = results.iter().map(|r| r.engine).collect();
        assert_eq!(engines, vec![Engine::Markdown, Engine::Html, Engine::Latex]);
        assert!(results[0].content.starts_with("# Ada Lovelace"));
        assert!(results[1].content.starts_with("<!DOCTYPE html>"));
        assert!(results[2].content.contains(r"\documentclass"));
    }

    #[test]
    fn test_template_mismatch_fails_fast() {
        let resume = resume(vec![Layout::new(Engine::Latex).with_template(Template::Calm)]);
        let err = render(&resume, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTemplate { .. }));
    }

    #[test]
    fn test_stats_collected_on_request() {
        let resume = resume(vec![Layout::new(Engine::Markdown)]);
        let plain = render(&resume, &RenderOptions::default()).unwrap();
        assert_eq!(plain.stats, RenderStats::default());

        let with_stats = render(&resume, &RenderOptions::new().with_stats(true)).unwrap();
        assert_eq!(with_stats.stats.section_count, 2);
        assert_eq!(with_stats.stats.entry_count, 1);
        assert!(with_stats.stats.word_count > 0);
    }

    #[test]
    fn test_custom_summary_parser() {
        struct Shout;
        impl SummaryParser for Shout {
            fn parse(&self, text: &str) -> String {
                text.to_uppercase()
            }
        }

        let mut resume = resume(vec![Layout::new(Engine::Markdown)]);
        resume.content.basics.summary = Some("Poetical scientist and writer.".into());
        let result = render(&resume, &RenderOptions::new().with_summary_parser(Shout)).unwrap();
        assert!(result.content.contains("POETICAL SCIENTIST AND WRITER."));
    }
}
