//! # resumark
//!
//! Validate structured resumes and render them to LaTeX, HTML and Markdown.
//!
//! A resume document is YAML or JSON with a `content` part (the facts) and
//! one or more layouts (how to present them). Loading parses the text while
//! keeping node positions, checks it against a declarative schema and
//! reports every violation with its line and column. A valid document is
//! then rendered per layout through a format-specific renderer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumark::Resumark;
//!
//! fn main() -> resumark::Result<()> {
//!     let text = std::fs::read_to_string("resume.yaml")?;
//!     let output = Resumark::new()
//!         .with_layout(0)
//!         .load_str(&text, resumark::SourceFormat::Yaml)?
//!         .render()?;
//!     std::fs::write(output.file_name("resume"), output.content)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Positional validation**: every violation with path, line and column
//! - **Three engines**: moderncv LaTeX (banking, casual, classic), HTML
//!   (calm, minimal) and Markdown
//! - **Localization**: section titles, dates and option values in ten
//!   languages
//! - **Section ordering and aliases** per layout
//! - **JSON Schema export** of the document schema
//! - **Parallel rendering** of multiple layouts with Rayon

pub mod compiler;
pub mod compute;
pub mod detect;
pub mod error;
pub mod locale;
pub mod markup;
pub mod model;
pub mod render;
pub mod report;
pub mod schema;
pub mod source;
pub mod validate;

// Re-export commonly used types
pub use compiler::{detect as detect_compiler, CompilerKind, LatexCompiler};
pub use compute::ComputedResume;
pub use detect::{OutputFormat, SourceFormat};
pub use error::{Error, Result};
pub use markup::{Escaper, MarkdownSummary, SummaryParser};
pub use model::{Content, Engine, Layout, Locale, Resume, Section, Template};
pub use render::{RenderOptions, RenderResult, RenderStats, Renderer};
pub use report::format_diagnostics;
pub use schema::document_schema;
pub use validate::{load, validate, PositionalError, ValidationReport};

use std::path::Path;

/// Load and validate a resume file, inferring the format from its extension.
///
/// # Example
///
/// ```no_run
/// let resume = resumark::load_file("resume.yaml").unwrap();
/// println!("{} layouts", resume.layout_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    load(&text, format)
}

/// Validate a resume file and return every violation.
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<Vec<PositionalError>> {
    let (_, parsed) = source::parse_file(path)?;
    Ok(validate::validate_parsed(&parsed))
}

/// Render the first layout of a resume file.
///
/// # Example
///
/// ```no_run
/// let output = resumark::render_file("resume.yaml").unwrap();
/// std::fs::write(output.file_name("resume"), output.content).unwrap();
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<RenderResult> {
    let resume = load_file(path)?;
    render::render(&resume, &RenderOptions::default())
}

/// Builder for loading and rendering resumes.
///
/// # Example
///
/// ```no_run
/// use resumark::{Resumark, SourceFormat};
///
/// let text = std::fs::read_to_string("resume.yaml")?;
/// let html = Resumark::new()
///     .with_layout(1)
///     .with_pretty_html(false)
///     .load_str(&text, SourceFormat::Yaml)?
///     .render()?;
/// # Ok::<(), resumark::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resumark {
    options: RenderOptions,
}

impl Resumark {
    /// Create a new builder with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the layout rendered by [`Loaded::render`].
    pub fn with_layout(mut self, index: usize) -> Self {
        self.options = self.options.with_layout(index);
        self
    }

    /// Replace the default Markdown summary parser.
    pub fn with_summary_parser(mut self, parser: impl SummaryParser + 'static) -> Self {
        self.options = self.options.with_summary_parser(parser);
        self
    }

    /// Enable or disable escaping of raw HTML in summaries.
    pub fn with_escape_summaries(mut self, escape: bool) -> Self {
        self.options = self.options.with_escape_summaries(escape);
        self
    }

    /// Enable or disable HTML pretty-printing.
    pub fn with_pretty_html(mut self, pretty: bool) -> Self {
        self.options = self.options.with_pretty_html(pretty);
        self
    }

    /// Collect rendering statistics.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.options = self.options.with_stats(collect);
        self
    }

    /// Current render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parse and validate source text.
    pub fn load_str(self, text: &str, format: SourceFormat) -> Result<Loaded> {
        let resume = load(text, format)?;
        Ok(self.wrap(resume))
    }

    /// Read, parse and validate a resume file.
    pub fn load_file<P: AsRef<Path>>(self, path: P) -> Result<Loaded> {
        let resume = load_file(path)?;
        Ok(self.wrap(resume))
    }

    /// Use an already validated resume.
    pub fn with_resume(self, resume: Resume) -> Loaded {
        self.wrap(resume)
    }

    fn wrap(self, resume: Resume) -> Loaded {
        Loaded {
            resume,
            options: self.options,
        }
    }
}

/// A validated resume ready to render.
#[derive(Debug, Clone)]
pub struct Loaded {
    resume: Resume,
    options: RenderOptions,
}

impl Loaded {
    /// The typed resume.
    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Consume and return the typed resume.
    pub fn into_resume(self) -> Resume {
        self.resume
    }

    /// Index of the first layout rendered with the engine producing `format`.
    pub fn layout_for(&self, format: OutputFormat) -> Result<usize> {
        let engine = format.engine();
        self.resume
            .layouts
            .iter()
            .position(|layout| layout.engine == engine)
            .ok_or_else(|| Error::UnsupportedEngine(engine.to_string()))
    }

    /// Render the selected layout.
    pub fn render(&self) -> Result<RenderResult> {
        render::render(&self.resume, &self.options)
    }

    /// Render one layout by index.
    pub fn render_layout(&self, index: usize) -> Result<RenderResult> {
        render::render_layout(&self.resume, index, &self.options)
    }

    /// Render every layout in parallel.
    pub fn render_all(&self) -> Result<Vec<RenderResult>> {
        render::render_all(&self.resume, &self.options)
    }
}
