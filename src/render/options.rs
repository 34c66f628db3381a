//! Rendering options and configuration.

use std::fmt;
use std::sync::Arc;

use crate::markup::SummaryParser;

/// Options for rendering a resume.
#[derive(Clone)]
pub struct RenderOptions {
    /// Layout to render when a single layout is requested
    pub layout_index: usize,

    /// Replaces the default Markdown summary parser for every engine
    pub summary_parser: Option<Arc<dyn SummaryParser>>,

    /// Escape raw HTML found in summaries (HTML engine)
    pub escape_summaries: bool,

    /// Indent the generated HTML
    pub pretty_html: bool,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the layout to render.
    pub fn with_layout(mut self, index: usize) -> Self {
        self.layout_index = index;
        self
    }

    /// Use a custom summary parser.
    pub fn with_summary_parser(mut self, parser: impl SummaryParser + 'static) -> Self {
        self.summary_parser = Some(Arc::new(parser));
        self
    }

    /// Enable or disable escaping of raw HTML in summaries.
    pub fn with_escape_summaries(mut self, escape: bool) -> Self {
        self.escape_summaries = escape;
        self
    }

    /// Enable or disable HTML pretty-printing.
    pub fn with_pretty_html(mut self, pretty: bool) -> Self {
        self.pretty_html = pretty;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout_index: 0,
            summary_parser: None,
            escape_summaries: true,
            pretty_html: true,
            collect_stats: false,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("layout_index", &self.layout_index)
            .field("summary_parser", &self.summary_parser.as_ref().map(|_| "custom"))
            .field("escape_summaries", &self.escape_summaries)
            .field("pretty_html", &self.pretty_html)
            .field("collect_stats", &self.collect_stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl SummaryParser for Upper {
        fn parse(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_render_options_default() {
        let opts = RenderOptions::default();
        assert_eq!(opts.layout_index, 0);
        assert!(opts.summary_parser.is_none());
        assert!(opts.escape_summaries);
        assert!(opts.pretty_html);
        assert!(!opts.collect_stats);
    }

    #[test]
    fn test_render_options_builder() {
        let opts = RenderOptions::new()
            .with_layout(2)
            .with_summary_parser(Upper)
            .with_escape_summaries(false)
            .with_pretty_html(false)
            .with_stats(true);

        assert_eq!(opts.layout_index, 2);
        assert_eq!(
            opts.summary_parser.as_ref().map(|p| p.parse("abc")),
            Some("ABC".to_string())
        );
        assert!(!opts.escape_summaries);
        assert!(!opts.pretty_html);
        assert!(opts.collect_stats);
        assert!(format!("{opts:?}").contains("custom"));
    }
}
