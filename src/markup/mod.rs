//! Text transforms applied before rendering.
//!
//! Two seams: an [`Escaper`] makes plain text safe for a target format, and
//! a [`SummaryParser`] turns Markdown summaries into target markup. Every
//! piece of text passes through exactly one of them.

mod escape;
mod summary;

pub use escape::{HtmlEscaper, IdentityEscaper, LatexEscaper};
pub use summary::{MarkdownSummary, MarkupTarget};

/// Makes plain text safe to embed in a target format.
pub trait Escaper: Send + Sync {
    fn escape(&self, text: &str) -> String;

    /// Escape a link target. Defaults to [`Escaper::escape`].
    fn escape_url(&self, url: &str) -> String {
        self.escape(url)
    }
}

/// Converts a Markdown summary into target markup.
pub trait SummaryParser: Send + Sync {
    fn parse(&self, text: &str) -> String;
}
