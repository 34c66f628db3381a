//! Markdown summaries converted through `pulldown-cmark` events.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::{Escaper, HtmlEscaper, LatexEscaper, SummaryParser};

/// Markup a summary is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTarget {
    Latex,
    Html,
    /// Summaries are already Markdown and pass through unchanged
    Markdown,
}

/// Default summary parser.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownSummary {
    target: MarkupTarget,
    escape_html: bool,
}

impl MarkdownSummary {
    pub fn new(target: MarkupTarget) -> Self {
        Self {
            target,
            escape_html: true,
        }
    }

    pub fn latex() -> Self {
        Self::new(MarkupTarget::Latex)
    }

    pub fn html() -> Self {
        Self::new(MarkupTarget::Html)
    }

    pub fn markdown() -> Self {
        Self::new(MarkupTarget::Markdown)
    }

    /// Whether raw HTML inside a summary is escaped (default) or kept.
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    pub fn target(&self) -> MarkupTarget {
        self.target
    }
}

impl SummaryParser for MarkdownSummary {
    fn parse(&self, text: &str) -> String {
        match self.target {
            MarkupTarget::Markdown => text.to_string(),
            MarkupTarget::Latex => LatexWriter::default().run(text),
            MarkupTarget::Html => HtmlWriter {
                out: String::new(),
                escape_html: self.escape_html,
            }
            .run(text),
        }
    }
}

#[derive(Default)]
struct LatexWriter {
    out: String,
    lists: Vec<bool>,
}

impl LatexWriter {
    fn run(mut self, text: &str) -> String {
        for event in Parser::new(text) {
            self.event(event);
        }
        self.out.trim().to_string()
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => self.block_break(),
                Tag::Heading { .. } => {
                    self.block_break();
                    self.out.push_str(r"\textbf{");
                }
                Tag::List(start) => {
                    let ordered = start.is_some();
                    self.block_break();
                    self.lists.push(ordered);
                    self.out.push_str(if ordered {
                        "\\begin{enumerate}\n"
                    } else {
                        "\\begin{itemize}\n"
                    });
                }
                Tag::Item => self.out.push_str(r"\item "),
                Tag::Emphasis => self.out.push_str(r"\emph{"),
                Tag::Strong => self.out.push_str(r"\textbf{"),
                Tag::Link { dest_url, .. } => {
                    self.out.push_str(r"\href{");
                    self.out.push_str(&LatexEscaper.escape_url(&dest_url));
                    self.out.push_str("}{");
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) | TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link => {
                    self.out.push('}')
                }
                TagEnd::Item => self.out.push('\n'),
                TagEnd::List(_) => {
                    let ordered = self.lists.pop().unwrap_or(false);
                    self.out.push_str(if ordered {
                        "\\end{enumerate}"
                    } else {
                        "\\end{itemize}"
                    });
                }
                _ => {}
            },
            Event::Text(text) => self.out.push_str(&LatexEscaper.escape(&text)),
            Event::Code(code) => {
                self.out.push_str(r"\texttt{");
                self.out.push_str(&LatexEscaper.escape(&code));
                self.out.push('}');
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                self.out.push_str(&LatexEscaper.escape(&html))
            }
            Event::SoftBreak => self.out.push(' '),
            Event::HardBreak => self.out.push_str("\\\\\n"),
            _ => {}
        }
    }

    /// Separate blocks with a blank line, except inside lists.
    fn block_break(&mut self) {
        if !self.lists.is_empty() || self.out.is_empty() {
            return;
        }
        if !self.out.ends_with("\n\n") {
            self.out.push_str(if self.out.ends_with('\n') { "\n" } else { "\n\n" });
        }
    }
}

struct HtmlWriter {
    out: String,
    escape_html: bool,
}

impl HtmlWriter {
    fn run(mut self, text: &str) -> String {
        for event in Parser::new(text) {
            self.event(event);
        }
        self.out.trim().to_string()
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => self.out.push_str("<p>"),
                Tag::Heading { .. } => self.out.push_str("<p><strong>"),
                Tag::List(Some(_)) => self.out.push_str("<ol>\n"),
                Tag::List(None) => self.out.push_str("<ul>\n"),
                Tag::Item => self.out.push_str("<li>"),
                Tag::Emphasis => self.out.push_str("<em>"),
                Tag::Strong => self.out.push_str("<strong>"),
                Tag::Link { dest_url, .. } => {
                    self.out.push_str("<a href=\"");
                    self.out.push_str(&HtmlEscaper.escape_url(&dest_url));
                    self.out.push_str("\">");
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => self.out.push_str("</p>\n"),
                TagEnd::Heading(_) => self.out.push_str("</strong></p>\n"),
                TagEnd::List(true) => self.out.push_str("</ol>\n"),
                TagEnd::List(false) => self.out.push_str("</ul>\n"),
                TagEnd::Item => self.out.push_str("</li>\n"),
                TagEnd::Emphasis => self.out.push_str("</em>"),
                TagEnd::Strong => self.out.push_str("</strong>"),
                TagEnd::Link => self.out.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) => self.out.push_str(&HtmlEscaper.escape(&text)),
            Event::Code(code) => {
                self.out.push_str("<code>");
                self.out.push_str(&HtmlEscaper.escape(&code));
                self.out.push_str("</code>");
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                if self.escape_html {
                    self.out.push_str(&HtmlEscaper.escape(&html));
                } else {
                    self.out.push_str(&html);
                }
            }
            Event::SoftBreak => self.out.push(' '),
            Event::HardBreak => self.out.push_str("<br>\n"),
            _ => {}
        }
    }
}
