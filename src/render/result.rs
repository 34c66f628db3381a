//! Rendering result with metadata and statistics.

use serde::{Deserialize, Serialize};

use crate::detect::OutputFormat;
use crate::model::{Engine, Template};

/// Result of rendering one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// The rendered text
    pub content: String,

    /// Index of the layout that produced it
    pub layout_index: usize,

    pub engine: Engine,

    /// Resolved template, `None` for Markdown
    pub template: Option<Template>,

    /// Rendering statistics, zero unless requested
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(
        content: String,
        layout_index: usize,
        engine: Engine,
        template: Option<Template>,
        stats: RenderStats,
    ) -> Self {
        Self {
            content,
            layout_index,
            engine,
            template,
            stats,
        }
    }

    /// Output format of the content.
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from(self.engine)
    }

    /// Suggested file name, e.g. `resume.tex` or `resume-1.html` for later layouts.
    pub fn file_name(&self, stem: &str) -> String {
        let ext = self.format().extension();
        if self.layout_index == 0 {
            format!("{stem}.{ext}")
        } else {
            format!("{stem}-{}.{ext}", self.layout_index)
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections with output
    pub section_count: u32,

    /// Number of section entries (work items, skills, ...)
    pub entry_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.entry_count += other.entry_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats {
            section_count: 2,
            entry_count: 5,
            ..Default::default()
        };
        let stats2 = RenderStats {
            section_count: 1,
            entry_count: 3,
            word_count: 10,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.section_count, 3);
        assert_eq!(stats1.entry_count, 8);
        assert_eq!(stats1.word_count, 10);
    }

    #[test]
    fn test_file_name() {
        let result = RenderResult::new(
            "# Ada".into(),
            0,
            Engine::Markdown,
            None,
            RenderStats::default(),
        );
        assert_eq!(result.file_name("resume"), "resume.md");
        assert_eq!(result.format(), OutputFormat::Markdown);

        let second = RenderResult {
            layout_index: 1,
            engine: Engine::Latex,
            ..result
        };
        assert_eq!(second.file_name("resume"), "resume-1.tex");
    }
}
