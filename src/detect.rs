//! Input and output format detection.

use crate::error::{Error, Result};
use crate::model::Engine;
use std::path::Path;

/// Source format of a resume document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// YAML (`.yaml`, `.yml`)
    #[default]
    Yaml,
    /// JSON (`.json`)
    Json,
}

impl SourceFormat {
    /// Infer the source format from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            "json" => Ok(SourceFormat::Json),
            other => Err(Error::UnsupportedExtension(other.to_string())),
        }
    }

    /// Infer the source format from a path.
    ///
    /// # Example
    /// ```
    /// use resumark::detect::SourceFormat;
    ///
    /// let format = SourceFormat::from_path("resume.yml").unwrap();
    /// assert_eq!(format, SourceFormat::Yaml);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedExtension(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// File extensions accepted for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::Yaml => &["yaml", "yml"],
            SourceFormat::Json => &["json"],
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Yaml => write!(f, "YAML"),
            SourceFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Output format of a rendered resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// LaTeX source (`.tex`)
    Latex,
    /// HTML document (`.html`, `.htm`)
    Html,
    /// Markdown (`.md`)
    Markdown,
}

impl OutputFormat {
    /// Infer the output format from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "tex" => Ok(OutputFormat::Latex),
            "html" | "htm" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => Err(Error::UnsupportedExtension(other.to_string())),
        }
    }

    /// Infer the output format from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedExtension(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Preferred file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "tex",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }

    /// MIME type of the rendered output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "application/x-latex",
            OutputFormat::Html => "text/html",
            OutputFormat::Markdown => "text/markdown",
        }
    }
}

impl From<Engine> for OutputFormat {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Latex => OutputFormat::Latex,
            Engine::Html => OutputFormat::Html,
            Engine::Markdown => OutputFormat::Markdown,
        }
    }
}

impl OutputFormat {
    /// Engine producing this format.
    pub fn engine(&self) -> Engine {
        match self {
            OutputFormat::Latex => Engine::Latex,
            OutputFormat::Html => Engine::Html,
            OutputFormat::Markdown => Engine::Markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("yaml").unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_extension("YML").unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_extension("json").unwrap(), SourceFormat::Json);
        assert!(matches!(
            SourceFormat::from_extension("toml"),
            Err(Error::UnsupportedExtension(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_source_format_from_path_without_extension() {
        assert!(matches!(
            SourceFormat::from_path("resume"),
            Err(Error::UnsupportedExtension(_))
        ));
        assert_eq!(
            SourceFormat::from_path("cv/resume.json").unwrap(),
            SourceFormat::Json
        );
        assert!(SourceFormat::from_path("cv/resume.txt").is_err());
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path("out/cv.tex").unwrap(), OutputFormat::Latex);
        assert_eq!(OutputFormat::from_extension("htm").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_extension("md").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_extension("pdf").is_err());
        assert_eq!(OutputFormat::from(Engine::Html), OutputFormat::Html);
        assert_eq!(OutputFormat::Latex.engine(), Engine::Latex);
    }
}
