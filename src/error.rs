//! Error types for resumark library.

use std::io;
use thiserror::Error;

use crate::validate::ValidationReport;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, validating, or rendering a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source text is not well-formed YAML or JSON.
    #[error("{}", format_parse_error(.message, .line, .column))]
    Parse {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// The document parsed but violates the resume schema.
    #[error("{0}")]
    Invalid(ValidationReport),

    /// The file extension does not map to a known input or output format.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// The layout engine is not one of the known renderer families.
    #[error("Unsupported engine: {0}")]
    UnsupportedEngine(String),

    /// The template does not belong to the selected engine.
    #[error("Template {template} is not supported by the {engine} engine")]
    UnsupportedTemplate { engine: String, template: String },

    /// The requested layout index does not exist.
    #[error("Layout {0} is out of range (document has {1} layouts)")]
    LayoutOutOfRange(usize, usize),

    /// Neither supported LaTeX compiler is installed.
    #[error("No LaTeX compiler found, install xelatex or tectonic")]
    CompilerNotFound,

    /// JSON serialization or conversion error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_parse_error(message: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => {
            format!("Parse error at line {line}, column {column}: {message}")
        }
        (Some(line), None) => format!("Parse error at line {line}: {message}"),
        _ => format!("Parse error: {message}"),
    }
}

impl Error {
    /// Build a parse error without position information.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Build a parse error at a known 1-based line and column.
    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Error::Parse {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Whether this error describes bad user data rather than bad configuration.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Invalid(_))
    }
}
