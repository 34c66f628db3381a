//! Position-preserving source loading.
//!
//! Parsing yields two things: the plain value handed to the schema, and a
//! [`PositionTable`] from document path to the line and column where that
//! node starts. Validation consumes the value; reporting consumes the table.

mod path;
mod yaml;

pub use path::{DocPath, PathSegment};

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::detect::SourceFormat;
use crate::error::{Error, Result};

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position used when a path has no node in the source.
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Start positions of every node in a parsed document, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct PositionTable {
    entries: HashMap<DocPath, Position>,
}

impl PositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start position of a node.
    pub fn insert(&mut self, path: DocPath, position: Position) {
        self.entries.insert(path, position);
    }

    /// Exact lookup.
    pub fn get(&self, path: &DocPath) -> Option<Position> {
        self.entries.get(path).copied()
    }

    /// Position of a node, or the start of the file when the node is absent.
    pub fn locate(&self, path: &DocPath) -> Position {
        self.get(path).unwrap_or_else(Position::start)
    }

    /// Number of recorded nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no node was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed source document.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    /// Plain data tree
    pub value: Value,
    /// Node positions keyed by path
    pub positions: PositionTable,
    /// Format the text was parsed as
    pub format: SourceFormat,
}

/// Parse source text.
///
/// JSON input is first checked with `serde_json` so structural errors carry
/// JSON-specific messages; positions are then collected with the YAML loader,
/// which accepts JSON syntax.
pub fn parse(text: &str, format: SourceFormat) -> Result<ParsedSource> {
    if format == SourceFormat::Json {
        if let Err(e) = serde_json::from_str::<Value>(text) {
            return Err(Error::parse_at(e.to_string(), e.line(), e.column()));
        }
    }

    let (value, positions) = yaml::load(text)?;
    Ok(ParsedSource {
        value,
        positions,
        format,
    })
}

/// Read and parse a resume file, inferring the format from its extension.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(String, ParsedSource)> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let parsed = parse(&text, format)?;
    Ok((text, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let parsed = parse("content:\n  basics:\n    name: Ada\n", SourceFormat::Yaml).unwrap();
        assert_eq!(parsed.value["content"]["basics"]["name"], "Ada");
        assert_eq!(parsed.format, SourceFormat::Yaml);
    }

    #[test]
    fn test_parse_json_error_has_position() {
        let err = parse("{\n  \"content\": ,\n}", SourceFormat::Json).unwrap_err();
        match err {
            Error::Parse { line, column, .. } => {
                assert_eq!(line, Some(2));
                assert!(column.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_locate_missing_path_defaults_to_start() {
        let table = PositionTable::new();
        let path = DocPath::from_segments(["content", "basics"]);
        assert_eq!(table.locate(&path), Position::new(1, 1));
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, r#"{"content": {"basics": {"name": "Ada"}}}"#).unwrap();

        let (text, parsed) = parse_file(&path).unwrap();
        assert!(text.contains("Ada"));
        assert_eq!(parsed.format, SourceFormat::Json);

        let bad = dir.path().join("resume.txt");
        std::fs::write(&bad, "x").unwrap();
        assert!(matches!(parse_file(&bad), Err(Error::UnsupportedExtension(_))));
    }
}
