//! Validation engine: schema issues mapped back to source positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::model::Resume;
use crate::schema::{document_schema, IssueKind};
use crate::source::{self, DocPath, ParsedSource};

/// A schema violation located in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalError {
    pub message: String,
    pub path: DocPath,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
    pub kind: IssueKind,
}

impl fmt::Display for PositionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Every violation found in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<PositionalError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<PositionalError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "Resume has {count} validation error{}",
            if count == 1 { "" } else { "s" }
        )?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

/// Validate source text against the document schema.
///
/// Returns every violation, sorted by line. Text that is not well-formed
/// YAML or JSON fails with [`Error::Parse`] instead.
pub fn validate(text: &str, format: SourceFormat) -> Result<Vec<PositionalError>> {
    let parsed = source::parse(text, format)?;
    Ok(validate_parsed(&parsed))
}

/// Validate an already parsed document.
pub fn validate_parsed(parsed: &ParsedSource) -> Vec<PositionalError> {
    let issues = document_schema().validate(&parsed.value);
    log::debug!("schema validation found {} issue(s)", issues.len());

    let mut errors: Vec<PositionalError> = issues
        .into_iter()
        .map(|issue| {
            let position = parsed.positions.locate(&issue.path);
            PositionalError {
                message: issue.message,
                path: issue.path,
                line: position.line,
                column: position.column,
                kind: issue.kind,
            }
        })
        .collect();

    // stable: issues on one line keep schema order
    errors.sort_by_key(|e| e.line);
    errors
}

/// Parse, validate and convert source text into a typed [`Resume`].
///
/// Violations are returned together as [`Error::Invalid`].
pub fn load(text: &str, format: SourceFormat) -> Result<Resume> {
    let parsed = source::parse(text, format)?;
    let errors = validate_parsed(&parsed);
    if !errors.is_empty() {
        return Err(Error::Invalid(ValidationReport::new(errors)));
    }
    Resume::from_value(parsed.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
content:
  basics:
    name: Ada Lovelace
  education:
    - institution: University of London
      area: Mathematics
      degree: Bachelor
      startDate: '1832'
";

    #[test]
    fn test_valid_document_has_no_errors() {
        assert!(validate(VALID, SourceFormat::Yaml).unwrap().is_empty());
    }

    #[test]
    fn test_errors_carry_positions() {
        let text = VALID.replace("name: Ada Lovelace", "name: A");
        let errors = validate(&text, SourceFormat::Yaml).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "name should be 2 characters or more.");
        assert_eq!((errors[0].line, errors[0].column), (3, 11));
        assert_eq!(errors[0].path.to_string(), "content.basics.name");
    }

    #[test]
    fn test_missing_field_maps_to_start() {
        let text = VALID.replace("      degree: Bachelor\n", "");
        let errors = validate(&text, SourceFormat::Yaml).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "degree is required.");
        assert_eq!((errors[0].line, errors[0].column), (1, 1));
    }

    #[test]
    fn test_errors_sorted_by_line() {
        let text = "\
content:
  basics:
    name: A
  education:
    - institution: U
      area: Mathematics
      degree: Bachelor
      startDate: '203e'
";
        let errors = validate(text, SourceFormat::Yaml).unwrap();
        let lines: Vec<usize> = errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 5, 8]);
    }

    #[test]
    fn test_parse_failure_is_not_a_violation() {
        let result = validate("content: [unclosed", SourceFormat::Yaml);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_load() {
        let resume = load(VALID, SourceFormat::Yaml).unwrap();
        assert_eq!(resume.content.basics.name, "Ada Lovelace");

        let err = load("content: {}", SourceFormat::Yaml).unwrap_err();
        match err {
            Error::Invalid(report) => {
                assert_eq!(report.len(), 2);
                assert!(report.to_string().starts_with("Resume has 2 validation errors"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
