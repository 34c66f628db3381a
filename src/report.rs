//! Clang-style diagnostics for validation errors.
//!
//! ```text
//! resume.yaml:3:11: warning: name should be 2 characters or more.
//!     name: A
//!           ^
//! 1 warning generated.
//! ```

use crate::validate::PositionalError;

/// Format one error: header line, offending source line and caret.
pub fn format_diagnostic(file: &str, source: &str, error: &PositionalError) -> String {
    let mut out = format!(
        "{file}:{}:{}: warning: {}",
        error.line, error.column, error.message
    );

    let Some(line) = error
        .line
        .checked_sub(1)
        .and_then(|index| source.lines().nth(index))
    else {
        return out;
    };

    out.push('\n');
    out.push_str(line);
    out.push('\n');
    // keep tabs so the caret lines up with the source line
    for c in line.chars().take(error.column.saturating_sub(1)) {
        out.push(if c == '\t' { '\t' } else { ' ' });
    }
    out.push('^');
    out
}

/// Format every error followed by a count line.
///
/// Returns an empty string when there are no errors.
pub fn format_diagnostics(file: &str, source: &str, errors: &[PositionalError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut blocks: Vec<String> = errors
        .iter()
        .map(|error| format_diagnostic(file, source, error))
        .collect();
    blocks.push(format!(
        "{} warning{} generated.",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    ));
    blocks.join("\n")
}
