//! Escapers for each output format.

use unicode_normalization::UnicodeNormalization;

use super::Escaper;

/// Leaves text untouched. Used for Markdown output.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEscaper;

impl Escaper for IdentityEscaper {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Replaces HTML-significant characters with entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.nfc() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            }
        }
        out
    }
}

/// Escapes LaTeX special characters so the text typesets verbatim.
///
/// Input is NFC-normalized first; decomposed accents do not survive xelatex
/// with most fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexEscaper;

impl Escaper for LatexEscaper {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.nfc() {
            match c {
                '\\' => out.push_str(r"\textbackslash{}"),
                '{' => out.push_str(r"\{"),
                '}' => out.push_str(r"\}"),
                '$' => out.push_str(r"\$"),
                '&' => out.push_str(r"\&"),
                '#' => out.push_str(r"\#"),
                '%' => out.push_str(r"\%"),
                '_' => out.push_str(r"\_"),
                '^' => out.push_str(r"\textasciicircum{}"),
                '~' => out.push_str(r"\textasciitilde{}"),
                c => out.push(c),
            }
        }
        out
    }

    /// Backslashes and braces are percent-encoded, then `%` and `#` are
    /// escaped for `\href` and `\url`.
    fn escape_url(&self, url: &str) -> String {
        let mut out = String::with_capacity(url.len());
        for c in url.chars() {
            match c {
                '%' => out.push_str(r"\%"),
                '#' => out.push_str(r"\#"),
                '\\' => out.push_str(r"\%5C"),
                '{' => out.push_str(r"\%7B"),
                '}' => out.push_str(r"\%7D"),
                c => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(IdentityEscaper.escape("a_b & <c>"), "a_b & <c>");
    }

    #[test]
    fn test_html_escaper() {
        assert_eq!(
            HtmlEscaper.escape(r#"<b>"R&D"</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_latex_escaper() {
        assert_eq!(LatexEscaper.escape("R&D 100% C# a_b"), r"R\&D 100\% C\# a\_b");
        assert_eq!(LatexEscaper.escape(r"{x}\y"), r"\{x\}\textbackslash{}y");
        assert_eq!(LatexEscaper.escape("~^"), r"\textasciitilde{}\textasciicircum{}");
    }

    #[test]
    fn test_latex_url() {
        assert_eq!(
            LatexEscaper.escape_url("https://x.org/a_b#c"),
            r"https://x.org/a_b\#c"
        );
        assert_eq!(HtmlEscaper.escape_url("/?a=1&b=2"), "/?a=1&amp;b=2");
    }

    #[test]
    fn test_latex_url_encodes_braces_and_backslashes() {
        assert_eq!(
            LatexEscaper.escape_url(r"https://x.org/a}b\c{d%20"),
            r"https://x.org/a\%7Db\%5Cc\%7Bd\%20"
        );
    }

    #[test]
    fn test_normalizes_decomposed_accents() {
        let decomposed = "Jose\u{301}";
        assert_eq!(LatexEscaper.escape(decomposed), "José");
        assert_eq!(HtmlEscaper.escape(decomposed), "José");
    }
}
