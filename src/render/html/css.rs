//! Inlined stylesheets, one per HTML template.

use super::HtmlTemplate;

const CALM: &str = r#"
:root { --accent: #2b6cb0; --muted: #5a6472; --rule: #e2e8f0; }
* { box-sizing: border-box; }
body { margin: 0; background: #f7fafc; color: #1a202c; font: 15px/1.6 "Helvetica Neue", Arial, sans-serif; }
.page { max-width: 860px; margin: 2rem auto; padding: 2.5rem 3rem; background: #fff; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08); }
header { border-bottom: 2px solid var(--accent); padding-bottom: 1rem; margin-bottom: 1.5rem; }
h1 { margin: 0; font-size: 2.2rem; font-weight: 300; letter-spacing: 0.02em; }
.headline { margin: 0.25rem 0 0.75rem; color: var(--muted); font-size: 1.1rem; }
.contact, .profiles { list-style: none; margin: 0.25rem 0 0; padding: 0; display: flex; flex-wrap: wrap; gap: 0.4rem 1.25rem; }
.icon { color: var(--accent); margin-right: 0.3rem; }
a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }
h2 { color: var(--accent); font-size: 1.15rem; text-transform: uppercase; letter-spacing: 0.08em; border-bottom: 1px solid var(--rule); padding-bottom: 0.2rem; margin: 1.75rem 0 0.75rem; }
.entry { margin-bottom: 1rem; }
.entry-header { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
h3 { margin: 0; font-size: 1rem; }
.date { color: var(--muted); white-space: nowrap; font-size: 0.9rem; }
.subtitle { margin: 0; font-style: italic; color: var(--muted); }
.meta { margin: 0.2rem 0; font-size: 0.9rem; }
footer { margin-top: 2rem; color: var(--muted); font-size: 0.8rem; text-align: center; }
@media print { body { background: #fff; } .page { box-shadow: none; margin: 0; padding: 0; } footer { display: none; } }
"#;

const MINIMAL: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; color: #111; font: 14px/1.5 Georgia, "Times New Roman", serif; }
.page { max-width: 760px; margin: 0 auto; padding: 2rem 1.5rem; }
header { text-align: center; margin-bottom: 1.5rem; }
h1 { margin: 0; font-size: 1.9rem; font-weight: normal; }
.headline { margin: 0.2rem 0 0.5rem; }
.contact, .profiles { list-style: none; margin: 0; padding: 0; }
.contact li, .profiles li { display: inline; margin: 0 0.5rem; }
.icon { margin-right: 0.2rem; }
a { color: inherit; }
h2 { font-size: 1rem; font-weight: bold; text-transform: uppercase; margin: 1.5rem 0 0.5rem; }
.entry { margin-bottom: 0.75rem; }
.entry-header { display: flex; justify-content: space-between; }
h3 { margin: 0; font-size: 1rem; }
.subtitle { margin: 0; font-style: italic; }
.meta { margin: 0.1rem 0; }
footer { margin-top: 1.5rem; font-size: 0.75rem; text-align: center; }
@media print { footer { display: none; } }
"#;

/// Stylesheet of a template, without surrounding blank lines.
pub(super) fn stylesheet(template: HtmlTemplate) -> &'static str {
    match template {
        HtmlTemplate::Calm => CALM.trim(),
        HtmlTemplate::Minimal => MINIMAL.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheets_differ() {
        assert_ne!(
            stylesheet(HtmlTemplate::Calm),
            stylesheet(HtmlTemplate::Minimal)
        );
        for template in [HtmlTemplate::Calm, HtmlTemplate::Minimal] {
            let css = stylesheet(template);
            assert_eq!(css.matches('{').count(), css.matches('}').count());
            assert!(!css.contains("</"));
        }
    }
}
