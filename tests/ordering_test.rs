//! Section order and alias tests across engines.

use resumark::{Resumark, SourceFormat};

fn document(layout: &str) -> String {
    format!(
        "\
content:
  basics:
    name: Ada Lovelace
    summary: Mathematician and writer of notes.
  education:
    - institution: University of London
      area: Mathematics
      degree: Bachelor
      startDate: '1832'
  work:
    - name: Analytical Engine Co
      position: Programmer
      startDate: 1842-10
      summary: Wrote the first published algorithm.
  skills:
    - name: Mathematics
      level: Expert
  interests:
    - name: Poetry
{layout}"
    )
}

fn render(layout: &str) -> String {
    Resumark::new()
        .load_str(&document(layout), SourceFormat::Yaml)
        .unwrap()
        .render()
        .unwrap()
        .content
}

fn positions(text: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| {
            text.find(n)
                .unwrap_or_else(|| panic!("`{n}` missing from output:\n{text}"))
        })
        .collect()
}

fn assert_increasing(values: &[usize]) {
    assert!(
        values.windows(2).all(|w| w[0] < w[1]),
        "out of order: {values:?}"
    );
}

#[test]
fn test_default_order() {
    let md = render("layout:\n  engine: markdown\n");
    let found = positions(
        &md,
        &["## Summary", "## Education", "## Work", "## Skills", "## Interests"],
    );
    assert_increasing(&found);
}

#[test]
fn test_custom_order_comes_first() {
    let md = render(
        "\
layout:
  engine: markdown
  sections:
    order: [interests, work]
",
    );
    let found = positions(
        &md,
        &[
            "# Ada Lovelace",
            "## Summary",
            "## Interests",
            "## Work",
            "## Education",
            "## Skills",
        ],
    );
    assert_increasing(&found);
}

#[test]
fn test_empty_sections_are_skipped() {
    let md = render("layout:\n  engine: markdown\n");
    assert!(!md.contains("## Awards"));
    assert!(!md.contains("## Volunteer"));
}

#[test]
fn test_aliases_rename_titles() {
    let html = render(
        "\
layout:
  engine: html
  sections:
    order: [work]
    aliases:
      work: Experience
      education: Studies
",
    );
    assert!(html.contains("<h2>Experience</h2>"));
    assert!(html.contains("<h2>Studies</h2>"));
    assert!(!html.contains("<h2>Work</h2>"));
    assert_increasing(&positions(&html, &["<h2>Experience</h2>", "<h2>Studies</h2>"]));
}

#[test]
fn test_latex_follows_order() {
    let tex = render(
        "\
layout:
  engine: latex
  sections:
    order: [skills, education]
",
    );
    let found = positions(
        &tex,
        &[
            "\\makecvtitle",
            "\\section{Skills}",
            "\\section{Education}",
            "\\section{Work}",
            "\\section{Interests}",
        ],
    );
    assert_increasing(&found);
}
