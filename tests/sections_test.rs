//! Every optional section rendered through every engine.

use resumark::{validate, Engine, Resumark, SourceFormat};

const BASICS: &str = "\
content:
  basics:
    name: Ada Lovelace
    email: ada@example.com
";

const SUMMARY: &str = "    summary: Mathematician and writer of the first published algorithm.\n";

const CORE: &str = "\
\x20 location:
    city: Ockham
    country: United Kingdom
  profiles:
    - network: GitHub
      username: adalovelace
  education:
    - institution: University of London
      area: Mathematics
      degree: Bachelor
      startDate: '1832'
";

/// Optional sections as `(key, English title, YAML block)`.
const SECTIONS: &[(&str, &str, &str)] = &[
    (
        "work",
        "Work",
        "\
\x20 work:
    - name: Analytical Engine Co
      position: Programmer
      startDate: 1842-10
      endDate: 1843-09
      summary: Wrote the first published algorithm.
",
    ),
    (
        "languages",
        "Languages",
        "\
\x20 languages:
    - language: English
      fluency: Native or Bilingual Proficiency
",
    ),
    (
        "skills",
        "Skills",
        "\
\x20 skills:
    - name: Mathematics
      level: Expert
      keywords: [Calculus, Probability]
",
    ),
    (
        "awards",
        "Awards",
        "\
\x20 awards:
    - title: Royal Medal
      awarder: Royal Society
      date: 1840-05
      summary: Awarded for the notes on the engine.
    - title: Honorary Fellow
      awarder: Analytical Society
",
    ),
    (
        "certificates",
        "Certificates",
        "\
\x20 certificates:
    - name: Difference Engine Operator
      issuer: Babbage Institute
      date: '1841'
      url: https://example.com/cert
    - name: Loom Basics
      issuer: Jacquard Guild
",
    ),
    (
        "publications",
        "Publications",
        "\
\x20 publications:
    - name: Sketch of the Analytical Engine
      publisher: Scientific Memoirs
      releaseDate: 1843-09
      url: https://example.com/sketch
      summary: Translation with extensive notes.
    - name: Letters
      publisher: Private Press
",
    ),
    (
        "references",
        "References",
        "\
\x20 references:
    - name: Charles Babbage
      relationship: Colleague
      email: charles@example.com
      phone: +44 20 7946 0001
      summary: The most careful analyst I have met.
    - name: Mary Somerville
      summary: A gifted and diligent mathematician.
",
    ),
    (
        "projects",
        "Projects",
        "\
\x20 projects:
    - name: Bernoulli Tables
      description: Note G program
      startDate: '1843'
      endDate: '1844'
      url: https://example.com/bernoulli
      keywords: [Loops, Tables]
      summary: Tables of Bernoulli numbers for the engine.
    - name: Flying Machine
      startDate: '1828'
",
    ),
    (
        "interests",
        "Interests",
        "\
\x20 interests:
    - name: Poetry
      keywords: [Verse, Metaphysics]
    - name: Horses
",
    ),
    (
        "volunteer",
        "Volunteer",
        "\
\x20 volunteer:
    - organization: Mechanics Institute
      position: Tutor
      startDate: 1840-01
      url: https://example.com/institute
      summary: Taught evening classes in algebra.
    - organization: Ladies Guild
      position: Treasurer
      startDate: '1838'
      summary: Kept the accounts of the guild.
",
    ),
];

const LAYOUTS: &str = "\
layouts:
  - engine: latex
  - engine: html
  - engine: markdown
";

const ENGINES: [Engine; 3] = [Engine::Latex, Engine::Html, Engine::Markdown];

/// The full document, leaving out the section named `without`.
fn document(without: Option<&str>) -> String {
    let mut text = String::from(BASICS);
    if without != Some("summary") {
        text.push_str(SUMMARY);
    }
    text.push_str(CORE);
    for (key, _, block) in SECTIONS {
        if without != Some(*key) {
            text.push_str(block);
        }
    }
    text.push_str(LAYOUTS);
    text
}

/// Render every layout of `text`, HTML without indentation.
fn render(text: &str) -> Vec<(Engine, String)> {
    Resumark::new()
        .with_pretty_html(false)
        .load_str(text, SourceFormat::Yaml)
        .unwrap()
        .render_all()
        .unwrap()
        .into_iter()
        .map(|r| (r.engine, r.content))
        .collect()
}

fn render_engine(engine: Engine) -> String {
    render(&document(None))
        .into_iter()
        .find(|(e, _)| *e == engine)
        .map(|(_, content)| content)
        .unwrap()
}

fn heading(engine: Engine, title: &str) -> String {
    match engine {
        Engine::Latex => format!("\\section{{{title}}}"),
        Engine::Html => format!("<h2>{title}</h2>"),
        Engine::Markdown => format!("\n## {title}\n"),
    }
}

#[test]
fn test_full_document_is_valid() {
    let errors = validate(&document(None), SourceFormat::Yaml).unwrap();
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn test_every_section_has_a_heading() {
    for (engine, out) in render(&document(None)) {
        assert_eq!(ENGINES.iter().filter(|e| **e == engine).count(), 1);
        for (_, title, _) in SECTIONS {
            assert!(out.contains(&heading(engine, title)), "{engine}: {title}");
        }
        assert!(out.contains(&heading(engine, "Summary")), "{engine}");
        assert!(out.contains("Ockham"), "{engine}");
        assert!(out.contains("adalovelace"), "{engine}");
    }
}

#[test]
fn test_dropping_a_section_removes_its_heading() {
    let dropped = SECTIONS
        .iter()
        .map(|(key, title, _)| (*key, *title))
        .chain([("summary", "Summary")]);

    for (key, title) in dropped {
        let text = document(Some(key));
        assert!(validate(&text, SourceFormat::Yaml).unwrap().is_empty(), "{key}");

        let outputs = render(&text);
        assert_eq!(outputs.len(), ENGINES.len());
        for (engine, out) in outputs {
            assert!(!out.contains(&heading(engine, title)), "{engine} without {key}");
            assert!(!out.contains("null"), "{engine} without {key}");
            assert!(!out.contains("undefined"), "{engine} without {key}");
            for (other, other_title, _) in SECTIONS {
                if *other != key {
                    assert!(
                        out.contains(&heading(engine, other_title)),
                        "{engine} without {key} lost {other}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_latex_entries() {
    let tex = render_engine(Engine::Latex);
    let expected = [
        r"\cvitemwithcomment{English}{Native or Bilingual Proficiency}{}",
        r"\cventry{May 1840}{Royal Medal}{Royal Society}{}{}{Awarded for the notes on the engine.}",
        r"\cventry{}{Honorary Fellow}{Analytical Society}{}{}{}",
        r"\cventry{1841}{\href{https://example.com/cert}{Difference Engine Operator}}{Babbage Institute}{}{}{}",
        r"\cventry{}{Loom Basics}{Jacquard Guild}{}{}{}",
        r"\cventry{Sep 1843}{\href{https://example.com/sketch}{Sketch of the Analytical Engine}}{Scientific Memoirs}{}{}{Translation with extensive notes.}",
        r"\cventry{}{Letters}{Private Press}{}{}{}",
        r"\cventry{}{Charles Babbage}{Colleague}{charles@example.com}{+44 20 7946 0001}{The most careful analyst I have met.}",
        r"\cventry{}{Mary Somerville}{}{}{}{A gifted and diligent mathematician.}",
        "\\cventry{1843 – 1844}{\\href{https://example.com/bernoulli}{Bernoulli Tables}}{Note G program}{}{}{Tables of Bernoulli numbers for the engine.\\newline\n\\textit{Keywords}: Loops, Tables}",
        r"\cventry{1828}{Flying Machine}{}{}{}{}",
        r"\cvitem{Poetry}{Verse, Metaphysics}",
        r"\cvitem{Horses}{}",
        r"\cventry{Jan 1840}{Tutor}{\href{https://example.com/institute}{Mechanics Institute}}{}{}{Taught evening classes in algebra.}",
        r"\cventry{1838}{Treasurer}{Ladies Guild}{}{}{Kept the accounts of the guild.}",
    ];
    for entry in expected {
        assert!(tex.contains(entry), "missing `{entry}` in:\n{tex}");
    }
}

#[test]
fn test_html_entries() {
    let html = render_engine(Engine::Html);
    let expected = [
        "<section class=\"awards\">\n<h2>Awards</h2>\n\
<div class=\"entry\">\n<div class=\"entry-header\">\n<h3>Royal Medal</h3>\n<span class=\"date\">May 1840</span>\n</div>\n\
<p class=\"subtitle\">Royal Society</p>\n<p>Awarded for the notes on the engine.</p>\n</div>\n\
<div class=\"entry\">\n<div class=\"entry-header\">\n<h3>Honorary Fellow</h3>\n</div>\n\
<p class=\"subtitle\">Analytical Society</p>\n</div>\n</section>",
        "<h3><a href=\"https://example.com/cert\">Difference Engine Operator</a></h3>\n<span class=\"date\">1841</span>\n</div>\n<p class=\"subtitle\">Babbage Institute</p>\n</div>",
        "<h3>Loom Basics</h3>\n</div>\n<p class=\"subtitle\">Jacquard Guild</p>\n</div>",
        "<h3><a href=\"https://example.com/sketch\">Sketch of the Analytical Engine</a></h3>\n<span class=\"date\">Sep 1843</span>\n</div>\n<p class=\"subtitle\">Scientific Memoirs</p>\n<p>Translation with extensive notes.</p>\n</div>",
        "<h3>Letters</h3>\n</div>\n<p class=\"subtitle\">Private Press</p>\n</div>",
        "<h3>Charles Babbage</h3>\n</div>\n<p class=\"subtitle\">Colleague</p>\n<p>The most careful analyst I have met.</p>\n\
<p class=\"meta\"><strong>Email:</strong> charles@example.com</p>\n\
<p class=\"meta\"><strong>Phone:</strong> +44 20 7946 0001</p>\n</div>",
        "<h3>Mary Somerville</h3>\n</div>\n<p>A gifted and diligent mathematician.</p>\n</div>",
        "<h3><a href=\"https://example.com/bernoulli\">Bernoulli Tables</a></h3>\n<span class=\"date\">1843 – 1844</span>\n</div>\n\
<p class=\"subtitle\">Note G program</p>\n<p>Tables of Bernoulli numbers for the engine.</p>\n\
<p class=\"meta\"><strong>Keywords:</strong> Loops, Tables</p>\n</div>",
        "<h3>Flying Machine</h3>\n<span class=\"date\">1828</span>\n</div>\n</div>",
        "<h3>Poetry</h3>\n</div>\n<p class=\"subtitle\">Verse, Metaphysics</p>\n</div>",
        "<h3>Horses</h3>\n</div>\n</div>",
        "<h3><a href=\"https://example.com/institute\">Mechanics Institute</a></h3>\n<span class=\"date\">Jan 1840</span>\n</div>\n\
<p class=\"subtitle\">Tutor</p>\n<p>Taught evening classes in algebra.</p>\n</div>",
        "<h3>Ladies Guild</h3>\n<span class=\"date\">1838</span>\n</div>\n<p class=\"subtitle\">Treasurer</p>\n<p>Kept the accounts of the guild.</p>\n</div>",
    ];
    for entry in expected {
        assert!(html.contains(entry), "missing `{entry}` in:\n{html}");
    }
}

#[test]
fn test_markdown_entries() {
    let md = render_engine(Engine::Markdown);
    let expected = [
        "## Languages\n\n- **English**: Native or Bilingual Proficiency",
        "## Awards\n\n### Royal Medal\n\n*Royal Society | May 1840*\n\nAwarded for the notes on the engine.\n\n\
### Honorary Fellow\n\n*Analytical Society*\n\n## ",
        "### [Difference Engine Operator](https://example.com/cert)\n\n*Babbage Institute | 1841*",
        "### Loom Basics\n\n*Jacquard Guild*\n\n## ",
        "### [Sketch of the Analytical Engine](https://example.com/sketch)\n\n*Scientific Memoirs | Sep 1843*\n\nTranslation with extensive notes.",
        "### Letters\n\n*Private Press*\n\n## ",
        "### Charles Babbage\n\n*Colleague*\n\nThe most careful analyst I have met.\n\n\
**Email:** charles@example.com\n\n**Phone:** +44 20 7946 0001",
        "### Mary Somerville\n\nA gifted and diligent mathematician.",
        "### [Bernoulli Tables](https://example.com/bernoulli)\n\n*Note G program | 1843 – 1844*\n\n\
Tables of Bernoulli numbers for the engine.\n\n**Keywords:** Loops, Tables",
        "### Flying Machine\n\n*1828*\n\n## ",
        "## Interests\n\n- **Poetry**: Verse, Metaphysics\n- **Horses**\n",
        "### [Mechanics Institute](https://example.com/institute)\n\n*Tutor | Jan 1840*\n\nTaught evening classes in algebra.",
        "### Ladies Guild\n\n*Treasurer | 1838*\n\nKept the accounts of the guild.\n",
    ];
    for entry in expected {
        assert!(md.contains(entry), "missing `{entry}` in:\n{md}");
    }
}
