//! Line-based HTML indenter.
//!
//! Works on the output of [`HtmlRenderer`](super::HtmlRenderer), where every
//! block element starts on its own line. Every tag on a line counts: the
//! depth after a line is the depth before it plus the elements it opens
//! minus the elements it closes. Closing tags at the start of a line
//! outdent that line.

const INDENT: &str = "  ";

/// Elements without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// One tag found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Open,
    Close,
}

/// Element name at the start of `rest`, the text after `<` or `</`.
fn tag_name(rest: &str) -> &str {
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Tags of a line that change the depth, in order, paired with whether any
/// text or opening tag came before them.
fn scan(line: &str) -> Vec<(Tag, bool)> {
    let mut tags = Vec::new();
    let mut rest = line;
    let mut seen_content = false;

    while let Some(start) = rest.find('<') {
        if !rest[..start].trim().is_empty() {
            seen_content = true;
        }
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            break;
        };
        let body = &after[..end];

        if let Some(closing) = body.strip_prefix('/') {
            if !tag_name(closing).is_empty() {
                tags.push((Tag::Close, seen_content));
            }
        } else if !body.starts_with('!') {
            let name = tag_name(body).to_ascii_lowercase();
            let self_closing = body.ends_with('/');
            if !name.is_empty() && !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
                tags.push((Tag::Open, seen_content));
            }
            seen_content = true;
        }
        rest = &after[end + 1..];
    }
    tags
}

/// Indent HTML one level per open element.
pub fn pretty_print(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 4);
    let mut depth = 0usize;

    for line in html.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let tags = scan(line);
        let leading_closes = tags
            .iter()
            .take_while(|(tag, after_content)| *tag == Tag::Close && !after_content)
            .count();

        for _ in 0..depth.saturating_sub(leading_closes) {
            out.push_str(INDENT);
        }
        out.push_str(line);
        out.push('\n');

        for (tag, _) in tags {
            depth = match tag {
                Tag::Open => depth + 1,
                Tag::Close => depth.saturating_sub(1),
            };
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_nested_blocks() {
        let html = "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Ada</title>\n</head>\n<body>\n<ul>\n<li>a</li>\n</ul>\n</body>\n</html>";
        let expected = "<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Ada</title>\n  </head>\n  <body>\n    <ul>\n      <li>a</li>\n    </ul>\n  </body>\n</html>\n";
        assert_eq!(pretty_print(html), expected);
    }

    #[test]
    fn test_doctype_and_text_lines() {
        let html = "<!DOCTYPE html>\n<style>\nbody { margin: 0; }\n</style>";
        assert_eq!(
            pretty_print(html),
            "<!DOCTYPE html>\n<style>\n  body { margin: 0; }\n</style>\n"
        );
    }

    #[test]
    fn test_unbalanced_input_does_not_underflow() {
        let out = pretty_print("</div>\n</div>\n<p>x</p>");
        assert_eq!(out, "</div>\n</div>\n<p>x</p>\n");
    }

    #[test]
    fn test_nested_list_item_opens_two_levels() {
        let html = "<ul>\n<li>a<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>\n<p>after</p>";
        let expected = "<ul>\n  <li>a<ul>\n      <li>b</li>\n    </ul>\n  </li>\n</ul>\n<p>after</p>\n";
        assert_eq!(pretty_print(html), expected);
    }

    #[test]
    fn test_hard_break_closes_on_next_line() {
        let html = "<div>\n<p>a<br>\nb</p>\n</div>\n<p>after</p>";
        let expected = "<div>\n  <p>a<br>\n    b</p>\n</div>\n<p>after</p>\n";
        assert_eq!(pretty_print(html), expected);
    }

    #[test]
    fn test_self_closing_and_comments_do_not_nest() {
        let html = "<div>\n<!-- note -->\n<img src=\"a.png\"/>\n<br>\n</div>\n<p>x</p>";
        let expected = "<div>\n  <!-- note -->\n  <img src=\"a.png\"/>\n  <br>\n</div>\n<p>x</p>\n";
        assert_eq!(pretty_print(html), expected);
    }

    #[test]
    fn test_scan_counts_every_tag() {
        let tags = scan("</li>\n");
        assert_eq!(tags, vec![(Tag::Close, false)]);

        let tags = scan("<p class=\"x\">a<em>b</em></p>");
        assert_eq!(
            tags,
            vec![
                (Tag::Open, false),
                (Tag::Open, true),
                (Tag::Close, true),
                (Tag::Close, true),
            ]
        );
        assert!(scan("<!DOCTYPE html>").is_empty());
        assert!(scan("<br>").is_empty());
    }
}
