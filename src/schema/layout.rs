//! Layout schemas.

use serde_json::{Map, Value};

use super::primitives::{boolean_schema, margin_schema, option_schema, sized_string};
use super::rule::{quoted_list, Field, Rule, Schema};
use crate::model::{Engine, FontSize, FontspecNumbers, Locale, Section, Template};

fn locale_schema() -> Schema {
    Schema::object(
        "locale",
        vec![Field::optional(
            "language",
            option_schema("language", Locale::VALUES)
                .description("Language of section titles and labels.")
                .example("en"),
        )],
    )
}

fn margins_schema() -> Schema {
    Schema::object(
        "margins",
        vec![
            Field::optional("top", margin_schema("top")),
            Field::optional("bottom", margin_schema("bottom")),
            Field::optional("left", margin_schema("left")),
            Field::optional("right", margin_schema("right")),
        ],
    )
    .description("Page margins, 2.5cm top and bottom and 1.5cm left and right by default.")
}

fn page_schema() -> Schema {
    Schema::object(
        "page",
        vec![Field::optional(
            "showPageNumbers",
            boolean_schema("showPageNumbers"),
        )],
    )
}

fn typography_schema() -> Schema {
    Schema::object(
        "typography",
        vec![Field::optional(
            "fontSize",
            option_schema("fontSize", FontSize::VALUES).example("11pt"),
        )],
    )
}

fn sections_schema() -> Schema {
    let orderable: Vec<&'static str> = Section::ORDERABLE.iter().map(|s| s.as_str()).collect();
    Schema::object(
        "sections",
        vec![
            Field::optional(
                "order",
                Schema::array("order", option_schema("section", &orderable))
                    .description("Sections listed here come first, in this order."),
            ),
            Field::optional(
                "aliases",
                Schema::new(
                    "aliases",
                    Rule::Record {
                        keys: Section::VALUES.to_vec(),
                        values: Box::new(sized_string("alias", 1, 128)),
                    },
                )
                .description("Custom section titles."),
            ),
        ],
    )
}

fn advanced_schema() -> Schema {
    Schema::object(
        "advanced",
        vec![
            Field::optional("showIcons", boolean_schema("showIcons")),
            Field::optional(
                "fontspec",
                Schema::object(
                    "fontspec",
                    vec![Field::optional(
                        "numbers",
                        option_schema("numbers", FontspecNumbers::VALUES),
                    )],
                ),
            ),
        ],
    )
}

/// A template must belong to the engine of its layout.
fn template_matches_engine(layout: &Map<String, Value>) -> Vec<(&'static str, String)> {
    let engine = layout.get("engine").and_then(Value::as_str).and_then(Engine::parse);
    let template = layout
        .get("template")
        .and_then(Value::as_str)
        .and_then(Template::parse);

    match (engine, template) {
        (Some(engine), Some(template)) if template.engine() != engine => {
            let options: Vec<&str> = engine.templates().iter().map(|t| t.as_str()).collect();
            vec![(
                "template",
                format!(
                    "template option is invalid for the {engine} engine, it must be one of the following: [{}].",
                    quoted_list(&options)
                ),
            )]
        }
        _ => Vec::new(),
    }
}

/// Schema of one layout.
pub fn layout_schema() -> Schema {
    Schema::object(
        "layout",
        vec![
            Field::required(
                "engine",
                option_schema("engine", Engine::VALUES)
                    .description("Output format.")
                    .example("latex"),
            ),
            Field::optional(
                "template",
                option_schema("template", Template::VALUES)
                    .description("Visual template, must belong to the engine."),
            ),
            Field::optional("locale", locale_schema()),
            Field::optional("margins", margins_schema()),
            Field::optional("page", page_schema()),
            Field::optional("typography", typography_schema()),
            Field::optional("sections", sections_schema()),
            Field::optional("advanced", advanced_schema()),
        ],
    )
    .refine(template_matches_engine)
    .title("Layout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_like_layout_passes() {
        let issues = layout_schema().validate(&json!({
            "engine": "latex",
            "template": "moderncv-casual",
            "margins": { "top": "2cm", "left": "1in" },
            "typography": { "fontSize": "12pt" },
            "sections": { "order": ["work", "education"], "aliases": { "work": "Experience" } },
            "advanced": { "showIcons": false, "fontspec": { "numbers": "OldStyle" } }
        }));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_template_must_match_engine() {
        let issues = layout_schema().validate(&json!({ "engine": "html", "template": "moderncv-banking" }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "template");
        assert_eq!(
            issues[0].message,
            "template option is invalid for the html engine, it must be one of the following: [\"calm\", \"minimal\"]."
        );
    }

    #[test]
    fn test_engine_required() {
        let issues = layout_schema().validate(&json!({}));
        assert_eq!(issues[0].message, "engine is required.");
    }

    #[test]
    fn test_basics_not_orderable() {
        let issues = layout_schema().validate(&json!({
            "engine": "markdown",
            "sections": { "order": ["basics"] }
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "sections.order[0]");
    }

    #[test]
    fn test_margin_error_path() {
        let issues = layout_schema().validate(&json!({
            "engine": "latex",
            "margins": { "bottom": "1" }
        }));
        assert_eq!(issues[0].path.to_string(), "margins.bottom");
    }
}
