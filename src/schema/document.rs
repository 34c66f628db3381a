//! The document schema: content plus one or more layouts.

use once_cell::sync::Lazy;

use super::content::content_schema;
use super::layout::layout_schema;
use super::rule::{Field, Schema};

static DOCUMENT: Lazy<Schema> = Lazy::new(build_document_schema);

fn build_document_schema() -> Schema {
    Schema::object(
        "resume",
        vec![
            Field::required("content", content_schema()),
            Field::optional("layout", layout_schema()),
            Field::optional(
                "layouts",
                Schema::array("layouts", layout_schema())
                    .description("Several outputs rendered from the same content."),
            ),
        ],
    )
    .title("Resume")
    .description("A resume document: content and the layouts to render it with.")
}

/// The schema every resume document is validated against.
pub fn document_schema() -> &'static Schema {
    &DOCUMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_content_is_one_error() {
        let issues = document_schema().validate(&json!({ "layout": { "engine": "html" } }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "content is required.");
    }

    #[test]
    fn test_layouts_are_validated_by_index() {
        let issues = document_schema().validate(&json!({
            "content": {
                "basics": { "name": "Ada Lovelace" },
                "education": [{
                    "area": "Mathematics",
                    "institution": "University of London",
                    "degree": "Bachelor",
                    "startDate": "1832"
                }]
            },
            "layouts": [{ "engine": "html" }, { "engine": "pdf" }]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "layouts[1].engine");
    }

    #[test]
    fn test_json_schema_export() {
        let exported = document_schema().to_json_schema();
        assert_eq!(exported["title"], "Resume");
        assert_eq!(exported["required"], json!(["content"]));
        assert_eq!(
            exported["properties"]["content"]["properties"]["education"]["minItems"],
            1
        );
    }
}
