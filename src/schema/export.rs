//! JSON Schema (draft 2020-12) export.

use serde_json::{json, Map, Value};

use super::rule::{Rule, Schema};

/// `$schema` URI of the exported dialect.
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

impl Schema {
    /// Export this schema as a JSON Schema document.
    ///
    /// Titles, descriptions and examples are carried over unchanged. Cross-field
    /// refinements have no JSON Schema equivalent and are left out.
    pub fn to_json_schema(&self) -> Value {
        let mut root = self.to_json_node();
        if let Value::Object(map) = &mut root {
            map.insert("$schema".into(), json!(JSON_SCHEMA_DIALECT));
        }
        root
    }

    fn to_json_node(&self) -> Value {
        let mut node = Map::new();

        match &self.rule {
            Rule::String { min, max, format } => {
                node.insert("type".into(), json!("string"));
                if let Some(min) = min {
                    node.insert("minLength".into(), json!(min));
                }
                if let Some(max) = max {
                    node.insert("maxLength".into(), json!(max));
                }
                if let Some(format) = format {
                    if let Some(name) = format.json_format() {
                        node.insert("format".into(), json!(name));
                    }
                    if let Some(pattern) = format.json_pattern() {
                        node.insert("pattern".into(), json!(pattern));
                    }
                }
            }
            Rule::Enum { options } => {
                node.insert("type".into(), json!("string"));
                node.insert("enum".into(), json!(options));
            }
            Rule::Boolean => {
                node.insert("type".into(), json!("boolean"));
            }
            Rule::Array { items, min_items } => {
                node.insert("type".into(), json!("array"));
                node.insert("items".into(), items.to_json_node());
                if let Some(min) = min_items {
                    node.insert("minItems".into(), json!(min));
                }
            }
            Rule::Object { fields, .. } => {
                let properties: Map<String, Value> = fields
                    .iter()
                    .map(|f| (f.name.to_string(), f.schema.to_json_node()))
                    .collect();
                let required: Vec<&str> = fields
                    .iter()
                    .filter(|f| f.required)
                    .map(|f| f.name)
                    .collect();

                node.insert("type".into(), json!("object"));
                node.insert("properties".into(), Value::Object(properties));
                if !required.is_empty() {
                    node.insert("required".into(), json!(required));
                }
                node.insert("additionalProperties".into(), json!(false));
            }
            Rule::Record { keys, values } => {
                node.insert("type".into(), json!("object"));
                node.insert("propertyNames".into(), json!({ "enum": keys }));
                node.insert("additionalProperties".into(), values.to_json_node());
            }
        }

        if let Some(title) = &self.meta.title {
            node.insert("title".into(), json!(title));
        }
        if let Some(description) = &self.meta.description {
            node.insert("description".into(), json!(description));
        }
        if !self.meta.examples.is_empty() {
            node.insert("examples".into(), json!(self.meta.examples));
        }

        Value::Object(node)
    }
}
