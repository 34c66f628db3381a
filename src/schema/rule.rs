//! Rule types and evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::formats::StringFormat;
use crate::source::DocPath;

/// Documentation attached to a rule, exported to JSON Schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Category of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent
    Required,
    /// A string is shorter than its minimum
    TooShort,
    /// A string is longer than its maximum
    TooLong,
    /// A list has fewer items than its minimum
    TooFew,
    /// A value is not one of the allowed options
    InvalidOption,
    /// A value has the right type but the wrong format
    Invalid,
    /// A value has the wrong type
    InvalidType,
}

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    pub path: DocPath,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// A cross-field check on an object. Returns the offending field name and
/// a message for each violation.
pub type Refinement = fn(&Map<String, Value>) -> Vec<(&'static str, String)>;

/// A field of an object rule.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub required: bool,
}

impl Field {
    /// A field that must be present.
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
        }
    }

    /// A field that may be absent.
    pub fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
        }
    }
}

/// An ordered set of fields, the unit of schema composition.
pub type FieldMap = Vec<Field>;

/// Merge field maps into one, keeping declaration order.
///
/// # Panics
///
/// Panics when two maps declare the same field name. Schemas are assembled
/// from static declarations, so a collision is a programming error.
pub fn compose<I>(maps: I) -> FieldMap
where
    I: IntoIterator<Item = FieldMap>,
{
    let mut merged: FieldMap = Vec::new();
    for map in maps {
        for field in map {
            assert!(
                !merged.iter().any(|f| f.name == field.name),
                "duplicate field `{}` in composed schema",
                field.name
            );
            merged.push(field);
        }
    }
    merged
}

/// Shape of the values a schema accepts.
#[derive(Debug, Clone)]
pub enum Rule {
    String {
        min: Option<usize>,
        max: Option<usize>,
        format: Option<StringFormat>,
    },
    Enum {
        options: Vec<&'static str>,
    },
    Boolean,
    Array {
        items: Box<Schema>,
        min_items: Option<usize>,
    },
    Object {
        fields: FieldMap,
        refinements: Vec<Refinement>,
    },
    /// An object with arbitrary keys drawn from a fixed set.
    Record {
        keys: Vec<&'static str>,
        values: Box<Schema>,
    },
}

/// A rule with its human-readable label and documentation.
#[derive(Debug, Clone)]
pub struct Schema {
    pub label: String,
    pub rule: Rule,
    pub meta: Meta,
}

impl Schema {
    /// Create a schema from a rule.
    pub fn new(label: impl Into<String>, rule: Rule) -> Self {
        Self {
            label: label.into(),
            rule,
            meta: Meta::default(),
        }
    }

    /// An object schema.
    pub fn object(label: impl Into<String>, fields: FieldMap) -> Self {
        Self::new(
            label,
            Rule::Object {
                fields,
                refinements: Vec::new(),
            },
        )
    }

    /// An array schema.
    pub fn array(label: impl Into<String>, items: Schema) -> Self {
        Self::new(
            label,
            Rule::Array {
                items: Box::new(items),
                min_items: None,
            },
        )
    }

    /// Require at least `n` items. No effect on non-array rules.
    pub fn min_items(mut self, n: usize) -> Self {
        if let Rule::Array { min_items, .. } = &mut self.rule {
            *min_items = Some(n);
        }
        self
    }

    /// Add a cross-field check. No effect on non-object rules.
    pub fn refine(mut self, refinement: Refinement) -> Self {
        if let Rule::Object { refinements, .. } = &mut self.rule {
            refinements.push(refinement);
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.meta.examples.push(example.into());
        self
    }

    /// Look up a field of an object rule.
    pub fn field(&self, name: &str) -> Option<&Field> {
        match &self.rule {
            Rule::Object { fields, .. } => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Message reported when this value is required but absent.
    pub fn required_message(&self) -> String {
        format!("{} is required.", self.label)
    }

    /// Validate a value, collecting every violation.
    pub fn validate(&self, value: &Value) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut path = DocPath::root();
        self.check(value, &mut path, &mut issues);
        issues
    }

    /// Validate a single optional value the way an object field would be.
    ///
    /// `None` and `null` are absent and reported as required.
    pub fn parse(&self, value: Option<&Value>) -> Result<Value, Vec<Issue>> {
        match value {
            None | Some(Value::Null) => Err(vec![Issue {
                kind: IssueKind::Required,
                message: self.required_message(),
                path: DocPath::root(),
            }]),
            Some(value) => {
                let issues = self.validate(value);
                if issues.is_empty() {
                    Ok(value.clone())
                } else {
                    Err(issues)
                }
            }
        }
    }

    pub(crate) fn check(&self, value: &Value, path: &mut DocPath, issues: &mut Vec<Issue>) {
        let mut report = |kind: IssueKind, message: String| {
            issues.push(Issue {
                kind,
                message,
                path: path.clone(),
            })
        };

        match &self.rule {
            Rule::String { min, max, format } => {
                let Some(text) = value.as_str() else {
                    report(
                        IssueKind::InvalidType,
                        format!("{} should be a string.", self.label),
                    );
                    return;
                };
                let len = text.chars().count();
                if let Some(min) = min.filter(|min| len < *min) {
                    report(
                        IssueKind::TooShort,
                        format!("{} should be {} characters or more.", self.label, min),
                    );
                } else if let Some(max) = max.filter(|max| len > *max) {
                    report(
                        IssueKind::TooLong,
                        format!("{} should be {} characters or less.", self.label, max),
                    );
                } else if let Some(format) = format {
                    if !format.matches(text) {
                        report(IssueKind::Invalid, format.message(&self.label));
                    }
                }
            }
            Rule::Enum { options } => {
                let valid = value.as_str().is_some_and(|s| options.contains(&s));
                if !valid {
                    report(
                        IssueKind::InvalidOption,
                        invalid_option_message(&self.label, options),
                    );
                }
            }
            Rule::Boolean => {
                if !value.is_boolean() {
                    report(
                        IssueKind::InvalidType,
                        format!("{} should be a boolean.", self.label),
                    );
                }
            }
            Rule::Array { items, min_items } => {
                let Some(values) = value.as_array() else {
                    report(
                        IssueKind::InvalidType,
                        format!("{} should be a list.", self.label),
                    );
                    return;
                };
                if let Some(min) = min_items.filter(|min| values.len() < *min) {
                    report(
                        IssueKind::TooFew,
                        format!(
                            "{} should contain at least {} item{}.",
                            self.label,
                            min,
                            if min == 1 { "" } else { "s" }
                        ),
                    );
                }
                for (index, item) in values.iter().enumerate() {
                    path.push(index);
                    if item.is_null() {
                        issues.push(Issue {
                            kind: IssueKind::Required,
                            message: items.required_message(),
                            path: path.clone(),
                        });
                    } else {
                        items.check(item, path, issues);
                    }
                    path.pop();
                }
            }
            Rule::Object {
                fields,
                refinements,
            } => {
                let Some(map) = value.as_object() else {
                    report(
                        IssueKind::InvalidType,
                        format!("{} should be an object.", self.label),
                    );
                    return;
                };
                for field in fields {
                    path.push(field.name);
                    match map.get(field.name) {
                        None | Some(Value::Null) => {
                            if field.required {
                                issues.push(Issue {
                                    kind: IssueKind::Required,
                                    message: field.schema.required_message(),
                                    path: path.clone(),
                                });
                            }
                        }
                        Some(child) => field.schema.check(child, path, issues),
                    }
                    path.pop();
                }
                for refinement in refinements {
                    for (field, message) in refinement(map) {
                        issues.push(Issue {
                            kind: IssueKind::Invalid,
                            message,
                            path: path.child(field),
                        });
                    }
                }
            }
            Rule::Record { keys, values } => {
                let Some(map) = value.as_object() else {
                    report(
                        IssueKind::InvalidType,
                        format!("{} should be an object.", self.label),
                    );
                    return;
                };
                for (key, child) in map {
                    path.push(key.as_str());
                    if !keys.contains(&key.as_str()) {
                        issues.push(Issue {
                            kind: IssueKind::InvalidOption,
                            message: invalid_option_message(&format!("{} key", self.label), keys),
                            path: path.clone(),
                        });
                    } else if !child.is_null() {
                        values.check(child, path, issues);
                    }
                    path.pop();
                }
            }
        }
    }
}

/// Message for a value outside an enumerated option set.
pub fn invalid_option_message(label: &str, options: &[&str]) -> String {
    format!(
        "{label} option is invalid, it must be one of the following: [{}].",
        quoted_list(options)
    )
}

/// Options as a comma-separated list of quoted strings.
pub fn quoted_list(options: &[&str]) -> String {
    options
        .iter()
        .map(|o| format!("\"{o}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn string(label: &str, min: usize, max: usize) -> Schema {
        Schema::new(
            label,
            Rule::String {
                min: Some(min),
                max: Some(max),
                format: None,
            },
        )
    }

    #[test]
    fn test_object_collects_every_missing_field() {
        let schema = Schema::object(
            "work",
            vec![
                Field::required("name", string("name", 2, 128)),
                Field::required("summary", string("summary", 16, 1024)),
                Field::optional("url", string("url", 2, 256)),
            ],
        );

        let issues = schema.validate(&json!({}));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "name is required.");
        assert_eq!(issues[0].path.to_string(), "name");
        assert_eq!(issues[1].message, "summary is required.");
    }

    #[test]
    fn test_null_is_absent() {
        let schema = Schema::object(
            "basics",
            vec![
                Field::required("name", string("name", 2, 128)),
                Field::optional("email", string("email", 2, 128)),
            ],
        );
        let issues = schema.validate(&json!({ "name": null, "email": null }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Required);
    }

    #[test]
    fn test_array_paths_and_min_items() {
        let schema = Schema::array("keywords", string("keyword", 1, 4)).min_items(1);
        let issues = schema.validate(&json!([]));
        assert_eq!(issues[0].message, "keywords should contain at least 1 item.");

        let issues = schema.validate(&json!(["ok", "too long"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "[1]");
        assert_eq!(issues[0].kind, IssueKind::TooLong);
    }

    #[test]
    fn test_type_mismatch() {
        let schema = string("name", 2, 128);
        let issues = schema.validate(&json!(42));
        assert_eq!(issues[0].message, "name should be a string.");
        assert_eq!(issues[0].kind, IssueKind::InvalidType);
    }

    #[test]
    fn test_enum_lists_options() {
        let schema = Schema::new(
            "engine",
            Rule::Enum {
                options: vec!["latex", "html"],
            },
        );
        let issues = schema.validate(&json!("pdf"));
        assert_eq!(
            issues[0].message,
            "engine option is invalid, it must be one of the following: [\"latex\", \"html\"]."
        );
    }

    #[test]
    fn test_record_rejects_unknown_keys() {
        let schema = Schema::new(
            "aliases",
            Rule::Record {
                keys: vec!["work", "education"],
                values: Box::new(string("alias", 1, 8)),
            },
        );
        let issues = schema.validate(&json!({ "work": "Jobs", "hobbies": "Fun" }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "hobbies");
        assert_eq!(issues[0].kind, IssueKind::InvalidOption);
    }

    #[test]
    fn test_refinement_reports_at_field() {
        fn no_same(map: &Map<String, Value>) -> Vec<(&'static str, String)> {
            if map.get("a") == map.get("b") {
                vec![("b", "b must differ from a.".to_string())]
            } else {
                Vec::new()
            }
        }
        let schema = Schema::object(
            "pair",
            vec![
                Field::required("a", string("a", 1, 8)),
                Field::required("b", string("b", 1, 8)),
            ],
        )
        .refine(no_same);
        let issues = schema.validate(&json!({ "a": "x", "b": "x" }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "b");
    }

    #[test]
    fn test_compose_keeps_order() {
        let merged = compose([
            vec![Field::required("name", string("name", 2, 128))],
            vec![Field::optional("url", string("url", 2, 256))],
        ]);
        let names: Vec<_> = merged.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "url"]);
    }

    #[test]
    #[should_panic(expected = "duplicate field `name`")]
    fn test_compose_panics_on_collision() {
        compose([
            vec![Field::required("name", string("name", 2, 128))],
            vec![Field::optional("name", string("name", 2, 64))],
        ]);
    }

    #[test]
    fn test_parse_absent_value() {
        let schema = string("name", 2, 128);
        let err = schema.parse(None).unwrap_err();
        assert_eq!(err[0].message, "name is required.");
        assert_eq!(schema.parse(Some(&json!("Ada"))).unwrap(), json!("Ada"));
    }
}
