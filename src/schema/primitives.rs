//! Primitive rule builders with uniform messages.
//!
//! Every builder takes the human-readable label used in messages, so the
//! same rule reads "name is required." in one place and "issuer is
//! required." in another.

use super::formats::StringFormat;
use super::rule::{Rule, Schema};

/// A string of `min..=max` characters.
pub fn sized_string(label: &str, min: usize, max: usize) -> Schema {
    Schema::new(
        label,
        Rule::String {
            min: Some(min),
            max: Some(max),
            format: None,
        },
    )
}

/// A string with length bounds and a format check.
pub fn formatted_string(label: &str, min: usize, max: usize, format: StringFormat) -> Schema {
    Schema::new(
        label,
        Rule::String {
            min: Some(min),
            max: Some(max),
            format: Some(format),
        },
    )
}

/// A proper name: 2 to 128 characters.
pub fn name_schema(label: &str) -> Schema {
    sized_string(label, 2, 128)
}

/// A job or volunteer position: 2 to 64 characters.
pub fn position_schema(label: &str) -> Schema {
    sized_string(label, 2, 64)
}

/// Free-form Markdown text: 16 to 1024 characters.
pub fn summary_schema(label: &str) -> Schema {
    sized_string(label, 16, 1024).description("Markdown text, rendered per output format.")
}

/// A calendar date in one of the accepted shapes.
pub fn date_schema(label: &str) -> Schema {
    formatted_string(label, 4, 32, StringFormat::Date)
        .description("A date such as 2020, 2020-03, 2020-03-14 or Mar 2020.")
        .example("2020-03-14")
}

pub fn email_schema(label: &str) -> Schema {
    formatted_string(label, 4, 128, StringFormat::Email).example("ada@example.com")
}

pub fn url_schema(label: &str) -> Schema {
    formatted_string(label, 1, 256, StringFormat::Url).example("https://example.com")
}

pub fn phone_schema(label: &str) -> Schema {
    formatted_string(label, 4, 32, StringFormat::Phone).example("+1 (555) 123-4567")
}

/// A LaTeX length such as `2.5cm`, `1in` or `72pt`.
pub fn margin_schema(label: &str) -> Schema {
    Schema::new(
        label,
        Rule::String {
            min: None,
            max: None,
            format: Some(StringFormat::Margin),
        },
    )
    .example("2.5cm")
}

/// One of a fixed set of strings.
pub fn option_schema(label: &str, options: &[&'static str]) -> Schema {
    Schema::new(
        label,
        Rule::Enum {
            options: options.to_vec(),
        },
    )
}

pub fn boolean_schema(label: &str) -> Schema {
    Schema::new(label, Rule::Boolean)
}

/// A list of short tags, each 1 to 32 characters.
pub fn keywords_schema(label: &str) -> Schema {
    Schema::array(label, sized_string("keyword", 1, 32))
}
