//! Declarative document schema.
//!
//! A [`Schema`] is a tree of rules built from the primitives in
//! [`primitives`]. Section schemas live in [`content`] and [`layout`] and are
//! assembled into the [`document_schema`]. Validation walks a plain
//! `serde_json::Value` and collects every [`Issue`] instead of stopping at
//! the first one.

mod content;
mod document;
mod export;
mod formats;
mod layout;
pub mod primitives;
mod rule;

pub use content::{
    award_schema, basics_schema, certificate_schema, content_schema, education_schema,
    interest_schema, language_schema, location_schema, profile_schema, project_schema,
    publication_schema, reference_schema, skill_schema, volunteer_schema, work_schema,
};
pub use document::document_schema;
pub use export::JSON_SCHEMA_DIALECT;
pub use formats::{parse_date, CalendarDate, StringFormat};
pub use layout::layout_schema;
pub use rule::{
    compose, invalid_option_message, quoted_list, Field, FieldMap, Issue, IssueKind, Meta,
    Refinement, Rule, Schema,
};
