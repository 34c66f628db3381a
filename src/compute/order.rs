//! Section ordering.

use crate::model::Section;

/// Sections rendered before the ordered body, in this order.
pub const CORE_SECTIONS: &[Section] = &[
    Section::Basics,
    Section::Location,
    Section::Profiles,
    Section::Summary,
];

/// Default body order: education and career, languages and skills, paper
/// credentials, people and projects, then the rest.
pub const DEFAULT_ORDER: &[Section] = Section::ORDERABLE;

/// Merge a custom order into the default one.
///
/// Custom entries come first, duplicates and non-orderable sections are
/// skipped, remaining sections keep their default relative order. Sections
/// for which `present` is false are dropped.
pub fn merge_order<F>(custom: &[Section], present: F) -> Vec<Section>
where
    F: Fn(Section) -> bool,
{
    let mut merged: Vec<Section> = Vec::with_capacity(DEFAULT_ORDER.len());
    for section in custom.iter().chain(DEFAULT_ORDER) {
        if section.is_orderable() && !merged.contains(section) {
            merged.push(*section);
        }
    }
    merged.retain(|s| present(*s));
    merged
}
