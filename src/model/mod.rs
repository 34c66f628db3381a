//! Typed resume model.
//!
//! These types are produced from a plain value only after it passed schema
//! validation, and are read-only from then on: the compute layer and the
//! renderers only ever borrow them.

mod options;
mod content;
mod layout;
mod resume;

pub use content::{
    Award, Basics, Certificate, Content, Education, Interest, Language, Location, Profile,
    Project, Publication, Reference, Skill, Volunteer, Work,
};
pub use layout::{
    Advanced, Fontspec, Layout, LocaleConfig, Margins, PageConfig, SectionsConfig, Typography,
    DEFAULT_HORIZONTAL_MARGIN, DEFAULT_VERTICAL_MARGIN,
};
pub use options::{
    Degree, Engine, Fluency, FontSize, FontspecNumbers, Locale, Network, Section, SkillLevel,
    Template, COUNTRIES, LANGUAGES,
};
pub use resume::{prune_nulls, Resume};
