//! Render-ready entries, one type per section.
//!
//! Every string here is final text for the target format: summaries went
//! through the summary parser, everything else through the escaper. Absent
//! values are `None`, never an empty string.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedBasics {
    pub name: String,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedLocation {
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    /// Non-empty parts joined with `", "`
    pub full_address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedProfile {
    pub network: String,
    pub username: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedEducation {
    pub institution: String,
    pub area: String,
    /// Translated degree
    pub degree: String,
    pub date_range: String,
    pub url: Option<String>,
    pub score: Option<String>,
    /// Courses joined with the list separator
    pub courses: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedWork {
    pub name: String,
    pub position: String,
    pub date_range: String,
    pub url: Option<String>,
    pub keywords: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedLanguage {
    pub language: String,
    /// Translated fluency
    pub fluency: String,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedSkill {
    pub name: String,
    /// Translated level
    pub level: String,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedAward {
    pub title: String,
    pub awarder: String,
    pub date: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedCertificate {
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPublication {
    pub name: String,
    pub publisher: String,
    pub release_date: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedReference {
    pub name: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedProject {
    pub name: String,
    pub description: Option<String>,
    pub date_range: String,
    pub url: Option<String>,
    pub keywords: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedInterest {
    pub name: String,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedVolunteer {
    pub organization: String,
    pub position: String,
    pub date_range: String,
    pub url: Option<String>,
    pub summary: Option<String>,
}
