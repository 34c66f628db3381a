//! Content section schemas.

use super::primitives::{
    date_schema, email_schema, keywords_schema, name_schema, option_schema, phone_schema,
    position_schema, sized_string, summary_schema, url_schema,
};
use super::rule::{compose, Field, FieldMap, Schema};
use crate::model::{Degree, Fluency, Network, SkillLevel, COUNTRIES, LANGUAGES};

/// Start date, end date and link shared by dated entries.
fn dated_fields() -> FieldMap {
    vec![
        Field::required("startDate", date_schema("startDate")),
        Field::optional("endDate", date_schema("endDate")),
        Field::optional("url", url_schema("url")),
    ]
}

pub fn basics_schema() -> Schema {
    Schema::object(
        "basics",
        vec![
            Field::required("name", name_schema("name").example("Ada Lovelace")),
            Field::optional("headline", sized_string("headline", 8, 128)),
            Field::optional("email", email_schema("email")),
            Field::optional("phone", phone_schema("phone")),
            Field::optional("url", url_schema("url")),
            Field::optional("summary", summary_schema("summary")),
        ],
    )
    .title("Basics")
    .description("Name and contact details.")
}

pub fn location_schema() -> Schema {
    Schema::object(
        "location",
        vec![
            Field::optional("address", sized_string("address", 4, 256)),
            Field::required("city", sized_string("city", 2, 64)),
            Field::optional("region", sized_string("region", 2, 64)),
            Field::optional("country", option_schema("country", COUNTRIES)),
            Field::optional("postalCode", sized_string("postalCode", 2, 16)),
        ],
    )
    .title("Location")
}

pub fn profile_schema() -> Schema {
    Schema::object(
        "profile",
        vec![
            Field::required("network", option_schema("network", Network::VALUES)),
            Field::required("username", sized_string("username", 1, 64)),
            Field::optional("url", url_schema("url")),
        ],
    )
}

pub fn education_schema() -> Schema {
    let own = vec![
        Field::required("area", sized_string("area", 2, 64)),
        Field::required("institution", name_schema("institution")),
        Field::required("degree", option_schema("degree", Degree::VALUES)),
        Field::optional("score", sized_string("score", 2, 32)),
        Field::optional(
            "courses",
            Schema::array("courses", sized_string("course", 2, 128)),
        ),
        Field::optional("summary", summary_schema("summary")),
    ];
    Schema::object("education", compose([own, dated_fields()]))
}

pub fn work_schema() -> Schema {
    let own = vec![
        Field::required("name", name_schema("name")),
        Field::required("position", position_schema("position")),
        Field::optional("keywords", keywords_schema("keywords")),
        Field::required("summary", summary_schema("summary")),
    ];
    Schema::object("work", compose([own, dated_fields()]))
}

pub fn language_schema() -> Schema {
    Schema::object(
        "language",
        vec![
            Field::required("language", option_schema("language", LANGUAGES)),
            Field::required("fluency", option_schema("fluency", Fluency::VALUES)),
            Field::optional("keywords", keywords_schema("keywords")),
        ],
    )
}

pub fn skill_schema() -> Schema {
    Schema::object(
        "skill",
        vec![
            Field::required("name", name_schema("name")),
            Field::required("level", option_schema("level", SkillLevel::VALUES)),
            Field::optional("keywords", keywords_schema("keywords")),
        ],
    )
}

pub fn award_schema() -> Schema {
    Schema::object(
        "award",
        vec![
            Field::required("title", name_schema("title")),
            Field::required("awarder", name_schema("awarder")),
            Field::optional("date", date_schema("date")),
            Field::optional("summary", summary_schema("summary")),
        ],
    )
}

pub fn certificate_schema() -> Schema {
    Schema::object(
        "certificate",
        vec![
            Field::required("name", name_schema("name")),
            Field::required("issuer", name_schema("issuer")),
            Field::optional("date", date_schema("date")),
            Field::optional("url", url_schema("url")),
        ],
    )
}

pub fn publication_schema() -> Schema {
    Schema::object(
        "publication",
        vec![
            Field::required("name", name_schema("name")),
            Field::required("publisher", name_schema("publisher")),
            Field::optional("releaseDate", date_schema("releaseDate")),
            Field::optional("url", url_schema("url")),
            Field::optional("summary", summary_schema("summary")),
        ],
    )
}

pub fn reference_schema() -> Schema {
    Schema::object(
        "reference",
        vec![
            Field::required("name", name_schema("name")),
            Field::required("summary", summary_schema("summary")),
            Field::optional("relationship", name_schema("relationship")),
            Field::optional("email", email_schema("email")),
            Field::optional("phone", phone_schema("phone")),
        ],
    )
}

pub fn project_schema() -> Schema {
    let own = vec![
        Field::required("name", name_schema("name")),
        Field::optional("description", sized_string("description", 2, 128)),
        Field::optional("keywords", keywords_schema("keywords")),
        Field::optional("summary", summary_schema("summary")),
    ];
    Schema::object("project", compose([own, dated_fields()]))
}

pub fn interest_schema() -> Schema {
    Schema::object(
        "interest",
        vec![
            Field::required("name", name_schema("name")),
            Field::optional("keywords", keywords_schema("keywords")),
        ],
    )
}

pub fn volunteer_schema() -> Schema {
    let own = vec![
        Field::required("organization", name_schema("organization")),
        Field::required("position", position_schema("position")),
        Field::required("summary", summary_schema("summary")),
    ];
    Schema::object("volunteer", compose([own, dated_fields()]))
}

/// Header fields: who the resume is about and how to reach them.
fn core_info_fields() -> FieldMap {
    vec![
        Field::required("basics", basics_schema()),
        Field::optional("location", location_schema()),
        Field::optional(
            "profiles",
            Schema::array("profiles", profile_schema()).title("Profiles"),
        ),
    ]
}

fn list(label: &str, title: &str, item: Schema) -> Schema {
    Schema::array(label, item).title(title)
}

fn body_fields() -> FieldMap {
    vec![
        Field::required(
            "education",
            list("education", "Education", education_schema()).min_items(1),
        ),
        Field::optional("work", list("work", "Work", work_schema())),
        Field::optional("languages", list("languages", "Languages", language_schema())),
        Field::optional("skills", list("skills", "Skills", skill_schema())),
        Field::optional("awards", list("awards", "Awards", award_schema())),
        Field::optional(
            "certificates",
            list("certificates", "Certificates", certificate_schema()),
        ),
        Field::optional(
            "publications",
            list("publications", "Publications", publication_schema()),
        ),
        Field::optional(
            "references",
            list("references", "References", reference_schema()),
        ),
        Field::optional("projects", list("projects", "Projects", project_schema())),
        Field::optional("interests", list("interests", "Interests", interest_schema())),
        Field::optional("volunteer", list("volunteer", "Volunteer", volunteer_schema())),
    ]
}

/// Schema of the `content` object.
pub fn content_schema() -> Schema {
    Schema::object("content", compose([core_info_fields(), body_fields()]))
        .title("Content")
        .description("Factual resume data.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(schema: &Schema, value: serde_json::Value) -> Vec<String> {
        schema
            .validate(&value)
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_work_reports_each_missing_field() {
        let messages = messages(
            &work_schema(),
            json!({ "position": "Engineer", "startDate": "2020-01" }),
        );
        assert_eq!(messages, vec!["name is required.", "summary is required."]);
    }

    #[test]
    fn test_education_required_fields() {
        let messages = messages(&education_schema(), json!({}));
        assert_eq!(
            messages,
            vec![
                "area is required.",
                "institution is required.",
                "degree is required.",
                "startDate is required.",
            ]
        );
    }

    #[test]
    fn test_education_degree_option() {
        let issues = education_schema().validate(&json!({
            "area": "Computer Science",
            "institution": "MIT",
            "degree": "PhD",
            "startDate": "2010"
        }));
        assert_eq!(issues.len(), 1);
        assert!(issues[0]
            .message
            .starts_with("degree option is invalid, it must be one of the following: [\"Middle School\""));
    }

    #[test]
    fn test_content_requires_education_item() {
        let messages = messages(
            &content_schema(),
            json!({ "basics": { "name": "Ada Lovelace" }, "education": [] }),
        );
        assert_eq!(messages, vec!["education should contain at least 1 item."]);
    }

    #[test]
    fn test_content_empty_optional_lists_pass() {
        let issues = content_schema().validate(&json!({
            "basics": { "name": "Ada Lovelace" },
            "education": [{
                "area": "Mathematics",
                "institution": "University of London",
                "degree": "Bachelor",
                "startDate": "1832"
            }],
            "work": [],
            "skills": [],
            "profiles": []
        }));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_location_country_option() {
        let issues = location_schema().validate(&json!({ "city": "Oslo", "country": "Norway" }));
        assert!(issues.is_empty());
        let issues = location_schema().validate(&json!({ "city": "Oslo", "country": "Norge" }));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_schemas_build_without_collisions() {
        let content = content_schema();
        assert!(content.field("basics").is_some_and(|f| f.required));
        assert!(content.field("education").is_some_and(|f| f.required));
        assert!(content.field("work").is_some_and(|f| !f.required));
    }
}
