//! String formats checked after length bounds.

use chrono::{DateTime, Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());
static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap());
static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]+)\.? (\d{4})$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap());
static MARGIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?(cm|pt|in)$").unwrap());

/// Full-date shapes accepted by chrono.
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y"];

/// Extra constraint on a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Date,
    Email,
    Url,
    Phone,
    Margin,
}

impl StringFormat {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StringFormat::Date => parse_date(value).is_some(),
            StringFormat::Email => EMAIL.is_match(value),
            StringFormat::Url => URL.is_match(value),
            StringFormat::Phone => is_phone(value),
            StringFormat::Margin => MARGIN.is_match(value),
        }
    }

    /// Message reported when a value does not match.
    pub fn message(&self, label: &str) -> String {
        match self {
            StringFormat::Margin => format!(
                "{label} should be a number followed by a unit, i.e. cm, pt or in."
            ),
            _ => format!("{label} is invalid."),
        }
    }

    /// JSON Schema `format` keyword, where one exists.
    pub fn json_format(&self) -> Option<&'static str> {
        match self {
            StringFormat::Email => Some("email"),
            StringFormat::Url => Some("uri"),
            _ => None,
        }
    }

    /// JSON Schema `pattern` keyword, where one exists.
    pub fn json_pattern(&self) -> Option<&'static str> {
        match self {
            StringFormat::Margin => Some(MARGIN.as_str()),
            _ => None,
        }
    }
}

/// A calendar date with optional month and day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl CalendarDate {
    fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }

    fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self {
            year,
            month: Some(month),
            day: None,
        })
    }
}

/// Parse a date in any accepted shape.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY/MM/DD`, `Mon YYYY`,
/// `Month YYYY`, `Mon D, YYYY`, `Month D, YYYY` and RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Option<CalendarDate> {
    let value = value.trim();

    if YEAR.is_match(value) {
        return value.parse().ok().map(|year| CalendarDate {
            year,
            month: None,
            day: None,
        });
    }

    if let Some(caps) = YEAR_MONTH.captures(value) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        return CalendarDate::month(year, month);
    }

    if let Some(caps) = MONTH_YEAR.captures(value) {
        let candidate = format!("1 {} {}", &caps[1], &caps[2]);
        return NaiveDate::parse_from_str(&candidate, "%d %B %Y")
            .ok()
            .and_then(|date| CalendarDate::month(date.year(), date.month()));
    }

    for format in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(CalendarDate::from_naive(date));
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| CalendarDate::from_naive(datetime.date_naive()))
}

/// Phone number check: an optional leading `+`, then digits, spaces,
/// hyphens and non-nested balanced parentheses, with 4 to 15 digits.
fn is_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    if body.starts_with('(') && body.len() != value.len() {
        return false;
    }

    let mut digits = 0;
    let mut open = false;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' => {}
            '(' if !open => open = true,
            ')' if open => open = false,
            _ => return false,
        }
    }

    !open && (4..=15).contains(&digits)
}
