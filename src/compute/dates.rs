//! Localized dates and date ranges.

use crate::locale::Terms;
use crate::schema::parse_date;

/// Separator between the start and end of a range.
pub const RANGE_SEPARATOR: &str = " – ";

/// Format a date for display: `Mar 2020` style, or the year alone when only
/// a year was given.
///
/// Text that does not parse is returned unchanged.
pub fn format_date(raw: &str, terms: &Terms) -> String {
    match parse_date(raw) {
        Some(date) => match date.month {
            Some(month) => terms.month_year(month, date.year),
            None => date.year.to_string(),
        },
        None => {
            log::warn!("keeping unparseable date `{raw}` as written");
            raw.trim().to_string()
        }
    }
}

/// Format `start – end`, or `start` alone without an end.
pub fn date_range(start: &str, end: Option<&str>, terms: &Terms) -> String {
    let start = format_date(start, terms);
    match end.map(str::trim).filter(|e| !e.is_empty()) {
        Some(end) => format!("{start}{RANGE_SEPARATOR}{}", format_date(end, terms)),
        None => start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::terms_for;
    use crate::model::Locale;

    #[test]
    fn test_format_date() {
        let en = terms_for(Locale::English);
        assert_eq!(format_date("2020-03-14", en), "Mar 2020");
        assert_eq!(format_date("2020", en), "2020");
        assert_eq!(format_date("September 2019", en), "Sep 2019");
        assert_eq!(format_date("whenever", en), "whenever");
    }

    #[test]
    fn test_date_range() {
        let en = terms_for(Locale::English);
        assert_eq!(date_range("2019-01", Some("2021-06"), en), "Jan 2019 – Jun 2021");
        assert_eq!(date_range("2019-01", None, en), "Jan 2019");
        assert_eq!(date_range("2019", Some(""), en), "2019");
    }

    #[test]
    fn test_localized_range() {
        let ja = terms_for(Locale::Japanese);
        assert_eq!(date_range("2019-01", Some("2020"), ja), "2019年1月 – 2020");
        let de = terms_for(Locale::German);
        assert_eq!(format_date("2020-03", de), "März 2020");
    }
}
