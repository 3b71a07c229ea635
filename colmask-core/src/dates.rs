//! Lenient date parsing used to validate date-like cells before replacement.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Month-first wins over day-first; `%d/%m/%Y` only matches when the first
// field cannot be a month.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%Y%m%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses `value` as a calendar date, trying a range of common layouts.
///
/// Surrounding whitespace is ignored. Time components and offsets are
/// accepted and discarded.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use colmask_core::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2023, 5, 1);
/// assert_eq!(parse_date("2023-05-01"), expected);
/// assert_eq!(parse_date("05/01/2023"), expected);
/// assert_eq!(parse_date("May 1, 2023"), expected);
/// assert_eq!(parse_date("2023-05-01T08:30:00Z"), expected);
/// assert_eq!(parse_date("13/13/2023"), None);
/// ```
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|datetime| datetime.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}
