//! Heuristic classification of cell values.
//!
//! Each pattern is tested against the start of the trimmed value only, so
//! trailing text never prevents a match (`"2023-05-01 extra"` is still a
//! date). Patterns are tried in a fixed order and the first hit wins.

use std::{fmt, sync::LazyLock};

use regex::Regex;

macro_rules! prefix_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

prefix_pattern!(RE_ISO_DATE, r"^\d{4}-\d{2}-\d{2}");
prefix_pattern!(RE_US_DATE, r"^\d{2}/\d{2}/\d{4}");
prefix_pattern!(RE_CURRENCY, r"^\$\d+(,\d{3})*(\.\d{2})?");
prefix_pattern!(
    RE_TELEPHONE,
    r"^(\+\d{1,3})?\s?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
);

/// Classification assigned to a single cell value.
///
/// # Examples
/// ```
/// use colmask_core::ValueKind;
///
/// assert_eq!(ValueKind::Currency.as_str(), "currency");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// A calendar date such as `2023-05-01` or `05/01/2023`.
    Date,
    /// A dollar amount such as `$1,234.56`.
    Currency,
    /// A telephone number such as `+1 (555) 123-4567`.
    Telephone,
    /// Anything the heuristics do not recognise, including empty values.
    Unknown,
}

impl ValueKind {
    /// All kinds in detection order, with the fallback last.
    pub const ALL: [Self; 4] = [Self::Date, Self::Currency, Self::Telephone, Self::Unknown];

    /// Returns a stable lowercase label for logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Currency => "currency",
            Self::Telephone => "telephone",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `value` using ordered, prefix-anchored patterns.
///
/// Leading and trailing whitespace is ignored. Values that are empty after
/// trimming are [`ValueKind::Unknown`].
///
/// # Examples
/// ```
/// use colmask_core::{ValueKind, detect_value_kind};
///
/// assert_eq!(detect_value_kind("2023-05-01"), ValueKind::Date);
/// assert_eq!(detect_value_kind("05/01/2023"), ValueKind::Date);
/// assert_eq!(detect_value_kind("$1,234.56"), ValueKind::Currency);
/// assert_eq!(detect_value_kind("+1 (555) 123-4567"), ValueKind::Telephone);
/// assert_eq!(detect_value_kind("   "), ValueKind::Unknown);
/// ```
#[must_use]
pub fn detect_value_kind(value: &str) -> ValueKind {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValueKind::Unknown;
    }

    if matches(&RE_ISO_DATE, trimmed) || matches(&RE_US_DATE, trimmed) {
        ValueKind::Date
    } else if matches(&RE_CURRENCY, trimmed) {
        ValueKind::Currency
    } else if matches(&RE_TELEPHONE, trimmed) {
        ValueKind::Telephone
    } else {
        ValueKind::Unknown
    }
}

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::iso("2023-05-01", ValueKind::Date)]
    #[case::iso_trailing_text("2023-05-01...", ValueKind::Date)]
    #[case::iso_datetime("2023-05-01T10:15:00Z", ValueKind::Date)]
    #[case::us("05/01/2023", ValueKind::Date)]
    #[case::us_impossible_month("99/99/9999", ValueKind::Date)]
    #[case::padded(" 2023-05-01 ", ValueKind::Date)]
    #[case::currency("$1,234.56", ValueKind::Currency)]
    #[case::currency_plain("$5", ValueKind::Currency)]
    #[case::currency_trailing_text("$12abc", ValueKind::Currency)]
    #[case::phone_international("+1 (555) 123-4567", ValueKind::Telephone)]
    #[case::phone_dashes("555-123-4567", ValueKind::Telephone)]
    #[case::phone_dots("555.123.4567", ValueKind::Telephone)]
    #[case::phone_bare("5551234567", ValueKind::Telephone)]
    #[case::empty("", ValueKind::Unknown)]
    #[case::whitespace(" \t ", ValueKind::Unknown)]
    #[case::word("alice", ValueKind::Unknown)]
    #[case::date_not_at_start("due 2023-05-01", ValueKind::Unknown)]
    #[case::euro("€12.00", ValueKind::Unknown)]
    #[case::short_digits("12345", ValueKind::Unknown)]
    fn detect_value_kind_classifies(#[case] value: &str, #[case] expected: ValueKind) {
        assert_eq!(detect_value_kind(value), expected);
    }

    #[test]
    fn us_date_wins_over_telephone_shape() {
        // Ten digits split 3-3-4 after the date prefix still read as a date.
        assert_eq!(detect_value_kind("12/31/1999 555-123-4567"), ValueKind::Date);
        assert_eq!(detect_value_kind("555-123-4567"), ValueKind::Telephone);
    }

    #[test]
    fn all_kinds_have_distinct_labels() {
        let labels: std::collections::HashSet<_> =
            ValueKind::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(labels.len(), ValueKind::ALL.len());
    }
}
