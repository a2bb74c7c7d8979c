//! Date display utilities.
//!
//! This module provides a wrapper type for formatting civil dates in a
//! consistent, human-readable format that includes the weekday.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil `Date` that formats it with its weekday via the
/// `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD (Ddd)`, for example
/// `2024-01-01 (Mon)`.
pub struct CalendarDate<'a>(pub &'a Date);

impl<'a> fmt::Display for CalendarDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d (%a)"))
    }
}

/// Formats a list of dates as a comma separated line.
pub(crate) fn join_dates(dates: &[Date]) -> String {
    dates
        .iter()
        .map(|date| CalendarDate(date).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_calendar_date_includes_weekday() {
        assert_eq!(CalendarDate(&date(2024, 1, 1)).to_string(), "2024-01-01 (Mon)");
        assert_eq!(CalendarDate(&date(2024, 2, 29)).to_string(), "2024-02-29 (Thu)");
    }

    #[test]
    fn test_join_dates() {
        let dates = [date(2024, 1, 4), date(2024, 1, 8)];
        assert_eq!(join_dates(&dates), "2024-01-04 (Thu), 2024-01-08 (Mon)");
        assert_eq!(join_dates(&[]), "");
    }
}
