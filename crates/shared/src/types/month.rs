//! Calendar month value type.
//!
//! Months travel as `YYYY-MM` strings at every boundary (JSON, database
//! columns) and are ordered chronologically.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Largest year representable in the four-digit `YYYY-MM` form.
pub const MAX_YEAR: i32 = 9999;

/// Errors produced when building or parsing a [`YearMonth`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearMonthError {
    /// Text is not in `YYYY-MM` form.
    #[error("invalid month format, expected YYYY-MM: {0}")]
    Format(String),

    /// Month number outside 1..=12.
    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),

    /// Year outside 0..=9999.
    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

/// A calendar month (year plus month number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, validating the ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in 1..=12 or `year` is not in 0..=9999.
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::MonthOutOfRange(month));
        }
        if !(0..=MAX_YEAR).contains(&year) {
            return Err(YearMonthError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the month `months` after this one, rolling over year boundaries.
    ///
    /// `None` if the result falls after `9999-12`.
    ///
    /// ```
    /// use duoledger_shared::types::YearMonth;
    ///
    /// let nov: YearMonth = "2024-11".parse().unwrap();
    /// assert_eq!(nov.add_months(2), "2025-01".parse().ok());
    /// ```
    #[must_use]
    pub fn add_months(self, months: u32) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Self::new(year, month).ok()
    }

    /// Returns true if `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    /// Returns the half-open date range `[first day, first day of next month)`.
    ///
    /// `None` only if the dates fall outside chrono's supported range.
    #[must_use]
    pub fn date_range(self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        // Computed on dates so 9999-12 still gets an end bound.
        let end = start.checked_add_months(chrono::Months::new(1))?;
        Some((start, end))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || YearMonthError::Format(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(format_error)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(format_error());
        }

        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let month = ym("2024-03");
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[rstest]
    #[case("2024-3")]
    #[case("24-03")]
    #[case("2024-13")]
    #[case("2024-00")]
    #[case("2024/03")]
    #[case("2024-03-01")]
    #[case("")]
    #[case("+024-03")]
    fn test_parse_rejects_malformed(#[case] raw: &str) {
        assert!(raw.parse::<YearMonth>().is_err());
    }

    #[rstest]
    #[case("2024-11", 0, "2024-11")]
    #[case("2024-11", 1, "2024-12")]
    #[case("2024-11", 2, "2025-01")]
    #[case("2024-01", 12, "2025-01")]
    #[case("2024-12", 25, "2027-01")]
    fn test_add_months(#[case] start: &str, #[case] months: u32, #[case] expected: &str) {
        assert_eq!(ym(start).add_months(months), Some(ym(expected)));
    }

    #[rstest]
    #[case("9999-12", 1)]
    #[case("9999-01", 12)]
    #[case("2024-01", u32::MAX)]
    fn test_add_months_past_last_year_is_none(#[case] start: &str, #[case] months: u32) {
        assert_eq!(ym(start).add_months(months), None);
    }

    #[test]
    fn test_add_months_results_parse_back() {
        let last = ym("9998-12").add_months(12).unwrap();
        assert_eq!(last, ym("9999-12"));
        assert_eq!(last.to_string().parse::<YearMonth>(), Ok(last));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(ym("2024-12") < ym("2025-01"));
        assert!(ym("2025-01") < ym("2025-02"));
    }

    #[test]
    fn test_of_and_contains() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(YearMonth::of(date), ym("2024-02"));
        assert!(ym("2024-02").contains(date));
        assert!(!ym("2024-03").contains(date));
    }

    #[test]
    fn test_date_range_is_half_open() {
        let (start, end) = ym("2024-12").date_range().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let (_, end) = ym("9999-12").date_range().unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap());
    }

    #[test]
    fn test_new_validates_ranges() {
        assert_eq!(
            YearMonth::new(2024, 13),
            Err(YearMonthError::MonthOutOfRange(13))
        );
        assert_eq!(
            YearMonth::new(10_000, 1),
            Err(YearMonthError::YearOutOfRange(10_000))
        );
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&ym("2025-01")).unwrap();
        assert_eq!(json, "\"2025-01\"");

        let parsed: YearMonth = serde_json::from_str("\"2025-01\"").unwrap();
        assert_eq!(parsed, ym("2025-01"));

        assert!(serde_json::from_str::<YearMonth>("\"2025-1\"").is_err());
    }
}
