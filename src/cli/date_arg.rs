//! Date argument parsing for CLI commands.

use chrono::{NaiveDate, TimeDelta};
use std::str::FromStr;

use crate::domain::{DateKey, today};

/// A date given on the command line.
///
/// Always within the years a [`DateKey`] can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArg(NaiveDate);

impl DateArg {
    /// Parses a date argument relative to `today`.
    ///
    /// Accepts:
    /// - Named: "today", "yesterday", "tomorrow"
    /// - Relative: "3d" (days ago)
    /// - Absolute: "2024-01-15" (strict YYYY-MM-DD)
    pub fn parse_relative_to(s: &str, today: NaiveDate) -> Result<Self, String> {
        let s = s.trim();

        match s.to_ascii_lowercase().as_str() {
            "today" => return Self::offset(today, 0, s),
            "yesterday" => return Self::offset(today, -1, s),
            "tomorrow" => return Self::offset(today, 1, s),
            _ => {}
        }

        if let Some(days_str) = s.strip_suffix('d') {
            let days: i64 = days_str
                .parse()
                .map_err(|_| format!("invalid relative date: {}", s))?;
            if days < 0 {
                return Err(format!("days must be non-negative: {}", s));
            }
            return Self::offset(today, -days, s);
        }

        DateKey::parse(s).map(|key| Self(key.date())).map_err(|_| {
            format!(
                "invalid date (expected YYYY-MM-DD, today, yesterday, tomorrow or Nd): {}",
                s
            )
        })
    }

    /// Shifts `today` by `days`, keeping the result within key years.
    fn offset(today: NaiveDate, days: i64, s: &str) -> Result<Self, String> {
        TimeDelta::try_days(days)
            .and_then(|delta| today.checked_add_signed(delta))
            .and_then(|date| DateKey::try_from_date(date).ok())
            .map(|key| Self(key.date()))
            .ok_or_else(|| format!("date out of range: {}", s))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn key(&self) -> DateKey {
        DateKey::from_date(self.0)
    }
}

impl FromStr for DateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_relative_to(s, today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn parse(s: &str) -> Result<NaiveDate, String> {
        DateArg::parse_relative_to(s, base()).map(|d| d.date())
    }

    #[test]
    fn parse_named_days() {
        assert_eq!(parse("today").unwrap(), base());
        assert_eq!(parse("Yesterday").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(parse("tomorrow").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn parse_relative_days() {
        assert_eq!(parse("0d").unwrap(), base());
        assert_eq!(parse("7d").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 23).unwrap());
    }

    #[test]
    fn parse_rejects_dates_outside_key_years() {
        // Would land in year -167 and produce an unscannable file name.
        let err = parse("800000d").unwrap_err();
        assert!(err.contains("out of range"));
        assert!(parse("2912897d").is_err());
    }

    #[test]
    fn parse_huge_relative_days_is_an_error() {
        let err = parse("999999999999999d").unwrap_err();
        assert!(err.contains("out of range"));
        assert!(parse(&format!("{}d", i64::MAX)).is_err());
    }

    #[test]
    fn parse_named_days_at_key_year_edge() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert!(DateArg::parse_relative_to("tomorrow", last).is_err());
        assert!(DateArg::parse_relative_to("today", last).is_ok());
    }

    #[test]
    fn parse_absolute_date() {
        assert_eq!(parse("2024-01-15").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(parse("invalid").is_err());
        assert!(parse("2024/01/15").is_err());
        assert!(parse("2024-1-15").is_err());
        assert!(parse("-5d").is_err());
    }

    #[test]
    fn key_matches_date() {
        let arg = DateArg::parse_relative_to("2024-01-15", base()).unwrap();
        assert_eq!(arg.key().to_string(), "2024-01-15");
    }
}
