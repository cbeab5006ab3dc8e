//! Canonical `YYYY-MM-DD` key identifying a memo's date and file stem.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid key pattern"));

/// Years whose keys fit the four-digit `YYYY` field.
pub const KEY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Japanese weekday names, indexed from Sunday.
const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// A calendar date rendered as a `YYYY-MM-DD` key.
///
/// Keys are built from the local calendar fields of a date, so the key always
/// matches the date the user sees. Ordering follows the date, which for
/// four-digit years is the same as lexical ordering of the key string.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daymemo::domain::DateKey;
///
/// let key = DateKey::from_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(key.to_string(), "2024-06-01");
///
/// let parsed: DateKey = "2024-06-01".parse().unwrap();
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

/// Error returned when a string is not a valid date key.
#[derive(Debug, Clone)]
pub struct ParseDateKeyError(String);

impl fmt::Display for ParseDateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseDateKeyError {}

impl DateKey {
    /// Creates a key from a calendar date.
    ///
    /// Callers pass dates within [`KEY_YEARS`]; use [`DateKey::try_from_date`]
    /// for dates that come from user input or arithmetic.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a key, rejecting dates whose year does not fit in `YYYY`.
    pub fn try_from_date(date: NaiveDate) -> Result<Self, ParseDateKeyError> {
        if !KEY_YEARS.contains(&date.year()) {
            return Err(ParseDateKeyError(format!(
                "date {} is outside years 0000-9999",
                date
            )));
        }
        Ok(Self(date))
    }

    /// Returns the key for the current local date.
    pub fn today() -> Self {
        Self(today())
    }

    /// Parses a strict `YYYY-MM-DD` key.
    ///
    /// # Errors
    ///
    /// Returns `ParseDateKeyError` if the string is not exactly four digits,
    /// a hyphen, two digits, a hyphen and two digits, or if those digits do
    /// not name a real calendar date.
    pub fn parse(s: &str) -> Result<Self, ParseDateKeyError> {
        if !KEY_PATTERN.is_match(s) {
            return Err(ParseDateKeyError(format!(
                "invalid date key '{}': expected YYYY-MM-DD",
                s
            )));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseDateKeyError(format!("invalid date key '{}': no such date", s)))
    }

    /// Returns the calendar date behind this key.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the file name of the memo for this key, e.g. `2024-06-01.txt`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl fmt::Debug for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateKey(\"{}\")", self)
    }
}

impl FromStr for DateKey {
    type Err = ParseDateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the Japanese weekday name (single character) for a weekday.
pub fn weekday_ja(weekday: Weekday) -> &'static str {
    WEEKDAYS_JA[weekday.num_days_from_sunday() as usize]
}

/// Formats a date as a long Japanese date with weekday, e.g. `2024年6月1日土曜日`.
pub fn display_date(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日{}曜日",
        date.year(),
        date.month(),
        date.day(),
        weekday_ja(date.weekday())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_zero_pads_month_and_day() {
        assert_eq!(DateKey::from_date(ymd(2024, 1, 5)).to_string(), "2024-01-05");
    }

    #[test]
    fn key_is_always_ten_characters() {
        let dates = [ymd(2024, 1, 1), ymd(1999, 12, 31), ymd(2030, 7, 9)];
        for date in dates {
            let key = DateKey::from_date(date).to_string();
            assert_eq!(key.len(), 10);
            assert!(KEY_PATTERN.is_match(&key), "{key} should match pattern");
        }
    }

    #[test]
    fn try_from_date_accepts_four_digit_years() {
        assert_eq!(
            DateKey::try_from_date(ymd(0, 1, 1)).unwrap().to_string(),
            "0000-01-01"
        );
        assert_eq!(
            DateKey::try_from_date(ymd(9999, 12, 31)).unwrap().to_string(),
            "9999-12-31"
        );
    }

    #[test]
    fn try_from_date_rejects_years_outside_key_range() {
        assert!(DateKey::try_from_date(ymd(-167, 11, 3)).is_err());
        assert!(DateKey::try_from_date(ymd(10000, 1, 1)).is_err());
    }

    #[test]
    fn parse_accepts_strict_key() {
        let key = DateKey::parse("2024-06-01").unwrap();
        assert_eq!(key.date(), ymd(2024, 6, 1));
    }

    #[test]
    fn parse_rejects_unpadded() {
        assert!(DateKey::parse("2024-1-1").is_err());
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        assert!(DateKey::parse("２０２４-06-01").is_err());
    }

    #[test]
    fn parse_rejects_impossible_date() {
        let err = DateKey::parse("2024-13-45").unwrap_err();
        assert!(err.to_string().contains("no such date"));
    }

    #[test]
    fn parse_rejects_trailing_text() {
        assert!(DateKey::parse("2024-06-01.txt").is_err());
        assert!(DateKey::parse(" 2024-06-01").is_err());
    }

    #[test]
    fn ordering_follows_dates() {
        let mut keys: Vec<DateKey> = ["2024-01-01", "2024-03-15", "2024-02-10"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        keys.sort();
        let strs: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(strs, vec!["2024-01-01", "2024-02-10", "2024-03-15"]);
    }

    #[test]
    fn file_name_appends_extension() {
        let key = DateKey::parse("2024-06-01").unwrap();
        assert_eq!(key.file_name("txt"), "2024-06-01.txt");
    }

    #[test]
    fn display_date_is_japanese_long_form() {
        assert_eq!(display_date(ymd(2024, 6, 1)), "2024年6月1日土曜日");
        assert_eq!(display_date(ymd(2024, 12, 25)), "2024年12月25日水曜日");
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let key = DateKey::parse("2024-02-10").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-02-10\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn serde_rejects_invalid_key() {
        let result: Result<DateKey, _> = serde_json::from_str("\"2024/02/10\"");
        assert!(result.is_err());
    }
}
