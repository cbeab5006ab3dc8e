//! Month currently displayed by the calendar.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::date_key::KEY_YEARS;

/// A calendar month (year plus 1-based month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Error returned when parsing an invalid `YYYY-MM` month.
#[derive(Debug, Clone)]
pub struct ParseYearMonthError(String);

impl fmt::Display for ParseYearMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseYearMonthError {}

impl YearMonth {
    /// Creates a month, returning `None` if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the month before this one, rolling over into the previous year.
    ///
    /// January of the first key year has no predecessor and is returned as is.
    pub fn prev(&self) -> Self {
        if self.month == 1 && self.year <= *KEY_YEARS.start() {
            *self
        } else if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the month after this one, rolling over into the next year.
    ///
    /// December of the last key year has no successor and is returned as is.
    pub fn next(&self) -> Self {
        if self.month == 12 && self.year >= *KEY_YEARS.end() {
            *self
        } else if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Constructed months are always valid.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Returns the date of `day` in this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Returns the Japanese calendar header, e.g. `2024年 6月`.
    pub fn header(&self) -> String {
        format!("{}年 {}月", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParseYearMonthError(format!("invalid month (expected YYYY-MM): {}", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}
