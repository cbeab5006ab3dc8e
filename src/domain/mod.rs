//! Core types: DateKey, YearMonth, FolderHandle, HistoryEntry

mod date_key;
mod folder;
mod memo;
mod year_month;

pub use date_key::{DateKey, KEY_YEARS, ParseDateKeyError, display_date, today, weekday_ja};
pub use folder::FolderHandle;
pub use memo::{HistoryEntry, sort_newest_first};
pub use year_month::{ParseYearMonthError, YearMonth};
