//! Memo entries produced by a folder scan.

use serde::Serialize;

use super::DateKey;

/// A memo's date paired with its full text, as found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub date: DateKey,
    pub content: String,
}

impl HistoryEntry {
    pub fn new(date: DateKey, content: impl Into<String>) -> Self {
        Self {
            date,
            content: content.into(),
        }
    }
}

/// Sorts entries most recent date first.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
