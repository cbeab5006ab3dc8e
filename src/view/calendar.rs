//! Month grid with today, selection and memo markers.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::{DateKey, YearMonth, weekday_ja};

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// One day of the displayed month.
///
/// The three flags are independent; a day may carry all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: DateKey,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_memo: bool,
}

/// A month laid out Sunday-first, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub header: String,
    /// Empty cells before day 1 (0 when the month starts on Sunday).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Lays out `month`, flagging days by comparing their date keys.
    pub fn build(
        month: YearMonth,
        today: NaiveDate,
        selected: NaiveDate,
        presence: &BTreeSet<DateKey>,
    ) -> Self {
        let today = DateKey::from_date(today);
        let selected = DateKey::from_date(selected);

        let days = (1..=month.days_in_month())
            .filter_map(|day| month.day(day).map(|date| (day, DateKey::from_date(date))))
            .map(|(day, key)| DayCell {
                day,
                date: key,
                is_today: key == today,
                is_selected: key == selected,
                has_memo: presence.contains(&key),
            })
            .collect();

        Self {
            month,
            header: month.header(),
            leading_blanks: month.first_day().weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Renders the grid as text, one week per line, followed by a legend.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');

        let labels: Vec<String> = WEEK
            .iter()
            .map(|w| format!("  {}  ", weekday_ja(*w)))
            .collect();
        out.push_str(labels.join(" ").trim_end());
        out.push('\n');

        let blanks = (0..self.leading_blanks).map(|_| " ".repeat(6));
        let cells: Vec<String> = blanks.chain(self.days.iter().map(render_cell)).collect();
        for week in cells.chunks(7) {
            out.push_str(week.join(" ").trim_end());
            out.push('\n');
        }

        out.push_str("[ ] 選択中  * メモあり  + 今日\n");
        out
    }
}

fn render_cell(cell: &DayCell) -> String {
    let (open, close) = if cell.is_selected {
        ('[', ']')
    } else {
        (' ', ' ')
    };
    format!(
        "{}{:>2}{}{}{}",
        open,
        cell.day,
        if cell.has_memo { '*' } else { ' ' },
        if cell.is_today { '+' } else { ' ' },
        close
    )
}
