//! Text rendering for the calendar and history list

mod calendar;
mod history;

pub use calendar::{DayCell, MonthGrid};
pub use history::{render_history, truncate_str};
