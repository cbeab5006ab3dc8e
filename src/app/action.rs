//! Explicit commands dispatched to the controller.

use std::path::PathBuf;

use super::controller::{App, AppError, Ui};
use crate::domain::{DateKey, today};
use crate::infra::{PermissionGate, SaveOutcome};

/// A user action that changes application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChooseFolder(Option<PathBuf>),
    Save(String),
    PrevMonth,
    NextMonth,
    SelectDay(u32),
    OpenDate(DateKey),
    /// Opens the history row with this 0-based index.
    OpenHistory(usize),
    Today,
    Refresh,
}

/// What a dispatched action produced, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Done,
    FolderChosen(bool),
    Saved(Option<SaveOutcome>),
}

impl<U: Ui, G: PermissionGate> App<U, G> {
    /// Runs an action against the controller.
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched, AppError> {
        log::trace!("dispatch {:?}", action);
        match action {
            Action::ChooseFolder(path) => self.choose_folder(path).map(Dispatched::FolderChosen),
            Action::Save(text) => self.save(&text).map(Dispatched::Saved),
            Action::PrevMonth => {
                self.prev_month();
                Ok(Dispatched::Done)
            }
            Action::NextMonth => {
                self.next_month();
                Ok(Dispatched::Done)
            }
            Action::SelectDay(day) => self.select_day(day).map(|()| Dispatched::Done),
            Action::OpenDate(key) => {
                self.open_date(key);
                Ok(Dispatched::Done)
            }
            Action::OpenHistory(index) => self.open_history(index).map(|()| Dispatched::Done),
            Action::Today => {
                self.open_date(DateKey::from_date(today()));
                Ok(Dispatched::Done)
            }
            Action::Refresh => self.refresh().map(|()| Dispatched::Done),
        }
    }
}
