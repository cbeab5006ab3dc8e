//! Application controller owning the view state and the active folder.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{DateKey, FolderHandle, HistoryEntry, YearMonth, display_date, today};
use crate::infra::{
    Access, FsError, HandleStore, PermissionGate, SaveOutcome, StoreError, load_memo, save_memo,
    scan_folder,
};
use crate::messages;
use crate::view::MonthGrid;

/// Host services the controller needs from its surroundings.
pub trait Ui {
    /// Shows a message the user must notice.
    fn alert(&mut self, message: &str);

    /// Asks the user to choose a folder. `None` means the user cancelled.
    fn pick_folder(&mut self) -> Option<PathBuf>;
}

/// What the controller is busy with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Scanning,
    Saving,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Idle => write!(f, "idle"),
            Activity::Scanning => write!(f, "scanning"),
            Activity::Saving => write!(f, "saving"),
        }
    }
}

/// Errors from controller operations.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("busy {current}; cannot start {requested}")]
    Busy {
        current: Activity,
        requested: Activity,
    },

    #[error("no day {day} in {month}")]
    InvalidDay { month: YearMonth, day: u32 },

    #[error("no history entry #{0}")]
    NoHistoryEntry(usize),

    #[error("cannot open folder {path}: {source}")]
    InvalidFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a folder: {path}")]
    NotAFolder { path: PathBuf },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to save memo {key}: {source}")]
    Save {
        key: DateKey,
        #[source]
        source: FsError,
    },
}

/// Date shown in the editor and month shown in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected: NaiveDate,
    pub view_month: YearMonth,
}

impl ViewState {
    pub fn at(date: NaiveDate) -> Self {
        Self {
            selected: date,
            view_month: YearMonth::of(date),
        }
    }
}

/// The journaling application: one folder, one selected date, one month view.
///
/// All operations take `&mut self`; an activity guard additionally rejects
/// an operation started while another one is still running.
pub struct App<U: Ui, G: PermissionGate> {
    ui: U,
    gate: G,
    store: HandleStore,
    folder: Option<FolderHandle>,
    pub(super) state: ViewState,
    presence: BTreeSet<DateKey>,
    history: Vec<HistoryEntry>,
    memo: String,
    status: String,
    pub(super) activity: Activity,
}

impl<U: Ui, G: PermissionGate> App<U, G> {
    /// Creates an app with no folder, viewing today.
    pub fn new(ui: U, gate: G, store: HandleStore) -> Self {
        Self {
            ui,
            gate,
            store,
            folder: None,
            state: ViewState::at(today()),
            presence: BTreeSet::new(),
            history: Vec::new(),
            memo: String::new(),
            status: messages::FOLDER_UNSELECTED.to_string(),
            activity: Activity::Idle,
        }
    }

    /// Restores the folder and loads the current memo.
    ///
    /// `session` is a folder for this session only and takes precedence over
    /// the stored handle. `fallback` is used when nothing is stored. Failures
    /// here are never fatal; the app just stays without a folder.
    pub fn start(&mut self, session: Option<PathBuf>, fallback: Option<PathBuf>) {
        self.restore(session, fallback, true);
    }

    /// Like [`App::start`], but without the "choose a folder first" alert.
    ///
    /// For one-shot operations that report a missing folder themselves.
    pub fn start_quiet(&mut self, session: Option<PathBuf>, fallback: Option<PathBuf>) {
        self.restore(session, fallback, false);
    }

    fn restore(&mut self, session: Option<PathBuf>, fallback: Option<PathBuf>, announce: bool) {
        if let Some(path) = session {
            self.use_unsaved_folder(path);
        } else {
            match self.store.get() {
                Ok(Some(handle)) => {
                    log::debug!("restored folder {}", handle.path().display());
                    self.status = messages::folder_status_restored(&handle.name());
                    self.folder = Some(handle);
                }
                Ok(None) => match fallback {
                    Some(path) => self.use_unsaved_folder(path),
                    None => {
                        self.status = messages::FOLDER_UNSELECTED.to_string();
                        if announce {
                            self.ui.alert(messages::CHOOSE_FOLDER_FIRST);
                        }
                    }
                },
                Err(e) => {
                    log::error!("failed to restore folder: {e}");
                    self.status = messages::FOLDER_ERROR.to_string();
                }
            }
        }

        if self.folder.is_some() {
            if let Err(e) = self.refresh() {
                log::warn!("startup scan skipped: {e}");
            }
            self.load();
        }
    }

    fn use_unsaved_folder(&mut self, path: PathBuf) {
        match resolve_folder(path) {
            Ok(handle) => {
                self.status = messages::folder_status(&handle.name());
                self.folder = Some(handle);
            }
            Err(e) => {
                log::error!("{e}");
                self.status = messages::FOLDER_ERROR.to_string();
            }
        }
    }

    /// Chooses a new folder, persists it, then scans and loads.
    ///
    /// Returns `Ok(false)` if the user cancelled; nothing changes then.
    pub fn choose_folder(&mut self, path: Option<PathBuf>) -> Result<bool, AppError> {
        let Some(path) = path.or_else(|| self.ui.pick_folder()) else {
            log::debug!("folder selection cancelled");
            return Ok(false);
        };

        let handle = resolve_folder(path)?;
        self.store.save(&handle)?;
        // Choosing a folder is itself the user's consent to read it.
        if let Err(e) = self.store.grant(&handle, Access::Read) {
            log::warn!("could not record read grant: {e}");
        }

        self.status = messages::folder_status(&handle.name());
        self.folder = Some(handle);
        self.refresh()?;
        self.load();
        Ok(true)
    }

    /// Rescans the folder, replacing the presence set and history.
    ///
    /// A denied or failed scan leaves the previous results in place.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        let Some(folder) = self.folder.clone() else {
            return Ok(());
        };
        self.guarded(Activity::Scanning, |app| {
            match scan_folder(&mut app.gate, &folder) {
                Ok(Some(scan)) => {
                    app.presence = scan.presence;
                    app.history = scan.history;
                }
                Ok(None) => log::info!("scan skipped: read access not granted"),
                Err(e) => log::error!("scan failed: {e}"),
            }
        })
    }

    /// Loads the memo of the selected date into the editor text.
    pub fn load(&mut self) {
        self.memo.clear();
        let Some(folder) = &self.folder else {
            return;
        };
        if !self.gate.ensure(folder, Access::Read) {
            return;
        }
        self.memo = load_memo(folder, &self.selected_key());
    }

    /// Saves `text` as the memo of the selected date.
    ///
    /// Returns `Ok(None)` when no folder is chosen; the user is told to choose
    /// one and no file is touched. A save failure is shown to the user and
    /// also returned.
    pub fn save(&mut self, text: &str) -> Result<Option<SaveOutcome>, AppError> {
        let Some(folder) = self.folder.clone() else {
            self.ui.alert(messages::SELECT_FOLDER);
            return Ok(None);
        };
        let key = self.selected_key();

        let result = self.guarded(Activity::Saving, |app| {
            save_memo(&mut app.gate, &folder, &key, text)
        })?;

        match result {
            Ok(SaveOutcome::Denied) => Ok(Some(SaveOutcome::Denied)),
            Ok(outcome) => {
                match outcome {
                    SaveOutcome::Saved => self.ui.alert(messages::SAVED),
                    SaveOutcome::Deleted { existed: true } => self.ui.alert(messages::DELETED),
                    _ => {}
                }
                self.memo = text.trim().to_string();
                self.refresh()?;
                Ok(Some(outcome))
            }
            Err(source) => {
                log::error!("save failed: {source}");
                self.ui.alert(&messages::save_failed(&source.to_string()));
                self.refresh()?;
                Err(AppError::Save { key, source })
            }
        }
    }

    /// Returns whether a folder is set, telling the user to choose one if not.
    pub fn has_folder(&mut self) -> bool {
        if self.folder.is_none() {
            self.ui.alert(messages::SELECT_FOLDER);
            return false;
        }
        true
    }

    /// Shows the previous month without changing the selection.
    pub fn prev_month(&mut self) {
        self.state.view_month = self.state.view_month.prev();
    }

    /// Shows the next month without changing the selection.
    pub fn next_month(&mut self) {
        self.state.view_month = self.state.view_month.next();
    }

    /// Shows `month` without changing the selection.
    pub fn show_month(&mut self, month: YearMonth) {
        self.state.view_month = month;
    }

    /// Selects a day of the displayed month and loads its memo.
    pub fn select_day(&mut self, day: u32) -> Result<(), AppError> {
        let month = self.state.view_month;
        let date = month.day(day).ok_or(AppError::InvalidDay { month, day })?;
        self.state.selected = date;
        self.load();
        Ok(())
    }

    /// Selects a date, moves the calendar to its month, and loads its memo.
    pub fn open_date(&mut self, key: DateKey) {
        self.state = ViewState::at(key.date());
        self.load();
    }

    /// Opens the history entry at `index` (0-based, newest first).
    pub fn open_history(&mut self, index: usize) -> Result<(), AppError> {
        let key = self
            .history
            .get(index)
            .map(|entry| entry.date)
            .ok_or(AppError::NoHistoryEntry(index + 1))?;
        self.open_date(key);
        Ok(())
    }

    /// Lays out the displayed month.
    pub fn calendar(&self) -> MonthGrid {
        MonthGrid::build(
            self.state.view_month,
            today(),
            self.state.selected,
            &self.presence,
        )
    }

    /// Returns the long-form header for the selected date.
    pub fn header(&self) -> String {
        display_date(self.state.selected)
    }

    pub fn folder(&self) -> Option<&FolderHandle> {
        self.folder.as_ref()
    }

    pub fn selected(&self) -> NaiveDate {
        self.state.selected
    }

    pub fn selected_key(&self) -> DateKey {
        DateKey::from_date(self.state.selected)
    }

    pub fn view_month(&self) -> YearMonth {
        self.state.view_month
    }

    pub fn presence(&self) -> &BTreeSet<DateKey> {
        &self.presence
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the memo text currently loaded for the selected date.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    fn guarded<T>(
        &mut self,
        activity: Activity,
        op: impl FnOnce(&mut Self) -> T,
    ) -> Result<T, AppError> {
        if self.activity != Activity::Idle {
            return Err(AppError::Busy {
                current: self.activity,
                requested: activity,
            });
        }
        self.activity = activity;
        let out = op(self);
        self.activity = Activity::Idle;
        Ok(out)
    }
}

/// Canonicalises a folder path and checks that it is a directory.
fn resolve_folder(path: PathBuf) -> Result<FolderHandle, AppError> {
    let canonical = std::fs::canonicalize(&path).map_err(|source| AppError::InvalidFolder {
        path: path.clone(),
        source,
    })?;
    if !canonical.is_dir() {
        return Err(AppError::NotAFolder { path: canonical });
    }
    Ok(FolderHandle::new(canonical))
}
