//! Command handlers for the CLI.

mod calendar;
mod folder;
mod history;
mod memo;


use std::path::PathBuf;

use super::config::Config;
use super::terminal::{TerminalPrompt, TerminalUi};
use crate::app::App;
use crate::infra::{HandleStore, StoredGrants};

// Re-export public items
pub use calendar::handle_calendar;
pub use folder::{handle_folder, handle_status};
pub use history::{handle_history, history_listings};
pub use memo::{handle_edit, handle_show, handle_write, memo_text};

// Re-export for tests
#[cfg(test)]
pub(crate) use memo::handle_edit_impl;

/// Controller wired to the terminal.
pub type CliApp = App<TerminalUi, StoredGrants<TerminalPrompt>>;

// ===========================================
// Shared Context
// ===========================================

/// Everything a handler needs besides its own arguments.
pub struct Context {
    /// Folder for this run only (`--dir`)
    pub dir: Option<PathBuf>,
    pub config: Config,
    pub assume_yes: bool,
    pub store: HandleStore,
}

impl Context {
    pub fn new(dir: Option<PathBuf>, assume_yes: bool, config: Config, store: HandleStore) -> Self {
        Self {
            dir,
            assume_yes: assume_yes || config.assume_yes,
            config,
            store,
        }
    }

    /// Creates a controller without restoring any folder.
    pub fn app(&self) -> CliApp {
        let gate = StoredGrants::new(self.store.clone(), TerminalPrompt::new(self.assume_yes));
        App::new(TerminalUi, gate, self.store.clone())
    }

    /// Creates a controller and runs its startup sequence.
    pub fn started_app(&self) -> CliApp {
        let mut app = self.app();
        app.start(self.dir.clone(), self.config.dir.clone());
        app
    }

    /// Creates a controller for a command that saves, which reports a
    /// missing folder on its own.
    pub fn saving_app(&self) -> CliApp {
        let mut app = self.app();
        app.start_quiet(self.dir.clone(), self.config.dir.clone());
        app
    }
}
