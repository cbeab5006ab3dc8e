//! Terminal implementations of the controller's host services.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::app::Ui;
use crate::domain::FolderHandle;
use crate::infra::{Access, AccessPrompt};
use crate::messages;

/// Alerts go to stderr; the folder picker reads a path from stdin.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        if !io::stdin().is_terminal() {
            log::debug!("no terminal to pick a folder from");
            return None;
        }
        let answer = ask(messages::FOLDER_PATH_PROMPT)?;
        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

/// Asks on the terminal before granting folder access.
///
/// With `assume_yes` every request is granted. Without a terminal, requests
/// are denied.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl AccessPrompt for TerminalPrompt {
    fn request(&mut self, folder: &FolderHandle, access: Access) -> bool {
        if self.assume_yes {
            return true;
        }
        if !io::stdin().is_terminal() {
            log::warn!(
                "{} access to {} needs confirmation; rerun with --yes",
                access,
                folder.path().display()
            );
            return false;
        }
        ask(&messages::access_prompt(&folder.name(), access))
            .is_some_and(|answer| is_yes(&answer))
    }
}

/// Prints a question to stderr and reads one line of answer.
fn ask(question: &str) -> Option<String> {
    eprint!("{}", question);
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            log::warn!("failed to read answer: {e}");
            None
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "はい"
    )
}
