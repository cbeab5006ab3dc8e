//! Reading and saving the memo for a single date.

use std::path::PathBuf;

use super::fs::{FsError, read_text, remove_if_exists, write_text_atomic};
use super::permission::{Access, PermissionGate};
use crate::domain::{DateKey, FolderHandle};

/// Extension of memo files.
pub const MEMO_EXTENSION: &str = "txt";

/// What a save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Non-empty text was written.
    Saved,
    /// Empty text removed the memo; `existed` is false if there was nothing to remove.
    Deleted { existed: bool },
    /// Write access was declined; nothing changed.
    Denied,
}

/// Returns the path of the memo file for a date.
pub fn memo_path(folder: &FolderHandle, key: &DateKey) -> PathBuf {
    folder.join(&key.file_name(MEMO_EXTENSION))
}

/// Reads the memo for a date, distinguishing "no memo" from failure.
pub fn read_memo(folder: &FolderHandle, key: &DateKey) -> Result<Option<String>, FsError> {
    match read_text(&memo_path(folder, key)) {
        Ok(text) => Ok(Some(text)),
        Err(FsError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Loads the memo text for display.
///
/// A missing memo is empty text. Other failures are logged and also shown as
/// empty text.
pub fn load_memo(folder: &FolderHandle, key: &DateKey) -> String {
    match read_memo(folder, key) {
        Ok(text) => text.unwrap_or_default(),
        Err(e) => {
            log::error!("failed to load memo {}: {}", key, e);
            String::new()
        }
    }
}

/// Saves the memo for a date.
///
/// Text is trimmed first. Non-empty text replaces the file in full; empty
/// text removes it.
///
/// # Errors
///
/// Returns `FsError` if writing or removing the file fails.
pub fn save_memo<G: PermissionGate>(
    gate: &mut G,
    folder: &FolderHandle,
    key: &DateKey,
    text: &str,
) -> Result<SaveOutcome, FsError> {
    if !gate.ensure(folder, Access::ReadWrite) {
        return Ok(SaveOutcome::Denied);
    }

    let path = memo_path(folder, key);
    let content = text.trim();

    if content.is_empty() {
        let existed = remove_if_exists(&path)?;
        log::info!("removed memo {} (existed: {})", key, existed);
        Ok(SaveOutcome::Deleted { existed })
    } else {
        write_text_atomic(&path, content)?;
        log::info!("saved memo {} ({} bytes)", key, content.len());
        Ok(SaveOutcome::Saved)
    }
}
