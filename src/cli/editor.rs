//! Editing memo text in the user's editor.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;

use super::config::Config;
use crate::domain::DateKey;

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches the editor configured in [`Config::editor`].
pub struct ConfiguredEditor<'a>(pub &'a Config);

impl EditorLauncher for ConfiguredEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, &self.0.editor())
    }
}

/// Opens a file in an editor command and waits for it to exit.
fn open_in_editor(path: &Path, editor: &str) -> Result<()> {
    // Parse editor command (may include args like "code --wait")
    let mut parts = editor.split_whitespace();
    let Some(cmd) = parts.next() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Lets the user edit `initial` in a scratch file and returns the result.
///
/// The scratch file lives in the system temp directory, never in the memo
/// folder, so an aborted edit leaves no stray files behind.
pub fn edit_text<E: EditorLauncher>(editor: &E, key: &DateKey, initial: &str) -> Result<String> {
    let mut scratch = tempfile::Builder::new()
        .prefix(&format!("{}-", key))
        .suffix(".txt")
        .tempfile()
        .context("failed to create scratch file")?;

    scratch
        .write_all(initial.as_bytes())
        .context("failed to write scratch file")?;
    scratch.flush().context("failed to write scratch file")?;

    editor.open(scratch.path())?;

    std::fs::read_to_string(scratch.path()).context("failed to read edited text")
}
