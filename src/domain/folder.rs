//! Reference to the user-chosen memo folder.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The folder the user picked to hold their memos.
///
/// A handle only names the folder. Whether it may be read or written is
/// decided separately by a [`PermissionGate`](crate::infra::PermissionGate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderHandle {
    path: PathBuf,
}

impl FolderHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the folder's last path component for status display.
    ///
    /// Falls back to the full path for roots such as `/`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Returns the path of a file directly inside the folder.
    pub fn join(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}
