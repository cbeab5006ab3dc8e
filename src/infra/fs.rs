//! File I/O primitives for memo files with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations on memos.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("memo file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("directory listing failed for {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a text file as UTF-8, stripping a leading byte order mark.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::InvalidEncoding` if the content is not UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;

    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 byte order mark detected; convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Writes text to a file atomically, replacing any previous content.
///
/// Uses a temporary file in the same directory and an atomic rename so a
/// reader never observes a partial write.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_text_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::NotADirectory { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::NotADirectory {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Removes a file, returning whether it existed.
///
/// A missing file is not an error.
pub fn remove_if_exists(path: &Path) -> Result<bool, FsError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}
