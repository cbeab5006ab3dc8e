//! Folder scan building the presence set and history list.

use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::fs::{FsError, read_text};
use super::memo_store::MEMO_EXTENSION;
use super::permission::{Access, PermissionGate};
use crate::domain::{DateKey, FolderHandle, HistoryEntry, sort_newest_first};

/// Result of a full folder scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Dates with a memo file.
    pub presence: BTreeSet<DateKey>,
    /// Memo texts, most recent date first.
    pub history: Vec<HistoryEntry>,
}

/// Scans the folder for memo files.
///
/// Only files directly inside the folder named `<YYYY-MM-DD>.txt` count.
/// Sub-folders and other files are skipped silently.
///
/// Returns `Ok(None)` when read access is denied; nothing is touched then.
///
/// # Errors
///
/// Any listing or read failure aborts the scan. Entries collected before the
/// failure are discarded.
pub fn scan_folder<G: PermissionGate>(
    gate: &mut G,
    folder: &FolderHandle,
) -> Result<Option<Scan>, FsError> {
    if !gate.ensure(folder, Access::Read) {
        return Ok(None);
    }
    read_folder(folder).map(Some)
}

/// Scans without a permission check.
fn read_folder(folder: &FolderHandle) -> Result<Scan, FsError> {
    let root = folder.path();
    if !root.is_dir() {
        return Err(FsError::NotADirectory { path: root.into() });
    }

    let mut scan = Scan::default();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let Some(key) = memo_key(&entry) else {
            continue;
        };
        let content = read_text(entry.path())?;
        scan.presence.insert(key);
        scan.history.push(HistoryEntry::new(key, content));
    }

    sort_newest_first(&mut scan.history);
    log::debug!("scanned {}: {} memo(s)", root.display(), scan.presence.len());
    Ok(scan)
}

/// Returns the date key of a memo file entry, or `None` for anything else.
fn memo_key(entry: &DirEntry) -> Option<DateKey> {
    if !entry.file_type().is_file() {
        return None;
    }
    let name = entry.file_name().to_str()?;
    let stem = name.strip_suffix(MEMO_EXTENSION)?.strip_suffix('.')?;
    match DateKey::parse(stem) {
        Ok(key) => Some(key),
        Err(e) => {
            log::trace!("skipping {}: {}", name, e);
            None
        }
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> FsError {
    let path = error.path().unwrap_or(root).to_path_buf();
    match error.into_io_error() {
        Some(io) => FsError::from_io(&path, io),
        None => FsError::Walk {
            message: "filesystem loop detected".to_string(),
            path,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::FixedGate;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn folder_with(files: &[(&str, &str)]) -> (TempDir, FolderHandle) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let handle = FolderHandle::new(dir.path());
        (dir, handle)
    }

    fn keys(scan: &Scan) -> Vec<String> {
        scan.presence.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn scan_collects_memo_files() {
        let (_dir, folder) = folder_with(&[("2024-06-01.txt", "hello")]);

        let scan = scan_folder(&mut FixedGate(true), &folder).unwrap().unwrap();

        assert_eq!(keys(&scan), vec!["2024-06-01"]);
        assert_eq!(scan.history.len(), 1);
        assert_eq!(scan.history[0].content, "hello");
    }

    #[test]
    fn scan_ignores_non_matching_names() {
        let (dir, folder) = folder_with(&[
            ("2024-06-01.txt", "kept"),
            ("notes.md", "no"),
            ("2024-1-1.txt", "no"),
            ("2024-06-02.md", "no"),
            ("2024-06-03.txt.bak", "no"),
            ("2024-13-45.txt", "no"),
        ]);
        fs::create_dir(dir.path().join("2024-06-04.txt")).unwrap();

        let scan = scan_folder(&mut FixedGate(true), &folder).unwrap().unwrap();

        assert_eq!(keys(&scan), vec!["2024-06-01"]);
    }

    #[test]
    fn scan_is_not_recursive() {
        let (dir, folder) = folder_with(&[]);
        let nested = dir.path().join("archive");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("2023-01-01.txt"), "old").unwrap();

        let scan = scan_folder(&mut FixedGate(true), &folder).unwrap().unwrap();

        assert!(scan.presence.is_empty());
        assert!(scan.history.is_empty());
    }

    #[test]
    fn history_is_newest_first() {
        let (_dir, folder) = folder_with(&[
            ("2024-01-01.txt", "a"),
            ("2024-03-15.txt", "b"),
            ("2024-02-10.txt", "c"),
        ]);

        let scan = scan_folder(&mut FixedGate(true), &folder).unwrap().unwrap();

        let order: Vec<String> = scan.history.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(order, vec!["2024-03-15", "2024-02-10", "2024-01-01"]);
    }

    #[test]
    fn denied_scan_returns_none() {
        let (_dir, folder) = folder_with(&[("2024-06-01.txt", "hello")]);
        let result = scan_folder(&mut FixedGate(false), &folder).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn unreadable_memo_aborts_scan() {
        let (dir, folder) = folder_with(&[("2024-06-01.txt", "fine")]);
        fs::write(dir.path().join("2024-06-02.txt"), [0xC3, 0x28]).unwrap();

        let result = scan_folder(&mut FixedGate(true), &folder);

        assert!(matches!(result, Err(FsError::InvalidEncoding { .. })));
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        let folder = FolderHandle::new(dir.path().join("gone"));
        let result = scan_folder(&mut FixedGate(true), &folder);
        assert!(matches!(result, Err(FsError::NotADirectory { .. })));
    }
}
