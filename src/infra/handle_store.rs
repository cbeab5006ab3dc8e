//! Persistent record of the chosen folder and the access granted to it.
//!
//! The store is a single JSON file holding one record-set (`settings`) keyed
//! by fixed names. It is created lazily on the first write.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::fs::write_text_atomic;
use super::permission::Access;
use crate::domain::FolderHandle;

/// Schema version written to new store files.
pub const STORE_VERSION: u32 = 1;

/// Environment variable that relocates the store and config file.
pub const HOME_ENV: &str = "DAYMEMO_HOME";

const STORE_FILE: &str = "store.json";
const HANDLE_KEY: &str = "dirHandle";
const GRANTS_KEY: &str = "grants";

/// Errors reading or writing the handle store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: super::FsError,
    },

    #[error("failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store {path} has unsupported version {found} (expected {})", STORE_VERSION)]
    UnsupportedVersion { path: PathBuf, found: u32 },
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    settings: BTreeMap<String, serde_json::Value>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            settings: BTreeMap::new(),
        }
    }
}

/// Key-value store persisting the folder handle across sessions.
#[derive(Debug, Clone)]
pub struct HandleStore {
    path: PathBuf,
}

impl HandleStore {
    /// Creates a store backed by the given file. No I/O happens until first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at its default location.
    ///
    /// Default: `$DAYMEMO_HOME/store.json`, else `<data_dir>/daymemo/store.json`.
    pub fn at_default_location() -> Self {
        Self::open(app_home().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the folder handle, replacing any previous one.
    ///
    /// Grants recorded for other folders are dropped, since only one folder
    /// is active at a time.
    pub fn save(&self, handle: &FolderHandle) -> Result<(), StoreError> {
        let mut file = self.load()?;
        let value = serde_json::to_value(handle).map_err(|e| self.corrupt(e))?;
        file.settings.insert(HANDLE_KEY.to_string(), value);

        let mut grants = self.grants_in(&file)?;
        grants.retain(|path, _| path == handle.path());
        file.settings.insert(
            GRANTS_KEY.to_string(),
            serde_json::to_value(grants).map_err(|e| self.corrupt(e))?,
        );

        self.store(&file)
    }

    /// Returns the last saved folder handle, if any.
    pub fn get(&self) -> Result<Option<FolderHandle>, StoreError> {
        let file = self.load()?;
        file.settings
            .get(HANDLE_KEY)
            .map(|value| serde_json::from_value(value.clone()).map_err(|e| self.corrupt(e)))
            .transpose()
    }

    /// Returns the access level recorded for a folder.
    pub fn granted(&self, handle: &FolderHandle) -> Result<Option<Access>, StoreError> {
        let file = self.load()?;
        Ok(self.grants_in(&file)?.get(handle.path()).copied())
    }

    /// Records that the user granted `access` to a folder.
    ///
    /// A stronger grant already on record is kept.
    pub fn grant(&self, handle: &FolderHandle, access: Access) -> Result<(), StoreError> {
        let mut file = self.load()?;
        let mut grants = self.grants_in(&file)?;
        let entry = grants.entry(handle.path().to_path_buf()).or_insert(access);
        if access > *entry {
            *entry = access;
        }
        file.settings.insert(
            GRANTS_KEY.to_string(),
            serde_json::to_value(grants).map_err(|e| self.corrupt(e))?,
        );
        self.store(&file)
    }

    fn grants_in(&self, file: &StoreFile) -> Result<BTreeMap<PathBuf, Access>, StoreError> {
        match file.settings.get(GRANTS_KEY) {
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| self.corrupt(e)),
            None => Ok(BTreeMap::new()),
        }
    }

    fn load(&self) -> Result<StoreFile, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreFile::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let file: StoreFile = serde_json::from_str(&contents).map_err(|e| self.corrupt(e))?;
        if file.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                found: file.version,
            });
        }
        Ok(file)
    }

    fn store(&self, file: &StoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(file).map_err(|e| self.corrupt(e))?;
        write_text_atomic(&self.path, &json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("wrote handle store {}", self.path.display());
        Ok(())
    }

    fn corrupt(&self, source: serde_json::Error) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            source,
        }
    }
}

/// Returns the directory holding the store and config file.
pub fn app_home() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daymemo")
}
