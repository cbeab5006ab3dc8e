//! Access checks for the memo folder.
//!
//! A gate answers one question: may we read (or read and write) this folder
//! right now? Denial is an ordinary `false`, never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::handle_store::HandleStore;
use crate::domain::FolderHandle;

/// Level of access requested for a folder.
///
/// `ReadWrite` orders above `Read`, so a read-write grant satisfies a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    #[serde(rename = "readwrite")]
    ReadWrite,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::ReadWrite => write!(f, "read and write"),
        }
    }
}

/// Decides whether a folder operation may proceed.
pub trait PermissionGate {
    /// Ensures `access` is granted for `folder`, asking the user if needed.
    fn ensure(&mut self, folder: &FolderHandle, access: Access) -> bool;
}

/// Asks the user to grant access (the "request" half of a permission check).
pub trait AccessPrompt {
    fn request(&mut self, folder: &FolderHandle, access: Access) -> bool;
}

/// Gate backed by grants recorded in the [`HandleStore`].
///
/// A recorded grant only counts while the operating system still allows the
/// access; otherwise the user is asked again.
pub struct StoredGrants<P: AccessPrompt> {
    store: HandleStore,
    prompt: P,
}

impl<P: AccessPrompt> StoredGrants<P> {
    pub fn new(store: HandleStore, prompt: P) -> Self {
        Self { store, prompt }
    }

    /// Returns true if access was already granted, without prompting.
    pub fn query(&self, folder: &FolderHandle, access: Access) -> bool {
        let recorded = match self.store.granted(folder) {
            Ok(recorded) => recorded,
            Err(e) => {
                log::warn!("could not read recorded grants: {e}");
                None
            }
        };
        recorded.is_some_and(|granted| granted >= access) && os_allows(folder, access)
    }
}

impl<P: AccessPrompt> PermissionGate for StoredGrants<P> {
    fn ensure(&mut self, folder: &FolderHandle, access: Access) -> bool {
        if self.query(folder, access) {
            return true;
        }

        if !self.prompt.request(folder, access) {
            log::info!("{} access to {} was declined", access, folder.path().display());
            return false;
        }

        if !os_allows(folder, access) {
            log::warn!(
                "{} access to {} is not possible on this system",
                access,
                folder.path().display()
            );
            return false;
        }

        if let Err(e) = self.store.grant(folder, access) {
            log::warn!("could not record grant for {}: {e}", folder.path().display());
        }
        true
    }
}

/// Checks whether the operating system permits the access.
///
/// Read requires a listable directory. Write additionally requires the
/// directory not to be read-only.
pub fn os_allows(folder: &FolderHandle, access: Access) -> bool {
    if std::fs::read_dir(folder.path()).is_err() {
        return false;
    }
    match access {
        Access::Read => true,
        Access::ReadWrite => std::fs::metadata(folder.path())
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false),
    }
}

/// Gate that grants or denies everything, for callers that already know.
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub bool);

impl PermissionGate for FixedGate {
    fn ensure(&mut self, _folder: &FolderHandle, _access: Access) -> bool {
        self.0
    }
}
