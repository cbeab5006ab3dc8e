//! File I/O, folder scanning, handle persistence, permissions

mod fs;
mod handle_store;
mod memo_store;
mod permission;
mod scan;

pub use fs::{FsError, read_text, remove_if_exists, write_text_atomic};
pub use handle_store::{HOME_ENV, HandleStore, STORE_VERSION, StoreError, app_home};
pub use memo_store::{MEMO_EXTENSION, SaveOutcome, load_memo, memo_path, read_memo, save_memo};
pub use permission::{Access, AccessPrompt, FixedGate, PermissionGate, StoredGrants, os_allows};
pub use scan::{Scan, scan_folder};
