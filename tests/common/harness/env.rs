//! Isolated test environment with temp directories.

use super::MemoCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a memo folder and an app home.
///
/// Both live in one temp directory that is removed on drop. The app home
/// holds the handle store and config, so tests never touch the user's own.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    memos_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty memo folder.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let memos_dir = temp_dir.path().join("memos");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir(&memos_dir).expect("Failed to create memos directory");
        std::fs::create_dir(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            memos_dir,
            home_dir,
        }
    }

    /// Returns the path to the memo folder.
    pub fn memos_dir(&self) -> &Path {
        &self.memos_dir
    }

    /// Returns the path used as `DAYMEMO_HOME`.
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Returns the path of the memo file for `date`.
    pub fn memo_path(&self, date: &str) -> PathBuf {
        self.memos_dir.join(format!("{}.txt", date))
    }

    /// Writes a memo file directly and returns its path.
    pub fn add_memo(&self, date: &str, text: &str) -> PathBuf {
        let path = self.memo_path(date);
        std::fs::write(&path, text).expect("Failed to write test memo");
        path
    }

    /// Reads a memo file, or `None` if it does not exist.
    pub fn read_memo(&self, date: &str) -> Option<String> {
        std::fs::read_to_string(self.memo_path(date)).ok()
    }

    /// Writes a file into the app home (e.g. `config.toml`).
    pub fn write_home_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a command with an isolated home and no folder selected.
    pub fn bare_cmd(&self) -> MemoCommand {
        MemoCommand::new().home(&self.home_dir)
    }

    /// Creates a command that uses the memo folder for this run and grants
    /// access without asking.
    pub fn cmd(&self) -> MemoCommand {
        self.bare_cmd().yes().dir(&self.memos_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_directories() {
        let env = TestEnv::new();
        assert!(env.memos_dir().is_dir());
        assert!(env.home_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.memos_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_memo() {
        let env = TestEnv::new();
        let path = env.add_memo("2024-06-01", "hello");
        assert!(path.ends_with("2024-06-01.txt"));
        assert_eq!(env.read_memo("2024-06-01").as_deref(), Some("hello"));
        assert_eq!(env.read_memo("2024-06-02"), None);
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--yes");
        assert_eq!(args[1], "--dir");
        assert_eq!(args[2], env.memos_dir().to_string_lossy());
    }
}
