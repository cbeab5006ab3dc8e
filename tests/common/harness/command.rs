//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `memo` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct MemoCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    home: Option<PathBuf>,
    stdin: Option<String>,
}

impl MemoCommand {
    /// Creates a new command for the `memo` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            home: None,
            stdin: None,
        }
    }

    /// Points `DAYMEMO_HOME` at `path` so the store and config stay isolated.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets the `--dir` option to use a memo folder for this run only.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds `--yes` so access prompts are granted.
    pub fn yes(self) -> Self {
        self.args(["--yes"])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feeds `input` to the command's standard input.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("memo").expect("Failed to find memo binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("DAYMEMO_HOME", home);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `show` command with a date.
    pub fn show(self, date: &str) -> Self {
        self.args(["show", date])
    }

    /// Configures for the `write` command with a date and text.
    pub fn write(self, date: &str, text: &str) -> Self {
        self.args(["write", "--date", date, "--", text])
    }

    /// Configures for the `history` command.
    pub fn history(self) -> Self {
        self.args(["history"])
    }

    /// Configures for the `cal` command.
    pub fn cal(self) -> Self {
        self.args(["cal"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for MemoCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        MemoCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = MemoCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = MemoCommand::new().history().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"history".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
