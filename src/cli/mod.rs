//! CLI command definitions and handlers

pub mod config;
pub mod date_arg;
pub mod editor;
pub mod handlers;
pub mod output;
pub mod shell;
pub mod terminal;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::YearMonth;
use date_arg::DateArg;
use output::OutputFormat;

/// memo - one plain-text memo per day, kept in a folder you choose
#[derive(Parser, Debug)]
#[command(name = "memo", version, about, long_about = None)]
pub struct Cli {
    /// Memo folder for this run only (the chosen folder stays unchanged)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Grant folder access without asking
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run (starts the interactive shell when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive shell
    Shell,

    /// Choose the memo folder
    Folder(FolderArgs),

    /// Show the current folder
    Status(StatusArgs),

    /// Show the memo for a date
    Show(ShowArgs),

    /// Save the memo for a date (empty text deletes it)
    Write(WriteArgs),

    /// Edit the memo for a date in your editor
    Edit(EditArgs),

    /// Show a month calendar
    #[command(name = "cal")]
    Calendar(CalendarArgs),

    /// List all memos, newest first
    History(HistoryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `folder` command
#[derive(Parser, Debug)]
pub struct FolderArgs {
    /// Folder path (asked for interactively when omitted)
    pub path: Option<PathBuf>,
}

/// Arguments for the `status` command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Date (YYYY-MM-DD, today, yesterday, tomorrow, or Nd for N days ago)
    #[arg(default_value = "today")]
    pub date: DateArg,
}

/// Arguments for the `write` command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Date (YYYY-MM-DD, today, yesterday, tomorrow, or Nd for N days ago)
    #[arg(short = 'D', long, default_value = "today")]
    pub date: DateArg,

    /// Read the memo text from standard input
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Memo text (words are joined with spaces)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Date (YYYY-MM-DD, today, yesterday, tomorrow, or Nd for N days ago)
    #[arg(default_value = "today")]
    pub date: DateArg,
}

/// Arguments for the `cal` command
#[derive(Parser, Debug)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM); defaults to the selected date's month
    #[arg(short, long)]
    pub month: Option<YearMonth>,

    /// Date to mark as selected
    #[arg(short, long, default_value = "today")]
    pub select: DateArg,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `history` command
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Cut preview lines to this many characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
