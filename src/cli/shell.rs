//! Interactive shell: one clap-parsed command per input line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::date_arg::DateArg;
use super::editor::{EditorLauncher, edit_text};
use crate::app::{Action, App, AppError, Dispatched, Ui};
use crate::infra::PermissionGate;
use crate::view::render_history;

const PROMPT: &str = "memo> ";

#[derive(Parser, Debug)]
#[command(
    name = "",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Choose the memo folder
    Folder { path: Option<PathBuf> },

    /// Save text as the selected day's memo (no text deletes it)
    Save {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Edit the selected day's memo in your editor
    Edit,

    /// Show the previous month
    Prev,

    /// Show the next month
    Next,

    /// Select a day of the shown month
    Day { day: u32 },

    /// Select any date (YYYY-MM-DD, today, yesterday, tomorrow, Nd)
    Open { date: DateArg },

    /// Open a history entry by its number
    Pick { number: usize },

    /// Jump back to today
    Today,

    /// Show the calendar
    Cal,

    /// List all memos, newest first
    History {
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Show the selected day's memo
    Show,

    /// Show the folder status
    Status,

    /// Rescan the folder
    Refresh,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Runs the shell until `quit` or end of input.
///
/// With `interactive` set a prompt is printed before each line.
pub fn run_shell<U, G, E, R, W>(
    app: &mut App<U, G>,
    editor: &E,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()>
where
    U: Ui,
    G: PermissionGate,
    E: EditorLauncher,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", app.status())?;
    render_view(app, out)?;

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        if let Flow::Quit = run_command(app, editor, parsed.command, out)? {
            break;
        }
    }

    Ok(())
}

fn run_command<U, G, E, W>(
    app: &mut App<U, G>,
    editor: &E,
    command: ShellCommand,
    out: &mut W,
) -> Result<Flow>
where
    U: Ui,
    G: PermissionGate,
    E: EditorLauncher,
    W: Write,
{
    let action = match command {
        ShellCommand::Folder { path } => Action::ChooseFolder(path),
        ShellCommand::Save { text } => Action::Save(text.join(" ")),
        ShellCommand::Edit => {
            if !app.has_folder() {
                return Ok(Flow::Continue);
            }
            match edit_text(editor, &app.selected_key(), app.memo()) {
                Ok(text) => Action::Save(text),
                Err(e) => {
                    writeln!(out, "error: {:#}", e)?;
                    return Ok(Flow::Continue);
                }
            }
        }
        ShellCommand::Prev => Action::PrevMonth,
        ShellCommand::Next => Action::NextMonth,
        ShellCommand::Day { day } => Action::SelectDay(day),
        ShellCommand::Open { date } => Action::OpenDate(date.key()),
        ShellCommand::Pick { number } => match number.checked_sub(1) {
            Some(index) => Action::OpenHistory(index),
            None => {
                writeln!(out, "error: history numbers start at 1")?;
                return Ok(Flow::Continue);
            }
        },
        ShellCommand::Today => Action::Today,
        ShellCommand::Refresh => Action::Refresh,
        ShellCommand::Cal => {
            write!(out, "{}", app.calendar().render())?;
            return Ok(Flow::Continue);
        }
        ShellCommand::History { width } => {
            write!(out, "{}", render_history(app.history(), width))?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Show => {
            render_memo(app, out)?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Status => {
            writeln!(out, "{}", app.status())?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    };

    match app.dispatch(action) {
        Ok(Dispatched::FolderChosen(false)) => {}
        Ok(Dispatched::FolderChosen(true)) => {
            writeln!(out, "{}", app.status())?;
            render_view(app, out)?;
        }
        Ok(Dispatched::Saved(_)) => {
            write!(out, "{}", app.calendar().render())?;
        }
        Ok(Dispatched::Done) => render_view(app, out)?,
        // Already shown to the user as an alert.
        Err(AppError::Save { .. }) => {}
        Err(e) => writeln!(out, "error: {}", e)?,
    }

    Ok(Flow::Continue)
}

fn render_view<U: Ui, G: PermissionGate, W: Write>(app: &App<U, G>, out: &mut W) -> Result<()> {
    write!(out, "{}", app.calendar().render())?;
    writeln!(out)?;
    render_memo(app, out)
}

fn render_memo<U: Ui, G: PermissionGate, W: Write>(app: &App<U, G>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", app.header())?;
    if !app.memo().is_empty() {
        writeln!(out, "{}", app.memo())?;
    }
    Ok(())
}
