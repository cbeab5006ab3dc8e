//! Show, Write and Edit command handlers.

use anyhow::{Context as _, Result, bail};
use std::io::Read;

use super::Context;
use crate::app::{App, Ui};
use crate::cli::editor::{ConfiguredEditor, EditorLauncher, edit_text};
use crate::cli::{EditArgs, ShowArgs, WriteArgs};
use crate::infra::{PermissionGate, SaveOutcome};

pub fn handle_show(args: &ShowArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.started_app();
    app.open_date(args.date.key());

    println!("{}", app.header());
    if !app.memo().is_empty() {
        println!();
        println!("{}", app.memo());
    }
    Ok(())
}

/// Returns the memo text given on the command line or on stdin.
pub fn memo_text(args: &WriteArgs) -> Result<String> {
    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read memo text from stdin")?;
        Ok(text)
    } else {
        Ok(args.text.join(" "))
    }
}

pub fn handle_write(args: &WriteArgs, ctx: &Context) -> Result<()> {
    let text = memo_text(args)?;
    let mut app = ctx.saving_app();
    app.open_date(args.date.key());

    let outcome = app.save(&text)?;
    finish_save(outcome)
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<U: Ui, G: PermissionGate, E: EditorLauncher>(
    app: &mut App<U, G>,
    args: &EditArgs,
    editor: &E,
) -> Result<Option<SaveOutcome>> {
    if !app.has_folder() {
        return Ok(None);
    }

    let key = args.date.key();
    app.open_date(key);
    let edited = edit_text(editor, &key, app.memo())?;
    Ok(app.save(&edited)?)
}

pub fn handle_edit(args: &EditArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.saving_app();
    let outcome = handle_edit_impl(&mut app, args, &ConfiguredEditor(&ctx.config))?;
    finish_save(outcome)
}

/// Turns a save result into the command's exit status.
fn finish_save(outcome: Option<SaveOutcome>) -> Result<()> {
    match outcome {
        None => bail!("no memo folder selected; run `memo folder <PATH>` first"),
        Some(SaveOutcome::Denied) => {
            log::warn!("write access was not granted; memo not saved");
            Ok(())
        }
        Some(_) => Ok(()),
    }
}
