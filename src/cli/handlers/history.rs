//! History command handler.

use anyhow::Result;

use super::Context;
use crate::cli::HistoryArgs;
use crate::cli::output::{MemoListing, Output, OutputFormat};
use crate::domain::{FolderHandle, HistoryEntry};
use crate::infra::memo_path;
use crate::view::render_history;

/// Converts history entries to their listing form.
pub fn history_listings(folder: &FolderHandle, entries: &[HistoryEntry]) -> Vec<MemoListing> {
    entries
        .iter()
        .map(|entry| MemoListing {
            date: entry.date.to_string(),
            path: memo_path(folder, &entry.date).to_string_lossy().to_string(),
            content: entry.content.clone(),
        })
        .collect()
}

pub fn handle_history(args: &HistoryArgs, ctx: &Context) -> Result<()> {
    let app = ctx.started_app();
    let Some(folder) = app.folder() else {
        anyhow::bail!("no memo folder selected; run `memo folder <PATH>` first");
    };

    match args.format {
        OutputFormat::Human => {
            print!("{}", render_history(app.history(), args.width));
        }
        OutputFormat::Json => {
            let listings = history_listings(folder, app.history());
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Paths => {
            for entry in app.history() {
                println!("{}", memo_path(folder, &entry.date).display());
            }
        }
    }

    Ok(())
}
