//! Folder and status command handlers.

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::output::{Output, OutputFormat, StatusListing};
use crate::cli::{FolderArgs, StatusArgs};

pub fn handle_folder(args: &FolderArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.app();

    let chosen = app
        .choose_folder(args.path.clone())
        .with_context(|| "failed to choose memo folder")?;
    if !chosen {
        return Ok(());
    }

    println!("{}", app.status());
    if let Some(folder) = app.folder() {
        println!("  {}", folder.path().display());
    }
    println!("{} 件のメモ", app.presence().len());
    Ok(())
}

pub fn handle_status(args: &StatusArgs, ctx: &Context) -> Result<()> {
    let app = ctx.started_app();

    match args.format {
        OutputFormat::Human => {
            println!("{}", app.status());
            if let Some(folder) = app.folder() {
                println!("  {}", folder.path().display());
                println!("{} 件のメモ", app.presence().len());
            }
        }
        OutputFormat::Json => {
            let listing = StatusListing {
                status: app.status().to_string(),
                folder: app
                    .folder()
                    .map(|f| f.path().to_string_lossy().to_string()),
                memos: app.presence().len(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
        OutputFormat::Paths => {
            if let Some(folder) = app.folder() {
                println!("{}", folder.path().display());
            }
        }
    }

    Ok(())
}
