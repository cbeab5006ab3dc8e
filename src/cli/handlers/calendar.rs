//! Calendar command handler.

use anyhow::Result;

use super::Context;
use crate::cli::CalendarArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::infra::memo_path;

pub fn handle_calendar(args: &CalendarArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.started_app();
    app.open_date(args.select.key());
    if let Some(month) = args.month {
        app.show_month(month);
    }

    let grid = app.calendar();
    match args.format {
        OutputFormat::Human => {
            print!("{}", grid.render());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&grid))?);
        }
        OutputFormat::Paths => {
            if let Some(folder) = app.folder() {
                for cell in grid.days.iter().filter(|c| c.has_memo) {
                    println!("{}", memo_path(folder, &cell.date).display());
                }
            }
        }
    }

    Ok(())
}
