//! daymemo - one plain-text memo per day, kept in a folder you choose

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod messages;
pub mod view;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, BufReader, IsTerminal};

use cli::{
    Cli, Command,
    config::Config,
    editor::ConfiguredEditor,
    handlers::{
        Context, handle_calendar, handle_edit, handle_folder, handle_history, handle_show,
        handle_status, handle_write,
    },
    shell::run_shell,
};
use infra::HandleStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load()?;
    let ctx = Context::new(
        cli.dir.clone(),
        cli.yes,
        config,
        HandleStore::at_default_location(),
    );

    match &cli.command {
        None | Some(Command::Shell) => {
            let mut app = ctx.started_app();
            let interactive = io::stdin().is_terminal();
            // Stdin stays unlocked between reads; access prompts read from it too.
            let input = BufReader::with_capacity(1, io::stdin());
            run_shell(
                &mut app,
                &ConfiguredEditor(&ctx.config),
                input,
                &mut io::stdout(),
                interactive,
            )
        }
        Some(Command::Folder(args)) => handle_folder(args, &ctx),
        Some(Command::Status(args)) => handle_status(args, &ctx),
        Some(Command::Show(args)) => handle_show(args, &ctx),
        Some(Command::Write(args)) => handle_write(args, &ctx),
        Some(Command::Edit(args)) => handle_edit(args, &ctx),
        Some(Command::Calendar(args)) => handle_calendar(args, &ctx),
        Some(Command::History(args)) => handle_history(args, &ctx),
        Some(Command::Completions(args)) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "memo", &mut io::stdout());
            Ok(())
        }
    }
}
