//! NoteList terminal host.
//!
//! # Responsibility
//! - Parse flags, start optional file logging, run the command loop.
//! - Keep stdout for widget output; errors go to stderr.

mod app;
mod cli;
mod command;
mod terminal;

use crate::app::{run, CliError};
use crate::cli::Cli;
use crate::terminal::TerminalPort;
use clap::Parser;
use notelist_core::{default_log_level, init_logging, LoggingConfig};
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notelist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(&LoggingConfig::new(level, log_dir)?)?;
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        notelist_core::core_version()
    );

    let port = Rc::new(RefCell::new(TerminalPort::new(std::io::stdout())));
    run(std::io::stdin().lock(), port)
}
