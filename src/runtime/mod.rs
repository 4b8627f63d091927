//! Binary runtime: argument parsing, logging, settings and the command shell.

use std::io;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;

use crate::scheduler::Ticker;
use crate::session;

mod cli;
mod logging;
mod settings;
mod shell;
mod startup;
mod views;

pub use cli::Args;
pub use logging::setup_logging;
pub use settings::load_settings;
pub use shell::{Flow, ParseCommandError, ShellCommand, dispatch};
pub use startup::{build_session, load_catalog, session_options};
pub use views::{mini_player_line, now_playing_panel};

pub fn run() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level, args.log_file.as_deref(), args.log_file_level)?;

    log::debug!("romeo starting");
    let settings = load_settings(args.config.as_deref());
    let catalog = load_catalog(args.catalog.as_deref(), &settings.catalog)?;
    let shared = session::share(build_session(&settings, &catalog));

    let ticker = Ticker::spawn(
        shared.clone(),
        Duration::from_millis(settings.scheduler.tick_ms),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = shell::run(stdin.lock(), stdout.lock(), &shared, &settings);

    ticker.stop();
    log::debug!("romeo exiting");
    result
}

#[cfg(test)]
mod tests;
