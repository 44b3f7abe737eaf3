use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_report_commands, run_menu};
use services::roster::load_roster;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Single writer phase: the roster is built once and read-only afterwards.
    let roster = load_roster(&cli.roster)?;

    if handle_report_commands(&cli, &roster)? {
        return Ok(());
    }
    run_menu(&cli, &roster)
}
