use crate::cli::{Cli, Commands};
use crate::domain::models::Roster;
use crate::services::output::print_json;
use crate::services::{export, render, summary};

/// Handle the one-shot subcommands. Returns `Ok(false)` when the invocation
/// should fall through to the interactive menu instead.
pub fn handle_report_commands(cli: &Cli, roster: &Roster) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Hierarchy => {
            if cli.json {
                print_json(render::hierarchy_entries(roster))?;
            } else {
                render::print_hierarchy(roster);
            }
        }
        Commands::Report => {
            let report = summary::summarize(roster);
            if cli.json {
                print_json(&report.rows)?;
            } else {
                render::print_summary_table(&report);
            }
        }
        Commands::Export => {
            let report = summary::summarize(roster);
            let outcome = export::write_summary(Some(&report), &cli.output)?;
            if cli.json {
                print_json(&outcome)?;
            } else {
                println!("Отчёт сохранён в {}", outcome.path);
            }
        }
        Commands::Menu => return Ok(false),
    }

    Ok(true)
}
