use crate::cli::Cli;
use crate::domain::models::{Roster, SummaryReport};
use crate::services::{export, render, summary};
use std::io::BufRead;

/// Consecutive unrecognized entries tolerated before the session aborts.
const MAX_BAD_INPUTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Hierarchy,
    Report,
    Save,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Hierarchy),
            "2" => Some(Self::Report),
            "3" => Some(Self::Save),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("1) Иерархия команд");
    println!("2) Сводный отчёт по департаментам");
    println!("3) Сохранить сводный отчёт");
    println!("4) Выход");
}

/// The interactive session. The roster stays read-only; the only session
/// state is the most recently computed report, which is what option 3 saves.
pub fn run_menu(cli: &Cli, roster: &Roster) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_report: Option<SummaryReport> = None;
    let mut bad_inputs = 0u32;

    loop {
        print_menu();
        let Some(line) = lines.next() else {
            // EOF ends the session cleanly.
            return Ok(());
        };
        let Some(choice) = MenuChoice::parse(&line?) else {
            bad_inputs += 1;
            if bad_inputs >= MAX_BAD_INPUTS {
                anyhow::bail!("no valid menu selection after {MAX_BAD_INPUTS} attempts");
            }
            println!("Неверный ввод, введите номер пункта меню");
            continue;
        };
        bad_inputs = 0;

        match choice {
            MenuChoice::Hierarchy => render::print_hierarchy(roster),
            MenuChoice::Report => {
                let report = summary::summarize(roster);
                render::print_summary_table(&report);
                last_report = Some(report);
            }
            MenuChoice::Save => {
                let outcome = export::write_summary(last_report.as_ref(), &cli.output)?;
                println!("Отчёт сохранён в {}", outcome.path);
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}
