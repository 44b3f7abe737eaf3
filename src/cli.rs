use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ROSTER_PATH: &str = "Corp_Summary.csv";
pub const DEFAULT_REPORT_PATH: &str = "Report.csv";

#[derive(Parser, Debug)]
#[command(name = "kadry", version, about = "Corporate roster summary CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_ROSTER_PATH,
        help = "Path to the semicolon-delimited roster file"
    )]
    pub roster: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_REPORT_PATH,
        help = "Path the summary report CSV is saved to"
    )]
    pub output: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hierarchy,
    Report,
    Export,
    Menu,
}
