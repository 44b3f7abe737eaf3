//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `report.rs` — one-shot hierarchy/report/export commands.
//! - `menu.rs` — the interactive menu session.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod menu;
pub mod report;

pub use menu::run_menu;
pub use report::handle_report_commands;
