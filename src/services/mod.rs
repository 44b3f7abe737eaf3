//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `roster.rs` — roster file parsing + department/team grouping.
//! - `summary.rs` — per-department salary statistics.
//! - `export.rs` — summary report CSV persistence.
//! - `render.rs` — console hierarchy/table rendering.
//! - `output.rs` — JSON envelope output helper.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod export;
pub mod output;
pub mod render;
pub mod roster;
pub mod summary;
