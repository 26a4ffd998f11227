//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — document validation.
//! - `report.rs` — changelog walk and one-shot diff.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod report;

pub use admin::handle_admin_commands;
pub use report::handle_report_commands;
