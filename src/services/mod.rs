//! Service layer containing the diff core and side-effect helpers.
//!
//! ## Service map
//! - `diff.rs` — keyed-list differ: classify records into added/removed/modified/unchanged.
//! - `changeset.rs` — per-snapshot-pair orchestration of domain and nested diffs.
//! - `render.rs` — Markdown report rendering.
//! - `history.rs` — git revision walking + report accumulation.
//! - `config.rs` — toml config loading with DevTools defaults.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`history.rs` owns the git calls).
//! - Keep command handlers thin; delegate to services.

pub mod changeset;
pub mod config;
pub mod diff;
pub mod history;
pub mod output;
pub mod render;
