//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep protocol/diff/config/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — protocol documents, diff buckets, config, output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
