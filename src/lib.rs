pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use cli::{Cli, Commands};
pub use commands::{handle_admin_commands, handle_report_commands};
pub use domain::models::{
    ChangelogConfig, CollectionKind, DiffEntry, DocumentSpec, JsonOut, KeyedDiff, Protocol,
    ValidationReport,
};
pub use services::changeset::{build_changeset, check_document, has_changes};
pub use services::config::load_config;
pub use services::diff::{diff_keyed_lists, record_key, DiffError};
pub use services::history::{list_revisions, read_file_at, walk_changelog};
pub use services::output::{print_json, print_one};
pub use services::render::render_changeset;
