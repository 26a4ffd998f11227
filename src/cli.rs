use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "protolog", version, about = "Protocol changelog generator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Path to a protolog.toml config file (built-in defaults when absent)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a protocol repository's git history and print the accumulated
    /// changelog, newest revision pair first.
    Changelog {
        #[arg(long, help = "Path to the local protocol git repository")]
        repo: PathBuf,
        #[arg(long, help = "Only process the N most recent revision pairs")]
        limit: Option<usize>,
        #[arg(
            long,
            default_value_t = false,
            help = "Warn and continue when a revision pair fails to load or diff"
        )]
        skip_malformed: bool,
    },
    /// Diff two protocol document files directly.
    Diff { older: PathBuf, newer: PathBuf },
    /// Check a protocol document's key discipline (key fields present,
    /// string or number valued, unique per collection).
    Validate { file: PathBuf },
}
