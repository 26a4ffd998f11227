use crate::*;
use anyhow::Context;
use std::path::Path;

fn read_protocol(path: &Path) -> anyhow::Result<Protocol> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read document {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse document {}", path.display()))
}

pub fn handle_report_commands(cli: &Cli, config: &ChangelogConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Changelog {
            repo,
            limit,
            skip_malformed,
        } => {
            let report = walk_changelog(repo, config, *limit, *skip_malformed)?;
            print!("{report}");
        }
        Commands::Diff { older, newer } => {
            let older_doc = read_protocol(older)?;
            let newer_doc = read_protocol(newer)?;
            let entries = build_changeset(&older_doc, &newer_doc)?;
            if cli.json {
                print_json(&entries)?;
            } else {
                print!("{}", render_changeset(&entries, &config.docs_base_url));
            }
        }
        Commands::Validate { .. } => {
            unreachable!("handled before report dispatch")
        }
    }

    Ok(())
}
