use crate::*;
use anyhow::Context;

pub fn handle_admin_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Validate { file } = &cli.command else {
        return Ok(false);
    };

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("read document {}", file.display()))?;
    let doc: Protocol =
        serde_json::from_str(&raw).with_context(|| format!("parse document {}", file.display()))?;

    match check_document(&doc) {
        Ok(collections_checked) => {
            let report = ValidationReport {
                file: file.display().to_string(),
                domains: doc.domains.len(),
                collections_checked,
                status: "valid".to_string(),
            };
            print_one(cli.json, report, |r| {
                format!("document valid ({} domains, {} collections)", r.domains, r.collections_checked)
            })?;
        }
        Err(err) => {
            eprintln!("document invalid: {err}");
            std::process::exit(1);
        }
    }

    Ok(true)
}
