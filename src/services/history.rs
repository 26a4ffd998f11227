use crate::domain::models::{ChangelogConfig, Protocol};
use crate::services::changeset::{build_changeset, has_changes};
use crate::services::render::render_changeset;
use anyhow::{bail, Context};
use std::path::Path;
use std::process::Command;

/// Revision hashes of the repository, newest first.
pub fn list_revisions(repo: &Path) -> anyhow::Result<Vec<String>> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["log", "--format=%H"])
        .output()
        .context("run git log")?;
    if !out.status.success() {
        bail!(
            "git log failed in {}: {}",
            repo.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

/// Read one file as it existed at a revision, without touching the working
/// copy.
pub fn read_file_at(repo: &Path, rev: &str, path: &str) -> anyhow::Result<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo)
        .arg("show")
        .arg(format!("{rev}:{path}"))
        .output()
        .context("run git show")?;
    if !out.status.success() {
        bail!(
            "git show {rev}:{path} failed: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    String::from_utf8(out.stdout).with_context(|| format!("{path} at {rev} is not UTF-8"))
}

fn load_snapshot(repo: &Path, rev: &str, path: &str) -> anyhow::Result<Protocol> {
    let raw = read_file_at(repo, rev, path)?;
    serde_json::from_str(&raw).with_context(|| format!("parse {path} at {rev}"))
}

/// Report chunk for one revision pair: a header, a compare link, and the
/// rendered sections of every tracked document kind that changed. Empty
/// string when nothing changed in any kind.
fn diff_pair(
    repo: &Path,
    config: &ChangelogConfig,
    older: &str,
    newer: &str,
) -> anyhow::Result<String> {
    let mut sections = String::new();
    for doc in &config.documents {
        let older_doc = load_snapshot(repo, older, &doc.path)
            .with_context(|| format!("load {} document", doc.name))?;
        let newer_doc = load_snapshot(repo, newer, &doc.path)
            .with_context(|| format!("load {} document", doc.name))?;
        let entries = build_changeset(&older_doc, &newer_doc)?;
        if has_changes(&entries) {
            sections.push_str(&render_changeset(&entries, &config.docs_base_url));
        }
    }
    if sections.is_empty() {
        return Ok(String::new());
    }
    Ok(format!(
        "# Diff of {older}...{newer}:\n{}/compare/{older}...{newer}\n{sections}",
        config.compare_base_url
    ))
}

/// Walk consecutive revision pairs, newest pair first, and accumulate the
/// rendered report. Processing is strictly sequential: each step compares a
/// revision against its immediate parent, and the concatenation order of the
/// returned report is the walk order.
///
/// With `skip_malformed`, a pair that fails to load or diff is reported on
/// stderr and skipped; otherwise the walk aborts on that pair.
pub fn walk_changelog(
    repo: &Path,
    config: &ChangelogConfig,
    limit: Option<usize>,
    skip_malformed: bool,
) -> anyhow::Result<String> {
    let revisions = list_revisions(repo)?;
    let mut pairs = revisions.len().saturating_sub(1);
    if let Some(limit) = limit {
        pairs = pairs.min(limit);
    }

    let mut report = String::new();
    for i in 0..pairs {
        let newer = &revisions[i];
        let older = &revisions[i + 1];
        match diff_pair(repo, config, older, newer) {
            Ok(chunk) => report.push_str(&chunk),
            Err(err) if skip_malformed => {
                eprintln!("skipping {older}...{newer}: {err:#}");
            }
            Err(err) => {
                return Err(err.context(format!("diff of {older}...{newer}")));
            }
        }
    }
    Ok(report)
}
