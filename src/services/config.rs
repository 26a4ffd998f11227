use crate::domain::models::ChangelogConfig;
use anyhow::Context;
use std::path::Path;

/// Load the changelog config from a toml file. Built-in defaults (the Chrome
/// DevTools protocol repository layout) apply when no path is given or the
/// file does not exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ChangelogConfig> {
    let Some(path) = path else {
        return Ok(ChangelogConfig::default());
    };
    if !path.exists() {
        return Ok(ChangelogConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
}
