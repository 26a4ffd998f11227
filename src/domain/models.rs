use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One protocol snapshot: a flat list of domain records. Records are kept as
/// raw JSON objects since any record may carry arbitrary extra fields, all of
/// which participate in modified-detection.
#[derive(Debug, Deserialize, Default)]
pub struct Protocol {
    #[serde(default)]
    pub domains: Vec<Value>,
}

/// The four record collections a snapshot can contain, each with its own
/// identity key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Domains,
    Commands,
    Events,
    Types,
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Domains => "domains",
            CollectionKind::Commands => "commands",
            CollectionKind::Events => "events",
            CollectionKind::Types => "types",
        }
    }

    /// Field whose value identifies a record of this kind across snapshots.
    pub fn key_field(self) -> &'static str {
        match self {
            CollectionKind::Domains => "domain",
            CollectionKind::Commands | CollectionKind::Events => "name",
            CollectionKind::Types => "id",
        }
    }

    /// Anchor segment used in documentation links: `commands` is renamed to
    /// `methods`, then the plural `s` is stripped.
    pub fn link_segment(self) -> String {
        let renamed = self.as_str().replace("commands", "methods");
        renamed
            .strip_suffix('s')
            .unwrap_or(renamed.as_str())
            .to_string()
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing two collections of the same kind. Every key appearing
/// on either side lands in exactly one bucket.
#[derive(Debug, Default, Clone, Serialize)]
pub struct KeyedDiff {
    pub added: Vec<Value>,
    pub removed: Vec<Value>,
    pub modified: Vec<Value>,
    pub unchanged: Vec<Value>,
}

impl KeyedDiff {
    /// True when the diff carries no reportable change. `unchanged` records
    /// never count as changes.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Copy with the `modified` bucket dropped. Domain-level diffs use this:
    /// a "modified domain" is noise, the real changes surface in that
    /// domain's nested collections.
    pub fn with_modified_cleared(mut self) -> Self {
        self.modified.clear();
        self
    }
}

/// A [`KeyedDiff`] tagged with where it came from. `domain` is empty for the
/// domains-level entry itself.
#[derive(Debug, Clone, Serialize)]
pub struct DiffEntry {
    pub kind: CollectionKind,
    pub domain: String,
    pub diff: KeyedDiff,
}

fn default_docs_base_url() -> String {
    "https://chromedevtools.github.io/devtools-protocol/tot".to_string()
}

fn default_compare_base_url() -> String {
    "https://github.com/ChromeDevTools/devtools-protocol".to_string()
}

fn default_documents() -> Vec<DocumentSpec> {
    vec![
        DocumentSpec {
            name: "browser".to_string(),
            path: "json/browser_protocol.json".to_string(),
        },
        DocumentSpec {
            name: "js".to_string(),
            path: "json/js_protocol.json".to_string(),
        },
    ]
}

/// One tracked document kind inside the protocol repository. Each kind is
/// diffed independently with identical logic.
#[derive(Debug, Deserialize)]
pub struct DocumentSpec {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangelogConfig {
    #[serde(default = "default_docs_base_url")]
    pub docs_base_url: String,
    #[serde(default = "default_compare_base_url")]
    pub compare_base_url: String,
    #[serde(default = "default_documents")]
    pub documents: Vec<DocumentSpec>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            docs_base_url: default_docs_base_url(),
            compare_base_url: default_compare_base_url(),
            documents: default_documents(),
        }
    }
}

#[derive(Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub domains: usize,
    pub collections_checked: usize,
    pub status: String,
}
