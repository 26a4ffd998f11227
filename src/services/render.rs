use crate::domain::models::{CollectionKind, DiffEntry};
use serde_json::Value;

/// Key text for rendering. Records reaching the renderer came out of the
/// differ, so the key is present; fall back to an empty string rather than
/// failing mid-report.
fn key_text(record: &Value, key_field: &str) -> String {
    match record.get(key_field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Render a changeset as Markdown sections. Empty buckets produce nothing;
/// `unchanged` records are never rendered. An all-empty changeset renders to
/// the empty string with no stray headers or blank lines.
pub fn render_changeset(entries: &[DiffEntry], docs_base_url: &str) -> String {
    let mut out = String::new();
    for entry in entries {
        let buckets = [
            ("added", &entry.diff.added),
            ("removed", &entry.diff.removed),
            ("modified", &entry.diff.modified),
        ];
        for (change, records) in buckets {
            if records.is_empty() {
                continue;
            }
            out.push_str(&format!("### {} {}: `{}`\n", change, entry.kind, entry.domain));
            for record in records {
                let key = key_text(record, entry.kind.key_field());
                // a domain record's own key doubles as its path segment
                let domain_segment = if entry.kind == CollectionKind::Domains {
                    key.as_str()
                } else {
                    entry.domain.as_str()
                };
                out.push_str(&format!(
                    "* [`{key}`]({docs_base_url}/{domain_segment}/#{}-{key})\n",
                    entry.kind.link_segment()
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_changeset;
    use crate::domain::models::{CollectionKind, DiffEntry, KeyedDiff};
    use serde_json::json;

    const BASE: &str = "https://example.org/docs";

    fn entry(kind: CollectionKind, domain: &str, diff: KeyedDiff) -> DiffEntry {
        DiffEntry {
            kind,
            domain: domain.to_string(),
            diff,
        }
    }

    #[test]
    fn added_command_renders_header_and_link() {
        let diff = KeyedDiff {
            added: vec![json!({"name": "bar"})],
            unchanged: vec![json!({"name": "foo"})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Commands, "X", diff)], BASE);
        assert_eq!(
            out,
            "### added commands: `X`\n* [`bar`](https://example.org/docs/X/#method-bar)\n"
        );
    }

    #[test]
    fn type_links_strip_plural_without_method_rename() {
        let diff = KeyedDiff {
            modified: vec![json!({"id": "T1", "properties": [{"name": "p"}]})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Types, "X", diff)], BASE);
        assert!(out.contains("### modified types: `X`"));
        assert!(out.contains("(https://example.org/docs/X/#type-T1)"));
    }

    #[test]
    fn event_links_use_singular_segment() {
        let diff = KeyedDiff {
            removed: vec![json!({"name": "pressure"})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Events, "Memory", diff)], BASE);
        assert!(out.contains("#event-pressure)"));
    }

    #[test]
    fn domain_bullets_link_through_their_own_name() {
        let diff = KeyedDiff {
            added: vec![json!({"domain": "WebAudio"})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Domains, "", diff)], BASE);
        assert!(out.contains("* [`WebAudio`](https://example.org/docs/WebAudio/#domain-WebAudio)\n"));
    }

    #[test]
    fn buckets_render_in_fixed_order() {
        let diff = KeyedDiff {
            added: vec![json!({"name": "a"})],
            removed: vec![json!({"name": "r"})],
            modified: vec![json!({"name": "m"})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Commands, "D", diff)], BASE);
        let added = out.find("### added").unwrap();
        let removed = out.find("### removed").unwrap();
        let modified = out.find("### modified").unwrap();
        assert!(added < removed && removed < modified);
    }

    #[test]
    fn unchanged_records_never_reach_output() {
        let diff = KeyedDiff {
            unchanged: vec![json!({"name": "quiet"})],
            ..KeyedDiff::default()
        };
        let out = render_changeset(&[entry(CollectionKind::Commands, "D", diff)], BASE);
        assert!(out.is_empty());
    }

    #[test]
    fn all_empty_changeset_renders_nothing() {
        let entries = vec![
            entry(CollectionKind::Domains, "", KeyedDiff::default()),
            entry(CollectionKind::Commands, "D", KeyedDiff::default()),
        ];
        assert_eq!(render_changeset(&entries, BASE), "");
    }
}
