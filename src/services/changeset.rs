use crate::domain::models::{CollectionKind, DiffEntry, KeyedDiff, Protocol};
use crate::services::diff::{diff_keyed_lists, record_key, DiffError};
use serde_json::Value;
use std::collections::HashSet;

const NESTED_KINDS: [CollectionKind; 3] = [
    CollectionKind::Commands,
    CollectionKind::Events,
    CollectionKind::Types,
];

const EMPTY: &[Value] = &[];

/// A domain record's nested collection; an absent field is an empty list.
fn nested(domain: &Value, kind: CollectionKind) -> &[Value] {
    domain
        .get(kind.as_str())
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(EMPTY)
}

/// Diff two protocol snapshots into an ordered list of tagged diffs: one
/// domains-level entry, then commands/events/types entries for every domain
/// present in both snapshots.
///
/// Two deliberate asymmetries, preserved from the tool this replaces:
/// a brand-new domain gets no nested entries (its items are implied by the
/// domains-level `added` record), and a wholly removed domain surfaces only
/// in the domains-level `removed` bucket.
pub fn build_changeset(older: &Protocol, newer: &Protocol) -> Result<Vec<DiffEntry>, DiffError> {
    let key_field = CollectionKind::Domains.key_field();
    let domains = diff_keyed_lists(&older.domains, &newer.domains, key_field)?;
    let brand_new: HashSet<String> = domains
        .added
        .iter()
        .map(|d| record_key(d, key_field))
        .collect::<Result<_, _>>()?;

    let mut entries = vec![DiffEntry {
        kind: CollectionKind::Domains,
        domain: String::new(),
        diff: domains.with_modified_cleared(),
    }];

    for domain in &newer.domains {
        let name = record_key(domain, key_field)?;
        if brand_new.contains(&name) {
            continue;
        }
        let old_domain = older
            .domains
            .iter()
            .find(|d| record_key(d, key_field).map(|k| k == name).unwrap_or(false))
            .ok_or_else(|| DiffError::MissingDomain(name.clone()))?;
        for kind in NESTED_KINDS {
            let diff = diff_keyed_lists(
                nested(old_domain, kind),
                nested(domain, kind),
                kind.key_field(),
            )?;
            entries.push(DiffEntry {
                kind,
                domain: name.clone(),
                diff,
            });
        }
    }
    Ok(entries)
}

/// True when any entry in the list carries a reportable change.
pub fn has_changes(entries: &[DiffEntry]) -> bool {
    entries.iter().any(|e| !e.diff.is_empty())
}

/// Walk every collection in a snapshot through the key-index checks without
/// producing a diff. Returns the number of collections checked.
pub fn check_document(doc: &Protocol) -> Result<usize, DiffError> {
    diff_keyed_lists(&doc.domains, &[], CollectionKind::Domains.key_field())?;
    let mut checked = 1;
    for domain in &doc.domains {
        for kind in NESTED_KINDS {
            diff_keyed_lists(nested(domain, kind), &[], kind.key_field())?;
            checked += 1;
        }
    }
    Ok(checked)
}
