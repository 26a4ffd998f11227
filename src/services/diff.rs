use crate::domain::models::KeyedDiff;
use serde_json::Value;
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
pub enum DiffError {
    #[error("record missing key field `{0}` (or key is not a string/number)")]
    MalformedRecord(String),
    #[error("duplicate key value `{0}` in collection")]
    DuplicateKey(String),
    #[error("domain `{0}` missing from older snapshot")]
    MissingDomain(String),
}

/// Extract a record's identity key as text. Keys are matched by exact value,
/// so strings and numbers are accepted and anything else is malformed.
pub fn record_key(record: &Value, key_field: &str) -> Result<String, DiffError> {
    match record.get(key_field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(DiffError::MalformedRecord(key_field.to_string())),
    }
}

fn index_by_key<'a>(
    records: &'a [Value],
    key_field: &str,
) -> Result<HashMap<String, &'a Value>, DiffError> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let key = record_key(record, key_field)?;
        if index.insert(key.clone(), record).is_some() {
            return Err(DiffError::DuplicateKey(key));
        }
    }
    Ok(index)
}

/// Compare two collections of keyed records and classify every key into one
/// of the four buckets. A key present on both sides is `unchanged` when the
/// records compare deep-equal (object field order does not matter), and
/// `modified` otherwise, with the record taken from the newer side.
///
/// Bucket order follows input iteration order; no sorting is applied.
pub fn diff_keyed_lists(
    older: &[Value],
    newer: &[Value],
    key_field: &str,
) -> Result<KeyedDiff, DiffError> {
    let old_index = index_by_key(older, key_field)?;
    let new_index = index_by_key(newer, key_field)?;

    let mut diff = KeyedDiff::default();
    for record in newer {
        let key = record_key(record, key_field)?;
        match old_index.get(&key) {
            None => diff.added.push(record.clone()),
            Some(old) if **old == *record => diff.unchanged.push(record.clone()),
            Some(_) => diff.modified.push(record.clone()),
        }
    }
    for record in older {
        let key = record_key(record, key_field)?;
        if !new_index.contains_key(&key) {
            diff.removed.push(record.clone());
        }
    }
    Ok(diff)
}
