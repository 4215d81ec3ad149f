//! Minimal request payloads: only fields that were actually supplied are sent.

use serde_json::{Map, Value};

/// Field name to value mapping handed to an API operation.
pub type Payload = Map<String, Value>;

/// Build a payload from ordered `(key, value)` pairs, dropping every pair whose
/// value is `None`.
///
/// `Some(false)` and `Some(0)` are kept; only unset values are omitted.
pub fn build<K, I>(pairs: I) -> Payload
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.into(), value)))
        .collect()
}

/// Split a comma-separated tag option into individual tag names.
///
/// Splitting is literal: empty segments are kept as empty names.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
