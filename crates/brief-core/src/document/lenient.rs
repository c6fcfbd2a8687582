//! Lenient field deserializers.
//!
//! Briefs come from a language model and from years of stored versions, so
//! a section of the wrong JSON type is read as empty and a malformed element
//! is skipped, never a parse failure. Every helper here goes through
//! `serde_json::Value` so it works the same under `#[serde(flatten)]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::collections::BTreeMap;

/// JSON type name, for log output.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A sequence section. Non-arrays become empty; elements that do not
/// deserialize as `T` are dropped.
pub(crate) fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(seq_from_value(value))
}

pub(crate) fn seq_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => {
            let total = items.len();
            let parsed: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            if parsed.len() < total {
                ::tracing::debug!(
                    dropped = total - parsed.len(),
                    "skipped malformed sequence elements"
                );
            }
            parsed
        }
        Value::Null => Vec::new(),
        other => {
            ::tracing::debug!(found = json_kind(&other), "expected array, treating as empty");
            Vec::new()
        }
    }
}

/// A list of ref ids. Strings are kept (trimmed, empties dropped); numbers
/// are stringified because some generators emit numeric ids.
pub(crate) fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::String(s) => vec![Value::String(s)],
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect())
}

/// An id-keyed map section. Non-objects become empty; entries that do not
/// deserialize are dropped (their ids then count as dangling refs).
pub(crate) fn map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(id, entry)| {
                let parsed = serde_json::from_value(entry).ok()?;
                Some((id, parsed))
            })
            .collect(),
        Value::Null => BTreeMap::new(),
        other => {
            ::tracing::debug!(found = json_kind(&other), "expected object, treating as empty");
            BTreeMap::new()
        }
    })
}

/// Free text. Numbers and booleans are stringified, anything else is empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Optional value of any type; a type mismatch reads as `None`.
pub(crate) fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Optional text that is `None` when blank.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = text(deserializer)?;
    Ok(if s.trim().is_empty() { None } else { Some(s) })
}

/// Optional flag. Accepts `true`/`false` and the strings `"true"`/`"false"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Non-negative count; anything else reads as 0.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_count(deserializer)?.unwrap_or(0))
}

pub(crate) fn opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .map(|n| n.min(u64::from(u32::MAX)) as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A lowercase enum label (`"High"` and `" high "` both read as `high`).
/// Unrecognised labels fall back to `T::default()`.
pub(crate) fn label<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => {
            serde_json::from_value(Value::String(s.trim().to_ascii_lowercase())).unwrap_or_default()
        }
        _ => T::default(),
    })
}
