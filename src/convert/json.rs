//! JSON import/export.
//!
//! Export is a pretty-printed array of items. Import accepts any JSON array
//! and normalizes each record at the boundary: generated ids for missing
//! ones, unknown identity/type labels coerced to the defaults, defaulted
//! tags/links/timestamps. The search engine downstream never re-validates.

use serde_json::Value;
use uuid::Uuid;

use crate::error::{KeySearchError, Result};
use crate::item::{
    DEFAULT_IDENTITY, DEFAULT_TYPE, IDENTITIES, Item, TYPES, normalize_link, now_timestamp,
    split_comma,
};

/// Serialize a collection as a pretty-printed JSON array.
pub fn export_json(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Parse and normalize a JSON export.
///
/// Anything other than a top-level array is an import error; individual
/// records are coerced rather than rejected.
pub fn import_json(text: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(text)?;
    let records = value
        .as_array()
        .ok_or_else(|| KeySearchError::import("expected a JSON array of items"))?;
    Ok(records.iter().map(normalize_record).collect())
}

/// Coerce one arbitrary JSON record into a well-formed item.
fn normalize_record(value: &Value) -> Item {
    let now = now_timestamp();

    let id = string_field(value, "id")
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let title = string_field(value, "title").unwrap_or_default().trim().to_string();

    let identity = string_field(value, "identity")
        .filter(|identity| IDENTITIES.contains(&identity.as_str()))
        .unwrap_or_else(|| DEFAULT_IDENTITY.to_string());
    let kind = string_field(value, "type")
        .filter(|kind| TYPES.contains(&kind.as_str()))
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let tags = match value.get("tags") {
        Some(Value::Array(values)) => values.iter().map(coerce_string).collect(),
        _ => Vec::new(),
    };

    let links = match value.get("links") {
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| normalize_link(&coerce_string(v)))
            .collect(),
        Some(Value::String(s)) => split_comma(s).iter().map(|l| normalize_link(l)).collect(),
        _ => Vec::new(),
    };

    let content = string_field(value, "content").unwrap_or_default();
    let created_at = string_field(value, "createdAt")
        .filter(|ts| !ts.is_empty())
        .unwrap_or_else(|| now.clone());
    let updated_at = string_field(value, "updatedAt")
        .filter(|ts| !ts.is_empty())
        .unwrap_or_else(|| now.clone());

    let version = value.get("_v").and_then(Value::as_u64).filter(|v| *v > 0).unwrap_or(1);

    Item {
        id,
        title,
        identity,
        kind,
        tags,
        links,
        content,
        created_at,
        updated_at,
        version,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Stringify scalar JSON values the way JS `String(x)` does.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
