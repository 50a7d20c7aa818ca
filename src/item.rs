//! Item data model for knowledge cards.
//!
//! An [`Item`] is one knowledge-card record: free-text title and content, a
//! categorical identity and type, tags, optional file/web links, and
//! ISO-8601 timestamps stored as strings so that lexicographic order equals
//! chronological order. The JSON field names match the original export
//! format (`createdAt`, `updatedAt`, `type`, `_v`).
//!
//! The search engine treats items as read-only input; the only derived state
//! it ever produces is the transient [`ScoredItem`] view.

use chrono::{SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity labels recognized at the import/add boundary.
pub const IDENTITIES: [&str; 2] = ["Company", "Personal"];

/// Type labels recognized at the import/add boundary.
pub const TYPES: [&str; 4] = ["Project", "Knowledge", "Admin", "Resource"];

/// Fallback identity applied when an imported record carries an unknown one.
pub const DEFAULT_IDENTITY: &str = "Company";

/// Fallback type applied when an imported record carries an unknown one.
pub const DEFAULT_TYPE: &str = "Project";

/// A single knowledge-card record.
///
/// `identity` and `kind` are plain strings: the engine filters on them by
/// exact match and never re-validates them against the closed label sets.
/// Validation happens once, at the import boundary (see
/// [`crate::convert::json::import_json`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique identifier, unique within a collection.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub identity: String,
    /// Categorical type label ("type" on the wire).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Per-item version counter, bumped on every upsert.
    #[serde(rename = "_v", default)]
    pub version: u64,
}

impl Item {
    /// Create a new item with a generated id and current timestamps.
    pub fn new<S: Into<String>>(title: S) -> Self {
        let now = now_timestamp();
        Item {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            identity: DEFAULT_IDENTITY.to_string(),
            kind: DEFAULT_TYPE.to_string(),
            tags: Vec::new(),
            links: Vec::new(),
            content: String::new(),
            created_at: now.clone(),
            updated_at: now,
            version: 1,
        }
    }

    /// Set the identity label.
    pub fn with_identity<S: Into<String>>(mut self, identity: S) -> Self {
        self.identity = identity.into();
        self
    }

    /// Set the type label.
    pub fn with_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the links.
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Set the content body.
    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = content.into();
        self
    }

    /// Mark the item as updated: refresh `updatedAt` and bump the version.
    pub fn touch(&mut self) {
        self.updated_at = now_timestamp();
        self.version += 1;
    }
}

/// A transient scored view over an item, produced by the search engine.
///
/// The engine never mutates an item in place; it clones accepted items into
/// this wrapper. Serializes as the item's fields plus `_score`, matching the
/// shape the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    /// Relevance score; 0 when no free-text query was given.
    #[serde(rename = "_score")]
    pub score: f64,
}

/// Current UTC time as a fixed-width RFC 3339 string (millisecond precision).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Split a comma-separated input into trimmed, non-empty parts.
pub fn split_comma(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

lazy_static! {
    static ref SCHEME_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*://").expect("scheme pattern should be valid");
    static ref UNC_PATTERN: Regex =
        Regex::new(r"^\\\\[^\\/]+[\\/]+").expect("UNC pattern should be valid");
    static ref DRIVE_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z]:[\\/]").expect("drive pattern should be valid");
}

/// Normalize a raw link into something openable.
///
/// Anything already carrying a URL scheme passes through untouched. Windows
/// UNC paths (`\\host\share\...`) and drive paths (`C:\...`) are rewritten as
/// `file://` URLs with percent-encoded paths. Everything else is returned
/// as-is.
pub fn normalize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if SCHEME_PATTERN.is_match(trimmed) {
        return trimmed.to_string();
    }

    // Strip one surrounding quote character from each end.
    let quotes: &[char] = &['"', '\''];
    let unquoted = trimmed.strip_prefix(quotes).unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(quotes).unwrap_or(unquoted);

    if UNC_PATTERN.is_match(unquoted) {
        let without_leading = unquoted.trim_start_matches('\\');
        let mut parts = without_leading
            .split(['\\', '/'])
            .filter(|part| !part.is_empty());
        if let Some(host) = parts.next() {
            let path = parts.collect::<Vec<_>>().join("/");
            return format!("file://{host}/{}", encode_uri(&path));
        }
        return unquoted.to_string();
    }

    if DRIVE_PATTERN.is_match(unquoted) {
        let unified = unquoted.replace('\\', "/");
        let drive = &unified[..2];
        let rest = &unified[2..];
        return format!("file:///{drive}{}", encode_uri(rest));
    }

    unquoted.to_string()
}

/// Percent-encode a path the way `encodeURI` does (slashes stay literal).
fn encode_uri(input: &str) -> String {
    const SAFE: &str = ";,/?:@&=+$-_.!~*'()#";
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || SAFE.contains(ch) {
            out.push(ch);
        } else {
            for byte in ch.encode_utf8(&mut buf).as_bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("Budget Plan");
        assert!(!item.id.is_empty());
        assert_eq!(item.title, "Budget Plan");
        assert_eq!(item.identity, DEFAULT_IDENTITY);
        assert_eq!(item.kind, DEFAULT_TYPE);
        assert_eq!(item.version, 1);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_touch_bumps_version() {
        let mut item = Item::new("Notes");
        let before = item.updated_at.clone();
        item.touch();
        assert_eq!(item.version, 2);
        assert!(item.updated_at >= before);
    }

    #[test]
    fn test_serde_field_names() {
        let item = Item::new("Notes").with_kind("Knowledge");
        let value = serde_json::to_value(&item).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("type"));
        assert!(obj.contains_key("createdAt"));
        assert!(obj.contains_key("updatedAt"));
        assert!(obj.contains_key("_v"));
        assert_eq!(obj["type"], "Knowledge");
    }

    #[test]
    fn test_scored_item_serializes_flat() {
        let scored = ScoredItem {
            item: Item::new("Notes"),
            score: 8.0,
        };
        let value = serde_json::to_value(&scored).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["title"], "Notes");
        assert_eq!(obj["_score"], 8.0);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let item: Item = serde_json::from_str(r#"{"id":"a1"}"#).unwrap();
        assert_eq!(item.id, "a1");
        assert!(item.title.is_empty());
        assert!(item.tags.is_empty());
        assert!(item.updated_at.is_empty());
        assert_eq!(item.version, 0);
    }

    #[test]
    fn test_split_comma() {
        assert_eq!(split_comma("a, b , ,c"), vec!["a", "b", "c"]);
        assert!(split_comma("").is_empty());
    }

    #[test]
    fn test_normalize_link_passthrough() {
        assert_eq!(
            normalize_link("https://example.com/x"),
            "https://example.com/x"
        );
        assert_eq!(normalize_link("notes.txt"), "notes.txt");
        assert_eq!(normalize_link(""), "");
    }

    #[test]
    fn test_normalize_link_drive_path() {
        assert_eq!(
            normalize_link(r"C:\Docs\My File.txt"),
            "file:///C:/Docs/My%20File.txt"
        );
    }

    #[test]
    fn test_normalize_link_unc_path() {
        assert_eq!(
            normalize_link(r"\\server\share\file.txt"),
            "file://server/share/file.txt"
        );
    }

    #[test]
    fn test_normalize_link_strips_quotes() {
        assert_eq!(
            normalize_link("\"C:\\Docs\\a.txt\""),
            "file:///C:/Docs/a.txt"
        );
    }
}
