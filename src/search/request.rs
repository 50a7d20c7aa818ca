//! Search request descriptor.

use serde::{Deserialize, Serialize};

/// A filter/query descriptor for one search invocation.
///
/// Every field is optional in the sense that an empty string means
/// "no filter". The engine imposes no validation beyond that: an unknown
/// identity/type/tag value simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    /// Free-text query; tokenized, every token must match (AND semantics).
    pub q: String,
    /// Exact-match identity filter (e.g. "Company").
    pub identity: String,
    /// Exact-match type filter ("type" on the wire, e.g. "Project").
    #[serde(rename = "type")]
    pub kind: String,
    /// Case-insensitive tag-membership filter.
    pub tag: String,
}

impl SearchRequest {
    /// Create an empty request (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn query<S: Into<String>>(mut self, q: S) -> Self {
        self.q = q.into();
        self
    }

    /// Set the identity filter.
    pub fn identity<S: Into<String>>(mut self, identity: S) -> Self {
        self.identity = identity.into();
        self
    }

    /// Set the type filter.
    pub fn kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the tag filter.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = SearchRequest::new()
            .query("budget")
            .identity("Company")
            .kind("Project")
            .tag("finance");
        assert_eq!(request.q, "budget");
        assert_eq!(request.identity, "Company");
        assert_eq!(request.kind, "Project");
        assert_eq!(request.tag, "finance");
    }

    #[test]
    fn test_deserialize_missing_fields_as_wildcards() {
        let request: SearchRequest = serde_json::from_str(r#"{"q":"notes"}"#).unwrap();
        assert_eq!(request.q, "notes");
        assert!(request.identity.is_empty());
        assert!(request.kind.is_empty());
        assert!(request.tag.is_empty());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let request = SearchRequest::new().kind("Admin");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "Admin");
    }
}
