//! Ordering of filtered search results.

use std::cmp::Ordering;

use crate::item::ScoredItem;

/// Default sort key used by callers when none is given.
pub const DEFAULT_SORT: &str = "updatedAt_desc";

/// Recognized sort keys.
///
/// Timestamps are fixed-width RFC 3339 strings, so descending lexicographic
/// order is descending chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently updated first.
    UpdatedAtDesc,
    /// Most recently created first.
    CreatedAtDesc,
    /// Title, ascending.
    TitleAsc,
    /// Relevance score descending, ties broken by `updatedAt` descending.
    ScoreDesc,
}

impl SortKey {
    /// Parse a sort key string. Unknown values yield `None`.
    pub fn parse(key: &str) -> Option<SortKey> {
        match key {
            "updatedAt_desc" => Some(SortKey::UpdatedAtDesc),
            "createdAt_desc" => Some(SortKey::CreatedAtDesc),
            "title_asc" => Some(SortKey::TitleAsc),
            "score_desc" => Some(SortKey::ScoreDesc),
            _ => None,
        }
    }

    /// The wire form of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::UpdatedAtDesc => "updatedAt_desc",
            SortKey::CreatedAtDesc => "createdAt_desc",
            SortKey::TitleAsc => "title_asc",
            SortKey::ScoreDesc => "score_desc",
        }
    }
}

/// Stable in-place sort by `key`.
///
/// An unrecognized key is a documented no-op: the input order is left
/// untouched and no error is raised. Missing title/timestamp fields compare
/// as the empty string.
pub fn sort_items(items: &mut [ScoredItem], key: &str) {
    let Some(key) = SortKey::parse(key) else {
        return;
    };
    match key {
        SortKey::UpdatedAtDesc => {
            items.sort_by(|a, b| b.item.updated_at.cmp(&a.item.updated_at));
        }
        SortKey::CreatedAtDesc => {
            items.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
        }
        SortKey::TitleAsc => {
            items.sort_by(|a, b| a.item.title.cmp(&b.item.title));
        }
        SortKey::ScoreDesc => {
            items.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.item.updated_at.cmp(&a.item.updated_at))
            });
        }
    }
}
