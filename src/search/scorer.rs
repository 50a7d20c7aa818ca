//! Weighted conjunctive scoring of items against query tokens.

use crate::analysis::tokenize;
use crate::item::Item;

/// Weight added per query token found in the title.
pub const TITLE_WEIGHT: f64 = 5.0;

/// Weight added per query token found in any tag.
pub const TAGS_WEIGHT: f64 = 3.0;

/// Weight added per query token found in the content body.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Score one item against a sequence of query tokens.
///
/// Conjunctive semantics: every token must appear, by exact equality after
/// tokenization, in at least one of the title, tag, or content token
/// sequences. A miss on any token rejects the item (`None`). A token found
/// in several fields adds every matching field's full weight, so a token in
/// both title and content contributes 5 + 1 = 6.
///
/// An accepted item also receives a title-brevity bonus of
/// `max(0, 3 - title_chars / 20)`, biasing ties toward shorter, more
/// specific titles.
///
/// An empty token sequence accepts every item with score 0 (the filter-only
/// case).
pub fn score_item(item: &Item, tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return Some(0.0);
    }

    let title_tokens = tokenize(&item.title);
    let content_tokens = tokenize(&item.content);
    let tag_tokens: Vec<String> = item.tags.iter().flat_map(|tag| tokenize(tag)).collect();

    let mut score = 0.0;
    for token in tokens {
        let in_title = title_tokens.iter().any(|t| t == token);
        let in_tags = tag_tokens.iter().any(|t| t == token);
        let in_content = content_tokens.iter().any(|t| t == token);

        if !in_title && !in_tags && !in_content {
            return None;
        }

        if in_title {
            score += TITLE_WEIGHT;
        }
        if in_tags {
            score += TAGS_WEIGHT;
        }
        if in_content {
            score += CONTENT_WEIGHT;
        }
    }

    score += title_brevity_bonus(&item.title);
    Some(score)
}

/// Bonus for short titles, computed on the raw (untokenized) title length.
fn title_brevity_bonus(title: &str) -> f64 {
    let chars = title.chars().count() as i64;
    (3 - chars / 20).max(0) as f64
}
