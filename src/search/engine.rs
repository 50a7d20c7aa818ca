//! Filter-and-search orchestration.

use tracing::debug;

use crate::analysis::tokenize;
use crate::item::{Item, ScoredItem};
use crate::search::request::SearchRequest;
use crate::search::scorer::score_item;

/// Apply structural filters, then conjunctive weighted scoring.
///
/// The structural pass keeps an item only if every present filter matches:
/// identity and type by exact string equality, tag by case-insensitive
/// membership in the item's tag list. When the free-text query tokenizes to
/// nothing, every surviving item passes through with score 0; otherwise each
/// must satisfy the conjunctive match in [`score_item`].
///
/// Accepted items are cloned into [`ScoredItem`]s; the input collection is
/// never mutated. Output order is unspecified; see
/// [`sort_items`](crate::search::sort_items).
pub fn filter_and_search(items: &[Item], request: &SearchRequest) -> Vec<ScoredItem> {
    let tokens = tokenize(&request.q);
    let tag_lower = request.tag.to_lowercase();

    let results: Vec<ScoredItem> = items
        .iter()
        .filter(|item| {
            if !request.identity.is_empty() && item.identity != request.identity {
                return false;
            }
            if !request.kind.is_empty() && item.kind != request.kind {
                return false;
            }
            if !request.tag.is_empty()
                && !item.tags.iter().any(|tag| tag.to_lowercase() == tag_lower)
            {
                return false;
            }
            true
        })
        .filter_map(|item| {
            score_item(item, &tokens).map(|score| ScoredItem {
                item: item.clone(),
                score,
            })
        })
        .collect();

    debug!(
        candidates = items.len(),
        tokens = tokens.len(),
        hits = results.len(),
        "filter_and_search"
    );
    results
}
