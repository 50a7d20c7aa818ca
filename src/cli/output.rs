//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::args::{KeySearchArgs, OutputFormat};
use crate::error::Result;
use crate::item::ScoredItem;

/// Result structure for search/list operations.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub hits: Vec<ScoredItem>,
    pub total_hits: usize,
    pub sort: String,
}

/// Result structure for mutations (add/delete/import/export).
#[derive(Debug, Serialize)]
pub struct MutationOutput {
    pub id: Option<String>,
    pub affected: usize,
}

/// Collection statistics.
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub total_items: usize,
    pub items_by_identity: BTreeMap<String, usize>,
    pub items_by_type: BTreeMap<String, usize>,
}

/// Output a mutation or stats result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &KeySearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
        }
    }
    Ok(())
}

/// Output search results in the selected format.
pub fn output_search_results(results: &SearchOutput, args: &KeySearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Human => {
            for (i, hit) in results.hits.iter().enumerate() {
                let item = &hit.item;
                println!("{}. {} (score: {})", i + 1, item.title, hit.score);
                println!("   id: {}  [{} / {}]", item.id, item.identity, item.kind);
                if !item.tags.is_empty() {
                    println!("   tags: {}", item.tags.join(", "));
                }
                if !item.content.is_empty() {
                    println!("   {}", snippet(&item.content));
                }
                if !item.updated_at.is_empty() {
                    println!("   updated: {}", item.updated_at);
                }
            }
            if args.verbosity() > 0 {
                let plural = if results.total_hits == 1 { "" } else { "s" };
                println!("{} result{plural}", results.total_hits);
            }
        }
    }
    Ok(())
}

/// Output collection statistics in the selected format.
pub fn output_stats(stats: &StoreStats, args: &KeySearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Human => {
            println!("Total items: {}", stats.total_items);
            for (identity, count) in &stats.items_by_identity {
                println!("  identity {identity}: {count}");
            }
            for (kind, count) in &stats.items_by_type {
                println!("  type {kind}: {count}");
            }
        }
    }
    Ok(())
}

/// First 220 characters of the content, with an ellipsis when truncated.
fn snippet(content: &str) -> String {
    let mut out: String = content.chars().take(220).collect();
    if content.chars().count() > 220 {
        out.push('…');
    }
    out
}
