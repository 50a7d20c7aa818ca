//! # KeySearch
//!
//! Search and ranking core for a personal knowledge-card manager.
//!
//! ## Features
//!
//! - Weighted multi-field relevance scoring (title, tags, content)
//! - Conjunctive (AND) free-text matching
//! - Structural filtering by identity, type, and tag
//! - Deterministic sorting with defined tie-breaks
//! - JSON-file item store with JSON/CSV import and export

pub mod analysis;
pub mod cli;
pub mod convert;
pub mod error;
pub mod item;
pub mod search;
pub mod storage;

pub mod prelude {
    pub use crate::error::{KeySearchError, Result};
    pub use crate::item::{Item, ScoredItem};
    pub use crate::search::{SearchRequest, SortKey, filter_and_search, sort_items};
    pub use crate::storage::{ItemStore, JsonFileStore, MemoryStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
