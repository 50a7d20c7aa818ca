//! Filter, score, and sort operations over an item collection.
//!
//! Two cooperating operations make up the engine: [`filter_and_search`]
//! applies structural filters and conjunctive weighted scoring, and
//! [`sort_items`] orders the result by one of a fixed set of sort keys.
//! Both are pure functions of their inputs; no state is retained between
//! calls and concurrent callers need no coordination.

pub mod engine;
pub mod request;
pub mod scorer;
pub mod sort;

pub use engine::filter_and_search;
pub use request::SearchRequest;
pub use scorer::{CONTENT_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT, score_item};
pub use sort::{DEFAULT_SORT, SortKey, sort_items};
