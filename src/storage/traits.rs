//! Storage trait for item collections.

use crate::error::Result;
use crate::item::Item;

/// A keyed store of items.
///
/// Items are keyed by their `id`; `put` is an upsert. Implementations own
/// durability; the trait makes no ordering guarantee for [`all`](Self::all).
pub trait ItemStore {
    /// Return every stored item. Order is unspecified.
    fn all(&self) -> Result<Vec<Item>>;

    /// Look up one item by id.
    fn get(&self, id: &str) -> Result<Option<Item>>;

    /// Insert or replace an item keyed by its id.
    fn put(&mut self, item: Item) -> Result<()>;

    /// Insert or replace a batch of items.
    fn put_many(&mut self, items: Vec<Item>) -> Result<()>;

    /// Delete an item by id. Returns whether it existed.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// True when the store holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
