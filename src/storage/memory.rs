//! In-memory storage implementation for testing and ephemeral collections.

use std::collections::HashMap;

use crate::error::Result;
use crate::item::Item;
use crate::storage::traits::ItemStore;

/// An in-memory item store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, Item>,
}

impl MemoryStore {
    /// Create an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for MemoryStore {
    fn all(&self) -> Result<Vec<Item>> {
        Ok(self.items.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.items.get(id).cloned())
    }

    fn put(&mut self, item: Item) -> Result<()> {
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    fn put_many(&mut self, items: Vec<Item>) -> Result<()> {
        for item in items {
            self.items.insert(item.id.clone(), item);
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        Ok(self.items.remove(id).is_some())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() -> Result<()> {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        let item = Item::new("Budget Plan");
        let id = item.id.clone();
        store.put(item)?;
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id)?.unwrap().title, "Budget Plan");

        assert!(store.delete(&id)?);
        assert!(!store.delete(&id)?);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_put_is_an_upsert() -> Result<()> {
        let mut store = MemoryStore::new();
        let mut item = Item::new("Draft");
        let id = item.id.clone();
        store.put(item.clone())?;

        item.title = "Final".to_string();
        store.put(item)?;
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id)?.unwrap().title, "Final");
        Ok(())
    }

    #[test]
    fn test_put_many() -> Result<()> {
        let mut store = MemoryStore::new();
        store.put_many(vec![Item::new("a"), Item::new("b")])?;
        assert_eq!(store.len(), 2);
        Ok(())
    }
}
