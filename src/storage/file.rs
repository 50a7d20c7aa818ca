//! JSON-file storage implementation.
//!
//! The whole collection lives in one JSON array file. It is read once on
//! open and rewritten after every mutation, which is adequate for a local personal
//! collection of hundreds to low thousands of items.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{KeySearchError, Result};
use crate::item::Item;
use crate::storage::traits::ItemStore;

/// A file-backed item store persisting to a single JSON array.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: HashMap<String, Item>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing collection.
    ///
    /// A missing file is an empty collection; it is created on first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let loaded: Vec<Item> = serde_json::from_str(&text).map_err(|e| {
                KeySearchError::storage(format!("malformed store file {}: {e}", path.display()))
            })?;
            loaded.into_iter().map(|item| (item.id.clone(), item)).collect()
        } else {
            HashMap::new()
        };
        debug!(path = %path.display(), items = items.len(), "opened store");
        Ok(JsonFileStore { path, items })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file via a temp file and rename.
    fn persist(&self) -> Result<()> {
        let items: Vec<&Item> = self.items.values().collect();
        let text = serde_json::to_string_pretty(&items)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), items = items.len(), "persisted store");
        Ok(())
    }
}

impl ItemStore for JsonFileStore {
    fn all(&self) -> Result<Vec<Item>> {
        Ok(self.items.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.items.get(id).cloned())
    }

    fn put(&mut self, item: Item) -> Result<()> {
        self.items.insert(item.id.clone(), item);
        self.persist()
    }

    fn put_many(&mut self, items: Vec<Item>) -> Result<()> {
        for item in items {
            self.items.insert(item.id.clone(), item);
        }
        self.persist()
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let existed = self.items.remove(id).is_some();
        if existed {
            self.persist()?;
        }
        Ok(existed)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("items.json"))?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_persists_across_reopen() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");

        let item = Item::new("Budget Plan").with_tags(["finance"]);
        let id = item.id.clone();
        {
            let mut store = JsonFileStore::open(&path)?;
            store.put(item)?;
        }

        let store = JsonFileStore::open(&path)?;
        assert_eq!(store.len(), 1);
        let loaded = store.get(&id)?.unwrap();
        assert_eq!(loaded.title, "Budget Plan");
        assert_eq!(loaded.tags, vec!["finance"]);
        Ok(())
    }

    #[test]
    fn test_delete_persists() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");

        let item = Item::new("Notes");
        let id = item.id.clone();
        {
            let mut store = JsonFileStore::open(&path)?;
            store.put(item)?;
            assert!(store.delete(&id)?);
        }

        let store = JsonFileStore::open(&path)?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "{not json").unwrap();

        match JsonFileStore::open(&path) {
            Err(KeySearchError::Storage(_)) => {}
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
