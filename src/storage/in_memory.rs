//! In-memory record store
//!
//! One store per resource, created once at startup and shared by handle.
//! Records keep insertion order. Every mutating request holds the write lock
//! for its whole validate-then-mutate run, so at most one writer touches a
//! store at a time and checks never see a record change underneath them.

use crate::core::{IdGenerator, Record};
use anyhow::{Result, anyhow, bail};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered id → record collection guarded by an [`InMemoryStore`]
#[derive(Debug, Clone)]
pub struct Records<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: Record> Records<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Mutable access to the record at `index`, for in-place overwrite
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_index_mut(index).map(|(_, record)| record)
    }

    /// Draw ids from `ids` until one is not already taken
    pub fn fresh_id(&self, ids: &dyn IdGenerator) -> String {
        loop {
            let id = ids.next_id();
            if !self.contains(&id) {
                return id;
            }
            tracing::warn!(%id, kind = T::kind(), "generated id collided, drawing again");
        }
    }

    /// Append a record at the end
    pub fn append(&mut self, record: T) -> Result<()> {
        let id = record.id().to_string();
        if self.contains(&id) {
            bail!("{} with id '{}' already exists", T::kind(), id);
        }
        self.items.insert(id, record);
        Ok(())
    }

    /// Remove the record at `index`, keeping the order of the rest
    pub fn remove_index(&mut self, index: usize) -> Option<T> {
        self.items.shift_remove_index(index).map(|(_, record)| record)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }
}

/// Thread-safe in-memory store for one record type
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Records<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records::default())),
        }
    }

    /// Create a store holding `records`, in the given order
    ///
    /// Fails on duplicate ids.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut items = Records::default();
        for record in records {
            items.append(record)?;
        }
        Ok(Self {
            records: Arc::new(RwLock::new(items)),
        })
    }

    /// Shared access for list/read
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Records<T>>> {
        self.records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))
    }

    /// Exclusive access for create/update/delete
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Records<T>>> {
        self.records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))
    }

    /// Snapshot of every record, in order
    pub fn list(&self) -> Result<Vec<T>> {
        Ok(self.read()?.to_vec())
    }

    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIdGenerator;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        fn kind() -> &'static str {
            "Note"
        }

        fn resource_name() -> &'static str {
            "notes"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Always returns the same sequence, to force collisions
    struct Fixed(std::sync::Mutex<Vec<&'static str>>);

    impl IdGenerator for Fixed {
        fn next_id(&self) -> String {
            self.0.lock().unwrap().remove(0).to_string()
        }
    }

    #[test]
    fn test_seeded_keeps_order() {
        let store = InMemoryStore::seeded(vec![note("b", "2"), note("a", "1"), note("c", "3")])
            .expect("should seed");
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_seeded_rejects_duplicates() {
        let result = InMemoryStore::seeded(vec![note("a", "1"), note("a", "2")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_append_goes_last() {
        let store = InMemoryStore::seeded(vec![note("a", "1")]).unwrap();
        store.write().unwrap().append(note("z", "26")).unwrap();
        let list = store.list().unwrap();
        assert_eq!(list.last(), Some(&note("z", "26")));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let store =
            InMemoryStore::seeded(vec![note("a", "1"), note("b", "2"), note("c", "3")]).unwrap();
        let removed = store.write().unwrap().remove_index(1);
        assert_eq!(removed, Some(note("b", "2")));
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(store.write().unwrap().remove_index(2), None);
    }

    #[test]
    fn test_get_index_mut_edits_live_record() {
        let store = InMemoryStore::seeded(vec![note("a", "1"), note("b", "2")]).unwrap();
        store.write().unwrap().get_index_mut(1).unwrap().text = "changed".into();
        assert_eq!(store.get("b").unwrap().unwrap().text, "changed");
        assert_eq!(store.get("a").unwrap().unwrap().text, "1");
        assert!(store.write().unwrap().get_index_mut(2).is_none());
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let store = InMemoryStore::seeded(vec![note("n1", "x"), note("n2", "y")]).unwrap();
        let ids = Fixed(std::sync::Mutex::new(vec!["n1", "n2", "n3"]));
        assert_eq!(store.read().unwrap().fresh_id(&ids), "n3");
    }

    #[test]
    fn test_fresh_id_with_sequential_generator() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        let ids = SequentialIdGenerator::new("n");
        assert_eq!(store.read().unwrap().fresh_id(&ids), "n1");
    }

    #[test]
    fn test_clones_share_state() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        let handle = store.clone();
        handle.write().unwrap().append(note("a", "1")).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }
}
