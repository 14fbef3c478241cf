use crate::shard::{Shard, Table};
use crate::stats::ShardOps;
use std::sync::Arc;

/// A string-keyed map of ordered value sequences protected by a single
/// read-write lock.
///
/// Sequences are stored as `Arc<Vec<V>>`. [`get`](Self::get) hands out a
/// shared view that never changes afterwards: an [`append`](Self::append)
/// that finds the sequence still shared with a reader copies it first.
///
/// # Example
///
/// ```rust
/// use sharded_maps::ConcurrentMultiMap;
///
/// let map = ConcurrentMultiMap::new();
/// map.append("key", 1);
/// map.append("key", 2);
/// assert_eq!(*map.get("key").unwrap(), vec![1, 2]);
/// ```
pub struct ConcurrentMultiMap<V> {
    table: Table<Arc<Vec<V>>>,
}

impl<V> ConcurrentMultiMap<V>
where
    V: Send + Sync,
{
    /// Create an empty multimap.
    pub fn new() -> Self {
        Self {
            table: Table::new(None),
        }
    }

    /// Create an empty multimap with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::new(Some(capacity)),
        }
    }

    /// Replace the whole sequence stored for `key`. Returns the old sequence
    /// if the key existed.
    pub fn set(&self, key: impl Into<String>, values: Vec<V>) -> Option<Arc<Vec<V>>> {
        let previous = self.table.write().insert(key.into(), Arc::new(values));
        self.table.stats().record_write();
        previous
    }

    /// Append one value to the sequence for `key`, creating it if absent.
    ///
    /// The lookup and the push happen under one write lock, so appends racing
    /// on the same key are serialized and none is lost.
    pub fn append(&self, key: &str, value: V)
    where
        V: Clone,
    {
        let mut map = self.table.write();
        let values = map.entry_ref(key).or_default();
        Arc::make_mut(values).push(value);
        self.table.stats().record_write();
    }

    /// Get the sequence for `key` as a shared, immutable view.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<V>>> {
        let result = self.table.read().get(key).cloned();
        if result.is_some() {
            self.table.stats().record_read();
        }
        result
    }

    /// Remove a key, returning its sequence if it existed. Absent keys are a no-op.
    pub fn remove(&self, key: &str) -> Option<Arc<Vec<V>>> {
        let result = self.table.write().remove(key);
        if result.is_some() {
            self.table.stats().record_remove();
        }
        result
    }

    /// Check if a key exists without cloning its sequence.
    pub fn contains(&self, key: &str) -> bool {
        let found = self.table.read().contains_key(key);
        if found {
            self.table.stats().record_read();
        }
        found
    }

    /// Number of keys (not values).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the multimap is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove all keys. The multimap stays usable.
    pub fn clear(&self) {
        self.table.clear();
    }
}

impl<V> Default for ConcurrentMultiMap<V>
where
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Shard for ConcurrentMultiMap<V>
where
    V: Send + Sync,
{
    fn create(capacity: Option<usize>) -> Self {
        Self {
            table: Table::new(capacity),
        }
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn clear(&self) {
        self.table.clear();
    }

    fn ops(&self) -> ShardOps {
        self.table.snapshot()
    }
}
