use crate::shard::{Shard, Table};
use crate::stats::ShardOps;
use std::sync::Arc;

/// A string-keyed map protected by a single read-write lock.
///
/// This is one shard of a [`ShardedConcurrentMap`](crate::ShardedConcurrentMap),
/// but it is usable on its own when one lock is enough. Values are stored
/// behind `Arc<V>`, so reads hand out shared references instead of copies.
///
/// # Example
///
/// ```rust
/// use sharded_maps::ConcurrentMap;
///
/// let map = ConcurrentMap::new();
/// map.set("key", 1);
/// assert_eq!(*map.get("key").unwrap(), 1);
/// assert!(map.contains("key"));
/// ```
pub struct ConcurrentMap<V> {
    table: Table<Arc<V>>,
}

impl<V> ConcurrentMap<V>
where
    V: Send + Sync,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            table: Table::new(None),
        }
    }

    /// Create an empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::new(Some(capacity)),
        }
    }

    /// Insert or overwrite the value for `key`. Returns the old value if the key existed.
    pub fn set(&self, key: impl Into<String>, value: V) -> Option<Arc<V>> {
        let previous = self.table.write().insert(key.into(), Arc::new(value));
        self.table.stats().record_write();
        previous
    }

    /// Get a value by key, returning an `Arc` to enable zero-copy access.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let result = self.table.read().get(key).cloned();
        if result.is_some() {
            self.table.stats().record_read();
        }
        result
    }

    /// Remove a key, returning its value if it existed. Absent keys are a no-op.
    pub fn remove(&self, key: &str) -> Option<Arc<V>> {
        let result = self.table.write().remove(key);
        if result.is_some() {
            self.table.stats().record_remove();
        }
        result
    }

    /// Check if a key exists without cloning the value.
    pub fn contains(&self, key: &str) -> bool {
        let found = self.table.read().contains_key(key);
        if found {
            self.table.stats().record_read();
        }
        found
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove all entries. The map stays usable.
    pub fn clear(&self) {
        self.table.clear();
    }
}

impl<V> Default for ConcurrentMap<V>
where
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Shard for ConcurrentMap<V>
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
