use crate::stats::{ShardOps, ShardStats};
use hashbrown::HashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// What the router needs from a per-shard store.
pub(crate) trait Shard: Send + Sync {
    /// Allocate an empty shard, optionally pre-sized.
    fn create(capacity: Option<usize>) -> Self;

    /// Number of keys in this shard.
    fn len(&self) -> usize;

    /// Remove every key, keeping the allocation.
    fn clear(&self);

    /// Operation counters for this shard.
    fn ops(&self) -> ShardOps;
}

/// A string-keyed hash table behind a read-write lock, with per-table stats.
///
/// Every public map operation takes exactly one guard from here and drops it
/// before returning, so a guard is never held across two operations.
pub(crate) struct Table<T> {
    map: RwLock<HashMap<String, T>>,
    stats: ShardStats,
}

impl<T> Table<T> {
    pub fn new(capacity: Option<usize>) -> Self {
        let map = match capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };
        Self {
            map: RwLock::new(map),
            stats: ShardStats::default(),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, HashMap<String, T>> {
        #[cfg(feature = "lock-timing")]
        let start = std::time::Instant::now();
        let guard = self.map.read();
        self.stats.record_lock_acquisition();
        #[cfg(feature = "lock-timing")]
        self.stats.record_lock_wait(start.elapsed().as_nanos() as u64);
        guard
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, T>> {
        #[cfg(feature = "lock-timing")]
        let start = std::time::Instant::now();
        let guard = self.map.write();
        self.stats.record_lock_acquisition();
        #[cfg(feature = "lock-timing")]
        self.stats.record_lock_wait(start.elapsed().as_nanos() as u64);
        guard
    }

    pub fn stats(&self) -> &ShardStats {
        &self.stats
    }

    // Size queries and clear are not counted.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Empties the table; capacity is retained for reuse.
    pub fn clear(&self) {
        self.map.write().clear();
    }

    pub fn snapshot(&self) -> ShardOps {
        self.stats.snapshot()
    }
}
