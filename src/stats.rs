//! Statistics and diagnostics types.

#[cfg(feature = "metrics")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-shard operation statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardOps {
    /// Number of lookups (`get` or `contains`) that found their key.
    pub reads: u64,
    /// Number of set and append operations on this shard.
    pub writes: u64,
    /// Number of removals of a present key on this shard.
    pub removes: u64,
    /// Lock acquisitions by data operations (0 when metrics feature disabled).
    pub lock_acquisitions: u64,
    /// Cumulative lock wait time in nanoseconds (0 when lock-timing disabled).
    pub lock_wait_nanos: u64,
}

/// One relaxed atomic counter; compiled away without the `metrics` feature.
#[cfg(feature = "metrics")]
#[derive(Default)]
struct Counter(AtomicU64);

#[cfg(feature = "metrics")]
impl Counter {
    #[inline]
    fn add(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(not(feature = "metrics"))]
#[derive(Default)]
struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    #[inline]
    fn add(&self, _n: u64) {}

    fn get(&self) -> u64 {
        0
    }
}

/// Counters owned by one table. Only data operations record here; size
/// queries and clears are not counted.
#[derive(Default)]
pub(crate) struct ShardStats {
    reads: Counter,
    writes: Counter,
    removes: Counter,
    lock_acquisitions: Counter,
    lock_wait_nanos: Counter,
}

impl ShardStats {
    #[inline]
    pub fn record_read(&self) {
        self.reads.add(1);
    }

    #[inline]
    pub fn record_write(&self) {
        self.writes.add(1);
    }

    #[inline]
    pub fn record_remove(&self) {
        self.removes.add(1);
    }

    #[inline]
    pub fn record_lock_acquisition(&self) {
        self.lock_acquisitions.add(1);
    }

    #[cfg(feature = "lock-timing")]
    #[inline]
    pub fn record_lock_wait(&self, nanos: u64) {
        self.lock_wait_nanos.add(nanos);
    }

    pub fn snapshot(&self) -> ShardOps {
        ShardOps {
            reads: self.reads.get(),
            writes: self.writes.get(),
            removes: self.removes.get(),
            lock_acquisitions: self.lock_acquisitions.get(),
            lock_wait_nanos: self.lock_wait_nanos.get(),
        }
    }
}

/// Aggregate statistics for a sharded map.
///
/// Each shard is sampled under its own lock, one after another, so the
/// numbers are not a consistent snapshot while writers are active.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total number of entries across all shards.
    pub size: usize,
    /// Number of entries in each shard.
    pub shard_sizes: Vec<usize>,
    /// Operation counts for each shard.
    pub operations: Vec<ShardOps>,
}

impl Stats {
    /// Max shard size divided by the average shard size. 1.0 is a perfectly
    /// even spread; 0.0 for an empty map.
    pub fn max_load_ratio(&self) -> f64 {
        if self.size == 0 || self.shard_sizes.is_empty() {
            return 0.0;
        }
        let avg = self.size as f64 / self.shard_sizes.len() as f64;
        let max = self.shard_sizes.iter().copied().max().unwrap_or(0);
        max as f64 / avg
    }
}
