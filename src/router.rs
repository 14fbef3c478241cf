use crate::config::{create_hasher, Config};
use crate::hash::ShardHasher;
use crate::shard::Shard;
use crate::stats::{ShardOps, Stats};

/// Fixed set of shards plus the hash that routes keys to them.
///
/// Shards are allocated once, up front, and the vector is never resized, so
/// a key's shard index is stable for the life of the container.
pub(crate) struct ShardSet<S> {
    shards: Vec<S>,
    hash: ShardHasher,
}

impl<S: Shard> ShardSet<S> {
    /// Allocate every shard. `Config` can only hold a positive shard count,
    /// since its setters reject zero.
    pub fn allocate(config: &Config) -> Self {
        debug_assert!(config.shard_count > 0);
        let shards = (0..config.shard_count)
            .map(|_| S::create(config.capacity_per_shard))
            .collect();

        tracing::debug!(
            shard_count = config.shard_count,
            hash = ?config.hash_function,
            capacity_per_shard = ?config.capacity_per_shard,
            "allocated shards"
        );

        Self {
            shards,
            hash: create_hasher(config.hash_function),
        }
    }

    /// `hash(key) mod shard_count`.
    #[inline]
    pub fn index(&self, key: &str) -> usize {
        self.hash.hash_key(key) as usize % self.shards.len()
    }

    /// The shard that owns `key`.
    #[inline]
    pub fn shard(&self, key: &str) -> &S {
        &self.shards[self.index(key)]
    }

    pub fn count(&self) -> usize {
        self.shards.len()
    }

    /// Sum of shard sizes, each read under its own lock.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.len() == 0)
    }

    /// Clear shards one at a time; never holds two shard locks at once.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.clear();
        }
        tracing::trace!(shard_count = self.shards.len(), "cleared all shards");
    }

    pub fn loads(&self) -> Vec<usize> {
        self.shards.iter().map(|shard| shard.len()).collect()
    }

    pub fn stats(&self) -> Stats {
        let shard_sizes = self.loads();
        let operations: Vec<ShardOps> = self.shards.iter().map(|s| s.ops()).collect();
        let size: usize = shard_sizes.iter().sum();

        Stats {
            size,
            shard_sizes,
            operations,
        }
    }
}
