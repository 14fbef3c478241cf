use crate::error::Error;
use crate::hash::ShardHasher;
use crate::sharded::{ShardedConcurrentMap, ShardedConcurrentMultiMap};

/// Shard count used when none is configured.
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Which hash function to use for shard assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFunction {
    /// 32-bit FNV-1a (default, stable across processes).
    #[default]
    Fnv1a,
    /// ahash with fixed keys (fast, well-distributed).
    AHash,
    /// fxhash (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

/// A single construction-time option.
///
/// Options are applied in order, so a later option overrides an earlier one
/// of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardOption {
    /// Number of shards. Must be greater than 0.
    Shards(usize),
    /// Hash function used for routing.
    Hash(HashFunction),
    /// Initial table capacity of every shard.
    CapacityPerShard(usize),
}

/// Configuration for a sharded map instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) shard_count: usize,
    pub(crate) hash_function: HashFunction,
    pub(crate) capacity_per_shard: Option<usize>,
}

impl Config {
    /// Create a new config with defaults (16 shards, FNV-1a).
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a config from zero or more options.
    pub fn from_options<I>(options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ShardOption>,
    {
        options
            .into_iter()
            .try_fold(Self::default(), |config, option| match option {
                ShardOption::Shards(count) => config.shard_count(count),
                ShardOption::Hash(hash_fn) => Ok(config.hash_function(hash_fn)),
                ShardOption::CapacityPerShard(capacity) => {
                    Ok(config.capacity_per_shard(capacity))
                }
            })
    }

    /// Set the number of shards. Must be greater than 0.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            tracing::warn!(shard_count = count, "rejecting shard configuration");
            return Err(Error::InvalidShardCount);
        }
        self.shard_count = count;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }

    /// Set initial capacity per shard. Total capacity will be approximately
    /// `capacity_per_shard * shard_count`. Omitted by default (HashMap default).
    pub fn capacity_per_shard(mut self, capacity: usize) -> Self {
        self.capacity_per_shard = Some(capacity);
        self
    }

    /// The configured number of shards.
    pub fn shards(&self) -> usize {
        self.shard_count
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            hash_function: HashFunction::Fnv1a,
            capacity_per_shard: None,
        }
    }
}

/// Builder for creating sharded maps with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ShardedMapBuilder {
    config: Config,
}

impl ShardedMapBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of shards. Must be greater than 0.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.shard_count(count)?;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Set initial capacity per shard. Total capacity ≈ `capacity_per_shard * shard_count`.
    pub fn capacity_per_shard(mut self, capacity: usize) -> Self {
        self.config = self.config.capacity_per_shard(capacity);
        self
    }

    /// Build a single-value sharded map.
    pub fn build_map<V>(self) -> Result<ShardedConcurrentMap<V>, Error>
    where
        V: Send + Sync,
    {
        ShardedConcurrentMap::with_config(self.config)
    }

    /// Build a multi-value sharded map.
    pub fn build_multimap<V>(self) -> Result<ShardedConcurrentMultiMap<V>, Error>
    where
        V: Send + Sync,
    {
        ShardedConcurrentMultiMap::with_config(self.config)
    }
}

/// Create a hash function instance based on the configuration.
pub(crate) fn create_hasher(hash_fn: HashFunction) -> ShardHasher {
    match hash_fn {
        HashFunction::Fnv1a => ShardHasher::Fnv1a,
        HashFunction::AHash => ShardHasher::AHash,
        #[cfg(feature = "fxhash")]
        HashFunction::FxHash => ShardHasher::FxHash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.shards(), DEFAULT_SHARD_COUNT);
        assert_eq!(config.hash_function, HashFunction::Fnv1a);
        assert_eq!(config.capacity_per_shard, None);
    }

    #[test]
    fn test_zero_shards_rejected() {
        assert_eq!(Config::new().shard_count(0), Err(Error::InvalidShardCount));
    }

    #[test]
    fn test_non_power_of_two_accepted() {
        assert_eq!(Config::new().shard_count(7).unwrap().shards(), 7);
    }

    #[test]
    fn test_from_no_options() {
        let config = Config::from_options(std::iter::empty::<ShardOption>()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_later_option_wins() {
        let config = Config::from_options([
            ShardOption::Shards(4),
            ShardOption::CapacityPerShard(64),
            ShardOption::Shards(32),
        ])
        .unwrap();
        assert_eq!(config.shards(), 32);
        assert_eq!(config.capacity_per_shard, Some(64));
    }

    #[test]
    fn test_invalid_option_rejected() {
        let result = Config::from_options([ShardOption::Shards(0)]);
        assert_eq!(result, Err(Error::InvalidShardCount));
    }
}
