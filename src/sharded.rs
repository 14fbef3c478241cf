use crate::config::{Config, ShardOption};
use crate::error::Error;
use crate::map::ConcurrentMap;
use crate::multimap::ConcurrentMultiMap;
use crate::router::ShardSet;
use crate::stats::Stats;
use std::sync::Arc;

/// Concurrent map split into independently locked shards.
///
/// Each key is routed to exactly one [`ConcurrentMap`] by
/// `hash(key) mod shard_count`, so operations on different shards never
/// contend. `len` and `clear` visit the shards one by one and are not atomic
/// across the whole map.
///
/// # Example
///
/// ```rust
/// use sharded_maps::ShardedConcurrentMap;
///
/// let map = ShardedConcurrentMap::new();
/// map.set("key1", "value1");
///
/// if let Some(value) = map.get("key1") {
///     println!("Found: {}", *value);
/// }
/// assert!(map.contains("key1"));
/// ```
pub struct ShardedConcurrentMap<V> {
    shards: ShardSet<ConcurrentMap<V>>,
}

impl<V> ShardedConcurrentMap<V>
where
    V: Send + Sync,
{
    /// Create a new map with defaults (16 shards, FNV-1a).
    pub fn new() -> Self {
        Self {
            shards: ShardSet::allocate(&Config::default()),
        }
    }

    /// Create a new map with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Ok(Self {
            shards: ShardSet::allocate(&config),
        })
    }

    /// Create a new map from zero or more options.
    ///
    /// ```rust
    /// use sharded_maps::{ShardOption, ShardedConcurrentMap};
    ///
    /// let map = ShardedConcurrentMap::<u32>::with_options([ShardOption::Shards(4)])?;
    /// assert_eq!(map.shard_count(), 4);
    /// # Ok::<(), sharded_maps::Error>(())
    /// ```
    pub fn with_options<I>(options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ShardOption>,
    {
        Self::with_config(Config::from_options(options)?)
    }

    /// Number of shards, fixed at construction.
    pub fn shard_count(&self) -> usize {
        self.shards.count()
    }

    /// Index of the shard that owns `key`, in `[0, shard_count)`.
    pub fn shard_index(&self, key: &str) -> usize {
        self.shards.index(key)
    }

    /// Insert or overwrite. Returns the old value if the key existed.
    pub fn set(&self, key: impl Into<String>, value: V) -> Option<Arc<V>> {
        let key = key.into();
        self.shards.shard(&key).set(key, value)
    }

    /// Get a value by key. Returns an `Arc<V>` so you can share it without copying.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.shards.shard(key).get(key)
    }

    /// Remove a key, returning its value if it existed.
    pub fn remove(&self, key: &str) -> Option<Arc<V>> {
        self.shards.shard(key).remove(key)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.shards.shard(key).contains(key)
    }

    /// Total number of entries across all shards.
    ///
    /// Not a snapshot: with concurrent writers the total mixes shard states
    /// taken at slightly different instants.
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// Check if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Clear every shard in turn. Concurrent readers may see a partially
    /// cleared map.
    pub fn clear(&self) {
        self.shards.clear();
    }

    /// Number of entries in each shard.
    pub fn shard_loads(&self) -> Vec<usize> {
        self.shards.loads()
    }

    /// Get detailed statistics about the map and its shards.
    pub fn stats(&self) -> Stats {
        self.shards.stats()
    }
}

impl<V> Default for ShardedConcurrentMap<V>
where
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Concurrent multimap split into independently locked shards.
///
/// Same routing as [`ShardedConcurrentMap`]; each shard is a
/// [`ConcurrentMultiMap`] holding an ordered sequence of values per key.
///
/// # Example
///
/// ```rust
/// use sharded_maps::ShardedConcurrentMultiMap;
///
/// let map = ShardedConcurrentMultiMap::new();
/// map.set("key", vec!["a", "b"]);
/// map.append("key", "c");
/// assert_eq!(*map.get("key").unwrap(), vec!["a", "b", "c"]);
/// ```
pub struct ShardedConcurrentMultiMap<V> {
    shards: ShardSet<ConcurrentMultiMap<V>>,
}

impl<V> ShardedConcurrentMultiMap<V>
where
    V: Send + Sync,
{
    /// Create a new multimap with defaults (16 shards, FNV-1a).
    pub fn new() -> Self {
        Self {
            shards: ShardSet::allocate(&Config::default()),
        }
    }

    /// Create a new multimap with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Ok(Self {
            shards: ShardSet::allocate(&config),
        })
    }

    /// Create a new multimap from zero or more options.
    pub fn with_options<I>(options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ShardOption>,
    {
        Self::with_config(Config::from_options(options)?)
    }

    /// Number of shards, fixed at construction.
    pub fn shard_count(&self) -> usize {
        self.shards.count()
    }

    /// Index of the shard that owns `key`, in `[0, shard_count)`.
    pub fn shard_index(&self, key: &str) -> usize {
        self.shards.index(key)
    }

    /// Replace the sequence for `key`. Returns the old sequence if the key existed.
    pub fn set(&self, key: impl Into<String>, values: Vec<V>) -> Option<Arc<Vec<V>>> {
        let key = key.into();
        self.shards.shard(&key).set(key, values)
    }

    /// Append one value to the sequence for `key`, creating it if absent.
    pub fn append(&self, key: &str, value: V)
    where
        V: Clone,
    {
        self.shards.shard(key).append(key, value);
    }

    /// Get the sequence for `key` as a shared, immutable view.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<V>>> {
        self.shards.shard(key).get(key)
    }

    /// Remove a key, returning its sequence if it existed.
    pub fn remove(&self, key: &str) -> Option<Arc<Vec<V>>> {
        self.shards.shard(key).remove(key)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.shards.shard(key).contains(key)
    }

    /// Total number of keys across all shards. Not a snapshot under
    /// concurrent writers.
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// Check if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Clear every shard in turn.
    pub fn clear(&self) {
        self.shards.clear();
    }

    /// Number of keys in each shard.
    pub fn shard_loads(&self) -> Vec<usize> {
        self.shards.loads()
    }

    /// Get detailed statistics about the multimap and its shards.
    pub fn stats(&self) -> Stats {
        self.shards.stats()
    }
}

impl<V> Default for ShardedConcurrentMultiMap<V>
where
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
