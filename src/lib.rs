//! # Sharded Maps
//!
//! Thread-safe string-keyed maps that spread their keys over a fixed number
//! of shards, each with its own lock.
//!
//! A key is routed to its shard by `hash(key) mod shard_count`, so two
//! operations on keys in different shards never wait on each other. No
//! operation holds more than one shard lock, which rules out deadlock.
//!
//! ## Types
//!
//! - [`ConcurrentMap`]: one lock, one value per key
//! - [`ConcurrentMultiMap`]: one lock, an ordered sequence of values per key
//! - [`ShardedConcurrentMap`] / [`ShardedConcurrentMultiMap`]: N of the above
//!
//! ## Example
//!
//! ```rust
//! use sharded_maps::{ShardedConcurrentMap, ShardedConcurrentMultiMap};
//!
//! let map = ShardedConcurrentMap::new();
//! map.set("key1", "value1");
//! assert_eq!(*map.get("key1").unwrap(), "value1");
//! map.remove("key1");
//! assert!(!map.contains("key1"));
//!
//! let multi = ShardedConcurrentMultiMap::new();
//! multi.append("key", 1);
//! multi.append("key", 2);
//! assert_eq!(*multi.get("key").unwrap(), vec![1, 2]);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use sharded_maps::{HashFunction, ShardedMapBuilder};
//!
//! let map = ShardedMapBuilder::new()
//!     .shard_count(32)?  // any count greater than zero
//!     .hash_function(HashFunction::Fnv1a)
//!     .build_map::<i32>()?;
//! assert_eq!(map.shard_count(), 32);
//! # Ok::<(), sharded_maps::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash function implementations.
pub mod hash;
/// Single-lock map.
pub mod map;
/// Single-lock multimap.
pub mod multimap;
mod router;
mod shard;
/// Sharded map and multimap.
pub mod sharded;
/// Statistics and metrics collection.
pub mod stats;

// Re-export main types
pub use config::{Config, HashFunction, ShardOption, ShardedMapBuilder, DEFAULT_SHARD_COUNT};
pub use error::Error;
pub use map::ConcurrentMap;
pub use multimap::ConcurrentMultiMap;
pub use sharded::{ShardedConcurrentMap, ShardedConcurrentMultiMap};
pub use stats::{ShardOps, Stats};
