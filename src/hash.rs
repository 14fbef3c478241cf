use std::hash::Hasher;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the raw bytes of `key`.
///
/// Stable across runs, builds and platforms, so shard assignment of a key is
/// reproducible.
#[inline]
pub fn fnv1a_32(key: &str) -> u32 {
    key.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Routing hash picked from `HashFunction`; an enum keeps routing free of
/// dynamic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ShardHasher {
    /// FNV-1a, 32 bit (default).
    #[default]
    Fnv1a,
    /// AHash with fixed keys, truncated to 32 bits.
    AHash,
    /// FxHash, truncated to 32 bits.
    #[cfg(feature = "fxhash")]
    FxHash,
}

impl ShardHasher {
    /// Hash a key to a 32-bit digest used to pick its shard.
    pub(crate) fn hash_key(&self, key: &str) -> u32 {
        match self {
            ShardHasher::Fnv1a => fnv1a_32(key),
            ShardHasher::AHash => {
                let mut hasher = ahash::AHasher::default();
                hasher.write(key.as_bytes());
                hasher.finish() as u32
            }
            #[cfg(feature = "fxhash")]
            ShardHasher::FxHash => {
                let mut hasher = fxhash::FxHasher::default();
                hasher.write(key.as_bytes());
                hasher.finish() as u32
            }
        }
    }
}
