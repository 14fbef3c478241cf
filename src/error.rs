/// Errors that can occur when constructing a sharded map.
///
/// Data-plane operations never fail; a missing key is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shard count is invalid (must be greater than 0).
    InvalidShardCount,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidShardCount => write!(f, "shard count must be greater than 0"),
        }
    }
}

impl std::error::Error for Error {}
