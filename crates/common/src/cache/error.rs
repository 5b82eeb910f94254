//! Cache error types

use thiserror::Error;

/// Errors raised by [`TtlCache`](super::TtlCache) operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A write happened before the simulation clock was ever set, so the
    /// entry has no insertion time to expire from.
    #[error("Simulation clock has not been set; cannot compute when the entry expires")]
    ClockNotSet,

    /// The key is absent or expired during the sweep preceding the lookup.
    #[error("Key not found in cache")]
    KeyNotFound,

    /// The TTL does not fit in a signed duration.
    #[error("TTL of {secs} seconds is out of range")]
    TtlOutOfRange {
        /// Requested lifetime in seconds
        secs: u64,
    },
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;
