//! Building blocks for replaying event logs against a simulated TTL cache.
//!
//! # Modules
//!
//! - [`time`]: the simulation clock and timestamp parsing
//! - [`cache`]: the TTL cache, its entries and the statistics collector
//!
//! Time in this crate never comes from the wall clock. Every timestamp is
//! supplied by the caller, usually from the event being replayed.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod time;

// Re-export commonly used types for convenience
// ------------------------
pub use cache::{CacheEntry, CacheError, CacheResult, CacheStatistics, TtlCache};
pub use time::{parse_timestamp, SimulationClock, Timestamp, TimestampError};
