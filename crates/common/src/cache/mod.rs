//! TTL cache simulated against replayed time
//!
//! This module provides the cache whose clock is driven by event timestamps
//! rather than the wall clock, together with the statistics collector used to
//! report how it performed.
//!
//! # Features
//!
//! - **Replayed time**: "now" is whatever the caller last set
//! - **Lazy expiration**: reads sweep out entries whose destruct time passed
//! - **Fixed lifetime**: re-putting a key never extends its life
//! - **Statistics**: gets, hits, misses and peak occupancy
//!
//! # Examples
//!
//! ## Replaying lookups
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use ttlsim_common::cache::{CacheStatistics, TtlCache};
//!
//! let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut cache: TtlCache<&str> = TtlCache::new(TimeDelta::seconds(60));
//! let mut stats = CacheStatistics::new();
//!
//! for (offset, key) in [(0, "a"), (30, "a"), (61, "a")] {
//!     cache.set_current_time(t0 + TimeDelta::seconds(offset));
//!     stats.register_get();
//!     if cache.is_cached(&key) {
//!         stats.register_hit();
//!     } else {
//!         cache.put(key, ()).unwrap();
//!     }
//!     stats.register_size(cache.size());
//! }
//!
//! assert_eq!(stats.gets(), 3);
//! assert_eq!(stats.hits(), 1);
//! assert_eq!(stats.misses(), 2);
//! assert_eq!(stats.max_size(), Some(1));
//! ```
//!
//! ## Expiry boundary
//!
//! An entry is live while `current_time <= time_to_destruct`:
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use ttlsim_common::cache::TtlCache;
//!
//! let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut cache: TtlCache<&str> = TtlCache::new(TimeDelta::zero());
//!
//! cache.set_current_time(t0);
//! cache.put("x", ()).unwrap();
//! assert!(cache.is_cached(&"x"));
//!
//! cache.set_current_time(t0 + TimeDelta::seconds(1));
//! assert!(!cache.is_cached(&"x"));
//! ```

mod core;
mod entry;
mod error;
mod stats;

// Re-export public API
pub use self::core::TtlCache;

pub use entry::CacheEntry;
pub use error::{CacheError, CacheResult};
pub use stats::{CacheStatistics, StatisticsSnapshot};
