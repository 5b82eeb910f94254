//! Replay statistics
//!
//! This module tracks how the simulated cache performed over a run: total
//! lookups, hits and the peak number of live entries.

use std::fmt;

/// Width of the rules framing the text report
const REPORT_WIDTH: usize = 30;

/// Width the report labels are right-aligned to
const LABEL_WIDTH: usize = 10;

/// Collector for statistics gathered while replaying events
///
/// # Example
/// ```
/// use ttlsim_common::cache::CacheStatistics;
///
/// let mut stats = CacheStatistics::new();
/// stats.register_hit();
/// stats.register_get();
/// stats.register_get();
/// stats.register_get();
/// stats.register_size(4);
/// stats.register_size(6);
/// stats.register_size(5);
///
/// assert_eq!(
///     stats.to_string(),
///     "FINAL STATISTICS:\n\
///      ==============================\n\
///      Total gets: 3\n      \
///      Hits: 1\n    \
///      Misses: 2\n  \
///      Max size: 6\n\
///      ==============================\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    gets: u64,
    hits: u64,
    /// `None` until the first observation
    max_size: Option<usize>,
}

impl CacheStatistics {
    /// Create a collector with no observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cache lookup
    pub fn register_get(&mut self) {
        self.gets += 1;
    }

    /// Register a lookup that found a live entry
    pub fn register_hit(&mut self) {
        self.hits += 1;
    }

    /// Register the current size of the cache
    pub fn register_size(&mut self, size: usize) {
        self.max_size = Some(self.max_size.map_or(size, |max| max.max(size)));
    }

    /// Lookups registered so far
    pub fn gets(&self) -> u64 {
        self.gets
    }

    /// Lookups that found a live entry
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that found nothing (gets - hits)
    pub fn misses(&self) -> u64 {
        self.gets.saturating_sub(self.hits)
    }

    /// Largest size registered so far, `None` before the first one
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Calculate hit rate (hits / gets)
    pub fn hit_rate(&self) -> f64 {
        if self.gets == 0 {
            0.0
        } else {
            self.hits as f64 / self.gets as f64
        }
    }

    /// Get current statistics snapshot
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            gets: self.gets,
            hits: self.hits,
            misses: self.misses(),
            max_size: self.max_size,
            hit_rate: self.hit_rate(),
        }
    }
}

impl fmt::Display for CacheStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.snapshot().fmt(f)
    }
}

/// Point-in-time copy of the collected statistics, with derived values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsSnapshot {
    /// Total number of lookups
    pub gets: u64,

    /// Lookups served from cache
    pub hits: u64,

    /// Lookups that missed
    pub misses: u64,

    /// Peak number of live entries (None = nothing registered)
    pub max_size: Option<usize>,

    /// hits / gets, 0.0 without lookups
    pub hit_rate: f64,
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(REPORT_WIDTH);
        let max_size = self.max_size.map_or_else(|| "n/a".to_string(), |size| size.to_string());

        writeln!(f, "FINAL STATISTICS:")?;
        writeln!(f, "{rule}")?;
        for (label, value) in [
            ("Total gets", self.gets.to_string()),
            ("Hits", self.hits.to_string()),
            ("Misses", self.misses.to_string()),
            ("Max size", max_size),
        ] {
            writeln!(f, "{label:>LABEL_WIDTH$}: {value}")?;
        }
        writeln!(f, "{rule}")
    }
}
