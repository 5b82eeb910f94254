//! Replay driver
//!
//! Feeds events through a [`TtlCache`] in arrival order and records what the
//! cache would have served.

use chrono::TimeDelta;
use tracing::{info, trace};
use ttlsim_common::cache::{CacheStatistics, TtlCache};

use crate::config::SimulatorConfig;
use crate::errors::Result;
use crate::events::Event;

/// Outcome of a single replayed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A live entry was found
    Hit,
    /// Nothing was cached; the key has been inserted
    Miss,
}

/// Cache simulation over a stream of events
#[derive(Debug)]
pub struct Simulator {
    cache: TtlCache<String>,
    stats: CacheStatistics,
}

impl Simulator {
    /// Create a simulator whose cache keeps entries for `ttl`
    pub fn new(ttl: TimeDelta) -> Self {
        Self { cache: TtlCache::new(ttl), stats: CacheStatistics::new() }
    }

    /// Create a simulator for a validated configuration
    pub fn from_config(config: &SimulatorConfig) -> Result<Self> {
        Ok(Self::new(config.ttl_delta()?))
    }

    /// Replay one event
    ///
    /// The clock moves to the event's timestamp, the lookup is counted, a
    /// miss inserts the key, and the resulting cache size is recorded.
    pub fn record(&mut self, event: Event) -> Result<Lookup> {
        let Event { timestamp, key } = event;

        self.cache.set_current_time(timestamp);
        self.stats.register_get();

        let lookup = if self.cache.is_cached(&key) {
            self.stats.register_hit();
            Lookup::Hit
        } else {
            trace!(%timestamp, key = %key, "miss");
            self.cache.put(key, ())?;
            Lookup::Miss
        };

        let size = self.cache.size();
        self.stats.register_size(size);
        trace!(%timestamp, ?lookup, size, "replayed event");

        Ok(lookup)
    }

    /// Replay every event, stopping at the first error
    pub fn run<I>(&mut self, events: I) -> Result<&CacheStatistics>
    where
        I: IntoIterator<Item = Result<Event>>,
    {
        for event in events {
            self.record(event?)?;
        }

        info!(
            gets = self.stats.gets(),
            hits = self.stats.hits(),
            misses = self.stats.misses(),
            max_size = ?self.stats.max_size(),
            "replay finished"
        );

        Ok(&self.stats)
    }

    /// Statistics collected so far
    pub fn statistics(&self) -> &CacheStatistics {
        &self.stats
    }

    /// Finish the run, keeping only its statistics
    pub fn into_statistics(self) -> CacheStatistics {
        self.stats
    }
}
