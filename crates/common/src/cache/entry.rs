//! Per-key cache record

use chrono::{NaiveDateTime, TimeDelta};

use crate::time::Timestamp;

/// Entry stored in a [`TtlCache`](super::TtlCache)
///
/// The destruct time is fixed when the entry is created. Overwriting the
/// value later does not extend its life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    key: K,
    value: V,
    insert_time: Timestamp,
    last_updated: Timestamp,
    time_to_destruct: Timestamp,
}

impl<K, V> CacheEntry<K, V> {
    /// Create an entry inserted at `now` that lives for `ttl`
    ///
    /// A destruct time past the representable range saturates, so such an
    /// entry never expires.
    pub fn new(key: K, value: V, now: Timestamp, ttl: TimeDelta) -> Self {
        let time_to_destruct = now.checked_add_signed(ttl).unwrap_or(NaiveDateTime::MAX);
        Self { key, value, insert_time: now, last_updated: now, time_to_destruct }
    }

    /// Key the entry is stored under
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Most recently written value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Simulation time of the first write
    pub fn insert_time(&self) -> Timestamp {
        self.insert_time
    }

    /// Simulation time of the most recent write
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Last simulation time at which the entry is still live
    pub fn time_to_destruct(&self) -> Timestamp {
        self.time_to_destruct
    }

    /// Whether the entry is live at `now` (destruct time is inclusive)
    pub fn is_live_at(&self, now: Timestamp) -> bool {
        self.time_to_destruct >= now
    }

    /// Replace the stored value, leaving the timing fields of the first write
    pub(crate) fn overwrite(&mut self, value: V, now: Timestamp) {
        self.value = value;
        self.last_updated = now;
    }
}
