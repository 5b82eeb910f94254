//! Core TTL cache driven by simulation time
//!
//! Entries expire lazily: every read-side operation first sweeps out the
//! entries whose destruct time lies strictly before the current simulation
//! time. Writes never sweep.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::TimeDelta;
use tracing::trace;

use super::entry::CacheEntry;
use super::error::{CacheError, CacheResult};
use crate::time::{SimulationClock, Timestamp};

/// Generic TTL cache whose notion of "now" is set by the caller
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (defaults to `()` for presence-only simulation)
///
/// # Example
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use ttlsim_common::cache::TtlCache;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let mut cache: TtlCache<String> = TtlCache::new(TimeDelta::seconds(60));
///
/// cache.set_current_time(start);
/// cache.put("a".to_string(), ()).unwrap();
/// assert!(cache.is_cached(&"a".to_string()));
///
/// cache.set_current_time(start + TimeDelta::seconds(61));
/// assert!(!cache.is_cached(&"a".to_string()));
/// assert_eq!(cache.size(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TtlCache<K, V = ()>
where
    K: Eq + Hash + Clone,
{
    entries: HashMap<K, CacheEntry<K, V>>,
    /// Keys ordered by destruct time, ties broken by insertion order
    expiry_index: BTreeMap<(Timestamp, u64), K>,
    next_sequence: u64,
    ttl: TimeDelta,
    clock: SimulationClock,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty cache whose entries live for `ttl`
    pub fn new(ttl: TimeDelta) -> Self {
        Self::with_clock(ttl, SimulationClock::new())
    }

    /// Create an empty cache with a TTL given in whole seconds
    pub fn with_ttl_secs(secs: u64) -> CacheResult<Self> {
        let ttl = i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or(CacheError::TtlOutOfRange { secs })?;
        Ok(Self::new(ttl))
    }

    /// Create an empty cache reading time from an existing clock
    pub fn with_clock(ttl: TimeDelta, clock: SimulationClock) -> Self {
        Self {
            entries: HashMap::new(),
            expiry_index: BTreeMap::new(),
            next_sequence: 0,
            ttl,
            clock,
        }
    }

    /// Lifetime given to every new entry
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Current simulation time, `None` until first set
    pub fn current_time(&self) -> Option<Timestamp> {
        self.clock.now()
    }

    /// Move the simulation clock to `time`
    pub fn set_current_time(&mut self, time: Timestamp) {
        self.clock.set(time);
    }

    /// Store `value` under `key`
    ///
    /// A new entry is created only when the key is absent. For an existing
    /// key only the value (and its last-update time) is replaced; the
    /// insertion and destruct times of the first write are kept, so re-putting
    /// a key never extends its life.
    ///
    /// # Errors
    /// Returns [`CacheError::ClockNotSet`] if the clock was never set.
    pub fn put(&mut self, key: K, value: V) -> CacheResult<()> {
        let now = self.clock.now().ok_or(CacheError::ClockNotSet)?;

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().overwrite(value, now);
            }
            Entry::Vacant(vacant) => {
                let entry = CacheEntry::new(vacant.key().clone(), value, now, self.ttl);
                self.expiry_index
                    .insert((entry.time_to_destruct(), self.next_sequence), vacant.key().clone());
                self.next_sequence += 1;
                vacant.insert(entry);
            }
        }

        Ok(())
    }

    /// Whether `key` holds a live entry at the current simulation time
    pub fn is_cached(&mut self, key: &K) -> bool {
        self.expire_old_entries();
        self.entries.contains_key(key)
    }

    /// Get the live entry for `key`
    ///
    /// # Errors
    /// Returns [`CacheError::KeyNotFound`] if the key is absent or expired.
    pub fn get(&mut self, key: &K) -> CacheResult<&CacheEntry<K, V>> {
        self.expire_old_entries();
        self.entries.get(key).ok_or(CacheError::KeyNotFound)
    }

    /// Number of live entries at the current simulation time
    pub fn size(&mut self) -> usize {
        self.expire_old_entries();
        self.entries.len()
    }

    /// Check if the cache holds no live entries
    pub fn is_empty(&mut self) -> bool {
        self.size() == 0
    }

    /// Remove every entry whose destruct time is before the current time
    ///
    /// An entry whose destruct time equals the current time stays. Nothing
    /// expires while the clock is unset. Returns the number of entries
    /// removed.
    fn expire_old_entries(&mut self) -> usize {
        let Some(now) = self.clock.now() else {
            return 0;
        };

        let mut expired = 0;
        while let Some(first) = self.expiry_index.first_entry() {
            if first.key().0 >= now {
                break;
            }
            let key = first.remove();
            self.entries.remove(&key);
            expired += 1;
        }

        if expired > 0 {
            trace!(expired, remaining = self.entries.len(), %now, "expired cache entries");
        }

        expired
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::core.
    use chrono::NaiveDate;

    use super::*;

    fn at(secs: i64) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
            + TimeDelta::seconds(secs)
    }

    fn cache_with_ttl(secs: i64) -> TtlCache<String, Option<&'static str>> {
        TtlCache::new(TimeDelta::seconds(secs))
    }

    /// Validates `TtlCache::new` behavior for the cache new scenario.
    ///
    /// Assertions:
    /// - Confirms `cache.size()` equals `0`.
    /// - Ensures `cache.is_empty()` evaluates to true.
    /// - Confirms `cache.current_time()` equals `None`.
    #[test]
    fn test_cache_new() {
        let mut cache = cache_with_ttl(60);
        assert_eq!(cache.size(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.current_time(), None);
        assert_eq!(cache.ttl(), TimeDelta::seconds(60));
    }

    /// Validates `TtlCache::put` behavior for the unset clock scenario.
    ///
    /// Assertions:
    /// - Confirms `cache.put(..)` equals `Err(CacheError::ClockNotSet)`.
    /// - Confirms nothing was stored.
    #[test]
    fn test_put_without_clock_fails() {
        let mut cache = cache_with_ttl(60);
        assert_eq!(cache.put("key".to_string(), None), Err(CacheError::ClockNotSet));
        assert_eq!(cache.size(), 0);
    }

    /// Validates `TtlCache::put` behavior for the overwrite scenario.
    ///
    /// Assertions:
    /// - Confirms the stored value is replaced.
    /// - Confirms `insert_time` and `time_to_destruct` keep their first-write
    ///   values.
    #[test]
    fn test_put_overwrite_keeps_destruct_time() {
        let mut cache = cache_with_ttl(60);
        cache.set_current_time(at(0));
        cache.put("key".to_string(), None).unwrap();
        cache.put("key".to_string(), Some("avalue")).unwrap();

        cache.set_current_time(at(30));
        cache.put("key".to_string(), Some("a third value")).unwrap();

        let entry = cache.get(&"key".to_string()).unwrap();
        assert_eq!(entry.value(), &Some("a third value"));
        assert_eq!(entry.insert_time(), at(0));
        assert_eq!(entry.last_updated(), at(30));
        assert_eq!(entry.time_to_destruct(), at(60));

        // Re-putting did not extend the life of the entry
        cache.set_current_time(at(61));
        assert!(!cache.is_cached(&"key".to_string()));
    }

    /// Validates `TtlCache::get` behavior for the missing key scenario.
    ///
    /// Assertions:
    /// - Confirms `cache.get(..)` equals `Err(CacheError::KeyNotFound)` for
    ///   an absent key and for an expired key.
    #[test]
    fn test_get_missing_and_expired() {
        let mut cache = cache_with_ttl(10);
        cache.set_current_time(at(0));
        assert_eq!(cache.get(&"key".to_string()), Err(CacheError::KeyNotFound));

        cache.put("key".to_string(), Some("v")).unwrap();
        assert!(cache.get(&"key".to_string()).is_ok());

        cache.set_current_time(at(11));
        assert_eq!(cache.get(&"key".to_string()), Err(CacheError::KeyNotFound));
    }

    /// Validates `TtlCache::is_cached` behavior for the destruct boundary
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures the key is cached when current time equals destruct time.
    /// - Ensures the key is expired one second later.
    #[test]
    fn test_is_cached_boundary() {
        let mut cache = cache_with_ttl(60);
        cache.set_current_time(at(0));
        cache.put("a".to_string(), None).unwrap();

        cache.set_current_time(at(60));
        assert!(cache.is_cached(&"a".to_string()));

        cache.set_current_time(at(61));
        assert!(!cache.is_cached(&"a".to_string()));
    }

    /// Validates `TtlCache::is_cached` behavior for the zero TTL scenario.
    ///
    /// Assertions:
    /// - Ensures an entry with TTL 0 is still live at its insertion time.
    /// - Ensures it is gone one second later.
    #[test]
    fn test_zero_ttl_boundary() {
        let mut cache = cache_with_ttl(0);
        cache.set_current_time(at(0));
        cache.put("x".to_string(), None).unwrap();
        assert!(cache.is_cached(&"x".to_string()));

        cache.set_current_time(at(1));
        assert!(!cache.is_cached(&"x".to_string()));
    }

    /// Validates `TtlCache::size` behavior for the bulk expiry scenario.
    ///
    /// Assertions:
    /// - Confirms `cache.size()` equals `2` while both keys are live.
    /// - Confirms `cache.size()` equals `0` once both expired.
    #[test]
    fn test_size_tracks_expiry() {
        let mut cache = cache_with_ttl(100);
        cache.set_current_time(at(0));
        cache.put("a".to_string(), None).unwrap();
        cache.put("b".to_string(), None).unwrap();

        cache.set_current_time(at(50));
        assert_eq!(cache.size(), 2);

        cache.set_current_time(at(101));
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_staggered_expiry_order() {
        let mut cache = cache_with_ttl(10);
        for (secs, key) in [(0, "a"), (5, "b"), (8, "c")] {
            cache.set_current_time(at(secs));
            cache.put(key.to_string(), None).unwrap();
        }

        cache.set_current_time(at(11));
        assert_eq!(cache.size(), 2);
        assert!(!cache.is_cached(&"a".to_string()));

        cache.set_current_time(at(16));
        assert_eq!(cache.size(), 1);
        assert!(cache.is_cached(&"c".to_string()));

        cache.set_current_time(at(19));
        assert_eq!(cache.size(), 0);
    }

    /// Validates `TtlCache::size` behavior for the idempotent read scenario.
    ///
    /// Assertions:
    /// - Confirms repeated reads at an unchanged time agree.
    #[test]
    fn test_reads_are_idempotent() {
        let mut cache = cache_with_ttl(10);
        cache.set_current_time(at(0));
        cache.put("a".to_string(), None).unwrap();
        cache.set_current_time(at(5));
        cache.put("b".to_string(), None).unwrap();

        cache.set_current_time(at(12));
        let first = (cache.size(), cache.is_cached(&"a".to_string()));
        let second = (cache.size(), cache.is_cached(&"a".to_string()));
        assert_eq!(first, second);
        assert_eq!(first, (1, false));
    }

    /// Validates `TtlCache::put` behavior for the latent expired entry
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms a put on a dead-but-unswept key keeps the dead entry, which
    ///   the next read sweeps away.
    #[test]
    fn test_put_on_unswept_expired_key() {
        let mut cache = cache_with_ttl(10);
        cache.set_current_time(at(0));
        cache.put("a".to_string(), None).unwrap();

        cache.set_current_time(at(20));
        cache.put("a".to_string(), Some("late")).unwrap();
        assert!(!cache.is_cached(&"a".to_string()));
    }

    #[test]
    fn test_clock_moving_backwards() {
        let mut cache = cache_with_ttl(10);
        cache.set_current_time(at(100));
        cache.put("a".to_string(), None).unwrap();

        // Earlier timestamps never expire anything newer
        cache.set_current_time(at(0));
        assert!(cache.is_cached(&"a".to_string()));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_with_ttl_secs() {
        let cache: TtlCache<String> = TtlCache::with_ttl_secs(60).unwrap();
        assert_eq!(cache.ttl(), TimeDelta::seconds(60));

        let err = TtlCache::<String>::with_ttl_secs(u64::MAX).unwrap_err();
        assert_eq!(err, CacheError::TtlOutOfRange { secs: u64::MAX });
    }

    #[test]
    fn test_caches_do_not_share_entries() {
        let mut first = cache_with_ttl(60);
        let mut second = cache_with_ttl(60);
        first.set_current_time(at(0));
        second.set_current_time(at(0));

        first.put("shared".to_string(), None).unwrap();
        assert!(first.is_cached(&"shared".to_string()));
        assert!(!second.is_cached(&"shared".to_string()));
    }

    #[test]
    fn test_with_clock_uses_existing_time() {
        let mut cache: TtlCache<&str> =
            TtlCache::with_clock(TimeDelta::seconds(5), SimulationClock::starting_at(at(0)));
        assert_eq!(cache.put("a", ()), Ok(()));
        assert_eq!(cache.size(), 1);
    }
}
