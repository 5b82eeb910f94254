//! Replayed simulation clock
//!
//! The clock holds whatever time it was last given. It never advances on its
//! own and may move backwards when the replayed input is not sorted.

use chrono::NaiveDateTime;

/// A point in simulation time.
///
/// Log timestamps carry no zone information, so simulation time is naive.
pub type Timestamp = NaiveDateTime;

/// Clock driven entirely by replayed event timestamps
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ttlsim_common::time::SimulationClock;
///
/// let mut clock = SimulationClock::new();
/// assert!(!clock.is_set());
///
/// let noon = NaiveDate::from_ymd_opt(2011, 8, 22).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// clock.set(noon);
/// assert_eq!(clock.now(), Some(noon));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    current: Option<Timestamp>,
}

impl SimulationClock {
    /// Create a clock that has not been set yet
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Create a clock already set to `time`
    pub const fn starting_at(time: Timestamp) -> Self {
        Self { current: Some(time) }
    }

    /// Move the clock to `time`, forwards or backwards
    pub fn set(&mut self, time: Timestamp) {
        self.current = Some(time);
    }

    /// Current simulation time, `None` until the first [`set`](Self::set)
    pub const fn now(&self) -> Option<Timestamp> {
        self.current
    }

    /// Whether the clock has been set at least once
    pub const fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
