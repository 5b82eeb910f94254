//! Simulation time
//!
//! This module provides the time primitives of the simulator:
//! - **[`clock`]**: the replayed clock that only moves when told to
//! - **[`parse`]**: strftime-style timestamp parsing for log lines
//!
//! ## Usage
//!
//! ```rust
//! use ttlsim_common::time::{parse_timestamp, SimulationClock};
//!
//! let mut clock = SimulationClock::new();
//! assert!(clock.now().is_none());
//!
//! let ts = parse_timestamp("17/Apr/2011:07:23:20", "%d/%b/%Y:%H:%M:%S").unwrap();
//! clock.set(ts);
//! assert_eq!(clock.now(), Some(ts));
//! ```

pub mod clock;
pub mod parse;

// Re-export commonly used items
pub use clock::{SimulationClock, Timestamp};
pub use parse::{parse_timestamp, TimestampError, DEFAULT_DATE_FORMAT};
