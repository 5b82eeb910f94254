//! # ttlsim core
//!
//! Replays timestamped event logs against a simulated TTL cache.
//!
//! This crate contains:
//! - Configuration and its validation
//! - The event stream over one or more log inputs
//! - The replay driver and the final report
//!
//! The cache itself, its clock and the statistics collector live in
//! `ttlsim-common`.
//!
//! ## Example
//! ```
//! use std::io::{BufRead, Cursor};
//!
//! use ttlsim_core::events::{EventSource, LineParser};
//! use ttlsim_core::Simulator;
//!
//! let log: Box<dyn BufRead> =
//!     Box::new(Cursor::new("2011-08-22 /a\n2011-08-22 /a\n2011-08-24 /a\n"));
//! let events = EventSource::from_readers([("log", log)], LineParser::default());
//!
//! let mut simulator = Simulator::new(chrono::TimeDelta::seconds(86_400));
//! let stats = simulator.run(events).unwrap();
//! assert_eq!((stats.gets(), stats.hits(), stats.misses()), (3, 1, 2));
//! ```

pub mod config;
pub mod errors;
pub mod events;
pub mod report;
pub mod simulator;

use tracing::info;
use ttlsim_common::cache::CacheStatistics;

pub use config::{OutputFormat, SimulatorConfig, DEFAULT_TTL_SECS};
pub use errors::{Result, SimulatorError};
pub use events::{Event, EventSource, InputSource, LineParser, Separator};
pub use report::render_report;
pub use simulator::{Lookup, Simulator};

/// Run a whole simulation for `config`
///
/// Validates the configuration, opens every input up front and replays them
/// in order.
///
/// # Errors
/// Fails on invalid configuration, on the first input that cannot be opened
/// (before any event is replayed), and on the first unreadable or malformed
/// line.
pub fn run(config: &SimulatorConfig) -> Result<CacheStatistics> {
    config.validate()?;

    let inputs = config.inputs();
    info!(
        ttl_secs = config.ttl,
        inputs = inputs.len(),
        separator = %config.separator,
        date_format = %config.date_format,
        "starting replay"
    );

    let events = EventSource::open(&inputs, config.line_parser())?;
    let mut simulator = Simulator::from_config(config)?;
    simulator.run(events)?;

    Ok(simulator.into_statistics())
}
