//! Error types used throughout the simulator

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use ttlsim_common::cache::CacheError;

use crate::events::LineError;

/// Main error type for a simulation run
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// Settings that cannot be used for a run
    #[error("Configuration error: {0}")]
    Config(String),

    /// The config file could not be read
    #[error("Could not read config file {path}")]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The config file is not a valid configuration
    #[error("Invalid config file {path}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// TOML syntax or schema error
        #[source]
        source: toml::de::Error,
    },

    /// An input could not be opened; nothing has been replayed yet
    #[error("Could not open input file {path}")]
    Open {
        /// Input path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading an opened input failed; the stream ends here
    #[error("Could not read from {source_name}")]
    Read {
        /// Input name as shown to the user
        source_name: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A line did not parse into an event
    #[error("Malformed line {line} in {source_name}")]
    MalformedLine {
        /// Input name as shown to the user
        source_name: String,
        /// 1-based line number within the input
        line: usize,
        /// What was wrong with the line
        #[source]
        error: LineError,
    },

    /// Cache misuse
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// JSON rendering of the report failed
    #[error("Could not render report")]
    Report(#[from] serde_json::Error),
}

impl SimulatorError {
    /// Stable label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::ConfigParse { .. } => "config",
            Self::Open { .. } | Self::Read { .. } => "io",
            Self::MalformedLine { .. } => "malformed_input",
            Self::Cache(_) => "cache",
            Self::Report(_) => "report",
        }
    }
}

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;
