//! Simulation configuration
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML file;
//! the command line applies its own overrides on top.
//!
//! ```toml
//! ttl = 300
//! inputfiles = ["access.log", "-"]
//! separator = "whitespace"
//! dateformat = "%d/%b/%Y:%H:%M:%S"
//! output = "json"
//! ```

use std::fs;
use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use ttlsim_common::time::DEFAULT_DATE_FORMAT;

use crate::errors::{Result, SimulatorError};
use crate::events::{InputSource, LineParser, Separator};

/// Entry lifetime used when none is configured, in seconds
pub const DEFAULT_TTL_SECS: u64 = 60;

/// Format of the final statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width human-readable block
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Entry lifetime in seconds
    pub ttl: u64,

    /// Inputs in processing order; empty means standard input
    #[serde(rename = "inputfiles")]
    pub input_files: Vec<InputSource>,

    /// Separator between timestamp and key
    pub separator: Separator,

    /// strftime-style pattern of the leading timestamp
    #[serde(rename = "dateformat")]
    pub date_format: String,

    /// Report format
    pub output: OutputFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL_SECS,
            input_files: Vec::new(),
            separator: Separator::Whitespace,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl SimulatorConfig {
    /// Parse a configuration from TOML text; missing fields keep defaults
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file
    ///
    /// # Errors
    /// Returns [`SimulatorError::ConfigRead`] if the file cannot be read and
    /// [`SimulatorError::ConfigParse`] if it is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| SimulatorError::ConfigRead { path: path.to_path_buf(), source })?;

        Self::from_toml_str(&text)
            .map_err(|source| SimulatorError::ConfigParse { path: path.to_path_buf(), source })
    }

    /// Check the settings a run depends on
    pub fn validate(&self) -> Result<()> {
        if self.date_format.is_empty() {
            return Err(SimulatorError::Config("dateformat must not be empty".to_string()));
        }

        if matches!(&self.separator, Separator::Token(token) if token.is_empty()) {
            return Err(SimulatorError::Config("separator must not be empty".to_string()));
        }

        self.ttl_delta()?;
        Ok(())
    }

    /// TTL as a signed duration
    pub fn ttl_delta(&self) -> Result<TimeDelta> {
        i64::try_from(self.ttl).ok().and_then(TimeDelta::try_seconds).ok_or_else(|| {
            SimulatorError::Config(format!("ttl of {} seconds is out of range", self.ttl))
        })
    }

    /// Inputs to read, standard input when none were given
    pub fn inputs(&self) -> Vec<InputSource> {
        if self.input_files.is_empty() {
            vec![InputSource::Stdin]
        } else {
            self.input_files.clone()
        }
    }

    /// Line parser for the configured separator and date format
    pub fn line_parser(&self) -> LineParser {
        LineParser::new(self.separator.clone(), self.date_format.clone())
    }
}
