//! Command-line arguments and how they overlay the configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ttlsim_core::{InputSource, OutputFormat, Separator, SimulatorConfig};

/// Replay a timestamped event log against a simulated TTL cache
///
/// Each input line starts with a date, followed by a separator and a cache
/// key. Every distinct key is cached for the TTL starting at the timestamp of
/// the line that missed; the final statistics show how many requests the
/// cache would have served.
#[derive(Debug, Parser)]
#[command(name = "ttlsim")]
#[command(version)]
pub struct Cli {
    /// Time to live before a cached value is expired, in seconds [default: 60]
    #[arg(short, long, value_name = "SECONDS")]
    pub ttl: Option<u64>,

    /// Input file with one event per line; repeat for several files, `-` reads
    /// stdin [default: stdin]
    #[arg(short = 'f', long = "inputfile", value_name = "PATH")]
    pub input_files: Vec<InputSource>,

    /// Separator between the date and the key, or `whitespace` [default:
    /// whitespace]
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<Separator>,

    /// strftime-style date format of the leading timestamp [default: %Y-%m-%d]
    #[arg(short = 'd', long = "dateformat", value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// TOML file with default settings; flags override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format [default: text]
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputArg>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Report formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Text => Self::Text,
            OutputArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Build the run configuration: defaults, then the config file, then
    /// flags
    pub fn to_config(&self) -> ttlsim_core::Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_file(path)?,
            None => SimulatorConfig::default(),
        };

        if let Some(ttl) = self.ttl {
            config.ttl = ttl;
        }
        if !self.input_files.is_empty() {
            config.input_files = self.input_files.clone();
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(date_format) = &self.date_format {
            config.date_format = date_format.clone();
        }
        if let Some(output) = self.output {
            config.output = output.into();
        }

        Ok(config)
    }
}
