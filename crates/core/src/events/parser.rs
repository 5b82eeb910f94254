//! Log line parsing
//!
//! A line is `<timestamp><separator><key>`. The key is everything after the
//! timestamp; when it spans several fields they are joined back with a single
//! space (whitespace mode) or with the custom separator.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use ttlsim_common::time::{parse_timestamp, Timestamp, TimestampError, DEFAULT_DATE_FORMAT};

/// Name accepted in place of a separator token to request whitespace splitting
pub const WHITESPACE_SEPARATOR: &str = "whitespace";

/// One replayed cache request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// When the request happened
    pub timestamp: Timestamp,
    /// Requested cache key
    pub key: String,
}

/// Why a single line could not be turned into an [`Event`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Nothing precedes the first separator
    #[error("line has no timestamp")]
    MissingTimestamp,

    /// The leading field is not a valid timestamp
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// How the timestamp is separated from the key
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Separator {
    /// Any run of whitespace; leading and trailing whitespace is ignored
    #[default]
    Whitespace,
    /// Every occurrence of a literal, non-empty token
    Token(String),
}

impl Separator {
    /// String used to rejoin the key fields
    pub fn joiner(&self) -> &str {
        match self {
            Self::Whitespace => " ",
            Self::Token(token) => token,
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("separator must not be empty".to_string()),
            WHITESPACE_SEPARATOR => Ok(Self::Whitespace),
            token => Ok(Self::Token(token.to_string())),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace => f.write_str(WHITESPACE_SEPARATOR),
            Self::Token(token) => write!(f, "{token:?}"),
        }
    }
}

/// Parser for raw log lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineParser {
    separator: Separator,
    date_format: String,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(Separator::Whitespace, DEFAULT_DATE_FORMAT)
    }
}

impl LineParser {
    /// Create a parser for `separator` and a strftime-style `date_format`
    pub fn new(separator: Separator, date_format: impl Into<String>) -> Self {
        Self { separator, date_format: date_format.into() }
    }

    /// Separator between timestamp and key
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Expected timestamp format
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Parse one line, with or without its trailing line terminator
    ///
    /// # Example
    /// ```
    /// use ttlsim_core::events::{LineParser, Separator};
    ///
    /// let parser = LineParser::new(Separator::Whitespace, "%d/%b/%Y:%H:%M:%S");
    /// let event = parser.parse("17/Apr/2011:07:23:20 /home/login.jsp\n").unwrap();
    /// assert_eq!(event.key, "/home/login.jsp");
    /// assert_eq!(event.timestamp.to_string(), "2011-04-17 07:23:20");
    /// ```
    pub fn parse(&self, line: &str) -> Result<Event, LineError> {
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');

        let (timestamp, key) = match &self.separator {
            Separator::Whitespace => {
                let mut fields = line.split_whitespace();
                let timestamp = fields.next().ok_or(LineError::MissingTimestamp)?;
                (timestamp, fields.collect::<Vec<_>>().join(self.separator.joiner()))
            }
            // Splitting on the token and rejoining with it leaves the remainder intact
            Separator::Token(token) => match line.split_once(token.as_str()) {
                Some((timestamp, rest)) => (timestamp, rest.to_string()),
                None => (line, String::new()),
            },
        };

        if timestamp.is_empty() {
            return Err(LineError::MissingTimestamp);
        }

        let timestamp = parse_timestamp(timestamp, &self.date_format)?;
        Ok(Event { timestamp, key })
    }
}
