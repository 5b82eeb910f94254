//! Input sources and the lazy event stream over them

use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use super::parser::{Event, LineParser};
use crate::errors::{Result, SimulatorError};

/// Filename that selects standard input
pub const STDIN_SENTINEL: &str = "-";

/// A place events are read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum InputSource {
    /// Standard input, selected with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl From<&str> for InputSource {
    fn from(value: &str) -> Self {
        if value == STDIN_SENTINEL {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl From<String> for InputSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputSource {
    fn open(&self) -> Result<OpenInput> {
        let reader: Box<dyn BufRead> = match self {
            // No lock is held, so `-` may be listed more than once; later ones see EOF
            Self::Stdin => Box::new(BufReader::new(io::stdin())),
            Self::File(path) => {
                let file = File::open(path)
                    .map_err(|source| SimulatorError::Open { path: path.clone(), source })?;
                Box::new(BufReader::new(file))
            }
        };

        debug!(input = %self, "opened input");
        Ok(OpenInput { name: self.to_string(), reader, line_number: 0 })
    }
}

/// An opened input and how far it has been read
struct OpenInput {
    name: String,
    reader: Box<dyn BufRead>,
    line_number: usize,
}

/// Lazy stream of events over several inputs
///
/// Produces every line of the first input, then every line of the next.
/// An input is closed as soon as it is exhausted. The stream ends after the
/// first read error.
pub struct EventSource {
    inputs: VecDeque<OpenInput>,
    parser: LineParser,
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("inputs", &self.inputs.iter().map(|input| &input.name).collect::<Vec<_>>())
            .field("parser", &self.parser)
            .finish()
    }
}

impl EventSource {
    /// Open every source up front, in order
    ///
    /// # Errors
    /// Returns [`SimulatorError::Open`] for the first source that cannot be
    /// opened. Sources opened before it are closed again.
    pub fn open(sources: &[InputSource], parser: LineParser) -> Result<Self> {
        let mut inputs = VecDeque::with_capacity(sources.len());
        for source in sources {
            inputs.push_back(source.open()?);
        }

        Ok(Self { inputs, parser })
    }

    /// Build a stream over already opened readers, named for diagnostics
    pub fn from_readers<I, S>(readers: I, parser: LineParser) -> Self
    where
        I: IntoIterator<Item = (S, Box<dyn BufRead>)>,
        S: Into<String>,
    {
        let inputs = readers
            .into_iter()
            .map(|(name, reader)| OpenInput { name: name.into(), reader, line_number: 0 })
            .collect();

        Self { inputs, parser }
    }

    /// Number of inputs not yet exhausted
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Iterator for EventSource {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            let input = self.inputs.front_mut()?;
            line.clear();

            match input.reader.read_line(&mut line) {
                Ok(0) => {
                    debug!(input = %input.name, lines = input.line_number, "finished input");
                    self.inputs.pop_front();
                }
                Ok(_) => {
                    input.line_number += 1;
                    let event = self.parser.parse(&line).map_err(|error| {
                        SimulatorError::MalformedLine {
                            source_name: input.name.clone(),
                            line: input.line_number,
                            error,
                        }
                    });
                    return Some(event);
                }
                Err(source) => {
                    let source_name = input.name.clone();
                    self.inputs.clear();
                    return Some(Err(SimulatorError::Read { source_name, source }));
                }
            }
        }
    }
}
