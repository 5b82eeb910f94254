//! Event input: opening log sources and parsing their lines
//!
//! - **[`parser`]**: turns one raw line into a `(timestamp, key)` event
//! - **[`source`]**: chains the lines of every input, file by file
//!
//! Inputs are never merged by time. All events of the first input are
//! produced before any event of the second.

pub mod parser;
pub mod source;

pub use parser::{Event, LineError, LineParser, Separator};
pub use source::{EventSource, InputSource};
