//! Timestamp parsing from log lines
//!
//! Formats use the strftime-style markup understood by `chrono`. Fields the
//! format leaves out take the classic `strptime` defaults: year 1900,
//! January, the 1st, midnight. A date-only format therefore yields midnight
//! of that date and a time-only format lands on 1900-01-01.

use chrono::format::{self, Parsed, StrftimeItems};
use thiserror::Error;

use super::clock::Timestamp;

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Year assumed when the format has none
pub const DEFAULT_YEAR: i64 = 1900;

/// Error type for timestamp parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Nothing to parse
    #[error("Empty timestamp")]
    Empty,

    /// The input does not fit the format
    #[error("'{input}' does not match date format '{format}'")]
    Mismatch {
        /// Text that failed to parse
        input: String,
        /// Format it was parsed with
        format: String,
        /// What `chrono` objected to
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse `input` into a [`Timestamp`] using a strftime-style `format`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ttlsim_common::time::parse_timestamp;
///
/// let date_only = parse_timestamp("2011-08-22", "%Y-%m-%d").unwrap();
/// let midnight = NaiveDate::from_ymd_opt(2011, 8, 22).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(date_only, midnight);
///
/// let full = parse_timestamp("17/Apr/2011:07:23:20", "%d/%b/%Y:%H:%M:%S").unwrap();
/// let expected = NaiveDate::from_ymd_opt(2011, 4, 17).unwrap().and_hms_opt(7, 23, 20).unwrap();
/// assert_eq!(full, expected);
///
/// let time_only = parse_timestamp("07:23:20", "%H:%M:%S").unwrap();
/// let expected = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().and_hms_opt(7, 23, 20).unwrap();
/// assert_eq!(time_only, expected);
///
/// assert!(parse_timestamp("yesterday", "%Y-%m-%d").is_err());
/// ```
pub fn parse_timestamp(input: &str, format: &str) -> Result<Timestamp, TimestampError> {
    if input.is_empty() {
        return Err(TimestampError::Empty);
    }

    parse_with_defaults(input, format).map_err(|source| TimestampError::Mismatch {
        input: input.to_string(),
        format: format.to_string(),
        source,
    })
}

fn parse_with_defaults(input: &str, format: &str) -> format::ParseResult<Timestamp> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(format))?;
    fill_defaults(&mut parsed)?;
    parsed.to_naive_datetime_with_offset(0)
}

/// Complete the fields `format` did not provide
fn fill_defaults(parsed: &mut Parsed) -> format::ParseResult<()> {
    // A Unix timestamp pins every field on its own
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    let has_year = parsed.year().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.isoyear_mod_100().is_some();
    if !has_year {
        parsed.set_year(DEFAULT_YEAR)?;
    }

    // Day of year and week numbers locate the date without a month
    let has_day_locator = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if !has_day_locator {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // 12-hour clock without %p reads as AM
        (None, Some(_)) => parsed.set_ampm(false)?,
        _ => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }

    Ok(())
}
