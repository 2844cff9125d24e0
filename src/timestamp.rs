// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::debug;
use winnow::Parser;

use crate::items::{self, error::Error};
use crate::TimestampError;

/// A point in time as written in an ISO 8601 string.
///
/// The wall-clock reading is kept as written. The UTC offset is only present
/// when the input carried one (a trailing `Z` counts as `+00:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl Timestamp {
    /// The date and time of day as written, without regard to the offset.
    pub fn naive_local(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The offset-aware instant, or `None` for a timestamp written without
    /// an offset.
    pub fn to_fixed_offset(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset?;
        self.datetime.and_local_timezone(offset).single()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        match self.offset {
            Some(offset) => write!(f, "{offset}"),
            None => Ok(()),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s)
    }
}

/// Parses an ISO 8601 date-time string into a [`Timestamp`].
///
/// A trailing `Z` designator is rewritten to `+00:00` before parsing, so
/// `"2024-03-19T09:45:00.000Z"` carries an explicit zero UTC offset.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, Timelike};
/// use timestamp_formats::parse_timestamp;
///
/// let ts = parse_timestamp("2024-03-19T09:45:00.000Z").unwrap();
/// assert_eq!(ts.offset(), FixedOffset::east_opt(0));
/// assert_eq!(ts.naive_local().hour(), 9);
/// ```
///
/// # Errors
///
/// This function will return `Err(TimestampError::InvalidInput)` if the
/// input is not a valid date-time, including out of range fields and days
/// that do not exist in their month.
pub fn parse_timestamp<S: AsRef<str>>(input: S) -> Result<Timestamp, TimestampError> {
    let raw = input.as_ref();
    let normalized = match raw.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{rest}+00:00")),
        None => Cow::Borrowed(raw),
    };

    match parse_normalized(&normalized) {
        Ok(timestamp) => {
            debug!("parsed {raw:?} as {timestamp}");
            Ok(timestamp)
        }
        Err(err) => {
            debug!("cannot parse {raw:?}: {err}");
            Err(TimestampError::InvalidInput(raw.to_owned()))
        }
    }
}

fn parse_normalized(input: &str) -> Result<Timestamp, Error> {
    let item = items::parse.parse(input)?;
    let (datetime, offset) = items::resolve(item)?;
    Ok(Timestamp { datetime, offset })
}
