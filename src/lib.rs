// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing ISO 8601 timestamps and rendering them in
//! human-readable formats that lead with the day name.
//!
//! Parsing accepts:
//!
//! * extended and basic calendar dates, e.g. "2024-03-19" or "20240319"
//! * an optional time of day with fractional seconds, e.g. "T09:45:00.000"
//! * numeric UTC offsets, e.g. "+05:30", or a trailing "Z" for UTC
//!
//! Rendering goes through named strftime templates, see [`format`].
//!
use std::error::Error;
use std::fmt::{self, Display};

pub mod format;
mod items;
mod report;
mod timestamp;

pub use format::{format_all, render, FormatSpec, FormattedResult};
pub use report::{Report, DEFAULT_INPUT};
pub use timestamp::{parse_timestamp, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The input, verbatim, that is not a valid ISO 8601 date-time.
    InvalidInput(String),
    /// Label of a spec whose pattern has an unknown specifier.
    InvalidPattern(String),
    /// Label of a spec that could not be applied to the timestamp.
    Render(String),
}

impl Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::InvalidInput(input) => {
                write!(
                    f,
                    "Invalid input string: cannot parse {input:?} as an ISO 8601 timestamp"
                )
            }
            TimestampError::InvalidPattern(label) => {
                write!(f, "Invalid pattern for {label:?}")
            }
            TimestampError::Render(label) => {
                write!(f, "Cannot render the timestamp as {label:?}")
            }
        }
    }
}

impl Error for TimestampError {}
