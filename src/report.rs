// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt::{self, Display};

use crate::format::{format_all, FormattedResult, DAY_NAME_FORMATS};
use crate::{parse_timestamp, TimestampError};

/// The timestamp formatted when none is given.
pub const DEFAULT_INPUT: &str = "2024-03-19T09:45:00.000Z";

/// A timestamp rendered through every built-in spec, ready to print.
///
/// All the work happens in [`Report::new`], so a failure there means nothing
/// has been printed yet.
///
/// # Examples
///
/// ```
/// use timestamp_formats::{Report, DEFAULT_INPUT};
///
/// let report = Report::new(DEFAULT_INPUT).unwrap();
/// assert!(report
///     .to_string()
///     .ends_with("Day and time: Tuesday at 09:45 AM\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    raw: &'a str,
    formats: FormattedResult,
}

impl<'a> Report<'a> {
    /// # Errors
    ///
    /// Returns `TimestampError::InvalidInput` if `raw` does not parse.
    pub fn new(raw: &'a str) -> Result<Self, TimestampError> {
        let ts = parse_timestamp(raw)?;
        let formats = format_all(&ts, &DAY_NAME_FORMATS)?;
        Ok(Self { raw, formats })
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn formats(&self) -> &FormattedResult {
        &self.formats
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current time: {}", self.raw)?;
        writeln!(f)?;
        writeln!(f, "Different formats with day name:")?;
        write!(f, "{}", self.formats)
    }
}
