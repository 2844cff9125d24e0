// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Rendering a [`Timestamp`] through named strftime templates.
//!
//! Weekday and month names come from chrono and are always English, whatever
//! the host locale says.

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use chrono::format::{Item, StrftimeItems};
use log::trace;

use crate::{Timestamp, TimestampError};

/// The strftime patterns behind the built-in specs.
mod pattern {
    pub(crate) const FULL: &str = "%A, %B %d, %Y at %I:%M %p";
    pub(crate) const SHORT_DAY: &str = "%a, %B %d, %Y at %I:%M %p";
    pub(crate) const SIMPLE: &str = "%A, %m/%d/%Y %I:%M %p";
    pub(crate) const COMPACT: &str = "%a %m/%d/%Y %H:%M";
    pub(crate) const DAY_AND_TIME: &str = "%A at %I:%M %p";
}

/// `Tuesday, March 19, 2024 at 09:45 AM`
pub const FULL: FormatSpec = FormatSpec::from_static("Full format", pattern::FULL);
/// `Tue, March 19, 2024 at 09:45 AM`
pub const SHORT_DAY: FormatSpec = FormatSpec::from_static("Short day format", pattern::SHORT_DAY);
/// `Tuesday, 03/19/2024 09:45 AM`
pub const SIMPLE: FormatSpec = FormatSpec::from_static("Simple format", pattern::SIMPLE);
/// `Tue 03/19/2024 09:45`
pub const COMPACT: FormatSpec = FormatSpec::from_static("Compact format", pattern::COMPACT);
/// `Tuesday at 09:45 AM`
pub const DAY_AND_TIME: FormatSpec = FormatSpec::from_static("Day and time", pattern::DAY_AND_TIME);

/// Every built-in spec, in display order.
pub const DAY_NAME_FORMATS: [FormatSpec; 5] = [FULL, SHORT_DAY, SIMPLE, COMPACT, DAY_AND_TIME];

/// A labelled strftime template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    label: Cow<'static, str>,
    pattern: Cow<'static, str>,
}

impl FormatSpec {
    /// Build a spec from any label and chrono strftime pattern.
    ///
    /// The pattern is not checked here; an unknown specifier surfaces as
    /// [`TimestampError::InvalidPattern`] from [`render`].
    pub fn new(label: impl Into<Cow<'static, str>>, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    const fn from_static(label: &'static str, pattern: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            pattern: Cow::Borrowed(pattern),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Renders `ts` through `spec`.
///
/// Timestamps with an offset are rendered at their own wall-clock time, so
/// `%z` and friends work. Timestamps without one have no offset to print.
///
/// # Errors
///
/// * `TimestampError::InvalidPattern` if the pattern has an unknown specifier
/// * `TimestampError::Render` if the pattern asks for something the value
///   cannot provide, such as `%z` on a timestamp written without an offset
pub fn render(ts: &Timestamp, spec: &FormatSpec) -> Result<String, TimestampError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(spec.pattern()).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TimestampError::InvalidPattern(spec.label().to_owned()));
    }

    let render_error = || TimestampError::Render(spec.label().to_owned());

    let mut rendered = String::new();
    let written = match ts.offset() {
        Some(offset) => {
            let dt = ts
                .naive_local()
                .and_local_timezone(offset)
                .single()
                .ok_or_else(render_error)?;
            write!(rendered, "{}", dt.format_with_items(items.iter()))
        }
        None => write!(
            rendered,
            "{}",
            ts.naive_local().format_with_items(items.iter())
        ),
    };
    written.map_err(|_| render_error())?;

    trace!("{}: {rendered}", spec.label());
    Ok(rendered)
}

/// Renders `ts` through every spec in order.
///
/// Either every spec renders or the first failure is returned.
pub fn format_all(ts: &Timestamp, specs: &[FormatSpec]) -> Result<FormattedResult, TimestampError> {
    let mut result = FormattedResult::new();
    for spec in specs {
        let value = render(ts, spec)?;
        result.insert(spec.label(), value);
    }
    Ok(result)
}

/// Rendered strings keyed by spec label, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedResult {
    entries: Vec<(String, String)>,
}

impl FormattedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rendered value.
    ///
    /// A label that is already present keeps its position and gets the new
    /// value; the old one is returned.
    pub fn insert(&mut self, label: impl Into<String>, value: String) -> Option<String> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FormattedResult {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.iter() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{format_all, render, FormatSpec, FormattedResult, DAY_NAME_FORMATS};
    use crate::{parse_timestamp, TimestampError};

    const SAMPLE: &str = "2024-03-19T09:45:00.000Z";

    #[test]
    fn sample_renders() {
        let ts = parse_timestamp(SAMPLE).unwrap();
        let expected = [
            "Tuesday, March 19, 2024 at 09:45 AM",
            "Tue, March 19, 2024 at 09:45 AM",
            "Tuesday, 03/19/2024 09:45 AM",
            "Tue 03/19/2024 09:45",
            "Tuesday at 09:45 AM",
        ];
        for (spec, expected) in DAY_NAME_FORMATS.iter().zip(expected) {
            assert_eq!(render(&ts, spec).unwrap(), expected, "Spec: {}", spec.label());
        }
    }

    #[test]
    fn afternoon_uses_pm_and_24_hour_compact() {
        let ts = parse_timestamp("2024-03-19T21:05:00Z").unwrap();
        let result = format_all(&ts, &DAY_NAME_FORMATS).unwrap();
        assert_eq!(result.get("Full format"), Some("Tuesday, March 19, 2024 at 09:05 PM"));
        assert_eq!(result.get("Compact format"), Some("Tue 03/19/2024 21:05"));
    }

    #[test]
    fn noon_is_twelve_pm() {
        let ts = parse_timestamp("2024-03-19T12:00:00Z").unwrap();
        assert_eq!(
            render(&ts, &super::DAY_AND_TIME).unwrap(),
            "Tuesday at 12:00 PM"
        );
    }

    #[test]
    fn naive_timestamps_render_too() {
        let ts = parse_timestamp("2024-03-19T09:45:00").unwrap();
        assert_eq!(render(&ts, &super::COMPACT).unwrap(), "Tue 03/19/2024 09:45");
    }

    #[test]
    fn offset_specifier() {
        let spec = FormatSpec::new("With offset", "%H:%M %:z");

        let ts = parse_timestamp("2024-03-19T09:45:00-05:30").unwrap();
        assert_eq!(render(&ts, &spec).unwrap(), "09:45 -05:30");

        let ts = parse_timestamp("2024-03-19T09:45:00").unwrap();
        assert_eq!(
            render(&ts, &spec),
            Err(TimestampError::Render("With offset".to_owned()))
        );
    }

    #[test]
    fn aware_timestamps_render_their_offset() {
        let spec = FormatSpec::new("Zone", "%A %H:%M %z");

        let ts = parse_timestamp(SAMPLE).unwrap();
        assert_eq!(render(&ts, &spec).unwrap(), "Tuesday 09:45 +0000");

        let ts = parse_timestamp("2024-03-19T23:30:00+14:00").unwrap();
        assert_eq!(render(&ts, &spec).unwrap(), "Tuesday 23:30 +1400");

        let ts = parse_timestamp("2024-03-19T00:15:00-12:00").unwrap();
        assert_eq!(render(&ts, &spec).unwrap(), "Tuesday 00:15 -1200");
    }

    #[test]
    fn unknown_specifier() {
        let ts = parse_timestamp(SAMPLE).unwrap();
        let spec = FormatSpec::new("Broken", "%Q");
        assert_eq!(
            render(&ts, &spec),
            Err(TimestampError::InvalidPattern("Broken".to_owned()))
        );
    }

    #[test]
    fn format_all_is_all_or_nothing() {
        let ts = parse_timestamp(SAMPLE).unwrap();
        let specs = [super::FULL, FormatSpec::new("Broken", "%Q"), super::COMPACT];
        assert!(format_all(&ts, &specs).is_err());
    }

    #[test]
    fn labels_keep_first_position() {
        let mut result = FormattedResult::new();
        assert_eq!(result.insert("a", "1".to_owned()), None);
        assert_eq!(result.insert("b", "2".to_owned()), None);
        assert_eq!(result.insert("a", "3".to_owned()), Some("1".to_owned()));

        assert_eq!(result.labels().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(result.get("a"), Some("3"));
        assert_eq!(result.to_string(), "a: 3\nb: 2\n");
    }
}
