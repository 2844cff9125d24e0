// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! ISO 8601 date-time grammar
//!
//! A timestamp is a calendar date, optionally followed by a separator (`T`,
//! `t` or a single space), a time of day and a UTC offset:
//!
//! ```txt
//! 2024-03-19
//! 2024-03-19T09:45
//! 2024-03-19T09:45:00.000+00:00
//! 20240319T094500-0800
//! ```
//!
//! The pieces live in separate modules:
//!  - [`date`]
//!  - [`time`]
//!  - [`primitive`]
//!
//! Parsing only checks the shape and the per-field ranges. [`resolve`] turns
//! the parsed fields into chrono values and rejects dates that do not exist,
//! such as February 30.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use winnow::{
    combinator::{opt, preceded},
    token::one_of,
    PResult, Parser,
};

pub(crate) mod date;
pub(crate) mod error;
mod primitive;
pub(crate) mod time;

use error::Error;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct DateTime {
    pub(crate) date: date::Date,
    pub(crate) time: time::Time,
    pub(crate) offset: Option<time::Offset>,
}

pub fn parse(input: &mut &str) -> PResult<DateTime> {
    (
        date::parse,
        opt(preceded(
            one_of(['T', 't', ' ']),
            (time::parse, opt(time::offset)),
        )),
    )
        .map(|(date, rest)| {
            let (time, offset) = rest.unwrap_or_default();
            DateTime { date, time, offset }
        })
        .parse_next(input)
}

/// Convert parsed fields into a wall-clock date-time and its offset, if any.
pub(crate) fn resolve(item: DateTime) -> Result<(NaiveDateTime, Option<FixedOffset>), Error> {
    let DateTime { date, time, offset } = item;

    let year = i32::try_from(date.year).map_err(|_| "year out of range")?;
    let date = NaiveDate::from_ymd_opt(year, date.month, date.day)
        .ok_or("day does not exist in that month")?;
    let time = NaiveTime::from_hms_nano_opt(time.hour, time.minute, time.second, time.nanosecond)
        .ok_or("invalid time of day")?;

    let offset = match offset {
        Some(offset) => {
            let seconds =
                i32::try_from(offset.total_seconds()).map_err(|_| "offset out of range")?;
            Some(FixedOffset::east_opt(seconds).ok_or("offset out of range")?)
        }
        None => None,
    };

    Ok((date.and_time(time), offset))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};
    use winnow::Parser;

    use super::{parse, resolve};

    fn resolve_str(s: &str) -> Option<(chrono::NaiveDateTime, Option<FixedOffset>)> {
        let item = parse.parse(s).ok()?;
        resolve(item).ok()
    }

    #[test]
    fn date_and_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 19)
            .unwrap()
            .and_hms_opt(9, 45, 0)
            .unwrap();

        for s in [
            "2024-03-19T09:45:00.000+00:00",
            "2024-03-19t09:45:00+00:00",
            "2024-03-19 09:45+00:00",
            "20240319T094500+0000",
            "2024-03-19T09:45:00",
            "2024-03-19T0945",
        ] {
            let (actual, _) = resolve_str(s).unwrap_or_else(|| panic!("Failed: {s}"));
            assert_eq!(actual, expected, "Input value: {s}");
        }
    }

    #[test]
    fn date_only_is_midnight() {
        let (actual, offset) = resolve_str("2024-01-01").unwrap();
        assert_eq!(
            actual,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(offset, None);
    }

    #[test]
    fn offsets_are_kept() {
        let (_, offset) = resolve_str("2024-03-19T09:45:00-05:30").unwrap();
        assert_eq!(offset, FixedOffset::west_opt(5 * 3600 + 30 * 60));

        let (_, offset) = resolve_str("2024-03-19T09:45:00+00:00").unwrap();
        assert_eq!(offset, FixedOffset::east_opt(0));

        let (_, offset) = resolve_str("2024-03-19T09:45:00").unwrap();
        assert_eq!(offset, None);
    }

    #[test]
    fn nonexistent_days() {
        for s in ["2023-02-29", "2024-02-30", "2024-04-31T00:00"] {
            let item = parse.parse(s).unwrap();
            assert!(resolve(item).is_err(), "Input value: {s}");
        }
        assert!(resolve_str("2024-02-29").is_some());
    }

    #[test]
    fn trailing_garbage() {
        for s in [
            "2024-03-19T",
            "2024-03-19T09:45:00.000Z",
            "2024-03-19T09:45:00+00:00 ",
            "2024-03-19+00:00",
            "2024-03-19T09:45:00.",
            "2024-03-19x09:45",
        ] {
            assert!(parse.parse(s).is_err(), "Input value: {s}");
        }
    }
}
