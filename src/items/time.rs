// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse a time of day and an optional UTC offset
//!
//! The time of day is written on a 24-hour clock, either in the extended form
//! `HH:MM[:SS[.fff]]` or the basic form `HH[MM[SS[.fff]]]`. The fraction may
//! be introduced by a period or a comma and carry any number of digits.
//!
//! A UTC offset is `+` or `-` followed by `HH:MM[:SS]` or `HH[MM[SS]]`. A
//! trailing `Z` has already been rewritten to `+00:00` by the caller, so the
//! grammar itself does not know about Zulu time.

use winnow::{
    combinator::{alt, opt, preceded},
    token::one_of,
    trace::trace,
    PResult, Parser,
};

use super::primitive::{digits, nanoseconds};

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Offset {
    pub(crate) negative: bool,
    pub(crate) hours: u32,
    pub(crate) minutes: u32,
    pub(crate) seconds: u32,
}

impl Offset {
    /// Signed distance from UTC, east positive.
    pub fn total_seconds(&self) -> i64 {
        let seconds = i64::from(self.hours * 3600 + self.minutes * 60 + self.seconds);
        if self.negative {
            -seconds
        } else {
            seconds
        }
    }
}

pub fn parse(input: &mut &str) -> PResult<Time> {
    // The extended form must go first: a basic `HH` would happily accept the
    // hour of `HH:MM` and leave the colon behind.
    alt((extended, basic)).parse_next(input)
}

/// Parse `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`
fn extended(input: &mut &str) -> PResult<Time> {
    (
        hour,
        preceded(':', minute),
        opt(preceded(':', (second, opt(nanoseconds)))),
    )
        .map(|(hour, minute, rest)| {
            let (second, nanosecond) = rest.map_or((0, 0), |(s, n)| (s, n.unwrap_or(0)));
            Time {
                hour,
                minute,
                second,
                nanosecond,
            }
        })
        .parse_next(input)
}

/// Parse `HH`, `HHMM`, `HHMMSS` or `HHMMSS.fff`
fn basic(input: &mut &str) -> PResult<Time> {
    (hour, opt((minute, opt((second, opt(nanoseconds))))))
        .map(|(hour, rest)| {
            let (minute, rest) = rest.unwrap_or((0, None));
            let (second, nanosecond) = rest.map_or((0, 0), |(s, n)| (s, n.unwrap_or(0)));
            Time {
                hour,
                minute,
                second,
                nanosecond,
            }
        })
        .parse_next(input)
}

/// Parse a numeric UTC offset such as `+00:00`, `-0530` or `+05`
pub fn offset(input: &mut &str) -> PResult<Offset> {
    trace(
        "offset",
        (one_of(['+', '-']), alt((offset_extended, offset_basic))).map(
            |(sign, (hours, minutes, seconds))| Offset {
                negative: sign == '-',
                hours,
                minutes,
                seconds,
            },
        ),
    )
    .parse_next(input)
}

fn offset_extended(input: &mut &str) -> PResult<(u32, u32, u32)> {
    (hour, preceded(':', minute), opt(preceded(':', second)))
        .map(|(h, m, s)| (h, m, s.unwrap_or(0)))
        .parse_next(input)
}

fn offset_basic(input: &mut &str) -> PResult<(u32, u32, u32)> {
    (hour, opt((minute, opt(second))))
        .map(|(h, rest)| {
            let (m, s) = rest.map_or((0, 0), |(m, s)| (m, s.unwrap_or(0)));
            (h, m, s)
        })
        .parse_next(input)
}

fn hour(input: &mut &str) -> PResult<u32> {
    trace("hour", digits(2).verify(|hour: &u32| *hour < 24)).parse_next(input)
}

fn minute(input: &mut &str) -> PResult<u32> {
    trace("minute", digits(2).verify(|minute: &u32| *minute < 60)).parse_next(input)
}

fn second(input: &mut &str) -> PResult<u32> {
    trace("second", digits(2).verify(|second: &u32| *second < 60)).parse_next(input)
}
