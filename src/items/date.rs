// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse a calendar date
//!
//! Both ISO 8601 spellings are accepted: the extended `YYYY-MM-DD` form and
//! the basic `YYYYMMDD` form. The year is always four digits and must be at
//! least 1. Month and day are range checked here; whether the day exists in
//! that month is left to the conversion into a chrono date.

use winnow::{combinator::alt, seq, trace::trace, PResult, Parser};

use super::primitive::digits;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

pub fn parse(input: &mut &str) -> PResult<Date> {
    alt((extended, basic)).parse_next(input)
}

/// Parse `YYYY-MM-DD`
fn extended(input: &mut &str) -> PResult<Date> {
    seq!(Date {
        year: year,
        _: '-',
        month: month,
        _: '-',
        day: day,
    })
    .parse_next(input)
}

/// Parse `YYYYMMDD`
fn basic(input: &mut &str) -> PResult<Date> {
    seq!(Date {
        year: year,
        month: month,
        day: day,
    })
    .parse_next(input)
}

fn year(input: &mut &str) -> PResult<u32> {
    trace("year", digits(4).verify(|year: &u32| *year >= 1)).parse_next(input)
}

fn month(input: &mut &str) -> PResult<u32> {
    trace("month", digits(2).verify(|month: &u32| (1..=12).contains(month))).parse_next(input)
}

fn day(input: &mut &str) -> PResult<u32> {
    trace("day", digits(2).verify(|day: &u32| (1..=31).contains(day))).parse_next(input)
}
