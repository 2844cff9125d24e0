// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Primitive combinators.

use winnow::{
    combinator::preceded,
    error::ContextError,
    stream::AsChar,
    token::{one_of, take_while},
    PResult, Parser,
};

/// Parse exactly `count` ASCII digits as an unsigned number
///
/// ISO 8601 fields are fixed width, so unlike `winnow::ascii::dec_uint` this
/// never consumes more digits than asked for.
pub(super) fn digits<'a>(count: usize) -> impl Parser<&'a str, u32, ContextError> {
    take_while(count, AsChar::is_dec_digit).try_map(|s: &str| s.parse::<u32>())
}

/// Parse a decimal fraction, introduced by `.` or `,`, as nanoseconds
///
/// Excess precision is silently discarded.
pub(super) fn nanoseconds(input: &mut &str) -> PResult<u32> {
    preceded(one_of(['.', ',']), take_while(1.., AsChar::is_dec_digit))
        .map(|fraction: &str| {
            fraction
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(9)
                .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
        })
        .parse_next(input)
}
