// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use timestamp_formats::{format::DAY_NAME_FORMATS, format_all, parse_timestamp};

/// Check every built-in format of `input` against `expected`, in order.
pub fn check_formats(input: &str, expected: [&str; 5]) {
    let ts = match parse_timestamp(input) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse timestamp from value '{input}': {e}"),
    };
    let result = match format_all(&ts, &DAY_NAME_FORMATS) {
        Ok(v) => v,
        Err(e) => panic!("Failed to format value '{input}': {e}"),
    };

    assert_eq!(result.len(), expected.len(), "Input value: {input}");
    for ((label, actual), expected) in result.iter().zip(expected) {
        assert_eq!(actual, expected, "Input value: {input}, format: {label}");
    }
}
