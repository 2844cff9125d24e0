#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;
use timestamp_formats::format::{DAY_AND_TIME, DAY_NAME_FORMATS};

#[derive(Debug)]
struct Input {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let input = Input {
            year: u.int_in_range(1..=9999)?,
            month: u.int_in_range(1..=12)?,
            day: u.int_in_range(1..=31)?,
            hour: u.int_in_range(0..=23)?,
            minute: u.int_in_range(0..=59)?,
            second: u.int_in_range(0..=59)?,
            millis: u.int_in_range(0..=999)?,
        };
        Ok(input)
    }
}

impl Input {
    fn iso(&self) -> String {
        let Input {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millis,
        } = self;
        format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{millis:03}Z")
    }
}

fuzz_target!(|input: Input| {
    let iso = input.iso();
    let exists = NaiveDate::from_ymd_opt(input.year as i32, input.month, input.day).is_some();

    match timestamp_formats::parse_timestamp(&iso) {
        Ok(ts) => {
            assert!(exists, "Parsed a day that does not exist: {iso}");
            let result = timestamp_formats::format_all(&ts, &DAY_NAME_FORMATS).unwrap();
            assert_eq!(result.len(), DAY_NAME_FORMATS.len());

            let clock = result.get(DAY_AND_TIME.label()).unwrap();
            let twelve_hour = (input.hour + 11) % 12 + 1;
            let meridiem = if input.hour < 12 { "AM" } else { "PM" };
            assert!(
                clock.ends_with(&format!("{twelve_hour:02}:{:02} {meridiem}", input.minute)),
                "Unexpected clock for {iso}: {clock}"
            );
        }
        Err(e) => assert!(!exists, "Failed to parse {iso}: {e}"),
    }
});
