#![no_main]

use libfuzzer_sys::fuzz_target;
use timestamp_formats::format::DAY_NAME_FORMATS;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    if let Ok(ts) = timestamp_formats::parse_timestamp(s) {
        // anything that parses must render through every built-in spec
        timestamp_formats::format_all(&ts, &DAY_NAME_FORMATS).unwrap();
    }
});
