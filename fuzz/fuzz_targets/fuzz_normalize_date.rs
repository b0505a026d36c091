#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match xinvoice::normalize_date(s) {
            Ok(date) => assert_eq!(xinvoice::normalize_date(&date.to_string()), Ok(date)),
            Err(illegal) => assert_eq!(illegal.raw, s),
        }
    }
});
