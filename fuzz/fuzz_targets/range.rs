#![no_main]

use http_fields::{FieldValue, RangeField};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(field) = RangeField::parse(data) {
        let rendered = field.to_string();
        let reparsed = RangeField::parse(&rendered).expect("re-decode");
        // Range decoding is lenient, but rendering is exact: every kept
        // expression survives a second decode.
        assert_eq!(reparsed, field);
    }
});
