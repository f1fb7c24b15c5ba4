#![no_main]

use http_fields::{FieldValue, SetCookieField};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(field) = SetCookieField::parse(data) {
        // A decoded field must render into something that decodes again.
        let rendered = field.to_string();
        SetCookieField::parse(&rendered).expect("re-decode");
    }
});
