#![no_main]

use http_fields::{CookieList, FieldValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(list) = CookieList::parse(data) {
        let rendered = list.to_string();
        let reparsed = CookieList::parse(&rendered).expect("re-decode");
        assert_eq!(reparsed.len(), list.len());
    }
});
