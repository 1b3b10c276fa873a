#![no_main]

// Harness: parse_extended
// Any string the extended parser accepts must re-encode to a string that
// parses back to the same timestamp.

use libfuzzer_sys::fuzz_target;
use hlc_core::Hlc;

fuzz_target!(|input: &str| {
    if let Ok(ts) = Hlc::<String>::parse(input) {
        let again = Hlc::<String>::parse(&ts.to_string()).expect("re-encoded form must parse");
        assert_eq!(again, ts);
    }
});
