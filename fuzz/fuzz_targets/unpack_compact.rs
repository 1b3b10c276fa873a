#![no_main]

// Harness: unpack_compact
// Accepted packed strings re-pack to an equivalent timestamp.

use libfuzzer_sys::fuzz_target;
use hlc_core::Hlc;

fuzz_target!(|input: &str| {
    if let Ok(ts) = Hlc::unpack(input) {
        let repacked = ts.pack();
        assert_eq!(repacked.len(), 14 + ts.node_id().len());
        assert_eq!(Hlc::unpack(&repacked).expect("packed form must unpack"), ts);
    }
});
