#![no_main]

// Harness: send_receive
// Strategy: drive one canonical timestamp through arbitrary sends and
// receives; successful calls must never move logical time backwards.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hlc_core::Hlc;

#[derive(Arbitrary, Debug)]
enum Op {
    Send { wall: u64 },
    Receive { millis: u64, counter: u16, same_node: bool, wall: u64 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut canonical = Hlc::zero("local".to_string());
    for op in ops {
        let before = canonical.logical_time();
        match op {
            Op::Send { wall } => {
                if let Ok(next) = canonical.send_at(wall) {
                    assert!(next.logical_time() > before);
                    canonical = next;
                }
            }
            Op::Receive { millis, counter, same_node, wall } => {
                let node = if same_node { "local" } else { "remote" };
                let Ok(remote) = Hlc::new(millis, u32::from(counter), node.to_string()) else {
                    continue;
                };
                if let Ok(next) = canonical.receive_at(&remote, wall) {
                    assert!(next.logical_time() >= before);
                    assert_eq!(next.node_id(), canonical.node_id());
                    canonical = next;
                }
            }
        }
    }
});
