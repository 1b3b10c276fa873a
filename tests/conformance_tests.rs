#![cfg(test)]

use hlc_core::test_utils::{init_tracing, FixedClock};
use hlc_core::{Hlc, HlcError};

fn hlc(millis: u64, counter: u32, node: &str) -> Hlc<String> {
    Hlc::new(millis, counter, node.to_string()).unwrap()
}

#[test]
fn scenario_a_first_send_from_zero() {
    init_tracing();
    let canonical = Hlc::zero("node1".to_string());
    assert_eq!(canonical.send_at(1_000).unwrap(), hlc(1_000, 0, "node1"));
}

#[test]
fn scenario_b_second_send_in_same_millisecond() {
    init_tracing();
    let a = Hlc::zero("node1".to_string()).send_at(1_000).unwrap();
    assert_eq!(a.send_at(1_000).unwrap(), hlc(1_000, 1, "node1"));
}

#[test]
fn scenario_c_receive_newer_remote() {
    init_tracing();
    let merged = hlc(1_000, 0, "A").receive_at(&hlc(2_000, 5, "B"), 2_000).unwrap();
    assert_eq!(merged, hlc(2_000, 5, "A"));
}

#[test]
fn scenario_d_receive_older_remote_is_a_no_op() {
    init_tracing();
    let local = hlc(1_000, 0, "A");
    assert_eq!(local.receive_at(&hlc(500, 0, "B"), 1_000).unwrap(), local);
}

#[test]
fn scenario_e_receive_duplicate_node() {
    init_tracing();
    let result = hlc(1_000, 0, "A").receive_at(&hlc(1_000, 1, "A"), 1_000);
    assert_eq!(result, Err(HlcError::DuplicateNode { node_id: "A".to_string() }));
}

#[test]
fn two_nodes_exchanging_messages_agree_on_order() {
    init_tracing();
    let wall = FixedClock(10_000);
    let mut alice = Hlc::zero(hlc_core::random_node_id());
    let mut bob = Hlc::zero(hlc_core::random_node_id());
    assert_ne!(alice.node_id(), bob.node_id());

    let mut log = Vec::new();
    for round in 0..10 {
        alice = alice.send_with(&wall).unwrap();
        log.push(alice.clone());
        bob = bob.receive_with(&alice, &wall).unwrap();
        if round % 3 == 0 {
            bob = bob.send_with(&wall).unwrap();
            log.push(bob.clone());
            alice = alice.receive_with(&bob, &wall).unwrap();
        }
    }

    // Events were appended in causal order, so the log is already sorted.
    let mut sorted = log.clone();
    sorted.sort();
    assert_eq!(sorted, log);
}

#[test]
fn wire_forms_of_a_known_timestamp() {
    let ts = hlc(1_700_000_000_123, 42, "node1");
    assert_eq!(ts.to_string(), "2023-11-14T22:13:20.123Z-002A-node1");
    assert_eq!(ts.pack(), "00loyw3v5n0016node1");
    assert_eq!(Hlc::<String>::parse("2023-11-14T22:13:20.123Z-002A-node1").unwrap(), ts);
    assert_eq!(Hlc::unpack("00loyw3v5n0016node1").unwrap(), ts);
}

#[test]
fn drift_and_overflow_are_surfaced_not_repaired() {
    let ahead = hlc(200_000, 0, "A");
    let err = ahead.send_at(100_000).unwrap_err();
    assert_eq!(err, HlcError::ClockDrift { drift: 100_000 });
    assert!(err.is_retryable());

    let full = hlc(1_000, 65_535, "A");
    let err = full.send_at(1_000).unwrap_err();
    assert_eq!(err, HlcError::CounterOverflow { counter: 65_536 });
    assert!(full.send_at(1_001).is_ok());
}
