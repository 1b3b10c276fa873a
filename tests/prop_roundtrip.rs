use std::collections::BTreeMap;

use hlc_core::codec::{Compact, Extended, WireFormat};
use hlc_core::Hlc;
use proptest::prelude::*;
use uuid::Uuid;

// Up to 9999-12-31T23:59:59.999Z, the range of four-digit ISO years.
const MAX_ISO_MILLIS: u64 = 253_402_300_800_000;

fn arb_hlc() -> impl Strategy<Value = Hlc<String>> {
    (0..MAX_ISO_MILLIS, 0u32..=65_535, "[A-Za-z0-9:_-]{0,20}")
        .prop_map(|(millis, counter, node)| Hlc::new(millis, counter, node).unwrap())
}

proptest! {
    #[test]
    fn prop_extended_round_trip(ts in arb_hlc()) {
        prop_assert_eq!(Hlc::<String>::parse(&ts.to_string()).unwrap(), ts.clone());
        prop_assert_eq!(Extended::decode(&Extended::encode(&ts)).unwrap(), ts);
    }

    #[test]
    fn prop_compact_round_trip(ts in arb_hlc()) {
        let packed = ts.pack();
        prop_assert_eq!(packed.len(), 14 + ts.node_id().len());
        prop_assert_eq!(Compact::decode(&packed).unwrap(), ts);
    }

    #[test]
    fn prop_json_round_trip(ts in arb_hlc()) {
        let json = serde_json::to_string(&ts).unwrap();
        prop_assert_eq!(serde_json::from_str::<Hlc<String>>(&json).unwrap(), ts);
    }

    #[test]
    fn prop_compact_order_matches_logical_order(a in arb_hlc(), b in arb_hlc()) {
        // Fixed-width prefixes sort like the logical time.
        let (pa, pb) = (a.pack(), b.pack());
        prop_assert_eq!(pa[..14].cmp(&pb[..14]), a.logical_time().cmp(&b.logical_time()));
    }

    #[test]
    fn prop_uuid_node_ids_round_trip(millis in 0..MAX_ISO_MILLIS, counter in 0u32..=65_535) {
        let ts = Hlc::new(millis, counter, Uuid::new_v4()).unwrap();
        prop_assert_eq!(Hlc::<Uuid>::parse(&ts.to_string()).unwrap(), ts);
    }
}

#[test]
fn timestamps_work_as_map_keys_in_causal_order() {
    let mut events = BTreeMap::new();
    let mut canonical = Hlc::zero("n".to_string());
    for wall in [5, 5, 5, 9, 7] {
        canonical = canonical.send_at(wall).unwrap();
        events.insert(canonical.clone(), wall);
    }
    let order: Vec<_> = events.keys().map(|k| (k.millis(), k.counter())).collect();
    assert_eq!(order, vec![(5, 0), (5, 1), (5, 2), (9, 0), (9, 1)]);
}
