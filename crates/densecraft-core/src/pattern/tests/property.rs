use crate::{
    MAX_PATTERN_INPUTS, MAX_PATTERN_OUTPUTS,
    item::ItemQuantity,
    pattern::{PatternRecord, condense},
    test_support::{blank_record, qty, totals},
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const ITEMS: [&str; 4] = ["minecraft:a", "minecraft:b", "minecraft:c", "minecraft:d"];

fn arb_quantity() -> impl Strategy<Value = ItemQuantity> {
    (0..ITEMS.len(), 1i64..=64).prop_map(|(i, count)| qty(ITEMS[i], count))
}

fn arb_slots(max: usize) -> impl Strategy<Value = Vec<ItemQuantity>> {
    prop::collection::vec(arb_quantity(), 1..=max)
}

fn encoded(inputs: &[ItemQuantity], outputs: &[ItemQuantity]) -> PatternRecord {
    let mut record = blank_record();
    record.set_inputs(inputs.iter().cloned().map(Some)).unwrap();
    record.set_outputs(outputs.iter().cloned().map(Some)).unwrap();
    record.encode().unwrap();
    record
}

fn same_slots(left: &[ItemQuantity], right: &[ItemQuantity]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l.eq_with_count(r))
}

proptest! {
    #[test]
    fn condense_conserves_totals_per_variant(items in arb_slots(16)) {
        let condensed = condense(&items);

        prop_assert_eq!(totals(&condensed), totals(&items));

        let distinct: HashSet<&ItemQuantity> = items.iter().collect();
        prop_assert_eq!(condensed.len(), distinct.len());
    }

    #[test]
    fn condensed_view_matches_raw_slots(items in arb_slots(9)) {
        let mut record = blank_record();
        record.set_inputs(items.iter().cloned().map(Some)).unwrap();

        prop_assert_eq!(
            totals(record.condensed_inputs().unwrap()),
            totals(record.inputs().unwrap())
        );
    }

    #[test]
    fn round_trip_within_caps(
        inputs in arb_slots(MAX_PATTERN_INPUTS),
        outputs in arb_slots(MAX_PATTERN_OUTPUTS)
    ) {
        let original = encoded(&inputs, &outputs);
        let restored = PatternRecord::from_token(original.token().clone()).unwrap();

        prop_assert!(same_slots(restored.inputs().unwrap(), &inputs));
        prop_assert!(same_slots(restored.outputs().unwrap(), &outputs));
        prop_assert_eq!(&restored, &original);
    }

    #[test]
    fn round_trip_beyond_caps_keeps_prefix(
        inputs in prop::collection::vec(arb_quantity(), 1..=24),
        outputs in prop::collection::vec(arb_quantity(), 1..=8)
    ) {
        let original = encoded(&inputs, &outputs);
        let restored = PatternRecord::from_token(original.token().clone()).unwrap();

        let keep_in = inputs.len().min(MAX_PATTERN_INPUTS);
        let keep_out = outputs.len().min(MAX_PATTERN_OUTPUTS);
        prop_assert!(same_slots(restored.inputs().unwrap(), &inputs[..keep_in]));
        prop_assert!(same_slots(restored.outputs().unwrap(), &outputs[..keep_out]));
    }

    #[test]
    fn identity_ignores_recipe(
        a in arb_slots(4),
        b in arb_slots(4),
        priority in any::<i32>()
    ) {
        let mut left = blank_record();
        left.set_inputs(a.iter().cloned().map(Some)).unwrap();
        left.set_priority(priority);

        let mut right = blank_record();
        right.set_inputs(b.iter().cloned().map(Some)).unwrap();

        prop_assert_eq!(left, right);
    }
}

#[test]
fn totals_helper_sums_duplicates() {
    let items = [qty("minecraft:a", 1), qty("minecraft:a", 2)];

    assert_eq!(totals(&items), HashMap::from([("minecraft:a".to_string(), 3)]));
}
