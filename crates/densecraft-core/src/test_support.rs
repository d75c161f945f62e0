//! Fixture builders shared by unit tests.

use crate::{
    item::{ItemQuantity, ItemStack},
    pattern::PatternRecord,
};
use std::{
    collections::{HashMap, hash_map::DefaultHasher},
    hash::{Hash, Hasher},
};

pub(crate) const PATTERN_ITEM: &str = "densecraft:dense_pattern";

pub(crate) fn qty(item: &str, count: i64) -> ItemQuantity {
    ItemQuantity::new(item, count)
}

pub(crate) fn slots(items: &[(&str, i64)]) -> Vec<Option<ItemQuantity>> {
    items.iter().map(|(item, count)| Some(qty(item, *count))).collect()
}

pub(crate) fn no_slots() -> Vec<Option<ItemQuantity>> {
    Vec::new()
}

pub(crate) fn token() -> ItemStack {
    ItemStack::new(PATTERN_ITEM, 1)
}

pub(crate) fn blank_record() -> PatternRecord {
    PatternRecord::new(token()).expect("pattern token is non-empty")
}

/// A record with `inputs` and `outputs` already ingested.
pub(crate) fn record(inputs: &[(&str, i64)], outputs: &[(&str, i64)]) -> PatternRecord {
    let mut record = blank_record();
    record.set_inputs(slots(inputs)).expect("fixture inputs are valid");
    record.set_outputs(slots(outputs)).expect("fixture outputs are valid");
    record
}

pub(crate) fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Per-item totals; condensed collections compare as multisets through this.
pub(crate) fn totals(items: &[ItemQuantity]) -> HashMap<String, i64> {
    let mut out = HashMap::new();
    for item in items {
        *out.entry(item.item().to_string()).or_insert(0) += item.count();
    }

    out
}
