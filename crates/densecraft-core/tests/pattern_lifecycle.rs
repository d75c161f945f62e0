use densecraft_core::{
    MAX_PATTERN_INPUTS,
    error::PatternError,
    item::{ItemQuantity, ItemStack},
    obs::{metrics_report, metrics_reset_all},
    pattern::{IngestState, PatternRecord, SlotRejection},
    traits::{CraftingGrid, CraftingPattern},
};
use std::collections::HashSet;

const PATTERN_ITEM: &str = "densecraft:dense_pattern";

fn some(item: &str, count: i64) -> Option<ItemQuantity> {
    Some(ItemQuantity::new(item, count))
}

#[test]
fn author_store_and_restore_a_pattern() {
    metrics_reset_all();

    let mut authored = PatternRecord::new(ItemStack::new(PATTERN_ITEM, 1)).unwrap();
    assert_eq!(authored.state(), IngestState::Unset);

    authored
        .set_inputs([
            some("minecraft:iron_ingot", 1),
            some("minecraft:iron_ingot", 1),
            some("minecraft:redstone", 4),
            some("minecraft:iron_ingot", 1),
        ])
        .unwrap();
    authored.set_outputs([some("minecraft:piston", 2)]).unwrap();
    authored.set_priority(5);

    let bytes = authored.encode().unwrap().to_bytes().unwrap();

    let restored = PatternRecord::from_token(ItemStack::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(restored, authored);
    assert_eq!(restored.priority(), 0, "priority is not persisted");
    assert_eq!(restored.inputs().unwrap().len(), 4);

    let iron = restored
        .condensed_inputs()
        .unwrap()
        .iter()
        .find(|q| q.item().as_str() == "minecraft:iron_ingot")
        .unwrap();
    assert_eq!(iron.count(), 3);

    let ops = metrics_report().ops;
    assert_eq!(ops.encodes, 1);
    assert_eq!(ops.decodes_complete, 1);
}

#[test]
fn host_deduplicates_patterns_by_token() {
    let build = |output: &str| {
        let mut record = PatternRecord::new(ItemStack::new(PATTERN_ITEM, 1)).unwrap();
        record.set_inputs([some("minecraft:stone", 1)]).unwrap();
        record.set_outputs([some(output, 1)]).unwrap();
        record
    };

    let patterns: HashSet<PatternRecord> = [build("minecraft:a"), build("minecraft:b")]
        .into_iter()
        .collect();
    assert_eq!(patterns.len(), 1);

    let mut a = build("minecraft:a");
    let mut b = build("minecraft:b");
    a.encode().unwrap();
    b.encode().unwrap();
    assert_ne!(a, b, "encoded payloads give distinct identities");
}

#[test]
fn host_schedules_by_priority() {
    let mut records: Vec<PatternRecord> = (0u16..4)
        .map(|damage| {
            let token = ItemStack::new(PATTERN_ITEM, 1).with_damage(damage);
            let mut record = PatternRecord::new(token).unwrap();
            record.set_priority(i32::from(damage) * 10);
            record
        })
        .collect();

    PatternRecord::sort_by_priority(&mut records);

    let priorities: Vec<i32> = records.iter().map(PatternRecord::priority).collect();
    assert_eq!(priorities, vec![30, 20, 10, 0]);
}

#[test]
fn oversized_recipe_is_truncated_on_restore() {
    let mut record = PatternRecord::new(ItemStack::new(PATTERN_ITEM, 1)).unwrap();
    record
        .set_inputs((0..12).map(|i| some(&format!("minecraft:item_{i}"), 1)))
        .unwrap();
    record.set_outputs([some("minecraft:out", 1)]).unwrap();

    let token = record.encode().unwrap().clone();
    let restored = PatternRecord::from_token(token).unwrap();

    let restored_ids: Vec<&str> = restored
        .inputs()
        .unwrap()
        .iter()
        .map(|q| q.item().as_str())
        .collect();
    let expected: Vec<String> = (0..MAX_PATTERN_INPUTS)
        .map(|i| format!("minecraft:item_{i}"))
        .collect();
    assert_eq!(restored_ids, expected);
}

#[test]
fn misuse_surfaces_as_errors() {
    assert!(matches!(
        PatternRecord::new(ItemStack::new(PATTERN_ITEM, 0)),
        Err(PatternError::InvalidToken)
    ));

    let mut record = PatternRecord::new(ItemStack::new(PATTERN_ITEM, 1)).unwrap();
    assert_eq!(
        record.set_inputs([some("minecraft:a", 1), None]),
        Err(SlotRejection::MissingEntry { index: 1 })
    );
    assert!(record.encode().is_err());
    assert!(record.output(&CraftingGrid::new(3, 3).unwrap()).is_err());
}
