use crate::{
    item::{ItemId, ItemQuantity, ItemStack},
    tag::TagCompound,
    test_support::{hash_of, qty},
};

fn enchanted() -> TagCompound {
    let mut tag = TagCompound::new();
    tag.insert("ench", 1i32);
    tag
}

#[test]
fn equality_ignores_count() {
    let a = qty("minecraft:stone", 1);
    let b = qty("minecraft:stone", 64);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert!(!a.eq_with_count(&b));
}

#[test]
fn equality_tracks_damage_and_tag() {
    let plain = qty("minecraft:wool", 1);
    let dyed = qty("minecraft:wool", 1).with_damage(14);
    let tagged = qty("minecraft:wool", 1).with_tag(enchanted());

    assert_ne!(plain, dyed);
    assert_ne!(plain, tagged);
    assert_ne!(dyed, tagged);
}

#[test]
fn add_accumulates_and_copy_is_independent() {
    let mut acc = qty("minecraft:iron_ingot", 2);
    let snapshot = acc.copy();
    acc.add(&qty("minecraft:iron_ingot", 3));

    assert_eq!(acc.count(), 5);
    assert_eq!(snapshot.count(), 2);
}

#[test]
fn add_saturates() {
    let mut acc = qty("minecraft:dirt", i64::MAX);
    acc.add(&qty("minecraft:dirt", 10));

    assert_eq!(acc.count(), i64::MAX);
}

#[test]
fn empty_tokens_have_no_quantity() {
    assert!(ItemQuantity::from_item_stack(&ItemStack::new("minecraft:stone", 0)).is_none());
    assert!(ItemQuantity::from_item_stack(&ItemStack::new(ItemId::AIR, 1)).is_none());
    assert!(ItemQuantity::from_item_stack(&ItemStack::new("", 1)).is_none());
}

#[test]
fn token_quantity_carries_tag_and_damage() {
    let stack = ItemStack::new("densecraft:pattern", 1)
        .with_damage(2)
        .with_tag(enchanted());
    let derived = ItemQuantity::from_item_stack(&stack).expect("non-empty token");

    assert_eq!(derived.item().as_str(), "densecraft:pattern");
    assert_eq!(derived.damage(), 2);
    assert_eq!(derived.tag(), Some(&enchanted()));
    assert_eq!(derived.count(), 1);
    assert_eq!(derived.to_item_stack(), stack);
}

#[test]
fn to_item_stack_clamps_count() {
    assert_eq!(qty("minecraft:stone", -4).to_item_stack().count(), 0);
    assert_eq!(
        qty("minecraft:stone", i64::MAX).to_item_stack().count(),
        u32::MAX
    );
}

#[test]
fn tag_entry_keeps_variant_and_count() {
    let original = qty("minecraft:wool", 12)
        .with_damage(u16::MAX)
        .with_tag(enchanted());
    let entry = original.write_to_tag();

    assert_eq!(entry.get_string("id"), Some("minecraft:wool"));
    assert_eq!(entry.get_long("Cnt"), Some(12));

    let decoded = ItemQuantity::from_tag(&entry).expect("valid entry");
    assert!(decoded.eq_with_count(&original));
    assert_eq!(decoded.damage(), u16::MAX);
}

#[test]
fn from_tag_rejects_entries_without_item() {
    assert!(ItemQuantity::from_tag(&TagCompound::new()).is_none());

    let mut air = TagCompound::new();
    air.insert("id", ItemId::AIR);
    air.insert("Cnt", 1i64);
    assert!(ItemQuantity::from_tag(&air).is_none());
}

#[test]
fn from_tag_defaults_missing_count_to_zero() {
    let mut entry = TagCompound::new();
    entry.insert("id", "minecraft:stone");

    let decoded = ItemQuantity::from_tag(&entry).expect("id is present");
    assert_eq!(decoded.count(), 0);
}

#[test]
fn token_bytes_round_trip() {
    let stack = ItemStack::new("densecraft:pattern", 1).with_tag(enchanted());
    let bytes = stack.to_bytes().expect("encode token");

    assert_eq!(ItemStack::from_bytes(&bytes).expect("decode token"), stack);
}

#[test]
fn token_bytes_are_bounded() {
    let oversized = vec![0u8; crate::MAX_TOKEN_BYTES + 1];
    let err = ItemStack::from_bytes(&oversized).expect_err("oversized payload must fail");

    assert_eq!(
        err.kind(),
        crate::serialize::SerializeErrorKind::DeserializeSizeLimitExceeded
    );
}
