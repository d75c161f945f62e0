use crate::{
    item::{ItemId, ItemStack},
    tag::TagCompound,
};
use std::hash::{Hash, Hasher};

// Persisted field names for one quantity entry.
const FIELD_ID: &str = "id";
const FIELD_DAMAGE: &str = "Damage";
const FIELD_COUNT: &str = "Cnt";
const FIELD_TAG: &str = "tag";

///
/// ItemQuantity
///
/// An amount of one item variant.
///
/// Equality and hashing cover the variant only (item, damage, tag) and
/// never the count, so quantities of the same variant collide in maps.
/// Use [`Self::eq_with_count`] when the amount matters.
///

#[derive(Clone, Debug)]
pub struct ItemQuantity {
    item: ItemId,
    damage: u16,
    tag: Option<TagCompound>,
    count: i64,
}

impl ItemQuantity {
    pub fn new(item: impl Into<ItemId>, count: i64) -> Self {
        Self {
            item: item.into(),
            damage: 0,
            tag: None,
            count,
        }
    }

    #[must_use]
    pub const fn with_damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: TagCompound) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Derive a quantity from a token; `None` for an empty token.
    #[must_use]
    pub fn from_item_stack(stack: &ItemStack) -> Option<Self> {
        if stack.is_empty() {
            return None;
        }

        Some(Self {
            item: stack.item().clone(),
            damage: stack.damage(),
            tag: stack.tag().cloned(),
            count: i64::from(stack.count()),
        })
    }

    /// Materialize a token; counts outside `u32` are clamped.
    #[must_use]
    pub fn to_item_stack(&self) -> ItemStack {
        let count = u32::try_from(self.count.max(0)).unwrap_or(u32::MAX);
        let stack = ItemStack::new(self.item.clone(), count).with_damage(self.damage);

        match &self.tag {
            Some(tag) => stack.with_tag(tag.clone()),
            None => stack,
        }
    }

    #[must_use]
    pub const fn item(&self) -> &ItemId {
        &self.item
    }

    #[must_use]
    pub const fn damage(&self) -> u16 {
        self.damage
    }

    #[must_use]
    pub const fn tag(&self) -> Option<&TagCompound> {
        self.tag.as_ref()
    }

    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    pub const fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// Duplicate, count included.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Add `other`'s count into this one.
    ///
    /// `other` must be the same variant; the count saturates rather than wraps.
    pub fn add(&mut self, other: &Self) {
        debug_assert!(*self == *other, "adding quantities of different variants");
        self.count = self.count.saturating_add(other.count);
    }

    /// Variant equality plus count equality.
    #[must_use]
    pub fn eq_with_count(&self, other: &Self) -> bool {
        self == other && self.count == other.count
    }

    ///
    /// TAG ENCODING
    ///

    #[must_use]
    pub fn write_to_tag(&self) -> TagCompound {
        let mut out = TagCompound::new();
        out.insert(FIELD_ID, self.item.as_str());
        out.insert(FIELD_DAMAGE, self.damage.cast_signed());
        out.insert(FIELD_COUNT, self.count);
        if let Some(tag) = &self.tag {
            out.insert(FIELD_TAG, tag.clone());
        }

        out
    }

    /// Read one entry written by [`Self::write_to_tag`].
    ///
    /// Yields `None` when the entry names no item. A missing count reads as
    /// zero and is left for the caller to judge.
    #[must_use]
    pub fn from_tag(tag: &TagCompound) -> Option<Self> {
        let item = ItemId::new(tag.get_string(FIELD_ID)?);
        if item.is_empty() {
            return None;
        }

        Some(Self {
            item,
            damage: tag.get_short(FIELD_DAMAGE).unwrap_or(0).cast_unsigned(),
            tag: tag.get_compound(FIELD_TAG).cloned(),
            count: tag.get_long(FIELD_COUNT).unwrap_or(0),
        })
    }
}

impl PartialEq for ItemQuantity {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item && self.damage == other.damage && self.tag == other.tag
    }
}

impl Eq for ItemQuantity {}

impl Hash for ItemQuantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        self.damage.hash(state);
        self.tag.hash(state);
    }
}
