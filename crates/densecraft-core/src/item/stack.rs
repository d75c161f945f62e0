use crate::{
    MAX_TOKEN_BYTES,
    item::ItemId,
    serialize::{SerializeError, deserialize_bounded, serialize},
    tag::TagCompound,
};
use serde::{Deserialize, Serialize};

///
/// ItemStack
///
/// Physical token: an item, a count, metadata, and a replaceable tag payload.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ItemStack {
    item: ItemId,
    count: u32,
    damage: u16,
    tag: Option<TagCompound>,
}

impl ItemStack {
    pub fn new(item: impl Into<ItemId>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
            damage: 0,
            tag: None,
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

    #[must_use]
    pub const fn item(&self) -> &ItemId {
        &self.item
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
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
    pub const fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    /// Replace the payload wholesale.
    pub fn set_tag(&mut self, tag: TagCompound) {
        self.tag = Some(tag);
    }

    pub fn clear_tag(&mut self) -> Option<TagCompound> {
        self.tag.take()
    }

    /// True for the "no item" identifier or a zero count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item.is_empty()
    }

    ///
    /// PERSISTENCE
    ///

    /// Encode the whole token, payload included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        serialize(self)
    }

    /// Decode a token produced by [`Self::to_bytes`], bounded by [`MAX_TOKEN_BYTES`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializeError> {
        deserialize_bounded(bytes, MAX_TOKEN_BYTES)
    }
}
