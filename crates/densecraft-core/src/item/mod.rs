//! Item model: tokens (`ItemStack`) and count-carrying item references
//! (`ItemQuantity`).

mod quantity;
mod stack;

#[cfg(test)]
mod tests;

use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

// re-exports
pub use quantity::ItemQuantity;
pub use stack::ItemStack;

///
/// ItemId
///
/// Namespaced item identifier, e.g. `minecraft:stone`.
/// The empty string and `minecraft:air` both denote "no item".
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub const AIR: &'static str = "minecraft:air";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the "no item" identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty() || self.0 == Self::AIR
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
