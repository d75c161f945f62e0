//! Host crafting-network contract.

use crate::{
    error::PatternError,
    item::{ItemQuantity, ItemStack},
};

///
/// CraftingGrid
///
/// Snapshot of a width x height crafting grid, row-major.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CraftingGrid {
    width: usize,
    height: usize,
    slots: Vec<Option<ItemStack>>,
}

impl CraftingGrid {
    /// An empty grid of the given size; `None` if the slot count overflows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?;

        Some(Self {
            width,
            height,
            slots: vec![None; len],
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Place a stack; returns the stack back if `index` is outside the grid.
    pub fn set(&mut self, index: usize, stack: ItemStack) -> Result<(), ItemStack> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(stack);
                Ok(())
            }
            None => Err(stack),
        }
    }
}

///
/// CraftingPattern
///
/// Read-mostly view a crafting network takes of a pattern.
///

pub trait CraftingPattern {
    /// The token the pattern lives on.
    fn pattern(&self) -> &ItemStack;

    fn priority(&self) -> i32;

    fn set_priority(&mut self, priority: i32);

    /// Whether the pattern is a grid recipe the network may craft directly.
    fn is_craftable(&self) -> bool;

    /// Whether ingredient variants may be substituted.
    fn can_substitute(&self) -> bool;

    fn inputs(&self) -> Result<&[ItemQuantity], PatternError>;

    fn condensed_inputs(&self) -> Result<&[ItemQuantity], PatternError>;

    fn outputs(&self) -> Result<&[ItemQuantity], PatternError>;

    fn condensed_outputs(&self) -> Result<&[ItemQuantity], PatternError>;

    /// Result of crafting the given grid.
    fn output(&self, grid: &CraftingGrid) -> Result<ItemStack, PatternError>;

    /// Whether `stack` may occupy grid slot `slot`.
    fn is_valid_item_for_slot(
        &self,
        slot: usize,
        stack: &ItemStack,
        grid: &CraftingGrid,
    ) -> Result<bool, PatternError>;
}
