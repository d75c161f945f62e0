use crate::{
    error::PatternError,
    item::{ItemQuantity, ItemStack},
    pattern::{PatternRecord, SlotSide},
    traits::{CraftingGrid, CraftingPattern},
};

// Dense patterns are processing patterns: never evaluated against a grid,
// never substituted.
impl CraftingPattern for PatternRecord {
    fn pattern(&self) -> &ItemStack {
        &self.token
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    fn is_craftable(&self) -> bool {
        false
    }

    fn can_substitute(&self) -> bool {
        false
    }

    fn inputs(&self) -> Result<&[ItemQuantity], PatternError> {
        self.slot_set(SlotSide::Inputs).map(|set| set.raw.as_slice())
    }

    fn condensed_inputs(&self) -> Result<&[ItemQuantity], PatternError> {
        self.slot_set(SlotSide::Inputs)
            .map(|set| set.condensed.as_slice())
    }

    fn outputs(&self) -> Result<&[ItemQuantity], PatternError> {
        self.slot_set(SlotSide::Outputs).map(|set| set.raw.as_slice())
    }

    fn condensed_outputs(&self) -> Result<&[ItemQuantity], PatternError> {
        self.slot_set(SlotSide::Outputs)
            .map(|set| set.condensed.as_slice())
    }

    fn output(&self, _grid: &CraftingGrid) -> Result<ItemStack, PatternError> {
        Err(PatternError::not_supported("output"))
    }

    fn is_valid_item_for_slot(
        &self,
        _slot: usize,
        _stack: &ItemStack,
        _grid: &CraftingGrid,
    ) -> Result<bool, PatternError> {
        Err(PatternError::not_supported("is_valid_item_for_slot"))
    }
}
