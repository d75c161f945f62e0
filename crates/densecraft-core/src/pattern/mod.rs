//! Dense crafting patterns.
//!
//! A `PatternRecord` wraps a pattern token and holds a validated
//! many-to-many conversion: raw input and output slots, their condensed
//! views, and a scheduling priority. Identity comes from the token alone.

mod codec;
mod contract;
mod slot;

#[cfg(test)]
mod tests;

use crate::{
    MAX_PATTERN_INPUTS, MAX_PATTERN_OUTPUTS,
    error::PatternError,
    item::{ItemQuantity, ItemStack},
    obs::{PatternEvent, sink},
};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

// re-exports
pub use codec::{FIELD_INPUTS, FIELD_OUTPUTS};
pub use slot::{SlotRejection, SlotSide, condense};

pub(crate) use slot::SlotSet;

///
/// DecodeLimits
///
/// Read-side caps applied when restoring slots from a token payload.
/// Longer lists are truncated, never rejected. Writes are not capped.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeLimits {
    pub max_inputs: usize,
    pub max_outputs: usize,
}

impl DecodeLimits {
    #[must_use]
    pub const fn new(max_inputs: usize, max_outputs: usize) -> Self {
        Self {
            max_inputs,
            max_outputs,
        }
    }

    #[must_use]
    pub const fn max_for(self, side: SlotSide) -> usize {
        match side {
            SlotSide::Inputs => self.max_inputs,
            SlotSide::Outputs => self.max_outputs,
        }
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::new(MAX_PATTERN_INPUTS, MAX_PATTERN_OUTPUTS)
    }
}

///
/// IngestState
///
/// Which slot sides have been ingested.
/// `InputsOnly` is also what a decode leaves behind when outputs fail;
/// such a record must be discarded.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IngestState {
    Unset,
    InputsOnly,
    OutputsOnly,
    Complete,
}

///
/// PatternRecord
///
/// Equality and hashing use the token-derived identity key only; slots
/// and priority never participate.
///

#[derive(Clone, Debug)]
pub struct PatternRecord {
    token: ItemStack,
    identity: ItemQuantity,
    priority: i32,
    inputs: Option<SlotSet>,
    outputs: Option<SlotSet>,
}

impl PatternRecord {
    /// Wrap a token. Fails with `InvalidToken` if the token has no item identity.
    pub fn new(token: ItemStack) -> Result<Self, PatternError> {
        let identity = derive_identity(&token)?;

        Ok(Self {
            token,
            identity,
            priority: 0,
            inputs: None,
            outputs: None,
        })
    }

    /// Wrap a token and restore its persisted slots.
    ///
    /// A record whose decode fails is dropped here, so a partially
    /// restored record never reaches the caller.
    pub fn from_token(token: ItemStack) -> Result<Self, PatternError> {
        Self::from_token_with(token, &DecodeLimits::default())
    }

    pub fn from_token_with(token: ItemStack, limits: &DecodeLimits) -> Result<Self, PatternError> {
        let mut record = Self::new(token)?;
        record.decode_with(limits)?;

        Ok(record)
    }

    ///
    /// IDENTITY
    ///

    #[must_use]
    pub const fn token(&self) -> &ItemStack {
        &self.token
    }

    #[must_use]
    pub fn into_token(self) -> ItemStack {
        self.token
    }

    #[must_use]
    pub const fn identity(&self) -> &ItemQuantity {
        &self.identity
    }

    // Only called at construction and right after the payload is replaced.
    fn refresh_identity(&mut self) -> Result<(), PatternError> {
        self.identity = derive_identity(&self.token)?;

        Ok(())
    }

    ///
    /// PRIORITY
    ///

    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    pub const fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Higher priority sorts first.
    #[must_use]
    pub fn compare_priority(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }

    /// Stable sort, highest priority first.
    pub fn sort_by_priority(records: &mut [Self]) {
        records.sort_by(Self::compare_priority);
    }

    ///
    /// INGESTION
    ///

    /// Validate and store the input slots.
    ///
    /// On rejection nothing changes and the call may be retried.
    pub fn set_inputs<I>(&mut self, slots: I) -> Result<(), SlotRejection>
    where
        I: IntoIterator<Item = Option<ItemQuantity>>,
    {
        self.inputs = Some(ingest(SlotSide::Inputs, slots)?);

        Ok(())
    }

    /// Validate and store the output slots.
    ///
    /// On rejection nothing changes and the call may be retried.
    pub fn set_outputs<I>(&mut self, slots: I) -> Result<(), SlotRejection>
    where
        I: IntoIterator<Item = Option<ItemQuantity>>,
    {
        self.outputs = Some(ingest(SlotSide::Outputs, slots)?);

        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> IngestState {
        match (&self.inputs, &self.outputs) {
            (None, None) => IngestState::Unset,
            (Some(_), None) => IngestState::InputsOnly,
            (None, Some(_)) => IngestState::OutputsOnly,
            (Some(_), Some(_)) => IngestState::Complete,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state(), IngestState::Complete)
    }

    ///
    /// ACCESSORS
    ///

    pub fn inputs(&self) -> Result<&[ItemQuantity], PatternError> {
        Ok(&self.slot_set(SlotSide::Inputs)?.raw)
    }

    pub fn condensed_inputs(&self) -> Result<&[ItemQuantity], PatternError> {
        Ok(&self.slot_set(SlotSide::Inputs)?.condensed)
    }

    pub fn outputs(&self) -> Result<&[ItemQuantity], PatternError> {
        Ok(&self.slot_set(SlotSide::Outputs)?.raw)
    }

    pub fn condensed_outputs(&self) -> Result<&[ItemQuantity], PatternError> {
        Ok(&self.slot_set(SlotSide::Outputs)?.condensed)
    }

    fn slot_set(&self, side: SlotSide) -> Result<&SlotSet, PatternError> {
        let set = match side {
            SlotSide::Inputs => self.inputs.as_ref(),
            SlotSide::Outputs => self.outputs.as_ref(),
        };

        set.ok_or(PatternError::uninitialized(side))
    }
}

impl PartialEq for PatternRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for PatternRecord {}

impl Hash for PatternRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

// Identity key derivation; an empty token has none.
fn derive_identity(token: &ItemStack) -> Result<ItemQuantity, PatternError> {
    ItemQuantity::from_item_stack(token).ok_or(PatternError::InvalidToken)
}

// Validate one side and report the outcome to the metrics sink.
fn ingest<I>(side: SlotSide, slots: I) -> Result<SlotSet, SlotRejection>
where
    I: IntoIterator<Item = Option<ItemQuantity>>,
{
    let result = SlotSet::ingest(slots);
    sink::record(PatternEvent::Ingest {
        side,
        accepted: result.is_ok(),
    });

    result
}
