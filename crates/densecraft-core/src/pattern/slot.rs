use crate::item::ItemQuantity;
use std::{collections::HashMap, fmt};
use thiserror::Error as ThisError;

///
/// SlotSide
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SlotSide {
    Inputs,
    Outputs,
}

impl SlotSide {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inputs => "inputs",
            Self::Outputs => "outputs",
        }
    }
}

impl fmt::Display for SlotSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// SlotRejection
///
/// Why a slot collection was refused. The record is left untouched and
/// the caller may retry with corrected slots.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum SlotRejection {
    #[error("slot {index} is empty")]
    MissingEntry { index: usize },

    #[error("slot {index} names no item")]
    EmptyItem { index: usize },

    #[error("slot {index} holds a non-positive quantity")]
    EmptyQuantity { index: usize },

    #[error("no slots to condense")]
    Empty,
}

///
/// SlotSet
///
/// Raw slots and their condensed view, always stored together.
///

#[derive(Clone, Debug)]
pub(crate) struct SlotSet {
    pub(crate) raw: Vec<ItemQuantity>,
    pub(crate) condensed: Vec<ItemQuantity>,
}

impl SlotSet {
    /// Validate slots and compute the condensed view.
    ///
    /// Missing entries are checked across the whole collection before any
    /// quantity is inspected. Every stored entry names an item and carries
    /// a positive count, so it reads back from a payload unchanged.
    pub(crate) fn ingest<I>(slots: I) -> Result<Self, SlotRejection>
    where
        I: IntoIterator<Item = Option<ItemQuantity>>,
    {
        let slots: Vec<Option<ItemQuantity>> = slots.into_iter().collect();

        if let Some(index) = slots.iter().position(Option::is_none) {
            return Err(SlotRejection::MissingEntry { index });
        }
        let raw: Vec<ItemQuantity> = slots.into_iter().flatten().collect();

        for (index, item) in raw.iter().enumerate() {
            if item.item().is_empty() {
                return Err(SlotRejection::EmptyItem { index });
            }
            if item.count() <= 0 {
                return Err(SlotRejection::EmptyQuantity { index });
            }
        }

        let condensed = condense(&raw);
        if condensed.is_empty() {
            return Err(SlotRejection::Empty);
        }

        Ok(Self { raw, condensed })
    }
}

/// Merge quantities of the same variant, summing their counts.
///
/// The result is a multiset: consumers must not depend on its order.
/// Inputs are never mutated; each variant's accumulator starts as a copy
/// of its first occurrence.
#[must_use]
pub fn condense(items: &[ItemQuantity]) -> Vec<ItemQuantity> {
    let mut positions: HashMap<&ItemQuantity, usize> = HashMap::with_capacity(items.len());
    let mut out: Vec<ItemQuantity> = Vec::with_capacity(items.len());

    for item in items {
        if let Some(&pos) = positions.get(item) {
            out[pos].add(item);
        } else {
            positions.insert(item, out.len());
            out.push(item.copy());
        }
    }

    out
}
