//! Core runtime for Densecraft: the tagged-data container, the item model,
//! dense pattern records, the host crafting contract, and observability.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod item;
pub mod obs;
pub mod pattern;
pub mod serialize;
pub mod tag;
pub mod traits;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Maximum number of input entries retained when decoding a pattern payload.
///
/// Mirrors the 3x3 conversion grid a dense pattern is authored in.
pub const MAX_PATTERN_INPUTS: usize = 9;

/// Maximum number of output entries retained when decoding a pattern payload.
pub const MAX_PATTERN_OUTPUTS: usize = 3;

/// Upper bound on a persisted token payload, in bytes.
///
/// Applied by `ItemStack::from_bytes`; the format layer itself has no limit.
pub const MAX_TOKEN_BYTES: usize = 64 * 1024;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        item::{ItemId, ItemQuantity, ItemStack},
        pattern::{DecodeLimits, IngestState, PatternRecord},
        tag::{Tag, TagCompound, TagKind, TagList},
        traits::{CraftingGrid, CraftingPattern},
    };
}
