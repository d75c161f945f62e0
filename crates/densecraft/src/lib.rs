//! ## Crate layout
//! - `core`: tagged-data container, item model, pattern records, host
//!   contract, serialization, and observability.
//!
//! The `prelude` module mirrors the surface a crafting host needs.

pub use densecraft_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use densecraft_core::{MAX_PATTERN_INPUTS, MAX_PATTERN_OUTPUTS, MAX_TOKEN_BYTES};

//
// Errors
//

pub use densecraft_core::{
    error::{ErrorClass, ErrorOrigin, InternalError, PatternError},
    pattern::SlotRejection,
};

///
/// Host Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        item::{ItemId, ItemQuantity, ItemStack},
        pattern::{DecodeLimits, IngestState, PatternRecord, SlotSide},
        tag::{Tag, TagCompound, TagKind, TagList},
        traits::{CraftingGrid, CraftingPattern as _},
    };
}
