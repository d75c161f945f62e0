use crate::{
    error::PatternError,
    item::{ItemQuantity, ItemStack},
    obs::{DecodeOutcome, PatternEvent, sink},
    pattern::{DecodeLimits, PatternRecord, SlotSide},
    tag::{TagCompound, TagKind, TagList},
};

///
/// Pattern payload codec
///
/// Payload layout on the token:
/// - `Inputs`: compound list, one `ItemQuantity` entry per raw input slot
/// - `Outputs`: compound list, one entry per raw output slot
///
/// Lists are written in full and truncated on read per `DecodeLimits`,
/// so an over-long collection does not survive a round trip intact.
///

pub const FIELD_INPUTS: &str = "Inputs";
pub const FIELD_OUTPUTS: &str = "Outputs";

const fn field_for(side: SlotSide) -> &'static str {
    match side {
        SlotSide::Inputs => FIELD_INPUTS,
        SlotSide::Outputs => FIELD_OUTPUTS,
    }
}

impl PatternRecord {
    /// Write the raw slots into the token payload and return the token.
    ///
    /// Any previous payload is replaced and the identity key is
    /// recomputed from the updated token.
    pub fn encode(&mut self) -> Result<&ItemStack, PatternError> {
        let inputs = self.inputs()?;
        let outputs = self.outputs()?;
        let entries = u64::try_from(inputs.len() + outputs.len()).unwrap_or(u64::MAX);

        let mut payload = TagCompound::new();
        payload.insert(FIELD_INPUTS, write_slot_list(inputs));
        payload.insert(FIELD_OUTPUTS, write_slot_list(outputs));

        self.token.set_tag(payload);
        self.refresh_identity()?;
        sink::record(PatternEvent::Encode { entries });

        Ok(&self.token)
    }

    /// Restore slots from the token payload using the default limits.
    pub fn decode(&mut self) -> Result<(), PatternError> {
        self.decode_with(&DecodeLimits::default())
    }

    /// Restore slots from the token payload.
    ///
    /// Inputs are ingested first and outputs only if inputs succeed. If
    /// outputs fail the record keeps its new inputs and holds no outputs,
    /// whatever it held before; callers must treat any error here as total
    /// and drop the record.
    pub fn decode_with(&mut self, limits: &DecodeLimits) -> Result<(), PatternError> {
        let result = self.decode_payload(limits);

        let outcome = match &result {
            Ok(()) => DecodeOutcome::Complete,
            Err(PatternError::DecodeIncomplete { side, .. }) => DecodeOutcome::Incomplete(*side),
            Err(_) => DecodeOutcome::MissingPayload,
        };
        sink::record(PatternEvent::Decode { outcome });

        result
    }

    fn decode_payload(&mut self, limits: &DecodeLimits) -> Result<(), PatternError> {
        let payload = self.token.tag().ok_or(PatternError::MissingPayload)?;
        let inputs = read_slot_list(payload, SlotSide::Inputs, limits);
        let outputs = read_slot_list(payload, SlotSide::Outputs, limits);

        self.set_inputs(inputs)
            .map_err(|rejection| PatternError::DecodeIncomplete {
                side: SlotSide::Inputs,
                rejection,
            })?;
        if let Err(rejection) = self.set_outputs(outputs) {
            // Outputs from an earlier ingestion must not pair with new inputs.
            self.outputs = None;

            return Err(PatternError::DecodeIncomplete {
                side: SlotSide::Outputs,
                rejection,
            });
        }

        Ok(())
    }
}

fn write_slot_list(items: &[ItemQuantity]) -> TagList {
    TagList::from_compounds(items.iter().map(ItemQuantity::write_to_tag))
}

// Entries that do not name an item come back as `None` and are left for
// ingestion to reject.
fn read_slot_list(
    payload: &TagCompound,
    side: SlotSide,
    limits: &DecodeLimits,
) -> Vec<Option<ItemQuantity>> {
    let list = payload.get_list(field_for(side), TagKind::Compound);
    let len = list.len().min(limits.max_for(side));

    (0..len)
        .map(|i| ItemQuantity::from_tag(list.compound_at(i)))
        .collect()
}
