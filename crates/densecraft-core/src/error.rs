use crate::{
    pattern::{SlotRejection, SlotSide},
    serialize::SerializeError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// PatternError
///
/// Fatal failures of a pattern operation.
/// Local slot validation outcomes are reported separately as [`SlotRejection`].
///

#[derive(Debug, ThisError)]
pub enum PatternError {
    #[error("pattern token does not resolve to an item identity")]
    InvalidToken,

    #[error("pattern is not initialized: {side} unavailable")]
    Uninitialized { side: SlotSide },

    #[error("not a crafting recipe: {operation} is unsupported")]
    NotSupported { operation: &'static str },

    #[error("pattern token carries no payload")]
    MissingPayload,

    #[error("pattern payload decode incomplete: {side} rejected ({rejection})")]
    DecodeIncomplete {
        side: SlotSide,
        rejection: SlotRejection,
    },

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

impl PatternError {
    pub(crate) const fn uninitialized(side: SlotSide) -> Self {
        Self::Uninitialized { side }
    }

    pub(crate) const fn not_supported(operation: &'static str) -> Self {
        Self::NotSupported { operation }
    }

    /// Stable classification independent of message text.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidToken => ErrorClass::InvalidInput,
            Self::Uninitialized { .. } => ErrorClass::InvariantViolation,
            Self::NotSupported { .. } => ErrorClass::Unsupported,
            Self::MissingPayload | Self::DecodeIncomplete { .. } => ErrorClass::Corruption,
            Self::Serialize(_) => ErrorClass::Internal,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::InvalidToken => ErrorOrigin::Token,
            Self::Uninitialized { .. } | Self::NotSupported { .. } => ErrorOrigin::Pattern,
            Self::MissingPayload | Self::DecodeIncomplete { .. } => ErrorOrigin::Payload,
            Self::Serialize(_) => ErrorOrigin::Serialize,
        }
    }

    /// True when the record that produced this error must be discarded.
    #[must_use]
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::MissingPayload | Self::DecodeIncomplete { .. })
    }
}

///
/// InternalError
///
/// Flattened error shape for host boundaries that only carry
/// class, origin, and a message.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<PatternError> for InternalError {
    fn from(err: PatternError) -> Self {
        Self::new(err.class(), err.origin(), err.to_string())
    }
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        PatternError::from(err).into()
    }
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Corruption,
    Internal,
    InvalidInput,
    InvariantViolation,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corruption => "corruption",
            Self::Internal => "internal",
            Self::InvalidInput => "invalid_input",
            Self::InvariantViolation => "invariant_violation",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Payload,
    Pattern,
    Serialize,
    Token,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Payload => "payload",
            Self::Pattern => "pattern",
            Self::Serialize => "serialize",
            Self::Token => "token",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
