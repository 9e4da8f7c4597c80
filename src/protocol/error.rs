//! Plugwise codec error types

use thiserror::Error;

use super::MessageType;

/// Plugwise protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field is not a valid hex (or BCD) string
    #[error("malformed hex field: {value:?}")]
    MalformedHex {
        /// Offending text
        value: String,
    },

    /// Value does not fit its fixed field width
    #[error("value {value} does not fit in {width} hex digits")]
    FieldOverflow {
        /// Value to encode
        value: u64,
        /// Field width in hex digits
        width: usize,
    },

    /// Payload does not match the fixed grammar of its message type
    #[error("payload of {message_type} does not match [{pattern}]: {payload:?}")]
    PayloadMismatch {
        /// Message type whose grammar was applied
        message_type: MessageType,
        /// Expected grammar, rendered as `name:width` groups
        pattern: String,
        /// Payload as received
        payload: String,
    },

    /// Type code has no registered grammar
    #[error("unknown message type: {code}")]
    UnknownMessageType {
        /// Type code as received
        code: String,
    },

    /// Checksum mismatch
    #[error("checksum mismatch: expected {expected}, got {found}")]
    ChecksumMismatch {
        /// Checksum computed over the frame
        expected: String,
        /// Checksum carried by the frame
        found: String,
    },

    /// Frame too short to hold a type code and checksum
    #[error("frame too short: need {needed} characters, got {got}")]
    FrameTooShort {
        /// Needed length
        needed: usize,
        /// Actual length
        got: usize,
    },

    /// Stick-originated message encoded without its sequence number
    #[error("{message_type} is sent by the Stick and needs a sequence number")]
    MissingSequence {
        /// Message type being encoded
        message_type: MessageType,
    },

    /// Value collides with a marker the wire format reserves
    #[error("{field} value {value} is reserved")]
    ReservedValue {
        /// Field name in the grammar
        field: &'static str,
        /// Rendered value
        value: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(value: &str) -> Self {
        Self::MalformedHex {
            value: value.to_owned(),
        }
    }
}
