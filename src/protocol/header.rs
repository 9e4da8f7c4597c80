//! Plugwise frame header
//!
//! The header is the type code, followed by the sequence number on frames
//! the Stick sends. Host requests carry no sequence number; the Stick assigns
//! one and echoes it in its acknowledgement.

use super::{Error, MessageType, Result, SEQUENCE_WIDTH, TYPE_WIDTH, hex};

/// Plugwise frame header
///
/// # Wire Format
///
/// ```text
/// +-----------+---------------+--------------------+-----------+
/// | type (4)  | sequence (4)? | payload (grammar)  | crc (4)   |
/// +-----------+---------------+--------------------+-----------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    message_type: MessageType,
    sequence: Option<u16>,
}

impl FrameHeader {
    /// Create a new frame header
    #[must_use]
    pub const fn new(message_type: MessageType, sequence: Option<u16>) -> Self {
        Self {
            message_type,
            sequence,
        }
    }

    /// Get message type
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Get sequence number
    #[must_use]
    pub const fn sequence(&self) -> Option<u16> {
        self.sequence
    }

    /// Rendered width in hex digits
    #[must_use]
    pub const fn width(&self) -> usize {
        match self.sequence {
            Some(_) => TYPE_WIDTH + SEQUENCE_WIDTH,
            None => TYPE_WIDTH,
        }
    }

    /// Append type code and sequence number to `out`
    pub fn write(&self, out: &mut String) -> Result<()> {
        hex::write_unsigned(out, u64::from(self.message_type.code()), TYPE_WIDTH)?;
        if let Some(sequence) = self.sequence {
            hex::write_unsigned(out, u64::from(sequence), SEQUENCE_WIDTH)?;
        }
        Ok(())
    }

    /// Split a frame body (checksum already removed) into header and payload.
    ///
    /// Frames sent by the Stick always carry a sequence number. For host
    /// frames the body carries none when its remaining length is one the
    /// payload grammar accepts; otherwise the first four digits after the
    /// type code are the sequence number.
    pub fn split(body: &str) -> Result<(Self, &str)> {
        if !body.is_ascii() {
            return Err(Error::malformed(body));
        }
        if body.len() < TYPE_WIDTH {
            return Err(Error::FrameTooShort {
                needed: TYPE_WIDTH,
                got: body.len(),
            });
        }
        let (code, rest) = body.split_at(TYPE_WIDTH);
        let message_type = MessageType::from_code(code)?;

        if message_type.is_inbound() {
            if rest.len() < SEQUENCE_WIDTH {
                return Err(Error::FrameTooShort {
                    needed: TYPE_WIDTH + SEQUENCE_WIDTH,
                    got: body.len(),
                });
            }
        } else if message_type.grammar().accepts_len(rest.len()) || rest.len() < SEQUENCE_WIDTH {
            return Ok((Self::new(message_type, None), rest));
        }

        let (sequence, payload) = rest.split_at(SEQUENCE_WIDTH);
        let sequence = hex::decode_unsigned(sequence)
            .ok()
            .and_then(|value| u16::try_from(value).ok())
            .ok_or_else(|| Error::malformed(sequence))?;
        Ok((Self::new(message_type, Some(sequence)), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_sequence() {
        let header = FrameHeader::new(MessageType::NetworkStatusRequest, None);
        let mut out = String::new();
        header.write(&mut out).unwrap();
        assert_eq!(out, "000A");
        assert_eq!(header.width(), 4);
    }

    #[test]
    fn test_header_with_sequence() {
        let header = FrameHeader::new(MessageType::PowerInformationResponse, Some(0x0A3F));
        let mut out = String::new();
        header.write(&mut out).unwrap();
        assert_eq!(out, "00130A3F");
        assert_eq!(header.width(), 8);
    }

    #[test]
    fn test_split_detects_sequence() {
        let (header, payload) = FrameHeader::split("000D0123456789ABCDEF").unwrap();
        assert_eq!(header, FrameHeader::new(MessageType::PingRequest, None));
        assert_eq!(payload, "0123456789ABCDEF");

        let (header, payload) = FrameHeader::split("000D00FF0123456789ABCDEF").unwrap();
        assert_eq!(header.sequence(), Some(0x00FF));
        assert_eq!(payload, "0123456789ABCDEF");

        let (header, payload) = FrameHeader::split("000A").unwrap();
        assert_eq!(header.sequence(), None);
        assert_eq!(payload, "");

        let (header, payload) = FrameHeader::split("000A0001").unwrap();
        assert_eq!(header.sequence(), Some(1));
        assert_eq!(payload, "");
    }

    #[test]
    fn test_split_stick_frames_always_sequenced() {
        // Payload is four digits short of the grammar
        let (header, payload) =
            FrameHeader::split("001300AB0123456789ABCDEF000100020000000300000004").unwrap();
        assert_eq!(header.message_type(), MessageType::PowerInformationResponse);
        assert_eq!(header.sequence(), Some(0x00AB));
        assert_eq!(payload, "0123456789ABCDEF000100020000000300000004");

        assert!(matches!(
            FrameHeader::split("000000C"),
            Err(Error::FrameTooShort { needed: 8, .. })
        ));
    }

    #[test]
    fn test_split_unknown_type() {
        assert!(matches!(
            FrameHeader::split("FFFF0001"),
            Err(Error::UnknownMessageType { .. })
        ));
    }

    #[test]
    fn test_split_malformed_sequence() {
        assert!(matches!(
            FrameHeader::split("000DZZZZ0123456789ABCDEF"),
            Err(Error::MalformedHex { .. })
        ));
    }
}
