//! Plugwise message implementation

use super::{FrameHeader, MacAddress, MessageType, Result, messages::Body};

/// Plugwise message: optional sequence number plus typed payload
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Sequence number assigned by the Stick
    sequence: Option<u16>,
    /// Typed payload
    body: Body,
}

impl Message {
    /// Create a new message without sequence number, as the host sends it
    pub fn new(body: impl Into<Body>) -> Self {
        Self {
            sequence: None,
            body: body.into(),
        }
    }

    /// Create a new message carrying a sequence number
    pub fn with_sequence(body: impl Into<Body>, sequence: u16) -> Self {
        Self {
            sequence: Some(sequence),
            body: body.into(),
        }
    }

    pub(crate) const fn from_parts(sequence: Option<u16>, body: Body) -> Self {
        Self { sequence, body }
    }

    /// Get message type
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.body.message_type()
    }

    /// Get sequence number
    #[must_use]
    pub const fn sequence(&self) -> Option<u16> {
        self.sequence
    }

    /// Set sequence number
    pub fn set_sequence(&mut self, sequence: Option<u16>) {
        self.sequence = sequence;
    }

    /// Node this message addresses or reports from
    #[must_use]
    pub fn mac(&self) -> Option<MacAddress> {
        self.body.mac()
    }

    /// Get payload
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Take payload
    #[must_use]
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Get header
    #[must_use]
    pub const fn header(&self) -> FrameHeader {
        FrameHeader::new(self.message_type(), self.sequence)
    }

    /// Payload text, node address included, without header or checksum
    pub fn payload(&self) -> Result<String> {
        self.body.to_payload()
    }

    /// Encode message to frame text
    pub fn to_hex_string(&self) -> Result<String> {
        super::encode(self)
    }

    /// Decode message from frame text
    pub fn decode(frame: &str) -> Result<Self> {
        super::decode(frame)
    }

    /// Build a message from a payload already split by the transport
    pub fn from_payload(
        message_type: MessageType,
        sequence: Option<u16>,
        payload: &str,
    ) -> Result<Self> {
        super::decode_payload(message_type, sequence, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::{PingRequest, PowerInformationRequest};

    const MAC: MacAddress = MacAddress::new(0x000D_6F00_0099_8877);

    #[test]
    fn test_message_creation() {
        let msg = Message::new(PowerInformationRequest::new(MAC));

        assert_eq!(msg.message_type(), MessageType::PowerInformationRequest);
        assert_eq!(msg.sequence(), None);
        assert_eq!(msg.mac(), Some(MAC));
        assert_eq!(msg.payload().unwrap(), "000D6F0000998877");
    }

    #[test]
    fn test_message_roundtrip() {
        let original = Message::with_sequence(PingRequest::new(MAC), 42);
        let encoded = original.to_hex_string().unwrap();
        let decoded = Message::decode(&encoded).unwrap();

        assert_eq!(decoded.message_type(), original.message_type());
        assert_eq!(decoded.sequence(), Some(42));
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_set_sequence_changes_header() {
        let mut msg = Message::new(PingRequest::new(MAC));
        assert_eq!(msg.header().width(), 4);
        msg.set_sequence(Some(7));
        assert_eq!(msg.header().sequence(), Some(7));
        assert_eq!(msg.header().width(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let original = Message::with_sequence(PingRequest::new(MAC), 3);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"000D6F0000998877\""));
        let decoded: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_from_payload() {
        let msg =
            Message::from_payload(MessageType::PingRequest, None, "000D6F0000998877").unwrap();
        assert_eq!(msg.into_body(), Body::from(PingRequest::new(MAC)));
    }
}
