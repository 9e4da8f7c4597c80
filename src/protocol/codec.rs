//! Plugwise frame codec (encode/decode)
//!
//! This module turns a [`Message`] into the hex text handed to the Stick and
//! back. Physical delimiters around the frame belong to the transport.

use tracing::{debug, instrument, trace};

use super::{
    CHECKSUM_WIDTH, Error, FrameHeader, MIN_FRAME_LEN, Message, MessageType, Result, checksum,
    messages::Body,
};

/// Encode a message to frame text
///
/// # Format
///
/// ```text
/// [TYPE (4)] [SEQUENCE (4), optional] [PAYLOAD (grammar)] [CRC (4)]
/// ```
///
/// Messages the Stick sends must carry a sequence number, since decoding
/// always reads one for them.
pub fn encode(message: &Message) -> Result<String> {
    let header = message.header();
    if header.message_type().is_inbound() && header.sequence().is_none() {
        return Err(Error::MissingSequence {
            message_type: header.message_type(),
        });
    }
    let payload = message.body().to_payload()?;

    let mut frame = String::with_capacity(header.width() + payload.len() + CHECKSUM_WIDTH);
    header.write(&mut frame)?;
    frame.push_str(&payload);

    // Checksum covers header + payload
    let crc = checksum::compute(&frame);
    frame.push_str(&crc);

    trace!(
        message_type = %header.message_type(),
        sequence = ?header.sequence(),
        len = frame.len(),
        "encoded frame"
    );
    Ok(frame)
}

/// Decode a complete frame
///
/// # Errors
///
/// Returns an error if:
/// - Frame is shorter than a type code plus checksum
/// - Frame has an odd length or non-ASCII characters
/// - Checksum doesn't match
/// - Message type is unknown
/// - Payload doesn't match the grammar of its type
#[instrument(level = "trace", skip_all, fields(len = frame.len()))]
pub fn decode(frame: &str) -> Result<Message> {
    decode_frame(frame).inspect_err(|err| debug!(error = %err, "rejected frame"))
}

fn decode_frame(frame: &str) -> Result<Message> {
    if !frame.is_ascii() {
        return Err(Error::malformed(frame));
    }
    if frame.len() < MIN_FRAME_LEN {
        return Err(Error::FrameTooShort {
            needed: MIN_FRAME_LEN,
            got: frame.len(),
        });
    }
    if frame.len() % 2 != 0 {
        return Err(Error::malformed(frame));
    }

    checksum::verify(frame)?;

    let body = &frame[..frame.len() - CHECKSUM_WIDTH];
    let (header, payload) = FrameHeader::split(body)?;
    decode_payload(header.message_type(), header.sequence(), payload)
}

/// Decode a payload the transport has already split from its frame
///
/// `payload` includes the leading node address for addressed types.
pub fn decode_payload(
    message_type: MessageType,
    sequence: Option<u16>,
    payload: &str,
) -> Result<Message> {
    let body = Body::from_payload(message_type, payload).inspect_err(|err| {
        debug!(%message_type, error = %err, "payload does not match grammar");
    })?;

    trace!(%message_type, ?sequence, "decoded payload");
    Ok(Message::from_parts(sequence, body))
}
