//! Annotated frame dumps for protocol debugging
//!
//! Only built with the `debug-tools` feature.

use std::fmt::Write as _;

use super::{CHECKSUM_WIDTH, Error, FrameHeader, MIN_FRAME_LEN, Result, checksum};

/// Render a frame field by field, one `name = value` line each.
///
/// The frame must pass the same checks as [`super::decode`]; the dump is
/// built from the raw field text, so values appear exactly as on the wire.
pub fn annotate(frame: &str) -> Result<String> {
    if !frame.is_ascii() {
        return Err(Error::malformed(frame));
    }
    if frame.len() < MIN_FRAME_LEN {
        return Err(Error::FrameTooShort {
            needed: MIN_FRAME_LEN,
            got: frame.len(),
        });
    }
    checksum::verify(frame)?;

    let (body, crc) = frame.split_at(frame.len() - CHECKSUM_WIDTH);
    let (header, payload) = FrameHeader::split(body)?;
    let message_type = header.message_type();
    let grammar = message_type.grammar();
    let mut fields = grammar.reader(message_type, payload)?;

    let mut out = String::new();
    let _ = writeln!(out, "type       = {:04X} {message_type:?}", message_type.code());
    if let Some(sequence) = header.sequence() {
        let _ = writeln!(out, "sequence   = {sequence:04X}");
    }
    for field in grammar.fields() {
        if !fields.has_next() {
            break;
        }
        let _ = writeln!(out, "{:<10} = {}", field.name, fields.raw()?);
    }
    let _ = writeln!(out, "crc        = {crc}");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_power_change() {
        let dump = annotate("00170123456789ABCDEF01703A").unwrap();
        assert_eq!(
            dump,
            "type       = 0017 PowerChangeRequest\n\
             mac        = 0123456789ABCDEF\n\
             power_state = 01\n\
             crc        = 703A\n"
        );
    }

    #[test]
    fn test_annotate_rejects_bad_checksum() {
        assert!(matches!(
            annotate("000AB43D"),
            Err(Error::ChecksumMismatch { .. })
        ));
    }
}
