//! Frame checksum
//!
//! CRC-16 with polynomial `0x1021`, zero initial register and no final XOR,
//! computed over the ASCII characters of the frame rather than the decoded
//! bytes.

use super::{CHECKSUM_WIDTH, Error, Result};

const POLYNOMIAL: u16 = 0x1021;

/// CRC-16 over raw bytes, MSB first
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;

    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

/// Checksum of a frame prefix as 4 upper-case hex digits
#[must_use]
pub fn compute(frame: &str) -> String {
    format!("{:04X}", crc16(frame.as_bytes()))
}

/// Verify the trailing checksum of a complete frame
pub fn verify(frame: &str) -> Result<()> {
    if frame.len() < CHECKSUM_WIDTH || !frame.is_char_boundary(frame.len() - CHECKSUM_WIDTH) {
        return Err(Error::FrameTooShort {
            needed: CHECKSUM_WIDTH,
            got: frame.len(),
        });
    }
    let (body, found) = frame.split_at(frame.len() - CHECKSUM_WIDTH);
    let expected = compute(body);
    if !expected.eq_ignore_ascii_case(found) {
        return Err(Error::ChecksumMismatch {
            expected,
            found: found.to_owned(),
        });
    }
    Ok(())
}
