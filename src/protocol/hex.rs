//! Fixed-width hex primitives
//!
//! Every Plugwise field is a run of upper-case hex digits of a width fixed by
//! the message grammar. The helpers here render and parse those runs.

use std::fmt::Write as _;
use std::time::Duration;

use super::{Error, Result};

/// Unit of a duration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Whole seconds
    Seconds,
    /// Whole minutes
    Minutes,
}

impl TimeUnit {
    const fn seconds(self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
        }
    }
}

/// Largest value representable in `width` hex digits
const fn max_for_width(width: usize) -> u64 {
    if width >= 16 {
        u64::MAX
    } else {
        (1u64 << (width * 4)) - 1
    }
}

/// Append `value` as exactly `width` upper-case hex digits
pub fn write_unsigned(out: &mut String, value: u64, width: usize) -> Result<()> {
    if width == 0 || value > max_for_width(width) {
        return Err(Error::FieldOverflow { value, width });
    }
    // Writing into a String cannot fail
    let _ = write!(out, "{value:0width$X}");
    Ok(())
}

/// Encode `value` as exactly `width` upper-case hex digits
pub fn encode_unsigned(value: u64, width: usize) -> Result<String> {
    let mut out = String::with_capacity(width);
    write_unsigned(&mut out, value, width)?;
    Ok(out)
}

/// Decode a run of hex digits (either case)
pub fn decode_unsigned(hex: &str) -> Result<u64> {
    if hex.is_empty() || hex.len() > 16 || !is_hex(hex) {
        return Err(Error::malformed(hex));
    }
    u64::from_str_radix(hex, 16).map_err(|_| Error::malformed(hex))
}

/// Encode the IEEE-754 bit pattern of `value` as 8 hex digits
#[must_use]
pub fn encode_f32(value: f32) -> String {
    format!("{:08X}", value.to_bits())
}

/// Decode 8 hex digits as an IEEE-754 single precision bit pattern
pub fn decode_f32(hex: &str) -> Result<f32> {
    if hex.len() != 8 {
        return Err(Error::malformed(hex));
    }
    let bits = decode_unsigned(hex)?;
    u32::try_from(bits)
        .map(f32::from_bits)
        .map_err(|_| Error::malformed(hex))
}

/// Encode a duration as a whole number of `unit`s in `width` digits.
///
/// Remainders below one unit are dropped.
pub fn encode_duration(duration: Duration, unit: TimeUnit, width: usize) -> Result<String> {
    encode_unsigned(duration.as_secs() / unit.seconds(), width)
}

/// Decode a duration field expressed in `unit`s
pub fn decode_duration(hex: &str, unit: TimeUnit) -> Result<Duration> {
    let count = decode_unsigned(hex)?;
    count
        .checked_mul(unit.seconds())
        .map(Duration::from_secs)
        .ok_or_else(|| Error::malformed(hex))
}

/// Encode a value below 100 as two BCD digits
pub fn encode_bcd(value: u8) -> Result<String> {
    if value > 99 {
        return Err(Error::FieldOverflow {
            value: u64::from(value),
            width: 2,
        });
    }
    Ok(format!("{value:02}"))
}

/// Decode two BCD digits
pub fn decode_bcd(digits: &str) -> Result<u8> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(digits));
    }
    digits.parse().map_err(|_| Error::malformed(digits))
}

/// True if every character is an ASCII hex digit
#[must_use]
pub fn is_hex(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unsigned_pads() {
        assert_eq!(encode_unsigned(0xA, 4).unwrap(), "000A");
        assert_eq!(encode_unsigned(0, 2).unwrap(), "00");
        assert_eq!(encode_unsigned(0xFFFF_FFFF, 8).unwrap(), "FFFFFFFF");
        assert_eq!(encode_unsigned(u64::MAX, 16).unwrap(), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_encode_unsigned_overflow() {
        let result = encode_unsigned(0x100, 2);
        assert_eq!(
            result,
            Err(Error::FieldOverflow {
                value: 0x100,
                width: 2
            })
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            encode_unsigned(0, 0),
            Err(Error::FieldOverflow { value: 0, width: 0 })
        );
        let mut out = String::new();
        assert!(write_unsigned(&mut out, 0, 0).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_unsigned() {
        assert_eq!(decode_unsigned("00044000").unwrap(), 278_528);
        assert_eq!(decode_unsigned("ff").unwrap(), 255);
        assert!(matches!(decode_unsigned(""), Err(Error::MalformedHex { .. })));
        assert!(matches!(decode_unsigned("0G"), Err(Error::MalformedHex { .. })));
        assert!(matches!(decode_unsigned("+1"), Err(Error::MalformedHex { .. })));
    }

    #[test]
    fn test_f32_bit_exact() {
        assert_eq!(encode_f32(1.0), "3F800000");
        assert_eq!(decode_f32("3F800000").unwrap(), 1.0);
        let nan = f32::from_bits(0x7FC0_0001);
        assert_eq!(decode_f32(&encode_f32(nan)).unwrap().to_bits(), 0x7FC0_0001);
        assert!(decode_f32("3F80").is_err());
    }

    #[test]
    fn test_durations() {
        assert_eq!(
            encode_duration(Duration::from_secs(10), TimeUnit::Seconds, 2).unwrap(),
            "0A"
        );
        assert_eq!(
            encode_duration(Duration::from_secs(3600), TimeUnit::Minutes, 4).unwrap(),
            "003C"
        );
        assert_eq!(
            decode_duration("003C", TimeUnit::Minutes).unwrap(),
            Duration::from_secs(3600)
        );
        assert!(encode_duration(Duration::from_secs(256), TimeUnit::Seconds, 2).is_err());
    }

    #[test]
    fn test_bcd() {
        assert_eq!(encode_bcd(59).unwrap(), "59");
        assert_eq!(decode_bcd("07").unwrap(), 7);
        assert!(decode_bcd("1A").is_err());
        assert!(encode_bcd(100).is_err());
    }
}
