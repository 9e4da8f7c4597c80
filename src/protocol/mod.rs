//! Plugwise protocol core implementation
//!
//! This module provides the hex frame format, message registry, payload
//! grammars, and codec for the Plugwise Stick.

mod checksum;
mod codec;
#[cfg(feature = "debug-tools")]
pub mod debug;
mod energy;
mod error;
pub mod grammar;
mod header;
pub mod hex;
mod mac;
mod message;
pub mod messages;
mod types;

pub use checksum::{compute as checksum, crc16, verify as verify_checksum};
pub use codec::{decode, decode_payload, encode};
pub use energy::{EIGHT_SECONDS, Energy, ONE_HOUR, ONE_SECOND};
pub use error::{Error, Result};
pub use header::FrameHeader;
pub use mac::MacAddress;
pub use message::Message;
pub use messages::{Body, Payload};
pub use types::{Direction, MessageType};

/// Type code width in hex digits
pub const TYPE_WIDTH: usize = 4;

/// Sequence number width in hex digits
pub const SEQUENCE_WIDTH: usize = 4;

/// Node address width in hex digits
pub const MAC_WIDTH: usize = 16;

/// Checksum width in hex digits
pub const CHECKSUM_WIDTH: usize = 4;

/// Minimum frame length (type code + checksum)
pub const MIN_FRAME_LEN: usize = TYPE_WIDTH + CHECKSUM_WIDTH;

/// Raw buffer address of log address 0
pub const LOG_ADDRESS_BASE: u64 = 278_528;

/// Raw buffer address distance between consecutive log addresses
pub const LOG_ADDRESS_STRIDE: u64 = 32;

/// Pulse count scale of the seconds correction field
pub const SECONDS_CORRECTION_DIVISOR: f64 = 46_875.0;
