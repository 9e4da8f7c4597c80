//! Plugwise Stick protocol - hex frame codec for Plugwise Circle, Circle+,
//! Scan, Sense and Switch nodes
//!
//! This library encodes and decodes the ASCII hex frames exchanged with a
//! Plugwise USB Stick. It covers the message registry, the fixed-width payload
//! grammar of every type, and the CRC-16 frame checksum. Serial port handling
//! and request/response correlation are left to the caller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plugwise::messages::PowerChangeRequest;
//! use plugwise::{MacAddress, Message};
//!
//! let mac: MacAddress = "000D6F0000B1B64B".parse()?;
//!
//! // Switch a Circle relay on
//! let msg = Message::new(PowerChangeRequest { mac, power_state: true });
//! let frame = msg.to_hex_string()?;
//!
//! // Decode a frame received from the Stick
//! let decoded = Message::decode(&frame)?;
//! assert_eq!(decoded.mac(), Some(mac));
//! # Ok::<(), plugwise::Error>(())
//! ```
//!
//! # Features
//!
//! - **Typed payloads** - one struct per message type, dispatched by [`Body`]
//! - **Table-driven grammars** - every type validates its payload width up front
//! - **Built-in checksums** - CRC-16 over the frame text
//! - **`serde`** - optional serialization of decoded messages
//! - **`debug-tools`** - annotated field-by-field frame dumps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    Body, Direction, Energy, Error, FrameHeader, MacAddress, Message, MessageType, Payload,
    Result, decode, encode, messages,
};
