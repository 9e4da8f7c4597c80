//! Stick, join and role-call messages

use super::{Payload, mac_only_payload};
use crate::protocol::grammar::{Field, FieldReader, FieldWriter, Grammar};
use crate::protocol::{Error, MacAddress, MessageType, Result};

/// Node address meaning "no node registered"
const EMPTY_MAC: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Acknowledgement code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AckCode {
    /// Request accepted
    Success,
    /// Request rejected
    Error,
    /// Clock set accepted
    ClockAccepted,
    /// Relay switched on
    RelayOn,
    /// Relay switched off
    RelayOff,
    /// Node did not answer in time
    Timeout,
    /// Log interval set accepted
    LogIntervalAccepted,
    /// Code without a known meaning
    Other(u16),
}

impl AckCode {
    /// Decode from the wire value
    #[must_use]
    pub const fn from_u16(code: u16) -> Self {
        match code {
            0x00C1 => Self::Success,
            0x00C2 => Self::Error,
            0x00D7 => Self::ClockAccepted,
            0x00D8 => Self::RelayOn,
            0x00DE => Self::RelayOff,
            0x00E1 => Self::Timeout,
            0x00F8 => Self::LogIntervalAccepted,
            other => Self::Other(other),
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Success => 0x00C1,
            Self::Error => 0x00C2,
            Self::ClockAccepted => 0x00D7,
            Self::RelayOn => 0x00D8,
            Self::RelayOff => 0x00DE,
            Self::Timeout => 0x00E1,
            Self::LogIntervalAccepted => 0x00F8,
            Self::Other(code) => code,
        }
    }
}

/// Stick acknowledgement, addressed when it concerns a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcknowledgementV1 {
    /// Outcome
    pub code: AckCode,
    /// Node the outcome concerns
    pub mac: Option<MacAddress>,
}

impl Payload for AcknowledgementV1 {
    const MESSAGE_TYPE: MessageType = MessageType::AcknowledgementV1;
    const GRAMMAR: &'static Grammar =
        &Grammar::with_optional_tail(&[Field::new("code", 4), Field::mac()], 1);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.number(self.code.as_u16())?;
        if let Some(mac) = self.mac {
            fields.mac(mac)?;
        }
        Ok(())
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        let code = AckCode::from_u16(fields.number()?);
        let mac = if fields.has_next() {
            Some(fields.mac()?)
        } else {
            None
        };
        Ok(Self { code, mac })
    }

    fn mac(&self) -> Option<MacAddress> {
        self.mac
    }
}

mac_only_payload! {
    /// Node asks to join the network
    NodeAvailable
}

/// Accept or reject a node that announced itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAvailableResponse {
    /// Whether the node may join
    pub accepted: bool,
    /// Joining node
    pub mac: MacAddress,
}

impl Payload for NodeAvailableResponse {
    const MESSAGE_TYPE: MessageType = MessageType::NodeAvailableResponse;
    const GRAMMAR: &'static Grammar =
        &Grammar::new(&[Field::new("accepted", 2), Field::new("node_mac", 16)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.flag(self.accepted)?;
        fields.mac(self.mac)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            accepted: fields.flag()?,
            mac: fields.mac()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Reset the mesh network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkResetRequest {
    /// Reset option byte, `00` in every observed capture
    pub option: u8,
}

impl Payload for NetworkResetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::NetworkResetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[Field::new("option", 2)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.number(self.option)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            option: fields.number()?,
        })
    }
}

/// Stick initialisation request, no payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStatusRequest;

impl Payload for NetworkStatusRequest {
    const MESSAGE_TYPE: MessageType = MessageType::NetworkStatusRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[]);

    fn write(&self, _fields: &mut FieldWriter<'_>) -> Result<()> {
        Ok(())
    }

    fn read(_fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

/// Stick initialisation reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStatusResponse {
    /// Stick address
    pub mac: MacAddress,
    /// Unidentified byte
    pub unknown1: u8,
    /// Whether the mesh is up
    pub online: bool,
    /// Extended network id (the Circle+ address)
    pub network_id: MacAddress,
    /// Short network id
    pub short_network_id: u16,
    /// Unidentified byte
    pub unknown2: u8,
}

impl Payload for NetworkStatusResponse {
    const MESSAGE_TYPE: MessageType = MessageType::NetworkStatusResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("unknown1", 2),
        Field::new("online", 2),
        Field::new("network_id", 16),
        Field::new("short_network_id", 4),
        Field::new("unknown2", 2),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.unknown1)?;
        fields.flag(self.online)?;
        fields.mac(self.network_id)?;
        fields.number(self.short_network_id)?;
        fields.number(self.unknown2)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            unknown1: fields.number()?,
            online: fields.flag()?,
            network_id: fields.mac()?,
            short_network_id: fields.number()?,
            unknown2: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Ping a node
    PingRequest
}

/// Ping reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingResponse {
    /// Answering node
    pub mac: MacAddress,
    /// Signal strength of the request as seen by the node
    pub rssi_in: u8,
    /// Signal strength of the reply as seen by the Stick
    pub rssi_out: u8,
    /// Round trip in milliseconds
    pub latency_ms: u16,
}

impl Payload for PingResponse {
    const MESSAGE_TYPE: MessageType = MessageType::PingResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("rssi_in", 2),
        Field::new("rssi_out", 2),
        Field::new("latency", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.rssi_in)?;
        fields.number(self.rssi_out)?;
        fields.number(self.latency_ms)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            rssi_in: fields.number()?,
            rssi_out: fields.number()?,
            latency_ms: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Ask the Circle+ which node sits at an index of its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleCallRequest {
    /// Table index, 0..=63
    pub node_id: u8,
}

impl Payload for RoleCallRequest {
    const MESSAGE_TYPE: MessageType = MessageType::RoleCallRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[Field::new("node_id", 2)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.number(self.node_id)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            node_id: fields.number()?,
        })
    }
}

/// Node registered at a Circle+ table index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleCallResponse {
    /// Circle+ address
    pub mac: MacAddress,
    /// Node at the index, `None` when the slot is empty
    pub node_mac: Option<MacAddress>,
    /// Table index
    pub node_id: u8,
}

impl Payload for RoleCallResponse {
    const MESSAGE_TYPE: MessageType = MessageType::RoleCallResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("node_mac", 16),
        Field::new("node_id", 2),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        match self.node_mac {
            Some(node) if node.as_u64() == EMPTY_MAC => {
                return Err(Error::ReservedValue {
                    field: "node_mac",
                    value: node.to_string(),
                });
            }
            node => fields.mac(node.unwrap_or(MacAddress::new(EMPTY_MAC)))?,
        }
        fields.number(self.node_id)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        let mac = fields.mac()?;
        let node_mac = Some(fields.mac()?).filter(|node| node.as_u64() != EMPTY_MAC);
        Ok(Self {
            mac,
            node_mac,
            node_id: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Node reports it joined the network
    ModuleJoinedNetworkRequest
}
