//! Plugwise message types

use std::fmt;

use super::{Error, Result, TYPE_WIDTH, grammar::Grammar, hex, messages};

/// Plugwise message types
///
/// The protocol is reverse-engineered; this is the set of codes with a known
/// payload layout, not every code a Stick may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum MessageType {
    /// Stick acknowledgement (optionally addressed)
    AcknowledgementV1 = 0x0000,
    /// Node announces it wants to join
    NodeAvailable = 0x0006,
    /// Accept or reject a joining node
    NodeAvailableResponse = 0x0007,
    /// Reset the mesh
    NetworkResetRequest = 0x0008,
    /// Stick initialisation
    NetworkStatusRequest = 0x000A,
    /// Ping a node
    PingRequest = 0x000D,
    /// Ping reply with link quality
    PingResponse = 0x000E,
    /// Stick initialisation reply
    NetworkStatusResponse = 0x0011,
    /// Ask a Circle for its pulse counters
    PowerInformationRequest = 0x0012,
    /// Pulse counters
    PowerInformationResponse = 0x0013,
    /// Set a Circle clock
    ClockSetRequest = 0x0016,
    /// Switch a relay
    PowerChangeRequest = 0x0017,
    /// Ask the Circle+ for the node at an index
    RoleCallRequest = 0x0018,
    /// Node registered at an index
    RoleCallResponse = 0x0019,
    /// Ask a node for its identity
    DeviceInformationRequest = 0x0023,
    /// Node identity, relay state and log pointer
    DeviceInformationResponse = 0x0024,
    /// Ask a Circle for its calibration
    PowerCalibrationRequest = 0x0026,
    /// Calibration constants
    PowerCalibrationResponse = 0x0027,
    /// Set the Circle+ real-time clock
    RealTimeClockSetRequest = 0x0028,
    /// Ask the Circle+ real-time clock
    RealTimeClockGetRequest = 0x0029,
    /// Circle+ real-time clock
    RealTimeClockGetResponse = 0x003A,
    /// Ask a Circle clock
    ClockGetRequest = 0x003E,
    /// Circle clock
    ClockGetResponse = 0x003F,
    /// Read a page of the energy log
    PowerBufferRequest = 0x0048,
    /// Page of the energy log
    PowerBufferResponse = 0x0049,
    /// Sleeping node woke up
    AnnounceAwakeRequest = 0x004F,
    /// Configure sleep cycle of a battery node
    SleepSetRequest = 0x0050,
    /// Switch or Scan group state change
    BroadcastGroupSwitchResponse = 0x0056,
    /// Configure the energy log interval
    PowerLogIntervalSetRequest = 0x0057,
    /// Node joined the network
    ModuleJoinedNetworkRequest = 0x0061,
    /// Configure Scan motion sensor
    ScanParametersSetRequest = 0x0101,
    /// Calibrate Scan light sensor
    LightCalibrationRequest = 0x0102,
    /// Configure Sense report interval
    SenseReportIntervalSetRequest = 0x0103,
    /// Sense humidity and temperature report
    SenseReportRequest = 0x0105,
}

/// Which side originates a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Sent by the host to the Stick
    Outbound,
    /// Sent by the Stick to the host
    Inbound,
}

impl MessageType {
    /// Every registered type, in code order
    pub const ALL: [Self; 34] = [
        Self::AcknowledgementV1,
        Self::NodeAvailable,
        Self::NodeAvailableResponse,
        Self::NetworkResetRequest,
        Self::NetworkStatusRequest,
        Self::PingRequest,
        Self::PingResponse,
        Self::NetworkStatusResponse,
        Self::PowerInformationRequest,
        Self::PowerInformationResponse,
        Self::ClockSetRequest,
        Self::PowerChangeRequest,
        Self::RoleCallRequest,
        Self::RoleCallResponse,
        Self::DeviceInformationRequest,
        Self::DeviceInformationResponse,
        Self::PowerCalibrationRequest,
        Self::PowerCalibrationResponse,
        Self::RealTimeClockSetRequest,
        Self::RealTimeClockGetRequest,
        Self::RealTimeClockGetResponse,
        Self::ClockGetRequest,
        Self::ClockGetResponse,
        Self::PowerBufferRequest,
        Self::PowerBufferResponse,
        Self::AnnounceAwakeRequest,
        Self::SleepSetRequest,
        Self::BroadcastGroupSwitchResponse,
        Self::PowerLogIntervalSetRequest,
        Self::ModuleJoinedNetworkRequest,
        Self::ScanParametersSetRequest,
        Self::LightCalibrationRequest,
        Self::SenseReportIntervalSetRequest,
        Self::SenseReportRequest,
    ];

    /// Convert from numeric code
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(Self::AcknowledgementV1),
            0x0006 => Some(Self::NodeAvailable),
            0x0007 => Some(Self::NodeAvailableResponse),
            0x0008 => Some(Self::NetworkResetRequest),
            0x000A => Some(Self::NetworkStatusRequest),
            0x000D => Some(Self::PingRequest),
            0x000E => Some(Self::PingResponse),
            0x0011 => Some(Self::NetworkStatusResponse),
            0x0012 => Some(Self::PowerInformationRequest),
            0x0013 => Some(Self::PowerInformationResponse),
            0x0016 => Some(Self::ClockSetRequest),
            0x0017 => Some(Self::PowerChangeRequest),
            0x0018 => Some(Self::RoleCallRequest),
            0x0019 => Some(Self::RoleCallResponse),
            0x0023 => Some(Self::DeviceInformationRequest),
            0x0024 => Some(Self::DeviceInformationResponse),
            0x0026 => Some(Self::PowerCalibrationRequest),
            0x0027 => Some(Self::PowerCalibrationResponse),
            0x0028 => Some(Self::RealTimeClockSetRequest),
            0x0029 => Some(Self::RealTimeClockGetRequest),
            0x003A => Some(Self::RealTimeClockGetResponse),
            0x003E => Some(Self::ClockGetRequest),
            0x003F => Some(Self::ClockGetResponse),
            0x0048 => Some(Self::PowerBufferRequest),
            0x0049 => Some(Self::PowerBufferResponse),
            0x004F => Some(Self::AnnounceAwakeRequest),
            0x0050 => Some(Self::SleepSetRequest),
            0x0056 => Some(Self::BroadcastGroupSwitchResponse),
            0x0057 => Some(Self::PowerLogIntervalSetRequest),
            0x0061 => Some(Self::ModuleJoinedNetworkRequest),
            0x0101 => Some(Self::ScanParametersSetRequest),
            0x0102 => Some(Self::LightCalibrationRequest),
            0x0103 => Some(Self::SenseReportIntervalSetRequest),
            0x0105 => Some(Self::SenseReportRequest),
            _ => None,
        }
    }

    /// Resolve a 4-digit type code
    pub fn from_code(code: &str) -> Result<Self> {
        let unknown = || Error::UnknownMessageType {
            code: code.to_owned(),
        };
        if code.len() != TYPE_WIDTH {
            return Err(unknown());
        }
        let value = hex::decode_unsigned(code).map_err(|_| unknown())?;
        u16::try_from(value)
            .ok()
            .and_then(Self::from_u16)
            .ok_or_else(unknown)
    }

    /// Numeric code
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Code as 4 upper-case hex digits
    #[must_use]
    pub fn code_hex(self) -> String {
        format!("{:04X}", self.code())
    }

    /// Payload grammar of this type
    #[must_use]
    pub fn grammar(self) -> &'static Grammar {
        messages::grammar_of(self)
    }

    /// Which side originates this message
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::AcknowledgementV1
            | Self::NodeAvailable
            | Self::PingResponse
            | Self::NetworkStatusResponse
            | Self::PowerInformationResponse
            | Self::RoleCallResponse
            | Self::DeviceInformationResponse
            | Self::PowerCalibrationResponse
            | Self::RealTimeClockGetResponse
            | Self::ClockGetResponse
            | Self::PowerBufferResponse
            | Self::AnnounceAwakeRequest
            | Self::BroadcastGroupSwitchResponse
            | Self::ModuleJoinedNetworkRequest
            | Self::SenseReportRequest => Direction::Inbound,
            _ => Direction::Outbound,
        }
    }

    /// Check if this message type is sent by the Stick
    #[must_use]
    pub const fn is_inbound(self) -> bool {
        matches!(self.direction(), Direction::Inbound)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:04X})", self, self.code())
    }
}
