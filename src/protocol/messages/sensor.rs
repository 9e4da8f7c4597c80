//! Battery nodes: Scan, Sense and Switch

use std::time::Duration;

use super::{Payload, mac_only_payload};
use crate::protocol::grammar::{Field, FieldReader, FieldWriter, Grammar};
use crate::protocol::hex::TimeUnit;
use crate::protocol::{MacAddress, MessageType, Result};

/// Why a sleeping node woke up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AwakeReason {
    /// Scheduled maintenance wake-up
    Maintenance,
    /// First wake-up after joining
    FirstAnnounce,
    /// Power-on
    Startup,
    /// Sensor state changed
    State,
    /// Button pressed
    Button,
    /// Unrecognised code
    Other(u8),
}

impl AwakeReason {
    /// Decode from the wire value
    #[must_use]
    pub const fn from_u8(code: u8) -> Self {
        match code {
            0x00 => Self::Maintenance,
            0x01 => Self::FirstAnnounce,
            0x02 => Self::Startup,
            0x03 => Self::State,
            0x05 => Self::Button,
            other => Self::Other(other),
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Maintenance => 0x00,
            Self::FirstAnnounce => 0x01,
            Self::Startup => 0x02,
            Self::State => 0x03,
            Self::Button => 0x05,
            Self::Other(code) => code,
        }
    }
}

/// Sleeping node is awake and listening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnounceAwakeRequest {
    /// Node that woke up
    pub mac: MacAddress,
    /// Why
    pub reason: AwakeReason,
}

impl Payload for AnnounceAwakeRequest {
    const MESSAGE_TYPE: MessageType = MessageType::AnnounceAwakeRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[Field::mac(), Field::new("reason", 2)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.reason.as_u8())
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            reason: AwakeReason::from_u8(fields.number()?),
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Sleep cycle of a battery node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepSetRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// How long to stay awake after waking, whole seconds
    pub wake_duration: Duration,
    /// How long to sleep, whole minutes
    pub sleep_duration: Duration,
    /// Interval between maintenance wake-ups, whole minutes
    pub maintenance_interval: Duration,
    /// Whether to sync the clock periodically
    pub clock_sync: bool,
    /// Clock sync interval, whole minutes
    pub clock_interval: Duration,
}

impl Payload for SleepSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::SleepSetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("wake_duration", 2),
        Field::new("sleep_duration", 4),
        Field::new("maintenance_interval", 4),
        Field::new("clock_sync", 2),
        Field::new("clock_interval", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.duration(self.wake_duration, TimeUnit::Seconds)?;
        fields.duration(self.sleep_duration, TimeUnit::Minutes)?;
        fields.duration(self.maintenance_interval, TimeUnit::Minutes)?;
        fields.flag(self.clock_sync)?;
        fields.duration(self.clock_interval, TimeUnit::Minutes)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            wake_duration: fields.duration(TimeUnit::Seconds)?,
            sleep_duration: fields.duration(TimeUnit::Minutes)?,
            maintenance_interval: fields.duration(TimeUnit::Minutes)?,
            clock_sync: fields.flag()?,
            clock_interval: fields.duration(TimeUnit::Minutes)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Switch or Scan changed the state of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BroadcastGroupSwitchResponse {
    /// Broadcasting node
    pub mac: MacAddress,
    /// Ports (buttons) the change applies to
    pub port_mask: u8,
    /// New state
    pub power_state: bool,
}

impl Payload for BroadcastGroupSwitchResponse {
    const MESSAGE_TYPE: MessageType = MessageType::BroadcastGroupSwitchResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("port_mask", 2),
        Field::new("power_state", 2),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.port_mask)?;
        fields.flag(self.power_state)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            port_mask: fields.number()?,
            power_state: fields.flag()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Motion sensor settings of a Scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanParametersSetRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Motion sensitivity, see the `SENSITIVITY_*` constants
    pub sensitivity: u8,
    /// Trigger in daylight too
    pub daylight_override: bool,
    /// Delay before switching off, whole minutes
    pub switch_off_delay: Duration,
}

impl ScanParametersSetRequest {
    /// High sensitivity
    pub const SENSITIVITY_HIGH: u8 = 0x14;
    /// Medium sensitivity
    pub const SENSITIVITY_MEDIUM: u8 = 0x1E;
    /// Motion detection off
    pub const SENSITIVITY_OFF: u8 = 0xFF;
}

impl Payload for ScanParametersSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::ScanParametersSetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("sensitivity", 2),
        Field::new("daylight_override", 2),
        Field::new("switch_off_delay", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.sensitivity)?;
        fields.flag(self.daylight_override)?;
        fields.duration(self.switch_off_delay, TimeUnit::Minutes)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            sensitivity: fields.number()?,
            daylight_override: fields.flag()?,
            switch_off_delay: fields.duration(TimeUnit::Minutes)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Calibrate the daylight sensor of a Scan
    LightCalibrationRequest
}

/// How often a Sense reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SenseReportIntervalSetRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Report interval, whole minutes
    pub interval: Duration,
}

impl Payload for SenseReportIntervalSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::SenseReportIntervalSetRequest;
    const GRAMMAR: &'static Grammar =
        &Grammar::new(&[Field::mac(), Field::new("interval", 2)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.duration(self.interval, TimeUnit::Minutes)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            interval: fields.duration(TimeUnit::Minutes)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Raw humidity and temperature readings of a Sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SenseReportRequest {
    /// Reporting node
    pub mac: MacAddress,
    /// Raw humidity reading
    pub humidity: u16,
    /// Raw temperature reading
    pub temperature: u16,
}

impl Payload for SenseReportRequest {
    const MESSAGE_TYPE: MessageType = MessageType::SenseReportRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("humidity", 4),
        Field::new("temperature", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.humidity)?;
        fields.number(self.temperature)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            humidity: fields.number()?,
            temperature: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}
