//! Circle and Circle+ clock messages

use super::{LogTimestamp, Payload, log_address_from_raw, log_address_to_raw, mac_only_payload};
use crate::protocol::grammar::{Field, FieldReader, FieldWriter, Grammar};
use crate::protocol::{MacAddress, MessageType, Result};

/// Log address placeholder sent with every clock set
const NO_LOG_ADDRESS: u64 = 0xFFFF_FFFF;

/// Set the clock of a Circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockSetRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Date part, as stamped into the energy log
    pub date: LogTimestamp,
    /// Log page to continue from, `None` sends the placeholder nodes ignore
    pub log_address: Option<u32>,
    /// Hour of day
    pub hour: u8,
    /// Minute
    pub minute: u8,
    /// Second
    pub second: u8,
    /// Day of week, 0 = Monday
    pub weekday: u8,
}

impl Payload for ClockSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::ClockSetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("timestamp", 8),
        Field::new("log_address", 8),
        Field::new("hour", 2),
        Field::new("minute", 2),
        Field::new("second", 2),
        Field::new("weekday", 2),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.raw(&self.date.to_hex())?;
        fields.number(self.log_address.map_or(NO_LOG_ADDRESS, log_address_to_raw))?;
        fields.number(self.hour)?;
        fields.number(self.minute)?;
        fields.number(self.second)?;
        fields.number(self.weekday)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        let mac = fields.mac()?;
        let date = fields.parse(LogTimestamp::parse)?;
        let log_address = Some(fields.number::<u64>()?)
            .filter(|&raw| raw != NO_LOG_ADDRESS)
            .map(log_address_from_raw);
        Ok(Self {
            mac,
            date,
            log_address,
            hour: fields.number()?,
            minute: fields.number()?,
            second: fields.number()?,
            weekday: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Ask a Circle for its clock
    ClockGetRequest
}

/// Circle clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockGetResponse {
    /// Reporting node
    pub mac: MacAddress,
    /// Hour of day
    pub hour: u8,
    /// Minute
    pub minute: u8,
    /// Second
    pub second: u8,
    /// Day of week
    pub weekday: u8,
    /// Unidentified byte
    pub unknown1: u8,
    /// Unidentified word
    pub unknown2: u16,
}

impl Payload for ClockGetResponse {
    const MESSAGE_TYPE: MessageType = MessageType::ClockGetResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("hour", 2),
        Field::new("minute", 2),
        Field::new("second", 2),
        Field::new("weekday", 2),
        Field::new("unknown1", 2),
        Field::new("unknown2", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.hour)?;
        fields.number(self.minute)?;
        fields.number(self.second)?;
        fields.number(self.weekday)?;
        fields.number(self.unknown1)?;
        fields.number(self.unknown2)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            hour: fields.number()?,
            minute: fields.number()?,
            second: fields.number()?,
            weekday: fields.number()?,
            unknown1: fields.number()?,
            unknown2: fields.number()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Circle+ real-time clock reading, every field two BCD digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealTimeClock {
    /// Second
    pub second: u8,
    /// Minute
    pub minute: u8,
    /// Hour of day
    pub hour: u8,
    /// Day of week
    pub weekday: u8,
    /// Day of month
    pub day: u8,
    /// Month
    pub month: u8,
    /// Years since 2000
    pub year: u8,
}

impl RealTimeClock {
    const FIELDS: [Field; 8] = [
        Field::mac(),
        Field::new("second", 2),
        Field::new("minute", 2),
        Field::new("hour", 2),
        Field::new("weekday", 2),
        Field::new("day", 2),
        Field::new("month", 2),
        Field::new("year", 2),
    ];

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        for value in [
            self.second,
            self.minute,
            self.hour,
            self.weekday,
            self.day,
            self.month,
            self.year,
        ] {
            fields.bcd(value)?;
        }
        Ok(())
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            second: fields.bcd()?,
            minute: fields.bcd()?,
            hour: fields.bcd()?,
            weekday: fields.bcd()?,
            day: fields.bcd()?,
            month: fields.bcd()?,
            year: fields.bcd()?,
        })
    }
}

/// Set the Circle+ real-time clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealTimeClockSetRequest {
    /// Circle+ address
    pub mac: MacAddress,
    /// Time to set
    pub clock: RealTimeClock,
}

impl Payload for RealTimeClockSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::RealTimeClockSetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&RealTimeClock::FIELDS);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        self.clock.write(fields)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            clock: RealTimeClock::read(fields)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Ask the Circle+ real-time clock
    RealTimeClockGetRequest
}

/// Circle+ real-time clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealTimeClockGetResponse {
    /// Circle+ address
    pub mac: MacAddress,
    /// Current time
    pub clock: RealTimeClock,
}

impl Payload for RealTimeClockGetResponse {
    const MESSAGE_TYPE: MessageType = MessageType::RealTimeClockGetResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&RealTimeClock::FIELDS);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        self.clock.write(fields)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            clock: RealTimeClock::read(fields)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}
