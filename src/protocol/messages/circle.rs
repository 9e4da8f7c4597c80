//! Circle power, calibration and energy log messages

use std::time::Duration;

use super::{Payload, mac_only_payload};
use crate::protocol::energy::{EIGHT_SECONDS, Energy, ONE_SECOND};
use crate::protocol::grammar::{Field, FieldReader, FieldWriter, Grammar};
use crate::protocol::hex::{self, TimeUnit};
use crate::protocol::{
    Error, LOG_ADDRESS_BASE, LOG_ADDRESS_STRIDE, MacAddress, MessageType, Result,
    SECONDS_CORRECTION_DIVISOR,
};

/// Memory address of an energy log page
#[must_use]
pub const fn log_address_to_raw(log_address: u32) -> u64 {
    log_address as u64 * LOG_ADDRESS_STRIDE + LOG_ADDRESS_BASE
}

/// Energy log page containing a memory address
///
/// Addresses below the first page map to page 0; addresses inside a page
/// round down to it.
#[must_use]
pub fn log_address_from_raw(raw: u64) -> u32 {
    let page = raw.saturating_sub(LOG_ADDRESS_BASE) / LOG_ADDRESS_STRIDE;
    u32::try_from(page).unwrap_or(u32::MAX)
}

fn read_log_address(fields: &mut FieldReader<'_>) -> Result<u32> {
    fields.number::<u64>().map(log_address_from_raw)
}

/// Year, month and minutes-into-month stamp used by Circle logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogTimestamp {
    /// Years since 2000
    pub year: u8,
    /// Month, 1..=12
    pub month: u8,
    /// Minutes since the start of the month
    pub minutes: u16,
}

impl LogTimestamp {
    /// Parse the 8-digit `YYMMmmmm` form
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() != 8 || !hex::is_hex(text) {
            return Err(Error::malformed(text));
        }
        let narrow = |range: std::ops::Range<usize>| {
            hex::decode_unsigned(&text[range]).and_then(|v| {
                u8::try_from(v).map_err(|_| Error::malformed(text))
            })
        };
        Ok(Self {
            year: narrow(0..2)?,
            month: narrow(2..4)?,
            minutes: u16::try_from(hex::decode_unsigned(&text[4..8])?)
                .map_err(|_| Error::malformed(text))?,
        })
    }

    /// Render as 8 hex digits
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:04X}", self.year, self.month, self.minutes)
    }

    /// Whether this renders as the empty log slot marker
    #[must_use]
    pub const fn is_empty_marker(self) -> bool {
        self.year == 0xFF && self.month == 0xFF && self.minutes == 0xFFFF
    }
}

mac_only_payload! {
    /// Ask a Circle for its current pulse counters
    PowerInformationRequest
}

/// Current pulse counters of a Circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerInformationResponse {
    /// Reporting node
    pub mac: MacAddress,
    /// Pulses over the last (corrected) second
    pub one_second: Energy,
    /// Pulses over the last (corrected) eight seconds
    pub eight_seconds: Energy,
    /// Pulses consumed during the current hour
    pub one_hour_consumed: Energy,
    /// Pulses produced during the current hour
    pub one_hour_produced: Energy,
}

impl PowerInformationResponse {
    /// Build from raw counters, applying the seconds correction to the
    /// one- and eight-second bases
    #[must_use]
    pub fn from_raw(
        mac: MacAddress,
        pulses_1s: u16,
        pulses_8s: u16,
        consumed_1h: u32,
        produced_1h: u32,
        seconds_correction: u16,
    ) -> Self {
        let correction =
            Duration::from_secs_f64(f64::from(seconds_correction) / SECONDS_CORRECTION_DIVISOR);
        Self {
            mac,
            one_second: Energy::new(u64::from(pulses_1s), ONE_SECOND + correction),
            eight_seconds: Energy::new(u64::from(pulses_8s), EIGHT_SECONDS + correction),
            one_hour_consumed: Energy::hourly(u64::from(consumed_1h)),
            one_hour_produced: Energy::hourly(u64::from(produced_1h)),
        }
    }

    /// Raw seconds correction, recovered from the one-second interval
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn seconds_correction_raw(&self) -> Result<u16> {
        let excess = self.one_second.interval.as_secs_f64() - ONE_SECOND.as_secs_f64();
        let raw = (excess * SECONDS_CORRECTION_DIVISOR).round();
        if !(0.0..=f64::from(u16::MAX)).contains(&raw) {
            return Err(Error::FieldOverflow {
                value: raw as u64,
                width: 4,
            });
        }
        Ok(raw as u16)
    }
}

impl Payload for PowerInformationResponse {
    const MESSAGE_TYPE: MessageType = MessageType::PowerInformationResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("pulses_1s", 4),
        Field::new("pulses_8s", 4),
        Field::new("consumed_1h", 8),
        Field::new("produced_1h", 8),
        Field::new("seconds_correction", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(self.one_second.pulses)?;
        fields.number(self.eight_seconds.pulses)?;
        fields.number(self.one_hour_consumed.pulses)?;
        fields.number(self.one_hour_produced.pulses)?;
        fields.number(self.seconds_correction_raw()?)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self::from_raw(
            fields.mac()?,
            fields.number()?,
            fields.number()?,
            fields.number()?,
            fields.number()?,
            fields.number()?,
        ))
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Switch a Circle relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerChangeRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Relay on
    pub power_state: bool,
}

impl Payload for PowerChangeRequest {
    const MESSAGE_TYPE: MessageType = MessageType::PowerChangeRequest;
    const GRAMMAR: &'static Grammar =
        &Grammar::new(&[Field::mac(), Field::new("power_state", 2)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.flag(self.power_state)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            power_state: fields.flag()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Ask a Circle for its calibration constants
    PowerCalibrationRequest
}

/// Calibration constants used to turn pulses into watts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerCalibrationResponse {
    /// Reporting node
    pub mac: MacAddress,
    /// Gain A
    pub gain_a: f32,
    /// Gain B
    pub gain_b: f32,
    /// Total offset
    pub offset_total: f32,
    /// Noise offset
    pub offset_noise: f32,
}

impl Payload for PowerCalibrationResponse {
    const MESSAGE_TYPE: MessageType = MessageType::PowerCalibrationResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("gain_a", 8),
        Field::new("gain_b", 8),
        Field::new("offset_total", 8),
        Field::new("offset_noise", 8),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.float(self.gain_a)?;
        fields.float(self.gain_b)?;
        fields.float(self.offset_total)?;
        fields.float(self.offset_noise)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            gain_a: fields.float()?,
            gain_b: fields.float()?,
            offset_total: fields.float()?,
            offset_noise: fields.float()?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Read one page of the energy log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBufferRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Log page to read
    pub log_address: u32,
}

impl Payload for PowerBufferRequest {
    const MESSAGE_TYPE: MessageType = MessageType::PowerBufferRequest;
    const GRAMMAR: &'static Grammar =
        &Grammar::new(&[Field::mac(), Field::new("log_address", 8)]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.number(log_address_to_raw(self.log_address))
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            log_address: read_log_address(fields)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// One hourly slot of an energy log page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferEntry {
    /// End of the logged hour
    pub timestamp: LogTimestamp,
    /// Pulses counted during the hour
    pub pulses: u64,
}

impl BufferEntry {
    /// Pulses over the logged hour
    #[must_use]
    pub const fn energy(&self) -> Energy {
        Energy::hourly(self.pulses)
    }
}

const EMPTY_SLOT: u32 = 0xFFFF_FFFF;

/// One page of the energy log, four hourly slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBufferResponse {
    /// Reporting node
    pub mac: MacAddress,
    /// Slots in log order, `None` when not yet written
    pub entries: [Option<BufferEntry>; 4],
    /// Page these slots were read from
    pub log_address: u32,
}

impl Payload for PowerBufferResponse {
    const MESSAGE_TYPE: MessageType = MessageType::PowerBufferResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("timestamp1", 8),
        Field::new("pulses1", 8),
        Field::new("timestamp2", 8),
        Field::new("pulses2", 8),
        Field::new("timestamp3", 8),
        Field::new("pulses3", 8),
        Field::new("timestamp4", 8),
        Field::new("pulses4", 8),
        Field::new("log_address", 8),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        for entry in &self.entries {
            match entry {
                Some(entry) if entry.timestamp.is_empty_marker() => {
                    return Err(Error::ReservedValue {
                        field: "timestamp",
                        value: entry.timestamp.to_hex(),
                    });
                }
                Some(entry) => {
                    fields.raw(&entry.timestamp.to_hex())?;
                    fields.number(entry.pulses)?;
                }
                None => {
                    fields.number(EMPTY_SLOT)?;
                    fields.number(EMPTY_SLOT)?;
                }
            }
        }
        fields.number(log_address_to_raw(self.log_address))
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        let mac = fields.mac()?;
        let mut entries = [None; 4];
        for slot in &mut entries {
            let timestamp = fields.parse(|text| {
                if text.eq_ignore_ascii_case("FFFFFFFF") {
                    Ok(None)
                } else {
                    LogTimestamp::parse(text).map(Some)
                }
            })?;
            let pulses: u64 = fields.number()?;
            *slot = timestamp.map(|timestamp| BufferEntry { timestamp, pulses });
        }
        Ok(Self {
            mac,
            entries,
            log_address: read_log_address(fields)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

/// Configure how often a Circle writes its energy log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerLogIntervalSetRequest {
    /// Addressed node
    pub mac: MacAddress,
    /// Consumption log interval, whole minutes
    pub consumption_interval: Duration,
    /// Production log interval, whole minutes
    pub production_interval: Duration,
}

impl Payload for PowerLogIntervalSetRequest {
    const MESSAGE_TYPE: MessageType = MessageType::PowerLogIntervalSetRequest;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("consumption_interval", 4),
        Field::new("production_interval", 4),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.duration(self.consumption_interval, TimeUnit::Minutes)?;
        fields.duration(self.production_interval, TimeUnit::Minutes)
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            consumption_interval: fields.duration(TimeUnit::Minutes)?,
            production_interval: fields.duration(TimeUnit::Minutes)?,
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

mac_only_payload! {
    /// Ask a node for its identity and state
    DeviceInformationRequest
}

/// Mains frequency a Circle is calibrated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// 50 Hz
    Hz50,
    /// 60 Hz
    Hz60,
    /// Unrecognised code
    Other(u8),
}

impl Frequency {
    /// Decode from the wire value
    #[must_use]
    pub const fn from_u8(code: u8) -> Self {
        match code {
            0x85 => Self::Hz50,
            0xC5 => Self::Hz60,
            other => Self::Other(other),
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Hz50 => 0x85,
            Self::Hz60 => 0xC5,
            Self::Other(code) => code,
        }
    }
}

/// Kind of node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceType {
    /// USB Stick
    Stick,
    /// Network coordinator Circle
    CirclePlus,
    /// Switching power meter
    Circle,
    /// Wall switch
    Switch,
    /// Humidity and temperature sensor
    Sense,
    /// Motion sensor
    Scan,
    /// Built-in Circle
    Stealth,
    /// Unrecognised code
    Other(u8),
}

impl DeviceType {
    /// Decode from the wire value
    #[must_use]
    pub const fn from_u8(code: u8) -> Self {
        match code {
            0x00 => Self::Stick,
            0x01 => Self::CirclePlus,
            0x02 => Self::Circle,
            0x03 => Self::Switch,
            0x05 => Self::Sense,
            0x06 => Self::Scan,
            0x09 => Self::Stealth,
            other => Self::Other(other),
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Stick => 0x00,
            Self::CirclePlus => 0x01,
            Self::Circle => 0x02,
            Self::Switch => 0x03,
            Self::Sense => 0x05,
            Self::Scan => 0x06,
            Self::Stealth => 0x09,
            Self::Other(code) => code,
        }
    }
}

/// Node identity, relay state and current log page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInformationResponse {
    /// Reporting node
    pub mac: MacAddress,
    /// Node clock
    pub clock: LogTimestamp,
    /// Log page currently being written
    pub log_address: u32,
    /// Relay on
    pub power_state: bool,
    /// Mains frequency
    pub frequency: Frequency,
    /// Hardware revision, 12 hex digits
    pub hardware_version: u64,
    /// Firmware build time, Unix seconds
    pub firmware_version: u32,
    /// Node kind
    pub device_type: DeviceType,
}

impl DeviceInformationResponse {
    /// Hardware revision in the `XXXX-XXXX-XXXX` form printed on devices
    #[must_use]
    pub fn hardware_model(&self) -> String {
        let digits = format!("{:012X}", self.hardware_version);
        format!("{}-{}-{}", &digits[0..4], &digits[4..8], &digits[8..12])
    }
}

impl Payload for DeviceInformationResponse {
    const MESSAGE_TYPE: MessageType = MessageType::DeviceInformationResponse;
    const GRAMMAR: &'static Grammar = &Grammar::new(&[
        Field::mac(),
        Field::new("timestamp", 8),
        Field::new("log_address", 8),
        Field::new("power_state", 2),
        Field::new("frequency", 2),
        Field::new("hardware_version", 12),
        Field::new("firmware_version", 8),
        Field::new("device_type", 2),
    ]);

    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()> {
        fields.mac(self.mac)?;
        fields.raw(&self.clock.to_hex())?;
        fields.number(log_address_to_raw(self.log_address))?;
        fields.flag(self.power_state)?;
        fields.number(self.frequency.as_u8())?;
        fields.number(self.hardware_version)?;
        fields.number(self.firmware_version)?;
        fields.number(self.device_type.as_u8())
    }

    fn read(fields: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mac: fields.mac()?,
            clock: fields.parse(LogTimestamp::parse)?,
            log_address: read_log_address(fields)?,
            power_state: fields.flag()?,
            frequency: Frequency::from_u8(fields.number()?),
            hardware_version: fields.number()?,
            firmware_version: fields.number()?,
            device_type: DeviceType::from_u8(fields.number()?),
        })
    }

    fn mac(&self) -> Option<MacAddress> {
        Some(self.mac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: MacAddress = MacAddress::new(0x0123_4567_89AB_CDEF);

    #[test]
    fn test_power_change_payload() {
        let request = PowerChangeRequest {
            mac: MAC,
            power_state: true,
        };
        assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF01");
    }

    #[test]
    fn test_power_state_only_literal_01_is_on() {
        let off = PowerChangeRequest::from_payload("0123456789ABCDEFFF").unwrap();
        assert!(!off.power_state);
        let on = PowerChangeRequest::from_payload("0123456789ABCDEF01").unwrap();
        assert!(on.power_state);
    }

    #[test]
    fn test_log_address_formula() {
        assert_eq!(log_address_to_raw(0), 278_528);
        assert_eq!(log_address_to_raw(1), 278_560);
        assert_eq!(log_address_from_raw(278_560), 1);
        assert_eq!(log_address_from_raw(278_591), 1);
        assert_eq!(log_address_from_raw(0), 0);
        assert_eq!(log_address_from_raw(278_527), 0);
    }

    #[test]
    fn test_device_information_with_odd_log_address() {
        let payload =
            |log_address: &str| format!("0123456789ABCDEF0B0A05A0{log_address}01850000007300074E0843A902");

        let fresh = DeviceInformationResponse::from_payload(&payload("00000000")).unwrap();
        assert_eq!(fresh.log_address, 0);
        assert_eq!(fresh.device_type, DeviceType::Circle);

        let unaligned = DeviceInformationResponse::from_payload(&payload("00044141")).unwrap();
        assert_eq!(unaligned.log_address, 10);
    }

    #[test]
    fn test_power_buffer_rejects_marker_timestamp() {
        let page = PowerBufferResponse {
            mac: MAC,
            entries: [
                Some(BufferEntry {
                    timestamp: LogTimestamp {
                        year: 0xFF,
                        month: 0xFF,
                        minutes: 0xFFFF,
                    },
                    pulses: 1,
                }),
                None,
                None,
                None,
            ],
            log_address: 0,
        };
        assert!(matches!(
            page.to_payload(),
            Err(Error::ReservedValue {
                field: "timestamp",
                ..
            })
        ));
    }

    #[test]
    fn test_power_buffer_request() {
        let request = PowerBufferRequest {
            mac: MAC,
            log_address: 0,
        };
        assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF00044000");
        let request = PowerBufferRequest {
            mac: MAC,
            log_address: 10,
        };
        assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF00044140");
        assert_eq!(
            PowerBufferRequest::from_payload("0123456789ABCDEF00044140").unwrap(),
            request
        );
    }

    #[test]
    fn test_power_information_zero_correction() {
        let payload = "0123456789ABCDEF000A0050000001F4000000000000";
        let info = PowerInformationResponse::from_payload(payload).unwrap();
        assert_eq!(info.one_second, Energy::new(10, Duration::from_secs(1)));
        assert_eq!(info.eight_seconds, Energy::new(80, Duration::from_secs(8)));
        assert_eq!(info.one_hour_consumed, Energy::hourly(500));
        assert_eq!(info.one_hour_produced, Energy::hourly(0));
        assert_eq!(info.to_payload().unwrap(), payload);
    }

    #[test]
    fn test_power_information_correction() {
        let payload = "0123456789ABCDEF000A00500000000000000000B71B";
        let info = PowerInformationResponse::from_payload(payload).unwrap();
        let expected = 1.0 + f64::from(0xB71B_u16) / 46875.0;
        assert!((info.one_second.interval.as_secs_f64() - expected).abs() < 1e-6);
        assert_eq!(info.seconds_correction_raw().unwrap(), 0xB71B);
        assert_eq!(info.to_payload().unwrap(), payload);
    }

    #[test]
    fn test_power_information_rejects_short_interval() {
        let mut info = PowerInformationResponse::from_raw(MAC, 1, 1, 1, 1, 0);
        info.one_second.interval = Duration::from_millis(500);
        assert!(matches!(
            info.to_payload(),
            Err(Error::FieldOverflow { .. })
        ));
    }

    #[test]
    fn test_calibration_bit_exact() {
        let payload = "0123456789ABCDEF3F8000003F000000BDCCCCCD00000000";
        let calibration = PowerCalibrationResponse::from_payload(payload).unwrap();
        assert_eq!(calibration.gain_a, 1.0);
        assert_eq!(calibration.gain_b, 0.5);
        assert_eq!(calibration.offset_total.to_bits(), 0xBDCC_CCCD);
        assert_eq!(calibration.offset_noise, 0.0);
        assert_eq!(calibration.to_payload().unwrap(), payload);
    }

    #[test]
    fn test_power_buffer_response_with_empty_slots() {
        let payload = concat!(
            "0123456789ABCDEF",
            "0B0A05A0", "00000190",
            "0B0A05DC", "000001A4",
            "FFFFFFFF", "FFFFFFFF",
            "FFFFFFFF", "FFFFFFFF",
            "00044140",
        );
        let page = PowerBufferResponse::from_payload(payload).unwrap();
        let first = page.entries[0].unwrap();
        assert_eq!(
            first.timestamp,
            LogTimestamp {
                year: 11,
                month: 10,
                minutes: 0x05A0
            }
        );
        assert_eq!(first.energy(), Energy::hourly(400));
        assert!(page.entries[2].is_none());
        assert!(page.entries[3].is_none());
        assert_eq!(page.log_address, 10);
        assert_eq!(page.to_payload().unwrap(), payload);
    }

    #[test]
    fn test_device_information() {
        let payload = concat!(
            "0123456789ABCDEF",
            "0B0A05A0",
            "00044140",
            "01",
            "85",
            "000000730007",
            "4E0843A9",
            "02",
        );
        let info = DeviceInformationResponse::from_payload(payload).unwrap();
        assert_eq!(info.log_address, 10);
        assert!(info.power_state);
        assert_eq!(info.frequency, Frequency::Hz50);
        assert_eq!(info.hardware_model(), "0000-0073-0007");
        assert_eq!(info.firmware_version, 0x4E08_43A9);
        assert_eq!(info.device_type, DeviceType::Circle);
        assert_eq!(info.to_payload().unwrap(), payload);
    }

    #[test]
    fn test_log_interval() {
        let request = PowerLogIntervalSetRequest {
            mac: MAC,
            consumption_interval: Duration::from_secs(60 * 60),
            production_interval: Duration::from_secs(0),
        };
        assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF003C0000");
    }
}
