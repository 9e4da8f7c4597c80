//! Typed payloads, one per message type
//!
//! Each payload struct implements [`Payload`], binding it to its
//! [`MessageType`] and its [`Grammar`]. The [`Body`] sum type is generated
//! from a single table, so adding a variant means one line there and the
//! compiler flags every match that misses it.

mod circle;
mod clock;
mod network;
mod sensor;

pub use circle::{
    BufferEntry, DeviceInformationRequest, DeviceInformationResponse, DeviceType, Frequency,
    LogTimestamp, PowerBufferRequest, PowerBufferResponse, PowerCalibrationRequest,
    PowerCalibrationResponse, PowerChangeRequest, PowerInformationRequest,
    PowerInformationResponse, PowerLogIntervalSetRequest, log_address_from_raw,
    log_address_to_raw,
};
pub use clock::{
    ClockGetRequest, ClockGetResponse, ClockSetRequest, RealTimeClock, RealTimeClockGetRequest,
    RealTimeClockGetResponse, RealTimeClockSetRequest,
};
pub use network::{
    AckCode, AcknowledgementV1, ModuleJoinedNetworkRequest, NetworkResetRequest,
    NetworkStatusRequest, NetworkStatusResponse, NodeAvailable, NodeAvailableResponse,
    PingRequest, PingResponse, RoleCallRequest, RoleCallResponse,
};
pub use sensor::{
    AnnounceAwakeRequest, AwakeReason, BroadcastGroupSwitchResponse, LightCalibrationRequest,
    ScanParametersSetRequest, SenseReportIntervalSetRequest, SenseReportRequest,
    SleepSetRequest,
};

use super::grammar::{FieldReader, FieldWriter, Grammar};
use super::{MacAddress, MessageType, Result};

/// Typed payload of one message type
pub trait Payload: Sized {
    /// Message type carrying this payload
    const MESSAGE_TYPE: MessageType;
    /// Field layout on the wire
    const GRAMMAR: &'static Grammar;

    /// Write fields in grammar order
    fn write(&self, fields: &mut FieldWriter<'_>) -> Result<()>;

    /// Read fields in grammar order
    fn read(fields: &mut FieldReader<'_>) -> Result<Self>;

    /// Node this payload addresses, if any
    fn mac(&self) -> Option<MacAddress> {
        None
    }

    /// Encode to payload text
    fn to_payload(&self) -> Result<String> {
        let mut out = String::with_capacity(Self::GRAMMAR.max_len());
        self.write(&mut Self::GRAMMAR.writer(&mut out))?;
        Ok(out)
    }

    /// Decode from payload text, validating it against the grammar first
    fn from_payload(payload: &str) -> Result<Self> {
        let mut fields = Self::GRAMMAR.reader(Self::MESSAGE_TYPE, payload)?;
        Self::read(&mut fields)
    }
}

/// Defines a payload that is nothing but the addressed node
macro_rules! mac_only_payload {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            /// Addressed node
            pub mac: $crate::protocol::MacAddress,
        }

        impl $name {
            /// Create for `mac`
            #[must_use]
            pub const fn new(mac: $crate::protocol::MacAddress) -> Self {
                Self { mac }
            }
        }

        impl $crate::protocol::messages::Payload for $name {
            const MESSAGE_TYPE: $crate::protocol::MessageType =
                $crate::protocol::MessageType::$name;
            const GRAMMAR: &'static $crate::protocol::grammar::Grammar =
                &$crate::protocol::grammar::Grammar::new(&[
                    $crate::protocol::grammar::Field::mac(),
                ]);

            fn write(
                &self,
                fields: &mut $crate::protocol::grammar::FieldWriter<'_>,
            ) -> $crate::protocol::Result<()> {
                fields.mac(self.mac)
            }

            fn read(
                fields: &mut $crate::protocol::grammar::FieldReader<'_>,
            ) -> $crate::protocol::Result<Self> {
                Ok(Self { mac: fields.mac()? })
            }

            fn mac(&self) -> Option<$crate::protocol::MacAddress> {
                Some(self.mac)
            }
        }
    };
}
pub(crate) use mac_only_payload;

macro_rules! message_table {
    ($($variant:ident),* $(,)?) => {
        /// Payload of a message, one variant per [`MessageType`]
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(missing_docs)]
        pub enum Body {
            $($variant($variant),)*
        }

        impl Body {
            /// Message type of this payload
            #[must_use]
            pub const fn message_type(&self) -> MessageType {
                match self {
                    $(Self::$variant(_) => MessageType::$variant,)*
                }
            }

            /// Node this payload addresses, if any
            #[must_use]
            pub fn mac(&self) -> Option<MacAddress> {
                match self {
                    $(Self::$variant(payload) => payload.mac(),)*
                }
            }

            /// Encode to payload text
            pub fn to_payload(&self) -> Result<String> {
                match self {
                    $(Self::$variant(payload) => payload.to_payload(),)*
                }
            }

            /// Decode payload text with the grammar of `message_type`
            pub fn from_payload(message_type: MessageType, payload: &str) -> Result<Self> {
                match message_type {
                    $(MessageType::$variant => $variant::from_payload(payload).map(Self::$variant),)*
                }
            }
        }

        pub(crate) fn grammar_of(message_type: MessageType) -> &'static Grammar {
            match message_type {
                $(MessageType::$variant => <$variant as Payload>::GRAMMAR,)*
            }
        }

        $(
            impl From<$variant> for Body {
                fn from(payload: $variant) -> Self {
                    Self::$variant(payload)
                }
            }
        )*
    };
}

message_table! {
    AcknowledgementV1,
    NodeAvailable,
    NodeAvailableResponse,
    NetworkResetRequest,
    NetworkStatusRequest,
    PingRequest,
    PingResponse,
    NetworkStatusResponse,
    PowerInformationRequest,
    PowerInformationResponse,
    ClockSetRequest,
    PowerChangeRequest,
    RoleCallRequest,
    RoleCallResponse,
    DeviceInformationRequest,
    DeviceInformationResponse,
    PowerCalibrationRequest,
    PowerCalibrationResponse,
    RealTimeClockSetRequest,
    RealTimeClockGetRequest,
    RealTimeClockGetResponse,
    ClockGetRequest,
    ClockGetResponse,
    PowerBufferRequest,
    PowerBufferResponse,
    AnnounceAwakeRequest,
    SleepSetRequest,
    BroadcastGroupSwitchResponse,
    PowerLogIntervalSetRequest,
    ModuleJoinedNetworkRequest,
    ScanParametersSetRequest,
    LightCalibrationRequest,
    SenseReportIntervalSetRequest,
    SenseReportRequest,
}
