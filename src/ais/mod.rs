//! # AIS Binary Messages
//!
//! Decoders for the AIS messages carried in the six-bit armored payload of VDM
//! and VDO sentences: position reports (types 1, 2 and 3), base station
//! reports (4), static and voyage related data (5), class B position reports
//! (18) and static data reports (24).
//!
//! A payload is decoded as a whole or not at all: it must carry at least the
//! minimum number of characters for its type and its leading six bits must name
//! a type the decoder handles. Multi-fragment messages must be reassembled by
//! the caller before decoding.
//!
//! ```rust
//! use nmea0183_decoder::ais::{AisDecode, AisMessage, PositionReport};
//!
//! let payload = "177KQJ5000G?tO`K>RA1wUbN0TKH";
//!
//! let report = PositionReport::decode(payload).unwrap();
//! assert_eq!(report.mmsi, 477553000);
//!
//! let message = AisMessage::decode(payload).unwrap();
//! assert_eq!(message.mmsi(), 477553000);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AisError,
    armor::{Bits, sixbit_value, unarmor},
};

/// Defines a fieldless enumeration decoded from a raw integer, with a residual
/// variant that keeps any value without a name.
macro_rules! u8_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $value:literal => $variant:ident
            ),+ $(,)?
        } else $residual:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Any value without an assigned meaning
            $residual(u8),
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::$residual(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $value,)+
                    $name::$residual(other) => other,
                }
            }
        }
    };
}

mod base_station;
mod position;
mod static_data;
mod types;

pub use base_station::BaseStationReport;
pub use position::{ClassBPositionReport, PositionReport, rate_of_turn};
pub use static_data::{Dimensions, Eta, StaticDataPart, StaticDataReport, StaticVoyageData};
pub use types::{
    EpfdType, ManeuverIndicator, NavigationStatus, PositionAccuracy, Raim, ShipType,
};

u8_enum! {
    /// AIS message type, the leading six bits of every payload.
    pub enum MessageType {
        /// 1 - Position report, scheduled
        1 => PositionReportScheduled,
        /// 2 - Position report, assigned schedule
        2 => PositionReportAssigned,
        /// 3 - Position report, response to interrogation
        3 => PositionReportResponse,
        /// 4 - Base station report
        4 => BaseStationReport,
        /// 5 - Static and voyage related data
        5 => StaticVoyageData,
        /// 6 - Binary addressed message
        6 => BinaryAddressed,
        /// 7 - Binary acknowledge
        7 => BinaryAcknowledge,
        /// 8 - Binary broadcast message
        8 => BinaryBroadcast,
        /// 9 - Standard SAR aircraft position report
        9 => SarAircraftPosition,
        /// 10 - UTC and date inquiry
        10 => UtcDateInquiry,
        /// 11 - UTC and date response
        11 => UtcDateResponse,
        /// 12 - Addressed safety related message
        12 => AddressedSafety,
        /// 13 - Safety related acknowledge
        13 => SafetyAcknowledge,
        /// 14 - Safety related broadcast message
        14 => SafetyBroadcast,
        /// 15 - Interrogation
        15 => Interrogation,
        /// 16 - Assigned mode command
        16 => AssignedModeCommand,
        /// 17 - DGNSS broadcast binary message
        17 => DgnssBroadcast,
        /// 18 - Standard class B equipment position report
        18 => ClassBPositionReport,
        /// 19 - Extended class B equipment position report
        19 => ExtendedClassBPositionReport,
        /// 20 - Data link management
        20 => DataLinkManagement,
        /// 21 - Aid-to-navigation report
        21 => AidToNavigation,
        /// 22 - Channel management
        22 => ChannelManagement,
        /// 23 - Group assignment command
        23 => GroupAssignment,
        /// 24 - Static data report
        24 => StaticDataReport,
        /// 25 - Single slot binary message
        25 => SingleSlotBinary,
        /// 26 - Multiple slot binary message
        26 => MultipleSlotBinary,
        /// 27 - Long range AIS broadcast message
        27 => LongRangeBroadcast,
    } else Unrecognized
}

impl MessageType {
    /// Reads the message type from the first character of an armored payload.
    ///
    /// An empty payload reads as `Unrecognized(0)`.
    pub fn of_payload(payload: &str) -> Self {
        let value = payload.chars().next().map_or(0, sixbit_value);
        MessageType::from(value)
    }
}

/// A record decoded from an AIS binary payload.
pub trait AisDecode: Sized {
    /// Minimum payload length in armored characters.
    const MIN_CHARS: usize;

    /// Whether the decoder handles payloads tagged with `message_type`.
    fn accepts(message_type: MessageType) -> bool;

    /// Extracts the record from a bitstream already checked for length and type.
    fn from_bits(bits: Bits<'_>) -> Self;

    /// Decodes an armored payload.
    ///
    /// Fails if the payload is shorter than [`MIN_CHARS`](AisDecode::MIN_CHARS)
    /// or carries a message type the decoder does not accept. Bits past the end
    /// of a payload that is long enough but still shorter than the full message
    /// read as zero.
    fn decode(payload: &str) -> Result<Self, AisError> {
        let found = payload.chars().count();
        if found < Self::MIN_CHARS {
            log::trace!("AIS payload of {found} characters, at least {} required", Self::MIN_CHARS);
            return Err(AisError::PayloadTooShort {
                minimum: Self::MIN_CHARS,
                found,
            });
        }

        let bits = unarmor(payload);
        let bits = Bits::new(&bits);

        let message_type = MessageType::from(bits.unsigned(0, 6) as u8);
        if !Self::accepts(message_type) {
            log::trace!("AIS message type {message_type:?} rejected");
            return Err(AisError::MessageTypeMismatch(message_type));
        }

        Ok(Self::from_bits(bits))
    }
}

/// Any AIS message with a decoder.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum AisMessage {
    /// Types 1, 2 and 3
    PositionReport(PositionReport),
    /// Type 4
    BaseStationReport(BaseStationReport),
    /// Type 5
    StaticVoyageData(StaticVoyageData),
    /// Type 18
    ClassBPositionReport(ClassBPositionReport),
    /// Type 24
    StaticDataReport(StaticDataReport),
}

impl AisMessage {
    /// Decodes an armored payload, selecting the decoder from its message type.
    ///
    /// Types without a decoder yield [`AisError::UnsupportedMessageType`].
    pub fn decode(payload: &str) -> Result<Self, AisError> {
        match MessageType::of_payload(payload) {
            MessageType::PositionReportScheduled
            | MessageType::PositionReportAssigned
            | MessageType::PositionReportResponse => {
                PositionReport::decode(payload).map(AisMessage::PositionReport)
            }
            MessageType::BaseStationReport => {
                BaseStationReport::decode(payload).map(AisMessage::BaseStationReport)
            }
            MessageType::StaticVoyageData => {
                StaticVoyageData::decode(payload).map(AisMessage::StaticVoyageData)
            }
            MessageType::ClassBPositionReport => {
                ClassBPositionReport::decode(payload).map(AisMessage::ClassBPositionReport)
            }
            MessageType::StaticDataReport => {
                StaticDataReport::decode(payload).map(AisMessage::StaticDataReport)
            }
            other => {
                log::trace!("no decoder for AIS message type {other:?}");
                Err(AisError::UnsupportedMessageType(other))
            }
        }
    }

    /// The message type carried by the payload.
    pub fn message_type(&self) -> MessageType {
        match self {
            AisMessage::PositionReport(report) => report.message_type,
            AisMessage::BaseStationReport(_) => MessageType::BaseStationReport,
            AisMessage::StaticVoyageData(_) => MessageType::StaticVoyageData,
            AisMessage::ClassBPositionReport(_) => MessageType::ClassBPositionReport,
            AisMessage::StaticDataReport(_) => MessageType::StaticDataReport,
        }
    }

    /// The MMSI of the transmitting station.
    pub fn mmsi(&self) -> u32 {
        match self {
            AisMessage::PositionReport(report) => report.mmsi,
            AisMessage::BaseStationReport(report) => report.mmsi,
            AisMessage::StaticVoyageData(data) => data.mmsi,
            AisMessage::ClassBPositionReport(report) => report.mmsi,
            AisMessage::StaticDataReport(report) => report.mmsi,
        }
    }
}

// Longitude and latitude are transmitted in 1/10000 minute.
pub(crate) fn degrees(raw: i64) -> f64 {
    raw as f64 / 600_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type() {
        let cases = [
            (0, MessageType::Unrecognized(0)),
            (1, MessageType::PositionReportScheduled),
            (5, MessageType::StaticVoyageData),
            (18, MessageType::ClassBPositionReport),
            (24, MessageType::StaticDataReport),
            (27, MessageType::LongRangeBroadcast),
            (28, MessageType::Unrecognized(28)),
            (63, MessageType::Unrecognized(63)),
        ];

        for (input, expected) in cases {
            let result = MessageType::from(input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
            assert_eq!(u8::from(result), input);
        }

        assert_eq!(MessageType::of_payload("B5NJ"), MessageType::ClassBPositionReport);
        assert_eq!(MessageType::of_payload(""), MessageType::Unrecognized(0));
    }

    #[test]
    fn test_dispatch() {
        let cases = [
            ("177KQJ5000G?tO`K>RA1wUbN0TKH", MessageType::PositionReportScheduled, 477553000),
            ("403OviQuMGCqWrRO9>E6fE700@GO", MessageType::BaseStationReport, 3669702),
            (
                "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880",
                MessageType::StaticVoyageData,
                351759000,
            ),
            ("B5NJ;PP005l4ot5Isbl03wsUkP06", MessageType::ClassBPositionReport, 367430530),
            ("H42O55i18tMET00000000000000", MessageType::StaticDataReport, 271041815),
        ];

        for (input, message_type, mmsi) in cases {
            let result = AisMessage::decode(input);
            assert_eq!(
                result.as_ref().map(AisMessage::message_type),
                Ok(message_type),
                "Failed: {input:?}\n\t{result:?}"
            );
            assert_eq!(result.map(|message| message.mmsi()), Ok(mmsi));
        }
    }

    #[test]
    fn test_dispatch_failures() {
        let cases = [
            ("", AisError::UnsupportedMessageType(MessageType::Unrecognized(0))),
            (
                "85Mwp`1Kf3aCnsNvBWLi=wQuNhA5t43N`5nCuI=p<IBfVqnMgPGs",
                AisError::UnsupportedMessageType(MessageType::BinaryBroadcast),
            ),
            (
                "177KQJ5000G?tO`K>RA1wUbN",
                AisError::PayloadTooShort {
                    minimum: 28,
                    found: 24,
                },
            ),
        ];

        for (input, expected) in cases {
            let result = AisMessage::decode(input);
            assert_eq!(result, Err(expected), "Failed: {input:?}\n\t{result:?}");
        }
    }
}
