#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::armor::Bits;

use super::{AisDecode, EpfdType, MessageType, ShipType};

/// Reference point of the reported position, as distances to the hull in meters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

impl Dimensions {
    fn from_bits(bits: Bits<'_>, start: usize) -> Self {
        Dimensions {
            to_bow: bits.unsigned(start, 9) as u16,
            to_stern: bits.unsigned(start + 9, 9) as u16,
            to_port: bits.unsigned(start + 18, 6) as u8,
            to_starboard: bits.unsigned(start + 24, 6) as u8,
        }
    }

    /// Overall length in meters.
    pub fn length(&self) -> u16 {
        self.to_bow + self.to_stern
    }

    /// Overall beam in meters.
    pub fn beam(&self) -> u16 {
        u16::from(self.to_port) + u16::from(self.to_starboard)
    }
}

/// Estimated time of arrival, in UTC without a year. Zero month, zero day,
/// hour 24 and minute 60 mean not available.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Eta {
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Static and voyage related data, message type 5.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StaticVoyageData {
    /// Repeat indicator
    pub repeat: u8,
    pub mmsi: u32,
    /// AIS version indicator, 0 for ITU-R M.1371-1
    pub ais_version: u8,
    /// IMO ship identification number
    pub imo: u32,
    pub callsign: String,
    pub vessel_name: String,
    pub ship_type: ShipType,
    pub dimensions: Dimensions,
    /// Type of position fixing device
    pub epfd: EpfdType,
    pub eta: Eta,
    /// Maximum present static draught in meters
    pub draught: f32,
    pub destination: String,
    /// Data terminal equipment ready, `false` when available
    pub dte: bool,
}

impl AisDecode for StaticVoyageData {
    const MIN_CHARS: usize = 71;

    fn accepts(message_type: MessageType) -> bool {
        message_type == MessageType::StaticVoyageData
    }

    fn from_bits(bits: Bits<'_>) -> Self {
        StaticVoyageData {
            repeat: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
            ais_version: bits.unsigned(38, 2) as u8,
            imo: bits.unsigned(40, 30) as u32,
            callsign: bits.string(70, 42),
            vessel_name: bits.string(112, 120),
            ship_type: ShipType::from(bits.unsigned(232, 8) as u8),
            dimensions: Dimensions::from_bits(bits, 240),
            epfd: EpfdType::from(bits.unsigned(270, 4) as u8),
            eta: Eta {
                month: bits.unsigned(274, 4) as u8,
                day: bits.unsigned(278, 5) as u8,
                hour: bits.unsigned(283, 5) as u8,
                minute: bits.unsigned(288, 6) as u8,
            },
            draught: bits.unsigned(294, 8) as f32 * 0.1,
            destination: bits.string(302, 120),
            dte: bits.flag(422),
        }
    }
}

/// Static data report, message type 24.
///
/// Class B units send their static data in two parts, told apart by the part
/// number.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDataReport {
    /// Repeat indicator
    pub repeat: u8,
    pub mmsi: u32,
    pub part: StaticDataPart,
}

/// The part-specific content of a [`StaticDataReport`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum StaticDataPart {
    /// Part number 0
    PartA {
        vessel_name: String,
    },
    /// Part number 1
    PartB {
        ship_type: ShipType,
        /// Manufacturer mnemonic
        vendor_id: String,
        unit_model: u8,
        serial_number: u32,
        callsign: String,
        dimensions: Dimensions,
    },
    /// Part number 2 or 3, which have no defined content
    Unspecified(u8),
}

impl AisDecode for StaticDataReport {
    const MIN_CHARS: usize = 27;

    fn accepts(message_type: MessageType) -> bool {
        message_type == MessageType::StaticDataReport
    }

    fn from_bits(bits: Bits<'_>) -> Self {
        let part = match bits.unsigned(38, 2) as u8 {
            0 => StaticDataPart::PartA {
                vessel_name: bits.string(40, 120),
            },
            1 => StaticDataPart::PartB {
                ship_type: ShipType::from(bits.unsigned(40, 8) as u8),
                vendor_id: bits.string(48, 18),
                unit_model: bits.unsigned(66, 4) as u8,
                serial_number: bits.unsigned(70, 20) as u32,
                callsign: bits.string(90, 42),
                dimensions: Dimensions::from_bits(bits, 132),
            },
            other => StaticDataPart::Unspecified(other),
        };

        StaticDataReport {
            repeat: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
            part,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AisError;

    #[test]
    fn test_static_voyage_data() {
        let payload = "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880";
        let result = StaticVoyageData::decode(payload);

        let Ok(data) = result else {
            panic!("Failed: {payload:?}\n\t{result:?}");
        };
        assert_eq!(data.mmsi, 351759000);
        assert_eq!(data.ais_version, 0);
        assert_eq!(data.imo, 9134270);
        assert_eq!(data.callsign, "3FOF8");
        assert_eq!(data.vessel_name, "EVER DIADEM");
        assert_eq!(data.ship_type, ShipType::Cargo(0));
        assert_eq!(
            data.dimensions,
            Dimensions {
                to_bow: 225,
                to_stern: 70,
                to_port: 1,
                to_starboard: 31,
            }
        );
        assert_eq!(data.dimensions.length(), 295);
        assert_eq!(data.dimensions.beam(), 32);
        assert_eq!(data.epfd, EpfdType::Gps);
        assert_eq!(
            data.eta,
            Eta {
                month: 5,
                day: 15,
                hour: 14,
                minute: 0,
            }
        );
        assert!((data.draught - 12.2).abs() < 1e-4);
        assert_eq!(data.destination, "NEW YORK");
        assert!(!data.dte);
    }

    #[test]
    fn test_static_voyage_data_too_short() {
        // The first fragment of a two-part message.
        let payload = "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8";
        let result = StaticVoyageData::decode(payload);
        assert_eq!(
            result,
            Err(AisError::PayloadTooShort {
                minimum: 71,
                found: 60,
            })
        );
    }

    #[test]
    fn test_static_data_report() {
        let cases = [
            (
                "H42O55i18tMET00000000000000",
                StaticDataPart::PartA {
                    vessel_name: String::from("PROGUY"),
                },
            ),
            (
                "H42O55lti4hhhilD3nink000?050",
                StaticDataPart::PartB {
                    ship_type: ShipType::Passenger(0),
                    vendor_id: String::from("1D0"),
                    unit_model: 12,
                    serial_number: 199796,
                    callsign: String::from("TC6163"),
                    dimensions: Dimensions {
                        to_bow: 0,
                        to_stern: 15,
                        to_port: 0,
                        to_starboard: 5,
                    },
                },
            ),
        ];

        for (input, expected) in cases {
            let result = StaticDataReport::decode(input);
            assert_eq!(
                result.as_ref().map(|report| (report.mmsi, &report.part)),
                Ok((271041815, &expected)),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_static_data_unspecified_part() {
        // Part number bits set to 2 on top of the part A payload.
        let result = StaticDataReport::decode("H42O55q18tMET00000000000000");
        assert_eq!(
            result.map(|report| report.part),
            Ok(StaticDataPart::Unspecified(2))
        );
    }
}
