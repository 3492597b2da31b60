#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::armor::Bits;

use super::{
    AisDecode, ManeuverIndicator, MessageType, NavigationStatus, PositionAccuracy, Raim, degrees,
};

/// Class A position report, message types 1, 2 and 3.
///
/// Unavailable values keep their transmitted sentinels: longitude 181, latitude
/// 91, speed 102.3, course 360 and heading 511.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    /// 1, 2 or 3
    pub message_type: MessageType,
    /// Repeat indicator
    pub repeat: u8,
    pub mmsi: u32,
    pub navigation_status: NavigationStatus,
    /// Rate of turn in degrees per minute, positive to starboard
    pub rate_of_turn: f32,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    pub position_accuracy: PositionAccuracy,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Course over ground in degrees
    pub course_over_ground: f32,
    /// True heading in degrees
    pub true_heading: u16,
    /// UTC second of the report
    pub timestamp: u8,
    pub maneuver: ManeuverIndicator,
    pub raim: Raim,
    /// Communication state of the radio
    pub radio_status: u32,
}

impl AisDecode for PositionReport {
    const MIN_CHARS: usize = 28;

    fn accepts(message_type: MessageType) -> bool {
        matches!(
            message_type,
            MessageType::PositionReportScheduled
                | MessageType::PositionReportAssigned
                | MessageType::PositionReportResponse
        )
    }

    fn from_bits(bits: Bits<'_>) -> Self {
        PositionReport {
            message_type: MessageType::from(bits.unsigned(0, 6) as u8),
            repeat: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
            navigation_status: NavigationStatus::from(bits.unsigned(38, 4) as u8),
            rate_of_turn: rate_of_turn(bits.signed(42, 8) as i8),
            speed_over_ground: bits.unsigned(50, 10) as f32 * 0.1,
            position_accuracy: PositionAccuracy::from(bits.flag(60)),
            longitude: degrees(bits.signed(61, 28)),
            latitude: degrees(bits.signed(89, 27)),
            course_over_ground: bits.unsigned(116, 12) as f32 * 0.1,
            true_heading: bits.unsigned(128, 9) as u16,
            timestamp: bits.unsigned(137, 6) as u8,
            maneuver: ManeuverIndicator::from(bits.unsigned(143, 2) as u8),
            raim: Raim::from(bits.flag(148)),
            radio_status: bits.unsigned(149, 19) as u32,
        }
    }
}

/// Recovers a rate of turn in degrees per minute from its transmitted form.
///
/// The field carries `4.733 * sqrt(rate)`, signed. The raw value `0x80` (-128)
/// means no turn information is available and reads as zero.
///
/// ```rust
/// use nmea0183_decoder::ais::rate_of_turn;
///
/// assert_eq!(rate_of_turn(-128), 0.0);
/// assert!((rate_of_turn(-1) + 0.0446).abs() < 1e-4);
/// ```
pub fn rate_of_turn(raw: i8) -> f32 {
    if raw == i8::MIN {
        return 0.0;
    }

    let magnitude = f32::from(raw) / 4.733;
    magnitude * magnitude * f32::from(raw.signum())
}

/// Standard class B equipment position report, message type 18.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBPositionReport {
    /// Repeat indicator
    pub repeat: u8,
    pub mmsi: u32,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    pub position_accuracy: PositionAccuracy,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Course over ground in degrees
    pub course_over_ground: f32,
    /// True heading in degrees
    pub true_heading: u16,
    /// UTC second of the report
    pub timestamp: u8,
    /// Set for a carrier-sense (CS) unit, clear for a SOTDMA unit
    pub cs_unit: bool,
    /// Set when the unit has a display for message 12 and 14
    pub display: bool,
    /// Set when the unit has a DSC function
    pub dsc: bool,
    /// Set when the unit can use the whole marine band
    pub band: bool,
    /// Set when the unit accepts channel management by message 22
    pub message22: bool,
    /// Set in assigned mode
    pub assigned: bool,
    pub raim: Raim,
    /// Communication state of the radio
    pub radio_status: u32,
}

impl AisDecode for ClassBPositionReport {
    const MIN_CHARS: usize = 27;

    fn accepts(message_type: MessageType) -> bool {
        message_type == MessageType::ClassBPositionReport
    }

    fn from_bits(bits: Bits<'_>) -> Self {
        ClassBPositionReport {
            repeat: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
            speed_over_ground: bits.unsigned(46, 10) as f32 * 0.1,
            position_accuracy: PositionAccuracy::from(bits.flag(56)),
            longitude: degrees(bits.signed(57, 28)),
            latitude: degrees(bits.signed(85, 27)),
            course_over_ground: bits.unsigned(112, 12) as f32 * 0.1,
            true_heading: bits.unsigned(124, 9) as u16,
            timestamp: bits.unsigned(133, 6) as u8,
            cs_unit: bits.flag(141),
            display: bits.flag(142),
            dsc: bits.flag(143),
            band: bits.flag(144),
            message22: bits.flag(145),
            assigned: bits.flag(146),
            raim: Raim::from(bits.flag(147)),
            radio_status: bits.unsigned(148, 20) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AisError;

    #[test]
    fn test_position_report() {
        let payload = "177KQJ5000G?tO`K>RA1wUbN0TKH";
        let result = PositionReport::decode(payload);

        let Ok(report) = result else {
            panic!("Failed: {payload:?}\n\t{result:?}");
        };
        assert_eq!(report.message_type, MessageType::PositionReportScheduled);
        assert_eq!(report.repeat, 0);
        assert_eq!(report.mmsi, 477553000);
        assert_eq!(report.navigation_status, NavigationStatus::Moored);
        assert_eq!(report.rate_of_turn, 0.0);
        assert_eq!(report.speed_over_ground, 0.0);
        assert_eq!(report.position_accuracy, PositionAccuracy::Low);
        assert!((report.longitude - -122.345833).abs() < 1e-6);
        assert!((report.latitude - 47.582833).abs() < 1e-6);
        assert!((report.course_over_ground - 51.0).abs() < 1e-4);
        assert_eq!(report.true_heading, 181);
        assert_eq!(report.timestamp, 15);
        assert_eq!(report.maneuver, ManeuverIndicator::NotAvailable);
        assert_eq!(report.raim, Raim::NotInUse);
        assert_eq!(report.radio_status, 149208);
    }

    #[test]
    fn test_position_report_turning() {
        let report = PositionReport::decode("13u?etPv2;0n:dDPwUM1U1Cb069D");

        let Ok(report) = report else {
            panic!("Failed: {report:?}");
        };
        assert_eq!(report.mmsi, 265547250);
        assert_eq!(report.navigation_status, NavigationStatus::UnderWayUsingEngine);
        assert!((report.rate_of_turn - -2.857).abs() < 1e-3);
        assert!((report.speed_over_ground - 13.9).abs() < 1e-4);
        assert!((report.longitude - 11.832977).abs() < 1e-6);
        assert!((report.latitude - 57.660353).abs() < 1e-6);
        assert_eq!(report.true_heading, 41);
    }

    #[test]
    fn test_position_report_rejects() {
        let cases = [
            (
                "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880",
                AisError::MessageTypeMismatch(MessageType::StaticVoyageData),
            ),
            (
                "B5NJ;PP005l4ot5Isbl03wsUkP06",
                AisError::MessageTypeMismatch(MessageType::ClassBPositionReport),
            ),
            (
                "177KQJ5000G?tO`K>RA1wUbN0TK",
                AisError::PayloadTooShort {
                    minimum: 28,
                    found: 27,
                },
            ),
            (
                "",
                AisError::PayloadTooShort {
                    minimum: 28,
                    found: 0,
                },
            ),
        ];

        for (input, expected) in cases {
            let result = PositionReport::decode(input);
            assert_eq!(result, Err(expected), "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_rate_of_turn() {
        let cases: [(i8, f32); 7] = [
            (i8::MIN, 0.0),
            (0, 0.0),
            (-1, -0.04464),
            (1, 0.04464),
            (-8, -2.85698),
            (126, 708.7092),
            (-127, -720.0032),
        ];

        for (input, expected) in cases {
            let result = rate_of_turn(input);
            assert!(
                (result - expected).abs() < 1e-3 * expected.abs().max(1.0),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_class_b_position_report() {
        let payload = "B5NJ;PP005l4ot5Isbl03wsUkP06";
        let result = ClassBPositionReport::decode(payload);

        let Ok(report) = result else {
            panic!("Failed: {payload:?}\n\t{result:?}");
        };
        assert_eq!(report.mmsi, 367430530);
        assert_eq!(report.speed_over_ground, 0.0);
        assert!((report.longitude - -122.26732).abs() < 1e-6);
        assert!((report.latitude - 37.785035).abs() < 1e-6);
        assert_eq!(report.true_heading, 511);
        assert_eq!(report.timestamp, 55);
        assert!(report.cs_unit);
        assert!(!report.display);
        assert!(report.dsc);
        assert!(report.band);
        assert!(report.message22);
        assert!(!report.assigned);
        assert_eq!(report.raim, Raim::NotInUse);
        assert_eq!(report.radio_status, 917510);
    }

    #[test]
    fn test_class_b_short_payload() {
        // 27 characters are enough; the last radio status bits read as zero.
        let result = ClassBPositionReport::decode("B5NJ;PP005l4ot5Isbl03wsUkP0");
        assert_eq!(result.map(|report| report.mmsi), Ok(367430530));
    }
}
