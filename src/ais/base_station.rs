#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::armor::Bits;

use super::{AisDecode, EpfdType, MessageType, PositionAccuracy, Raim, degrees};

/// Base station report, message type 4.
///
/// Carries the UTC date and time of the base station alongside its position.
/// Unavailable date and time parts are transmitted as year 0, month 0, day 0,
/// hour 24, minute 60 and second 60.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStationReport {
    /// Repeat indicator
    pub repeat: u8,
    pub mmsi: u32,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub position_accuracy: PositionAccuracy,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Type of position fixing device
    pub epfd: EpfdType,
    pub raim: Raim,
    /// Communication state of the radio
    pub radio_status: u32,
}

impl BaseStationReport {
    /// The report time, or `None` if any part of it is unavailable or out of range.
    ///
    /// ```rust
    /// use nmea0183_decoder::ais::{AisDecode, BaseStationReport};
    /// use time::macros::datetime;
    ///
    /// let report = BaseStationReport::decode("403OviQuMGCqWrRO9>E6fE700@GO").unwrap();
    /// assert_eq!(report.utc(), Some(datetime!(2007-05-14 19:57:39)));
    /// ```
    pub fn utc(&self) -> Option<time::PrimitiveDateTime> {
        let month = time::Month::try_from(self.month).ok()?;
        let date = time::Date::from_calendar_date(i32::from(self.year), month, self.day).ok()?;
        let time = time::Time::from_hms(self.hour, self.minute, self.second).ok()?;

        Some(time::PrimitiveDateTime::new(date, time))
    }
}

impl AisDecode for BaseStationReport {
    const MIN_CHARS: usize = 28;

    fn accepts(message_type: MessageType) -> bool {
        message_type == MessageType::BaseStationReport
    }

    fn from_bits(bits: Bits<'_>) -> Self {
        BaseStationReport {
            repeat: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
            year: bits.unsigned(38, 14) as u16,
            month: bits.unsigned(52, 4) as u8,
            day: bits.unsigned(56, 5) as u8,
            hour: bits.unsigned(61, 5) as u8,
            minute: bits.unsigned(66, 6) as u8,
            second: bits.unsigned(72, 6) as u8,
            position_accuracy: PositionAccuracy::from(bits.flag(78)),
            longitude: degrees(bits.signed(79, 28)),
            latitude: degrees(bits.signed(107, 27)),
            epfd: EpfdType::from(bits.unsigned(134, 4) as u8),
            raim: Raim::from(bits.flag(148)),
            radio_status: bits.unsigned(149, 19) as u32,
        }
    }
}
