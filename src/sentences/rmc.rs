#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{FaaMode, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("RMC"), min_tokens(12))]
pub struct RMC {
    /// Fix time in UTC
    pub time: time::Time,
    /// Data status
    pub status: Status,
    #[nmea(coordinate)]
    /// Latitude in degrees, negative south
    pub latitude: f64,
    #[nmea(coordinate)]
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed_knots: f32,
    /// Track made good in degrees true
    pub course_true: f32,
    /// Fix date, `ddmmyy` with the year taken as 20yy
    pub date: time::Date,
    #[nmea(directional(('E', 'W')))]
    /// Magnetic variation in degrees, negative west
    pub magnetic_variation: f32,
    /// FAA mode indicator, missing before NMEA 2.3
    pub mode: FaaMode,
}

impl RMC {
    /// The fix date and time as a UTC date-time.
    pub fn date_time(&self) -> time::OffsetDateTime {
        self.date.with_time(self.time).assume_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{DEFAULT_COORDINATE, DEFAULT_DATE};

    #[test]
    fn test_rmc_decoding() {
        let decoded = RMC::decode(
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*6A",
        );
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let rmc = decoded.sentence;
        assert_eq!(rmc.time, time::Time::from_hms(12, 35, 19).unwrap());
        assert_eq!(rmc.status, Status::Valid);
        assert_eq!(rmc.latitude, 48.0 + 7.038 / 60.0);
        assert_eq!(rmc.longitude, 11.0 + 31.0 / 60.0);
        assert_eq!(rmc.speed_knots, 22.4);
        assert_eq!(rmc.course_true, 84.4);
        assert_eq!(rmc.date, time::macros::date!(2094 - 03 - 23));
        assert_eq!(rmc.magnetic_variation, -3.1);
        assert_eq!(rmc.mode, FaaMode::Autonomous);
        assert_eq!(
            rmc.date_time(),
            time::macros::datetime!(2094-03-23 12:35:19 UTC)
        );
    }

    #[test]
    fn test_rmc_no_fix() {
        let decoded = RMC::decode("$GPRMC,,V,,,,,,,,,,N");

        assert_eq!(decoded.sentence.status, Status::Invalid);
        assert_eq!(decoded.sentence.mode, FaaMode::DataNotValid);
        assert_eq!(decoded.sentence.latitude, DEFAULT_COORDINATE);
        assert_eq!(decoded.sentence.date, DEFAULT_DATE);
        assert_eq!(
            decoded.validity.failed_fields().collect::<Vec<_>>(),
            [
                "time",
                "latitude",
                "longitude",
                "speed_knots",
                "course_true",
                "date",
                "magnetic_variation"
            ]
        );
    }

    #[test]
    fn test_rmc_invalid_date() {
        let decoded = RMC::decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,320394,003.1,W");

        assert_eq!(decoded.validity.failed_fields().collect::<Vec<_>>(), ["date", "mode"]);
        assert_eq!(decoded.sentence.date, DEFAULT_DATE);
    }
}
