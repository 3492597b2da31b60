#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, sentences::GpsQuality};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("GGA"))]
pub struct GGA {
    /// Fix time in UTC
    pub time: time::Time,
    #[nmea(coordinate)]
    /// Latitude in degrees, negative south
    pub latitude: f64,
    #[nmea(coordinate)]
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// GPS quality indicator
    pub quality: GpsQuality,
    /// Number of satellites in use
    pub satellites: u8,
    /// Horizontal dilution of precision
    pub hdop: f32,
    #[nmea(skip_after(1))]
    /// Antenna altitude above mean sea level in meters
    pub altitude: f32,
    #[nmea(skip_after(1))]
    /// Geoidal separation in meters
    pub geoidal_separation: f32,
    /// Age of differential GPS data in seconds
    pub dgps_age: f32,
    /// Differential reference station ID
    pub dgps_station: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::DEFAULT_COORDINATE;

    #[test]
    fn test_gga_decoding() {
        let decoded = GGA::decode(
            "$GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B",
        );

        let gga = decoded.sentence;
        assert_eq!(gga.time, time::Time::from_hms(9, 27, 25).unwrap());
        assert_eq!(gga.latitude, 47.0 + 17.11399 / 60.0);
        assert_eq!(gga.longitude, 8.0 + 33.91590 / 60.0);
        assert_eq!(gga.quality, GpsQuality::GpsFix);
        assert_eq!(gga.satellites, 8);
        assert_eq!(gga.hdop, 1.01);
        assert_eq!(gga.altitude, 499.6);
        assert_eq!(gga.geoidal_separation, 48.0);
        assert_eq!(gga.dgps_age, 0.0);
        assert_eq!(gga.dgps_station, 0);
        assert_eq!(
            decoded.validity.failed_fields().collect::<Vec<_>>(),
            ["dgps_age", "dgps_station"]
        );
    }

    #[test]
    fn test_gga_quality() {
        let cases = [
            ("0", GpsQuality::NotValid, false),
            ("1", GpsQuality::GpsFix, false),
            ("2", GpsQuality::DifferentialFix, false),
            ("3", GpsQuality::PpsFix, false),
            ("4", GpsQuality::RealTimeKinematic, false),
            ("5", GpsQuality::NotValid, true),
            ("8", GpsQuality::NotValid, true),
            ("X", GpsQuality::NotValid, true),
        ];

        for (quality, expected, failed) in cases {
            let input = format!("$GPGGA,123519,4807.038,N,01131.000,E,{quality},08,0.9,545.4,M,46.9,M,2.0,0031");
            let decoded = GGA::decode(&input);
            assert_eq!(decoded.sentence.quality, expected, "Failed: {input:?}\n\t{decoded:?}");
            assert_eq!(decoded.validity.field_failed("quality"), Some(failed));
            assert_eq!(decoded.validity.failed_fields().count(), usize::from(failed));
        }
    }

    #[test]
    fn test_gga_failed_fields() {
        let cases = [
            "$GPGGA,,,,,,,,,,,,,,",
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M",
            "$GPGLL,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
            "",
        ];

        for input in cases {
            let decoded = GGA::decode(input);
            assert!(decoded.validity.is_all_failed(), "Failed: {input:?}\n\t{decoded:?}");
            assert_eq!(decoded.sentence.time, time::Time::MIDNIGHT);
            assert_eq!(decoded.sentence.latitude, DEFAULT_COORDINATE);
            assert_eq!(decoded.sentence.longitude, DEFAULT_COORDINATE);
            assert_eq!(decoded.sentence.quality, GpsQuality::NotValid);
            assert_eq!(decoded.sentence.satellites, 0);
        }
    }
}
