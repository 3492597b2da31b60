#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, sentences::FaaMode};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VTG"), min_tokens(9))]
pub struct VTG {
    #[nmea(skip_after(1))]
    /// Course over ground in degrees true
    pub course_true: f32,
    #[nmea(skip_after(1))]
    /// Course over ground in degrees magnetic
    pub course_magnetic: f32,
    #[nmea(skip_after(1))]
    /// Speed over ground in knots
    pub speed_knots: f32,
    #[nmea(skip_after(1))]
    /// Speed over ground in kilometers per hour
    pub speed_kph: f32,
    /// FAA mode indicator, missing before NMEA 2.3
    pub mode: FaaMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtg_decoding() {
        let decoded = VTG::decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let vtg = decoded.sentence;
        assert_eq!(vtg.course_true, 54.7);
        assert_eq!(vtg.course_magnetic, 34.4);
        assert_eq!(vtg.speed_knots, 5.5);
        assert_eq!(vtg.speed_kph, 10.2);
        assert_eq!(vtg.mode, FaaMode::Autonomous);
    }

    #[test]
    fn test_vtg_without_mode() {
        let decoded = VTG::decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K");

        assert_eq!(decoded.validity.failed_fields().collect::<Vec<_>>(), ["mode"]);
        assert_eq!(decoded.sentence.mode, FaaMode::DataNotValid);
        assert_eq!(decoded.sentence.speed_kph, 10.2);
    }
}
