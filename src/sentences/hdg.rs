#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// HDG - Heading - Deviation & Variation
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdg_heading_deviation_variation>
///
/// ```text
///         1   2   3 4   5
///         |   |   | |   |
///  $--HDG,x.x,x.x,a,x.x,a*hh<CR><LF>
/// ```
///
/// Deviation and variation are signed: easterly is positive, westerly negative.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("HDG"))]
pub struct HDG {
    /// Magnetic sensor heading in degrees
    pub heading: f32,
    #[nmea(directional(('E', 'W')))]
    /// Magnetic deviation in degrees
    pub deviation: f32,
    #[nmea(directional(('E', 'W')))]
    /// Magnetic variation in degrees
    pub variation: f32,
}

impl HDG {
    /// Heading corrected for deviation and variation, in degrees true.
    pub fn true_heading(&self) -> f32 {
        (self.heading + self.deviation + self.variation).rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdg_decoding() {
        let decoded = HDG::decode("$HCHDG,98.3,0.0,E,12.6,W*57");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");
        assert_eq!(decoded.sentence.heading, 98.3);
        assert_eq!(decoded.sentence.deviation, 0.0);
        assert_eq!(decoded.sentence.variation, -12.6);
    }

    #[test]
    fn test_hdg_missing_variation() {
        let decoded = HDG::decode("$HCHDG,101.1,,,7.1,X");

        assert_eq!(
            decoded.validity.failed_fields().collect::<Vec<_>>(),
            ["deviation", "variation"]
        );
        assert_eq!(decoded.sentence.heading, 101.1);
        assert_eq!(decoded.sentence.true_heading(), 101.1);
    }

    #[test]
    fn test_true_heading_wraps() {
        let hdg = HDG {
            heading: 355.0,
            deviation: 2.0,
            variation: 5.0,
        };
        assert_eq!(hdg.true_heading(), 2.0);
    }
}
