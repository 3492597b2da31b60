#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// DBK - Depth Below Keel
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbk_depth_below_keel>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBK,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
///
/// Obsolete in favour of DPT.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("DBK"))]
pub struct DBK {
    #[nmea(skip_after(1))]
    /// Depth in feet
    pub depth_feet: f32,
    #[nmea(skip_after(1))]
    /// Depth in meters
    pub depth_meters: f32,
    #[nmea(skip_after(1))]
    /// Depth in fathoms
    pub depth_fathoms: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbk_decoding() {
        let decoded = DBK::decode("$SDDBK,1330.5,f,0405.5,M,0221.6,F*2E");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");
        assert_eq!(decoded.sentence.depth_feet, 1330.5);
        assert_eq!(decoded.sentence.depth_meters, 405.5);
        assert_eq!(decoded.sentence.depth_fathoms, 221.6);
    }

    #[test]
    fn test_dbk_wrong_header() {
        let decoded = DBK::decode("$SDDBT,1330.5,f,0405.5,M,0221.6,F");
        assert!(decoded.validity.is_all_failed());
        assert_eq!(decoded.validity.len(), 3);
    }
}
