#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, sentences::Status};

/// VBW - Dual Ground/Water Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vbw_dual_groundwater_speed>
///
/// ```text
///         1   2   3 4   5   6 7   8 9   10
///         |   |   | |   |   | |   | |   |
///  $--VBW,x.x,x.x,A,x.x,x.x,A,x.x,A,x.x,A*hh<CR><LF>
/// ```
///
/// Longitudinal speeds are positive ahead, transverse speeds positive to
/// starboard. Fields 7 to 10 (stern speeds) were added in NMEA 3.0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VBW"), min_tokens(7))]
pub struct VBW {
    /// Longitudinal water speed in knots
    pub longitudinal_water_speed: f32,
    /// Transverse water speed in knots
    pub transverse_water_speed: f32,
    /// Status of the water speeds
    pub water_speed_status: Status,
    /// Longitudinal ground speed in knots
    pub longitudinal_ground_speed: f32,
    /// Transverse ground speed in knots
    pub transverse_ground_speed: f32,
    /// Status of the ground speeds
    pub ground_speed_status: Status,
    /// Stern transverse water speed in knots
    pub stern_water_speed: f32,
    /// Status of the stern water speed
    pub stern_water_speed_status: Status,
    /// Stern transverse ground speed in knots
    pub stern_ground_speed: f32,
    /// Status of the stern ground speed
    pub stern_ground_speed_status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vbw_decoding() {
        let decoded = VBW::decode("$VMVBW,12.3,0.07,A,11.78,0.12,A,0.15,A,0.15,A");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let vbw = decoded.sentence;
        assert_eq!(vbw.longitudinal_water_speed, 12.3);
        assert_eq!(vbw.transverse_water_speed, 0.07);
        assert_eq!(vbw.water_speed_status, Status::Valid);
        assert_eq!(vbw.longitudinal_ground_speed, 11.78);
        assert_eq!(vbw.stern_ground_speed, 0.15);
    }

    #[test]
    fn test_vbw_without_stern_speeds() {
        let decoded = VBW::decode("$IIVBW,-0.4,0.2,V,,,V*52");

        assert_eq!(decoded.sentence.longitudinal_water_speed, -0.4);
        assert_eq!(decoded.sentence.water_speed_status, Status::Invalid);
        assert_eq!(decoded.validity.bits(), 0b11_1101_1000);
    }
}
