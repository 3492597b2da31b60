#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{Status, WindReference, WindSpeedUnits},
};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("MWV"), exact_tokens(6))]
pub struct MWV {
    /// Wind angle, 0 to 359 degrees
    pub wind_angle: f32,
    /// Whether the angle is relative to the bow or theoretical
    pub reference: WindReference,
    /// Wind speed
    pub wind_speed: f32,
    /// Wind speed units
    pub speed_units: WindSpeedUnits,
    /// Data status
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mwv_decoding() {
        let decoded = MWV::decode("$WIMWV,214.8,R,0.1,K,A*28");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let mwv = decoded.sentence;
        assert_eq!(mwv.wind_angle, 214.8);
        assert_eq!(mwv.reference, WindReference::Relative);
        assert_eq!(mwv.wind_speed, 0.1);
        assert_eq!(mwv.speed_units, WindSpeedUnits::KilometersPerHour);
        assert_eq!(mwv.status, Status::Valid);
    }

    #[test]
    fn test_mwv_token_count() {
        let cases = [
            "$WIMWV,214.8,R,0.1,K",
            "$WIMWV,214.8,R,0.1,K,A,extra",
            "$WIMWV,214.8,R,0.1,K,A,,",
        ];

        for input in cases {
            let decoded = MWV::decode(input);
            assert!(decoded.validity.is_all_failed(), "Failed: {input:?}\n\t{decoded:?}");
            assert_eq!(decoded.sentence.speed_units, WindSpeedUnits::MetersPerSecond);
        }
    }

    #[test]
    fn test_mwv_unknown_letters() {
        let cases = [
            ("$WIMWV,20.0,T,5.0,X,A", WindReference::Theoretical, WindSpeedUnits::MetersPerSecond),
            ("$WIMWV,214.8,X,0.1,Z,A", WindReference::Relative, WindSpeedUnits::MetersPerSecond),
            ("$WIMWV,214.8,?,0.1,N,A", WindReference::Relative, WindSpeedUnits::Knots),
        ];

        for (input, reference, speed_units) in cases {
            let decoded = MWV::decode(input);
            assert!(decoded.is_valid(), "Failed: {input:?}\n\t{decoded:?}");
            assert_eq!(decoded.sentence.reference, reference);
            assert_eq!(decoded.sentence.speed_units, speed_units);
        }
    }

    #[test]
    fn test_mwv_blank_letters() {
        let decoded = MWV::decode("$WIMWV,20.0,,5.0,,A");
        assert_eq!(
            decoded.validity.failed_fields().collect::<Vec<_>>(),
            ["reference", "speed_units"]
        );
        assert_eq!(decoded.sentence.reference, WindReference::Relative);
        assert_eq!(decoded.sentence.speed_units, WindSpeedUnits::MetersPerSecond);
    }
}
