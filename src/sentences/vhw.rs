#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// VHW - Water speed and heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VHW"))]
pub struct VHW {
    #[nmea(skip_after(1))]
    /// Heading in degrees true
    pub heading_true: f32,
    #[nmea(skip_after(1))]
    /// Heading in degrees magnetic
    pub heading_magnetic: f32,
    #[nmea(skip_after(1))]
    /// Speed through water in knots
    pub speed_knots: f32,
    #[nmea(skip_after(1))]
    /// Speed through water in kilometers per hour
    pub speed_kph: f32,
}
