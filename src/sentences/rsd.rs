#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{DisplayRotation, RangeUnits},
};

/// RSD - Radar System Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rsd_radar_system_data>
///
/// ```text
///         1   2   3   4   5   6   7   8   9   10  11 12 13
///         |   |   |   |   |   |   |   |   |   |   |  |  |
///  $--RSD,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,a,a*hh<CR><LF>
/// ```
///
/// Fields 1 to 4 describe the origin 1 variable range marker and electronic
/// bearing line, fields 5 to 8 the origin 2 ones.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("RSD"))]
pub struct RSD {
    /// Origin 1 range from own ship
    pub origin1_range: f32,
    /// Origin 1 bearing in degrees from 0
    pub origin1_bearing: f32,
    /// Variable range marker 1 range
    pub vrm1_range: f32,
    /// Electronic bearing line 1 in degrees from 0
    pub ebl1_bearing: f32,
    /// Origin 2 range from own ship
    pub origin2_range: f32,
    /// Origin 2 bearing in degrees from 0
    pub origin2_bearing: f32,
    /// Variable range marker 2 range
    pub vrm2_range: f32,
    /// Electronic bearing line 2 in degrees from 0
    pub ebl2_bearing: f32,
    /// Cursor range from own ship
    pub cursor_range: f32,
    /// Cursor bearing in degrees clockwise from 0
    pub cursor_bearing: f32,
    /// Range scale in use
    pub range_scale: f32,
    /// Range units
    pub range_units: RangeUnits,
    /// Display rotation
    pub display_rotation: DisplayRotation,
}
