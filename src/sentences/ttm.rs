#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{Acquisition, DistanceUnits, Reference, TargetStatus},
};

/// TTM - Tracked Target Message
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_ttm_tracked_target_message>
///
/// ```text
///                                         11     13
///         1  2   3   4 5   6   7 8   9   10|    12| 14        15
///         |  |   |   | |   |   | |   |   | |    | | |         |
///  $--TTM,xx,x.x,x.x,a,x.x,x.x,a,x.x,x.x,a,c--c,a,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// Unrecognised reference, unit, status and acquisition letters map to the
/// most common value instead of failing the field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("TTM"), min_tokens(14))]
pub struct TTM {
    /// Target number, 00 to 99
    pub target_number: u8,
    /// Target distance from own ship
    pub distance: f32,
    /// Bearing from own ship in degrees
    pub bearing: f32,
    /// Bearing reference
    pub bearing_reference: Reference,
    /// Target speed
    pub speed: f32,
    /// Target course in degrees
    pub course: f32,
    /// Course reference
    pub course_reference: Reference,
    /// Distance of closest point of approach
    pub cpa_distance: f32,
    /// Time to closest point of approach in minutes, negative when increasing
    pub cpa_time: f32,
    /// Units of distance and speed
    pub units: DistanceUnits,
    /// Target name
    pub target_name: String,
    /// Target status
    pub status: TargetStatus,
    /// `R` if this is the reference target
    pub reference_target: char,
    /// Time of data in UTC
    pub time: time::Time,
    /// Type of target acquisition
    pub acquisition: Acquisition,
}
