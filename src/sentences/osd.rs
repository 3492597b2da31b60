#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{ReferenceSystem, SpeedUnits, Status},
};

/// OSD - Own Ship Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_osd_own_ship_data>
///
/// ```text
///         1   2 3   4 5   6 7   8   9
///         |   | |   | |   | |   |   |
///  $--OSD,x.x,A,x.x,a,x.x,a,x.x,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("OSD"))]
pub struct OSD {
    /// Heading in degrees true
    pub heading: f32,
    /// Heading status
    pub heading_status: Status,
    /// Vessel course in degrees true
    pub course: f32,
    /// Course reference
    pub course_reference: ReferenceSystem,
    /// Vessel speed
    pub speed: f32,
    /// Speed reference
    pub speed_reference: ReferenceSystem,
    /// Vessel set in degrees true
    pub set: f32,
    /// Vessel drift (speed)
    pub drift: f32,
    /// Units of speed and drift
    pub speed_units: SpeedUnits,
}
