#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// VLW - Distance Traveled through Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vlw_distance_traveled_through_water>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VLW,x.x,N,x.x,N,x.x,N,x.x,N*hh<CR><LF>
/// ```
///
/// Fields 5 to 8 (ground distances) were added in NMEA 3.0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VLW"), min_tokens(5))]
pub struct VLW {
    #[nmea(skip_after(1))]
    /// Total cumulative water distance in nautical miles
    pub total_water_distance: f32,
    #[nmea(skip_after(1))]
    /// Water distance since reset in nautical miles
    pub trip_water_distance: f32,
    #[nmea(skip_after(1))]
    /// Total cumulative ground distance in nautical miles
    pub total_ground_distance: f32,
    #[nmea(skip_after(1))]
    /// Ground distance since reset in nautical miles
    pub trip_ground_distance: f32,
}
