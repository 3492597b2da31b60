#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// MWD - Wind Direction & Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwd_wind_direction_speed>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--MWD,x.x,T,x.x,M,x.x,N,x.x,M*hh<CR><LF>
/// ```
///
/// Directions are the ones the wind blows from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("MWD"))]
pub struct MWD {
    #[nmea(skip_after(1))]
    /// Wind direction in degrees true
    pub direction_true: f32,
    #[nmea(skip_after(1))]
    /// Wind direction in degrees magnetic
    pub direction_magnetic: f32,
    #[nmea(skip_after(1))]
    /// Wind speed in knots
    pub speed_knots: f32,
    #[nmea(skip_after(1))]
    /// Wind speed in meters per second
    pub speed_mps: f32,
}
