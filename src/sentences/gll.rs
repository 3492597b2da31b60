#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Sentence,
    sentences::{FaaMode, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("GLL"), min_tokens(7))]
pub struct GLL {
    #[nmea(coordinate)]
    /// Latitude in degrees, negative south
    pub latitude: f64,
    #[nmea(coordinate)]
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Fix time in UTC
    pub time: time::Time,
    /// Data status
    pub status: Status,
    /// FAA mode indicator, missing before NMEA 2.3
    pub mode: FaaMode,
}
