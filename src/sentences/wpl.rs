#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// WPL - Waypoint Location
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_wpl_waypoint_location>
///
/// ```text
///         1       2 3        4 5
///         |       | |        | |
///  $--WPL,llll.ll,a,yyyyy.yy,a,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("WPL"))]
pub struct WPL {
    #[nmea(coordinate)]
    /// Waypoint latitude in degrees, negative south
    pub latitude: f64,
    #[nmea(coordinate)]
    /// Waypoint longitude in degrees, negative west
    pub longitude: f64,
    /// Waypoint identifier
    pub waypoint_id: String,
}
