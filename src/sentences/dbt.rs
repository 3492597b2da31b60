#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// DBT - Depth below transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("DBT"))]
pub struct DBT {
    #[nmea(skip_after(1))]
    /// Depth in feet
    pub depth_feet: f32,
    #[nmea(skip_after(1))]
    /// Depth in meters
    pub depth_meters: f32,
    #[nmea(skip_after(1))]
    /// Depth in fathoms
    pub depth_fathoms: f32,
}
