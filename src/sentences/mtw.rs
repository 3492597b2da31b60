#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// MTW - Mean Temperature of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mtw_mean_temperature_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--MTW,x.x,C*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("MTW"))]
pub struct MTW {
    #[nmea(skip_after(1))]
    /// Water temperature in degrees Celsius
    pub temperature: f32,
}
