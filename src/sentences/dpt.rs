#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2   3
///         |   |   |
///  $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// The maximum range scale field was added in NMEA 3.0 and is often missing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("DPT"), min_tokens(3))]
pub struct DPT {
    /// Water depth relative to the transducer, in meters
    pub depth: f32,
    /// Offset from the transducer in meters; positive means distance to the
    /// waterline, negative means distance to the keel
    pub offset: f32,
    /// Maximum range scale in use, in meters
    pub max_range: f32,
}
