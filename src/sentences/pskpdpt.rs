#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// PSKPDPT - Depth of Water for multiple transducer installation
///
/// Proprietary SkipperDepth sentence.
///
/// ```text
///           1   2   3   4  5  6
///           |   |   |   |  |  |
///  $PSKPDPT,x.x,x.x,x.x,xx,xx,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(proprietary("PSKPDPT"))]
pub struct PSKPDPT {
    /// Water depth relative to the transducer, in meters
    pub depth: f32,
    /// Offset from the transducer in meters
    pub offset: f32,
    /// Maximum range scale in use, in meters
    pub max_range: f32,
    /// Bottom echo strength, 0 to 9
    pub echo_strength: u8,
    /// Transducer channel, 1 to 6
    pub channel: u8,
    /// Transducer location
    pub transducer_location: String,
}
