#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, sentences::Status};

/// ROT - Rate Of Turn
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rot_rate_of_turn>
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("ROT"))]
pub struct ROT {
    /// Rate of turn in degrees per minute, negative to port
    pub rate_of_turn: f32,
    /// Data status
    pub status: Status,
}
