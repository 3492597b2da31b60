#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// HDM - Heading - Magnetic
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdm_heading_magnetic>
///
/// ```text
///         1   2
///         |   |
///  $--HDM,x.x,M*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("HDM"))]
pub struct HDM {
    #[nmea(skip_after(1))]
    /// Heading in degrees magnetic
    pub heading_magnetic: f32,
}
