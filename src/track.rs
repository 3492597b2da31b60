//! # TTD Track Data
//!
//! Decoder for the encapsulated track payload of the TTD (Tracked Target Data)
//! sentence. The payload uses the same six-bit armoring as AIS but its own
//! layout: every 15 characters carry one 90-bit track entry.
//!
//! ```text
//!  bits  field
//!   2    format version (0)
//!  10    target number
//!  12    true bearing, 0.1 degree
//!  12    speed, 0.1 knot
//!  12    course, 0.1 degree
//!  12    AIS reported heading, 0.1 degree
//!   3    target status
//!   1    operation mode
//!  14    distance, 0.01 nautical mile
//!   1    speed mode
//!   1    stabilisation mode
//!   2    reserved
//!   8    correlation number
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    TrackError,
    armor::{Bits, unarmor},
};

/// Armored characters per track entry.
pub const TRACK_CHARS: usize = 15;

/// Status of a tracked target.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrackStatus {
    /// 0 - Not tracking
    #[default]
    NonTracking,
    /// 1 - Acquiring target
    Acquiring,
    /// 2 - Lost target
    Lost,
    /// 4 - Tracking
    Tracking,
    /// 6 - Tracking, CPA alarm
    TrackingCpaAlarm,
    /// 7 - Tracking, CPA alarm acknowledged
    TrackingCpaAlarmAcknowledged,
    /// 3 or 5 - Reserved
    Reserved(u8),
}

impl From<u8> for TrackStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => TrackStatus::NonTracking,
            1 => TrackStatus::Acquiring,
            2 => TrackStatus::Lost,
            4 => TrackStatus::Tracking,
            6 => TrackStatus::TrackingCpaAlarm,
            7 => TrackStatus::TrackingCpaAlarmAcknowledged,
            other => TrackStatus::Reserved(other),
        }
    }
}

/// One target of a TTD track payload.
///
/// Only format version 0 is decoded. An entry with any other version keeps that
/// version and leaves every other field at its default.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Track {
    /// Format version of the entry
    pub version: u8,
    /// Target number, 0 to 1023
    pub target_number: u16,
    /// True bearing from own ship in degrees
    pub bearing: f32,
    /// Target speed in knots
    pub speed: f32,
    /// Target course in degrees
    pub course: f32,
    /// Heading reported by the target over AIS, in degrees
    pub heading: f32,
    /// Target status
    pub status: TrackStatus,
    /// Set for a simulated test target
    pub test_target: bool,
    /// Distance from own ship in nautical miles
    pub distance: f32,
    /// Set when speed and course are relative to own ship
    pub relative_motion: bool,
    /// Set when speed and course are stabilised through the water
    pub water_stabilised: bool,
    /// Correlation number linking the target with an AIS report
    pub correlation: u8,
}

impl Track {
    fn from_bits(bits: Bits<'_>) -> Self {
        let version = bits.unsigned(0, 2) as u8;
        if version != 0 {
            log::trace!("track entry with unsupported format version {version}");
            return Track {
                version,
                ..Track::default()
            };
        }

        Track {
            version,
            target_number: bits.unsigned(2, 10) as u16,
            bearing: bits.unsigned(12, 12) as f32 * 0.1,
            speed: bits.unsigned(24, 12) as f32 * 0.1,
            course: bits.unsigned(36, 12) as f32 * 0.1,
            heading: bits.unsigned(48, 12) as f32 * 0.1,
            status: TrackStatus::from(bits.unsigned(60, 3) as u8),
            test_target: bits.flag(63),
            distance: bits.unsigned(64, 14) as f32 * 0.01,
            relative_motion: bits.flag(78),
            water_stabilised: bits.flag(79),
            correlation: bits.unsigned(82, 8) as u8,
        }
    }
}

/// Decodes a TTD track payload into one [`Track`] per 15 characters.
///
/// A payload whose length is not a multiple of 15 yields no tracks at all.
///
/// ```rust
/// use nmea0183_decoder::{TrackError, track::decode_tracks};
///
/// assert_eq!(decode_tracks("000000000000000").map(|tracks| tracks.len()), Ok(1));
/// assert_eq!(decode_tracks("0000"), Err(TrackError::InvalidLength(4)));
/// ```
pub fn decode_tracks(data: &str) -> Result<Vec<Track>, TrackError> {
    let length = data.chars().count();
    if length % TRACK_CHARS != 0 {
        log::trace!("track data length {length} is not a multiple of {TRACK_CHARS}");
        return Err(TrackError::InvalidLength(length));
    }

    let bits = unarmor(data);
    let tracks = bits
        .chunks_exact(TRACK_CHARS * 6)
        .map(|entry| Track::from_bits(Bits::new(entry)))
        .collect();

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    // Packs `(value, width)` fields into an armored string.
    fn armor(fields: &[(u64, usize)]) -> String {
        let total: usize = fields.iter().map(|(_, width)| width).sum();
        let mut bits = bitvec![u8, Msb0; 0; total.div_ceil(6) * 6];

        let mut offset = 0;
        for &(value, width) in fields {
            bits[offset..offset + width].store_be(value);
            offset += width;
        }

        bits.chunks(6)
            .map(|chunk| chunk.load_be::<u8>())
            .map(|value| char::from(if value < 40 { value + 48 } else { value + 56 }))
            .collect()
    }

    fn entry(version: u64) -> String {
        armor(&[
            (version, 2),
            (42, 10),
            (1234, 12),
            (155, 12),
            (3599, 12),
            (900, 12),
            (6, 3),
            (1, 1),
            (1250, 14),
            (1, 1),
            (0, 1),
            (0, 2),
            (17, 8),
        ])
    }

    #[test]
    fn test_decode_tracks() {
        let data = entry(0);
        let tracks = decode_tracks(&data);

        let Ok([track]) = tracks.as_deref() else {
            panic!("Failed: {data:?}\n\t{tracks:?}");
        };
        assert_eq!(track.version, 0);
        assert_eq!(track.target_number, 42);
        assert!((track.bearing - 123.4).abs() < 1e-3);
        assert!((track.speed - 15.5).abs() < 1e-3);
        assert!((track.course - 359.9).abs() < 1e-3);
        assert!((track.heading - 90.0).abs() < 1e-3);
        assert_eq!(track.status, TrackStatus::TrackingCpaAlarm);
        assert!(track.test_target);
        assert!((track.distance - 12.5).abs() < 1e-3);
        assert!(track.relative_motion);
        assert!(!track.water_stabilised);
        assert_eq!(track.correlation, 17);
    }

    #[test]
    fn test_decode_multiple_tracks() {
        let data = [entry(0), entry(2), entry(0)].concat();
        let tracks = decode_tracks(&data).unwrap_or_default();

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].target_number, 42);
        assert_eq!(
            tracks[1],
            Track {
                version: 2,
                ..Track::default()
            }
        );
        assert_eq!(tracks[2].correlation, 17);
    }

    #[test]
    fn test_invalid_length() {
        let cases = [1, 14, 16, 29];

        for length in cases {
            let data = "0".repeat(length);
            let result = decode_tracks(&data);
            assert_eq!(result, Err(TrackError::InvalidLength(length)), "Failed: {data:?}");
        }

        assert_eq!(decode_tracks(""), Ok(vec![]));
    }

    #[test]
    fn test_track_status() {
        let cases = [
            (0, TrackStatus::NonTracking),
            (1, TrackStatus::Acquiring),
            (2, TrackStatus::Lost),
            (3, TrackStatus::Reserved(3)),
            (4, TrackStatus::Tracking),
            (5, TrackStatus::Reserved(5)),
            (6, TrackStatus::TrackingCpaAlarm),
            (7, TrackStatus::TrackingCpaAlarmAcknowledged),
        ];

        for (input, expected) in cases {
            assert_eq!(TrackStatus::from(input), expected, "Failed: {input:?}");
        }
    }
}
