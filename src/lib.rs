//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` into strongly typed records, and decodes the
//! AIS and radar track payloads some of those sentences carry.
//!
//! Decoding is tolerant: a sentence parser never rejects a line. It returns a
//! [`Decoded`] record together with a [`Validity`] naming every field that could
//! not be decoded and was replaced by its default value.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Sentence, SentenceDecoder, sentences::{GGA, GpsQuality, NmeaSentence}};
//!
//! // Known sentence type
//! let decoded = GGA::decode("$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76");
//! assert_eq!(decoded.sentence.quality, GpsQuality::GpsFix);
//! assert_eq!(decoded.validity.failed_fields().collect::<Vec<_>>(), ["dgps_age", "dgps_station"]);
//!
//! // Any supported sentence type
//! let decoded = SentenceDecoder::new().decode("$GPHDT,274.07,T*03\r\n").unwrap();
//! assert!(matches!(decoded.sentence, NmeaSentence::HDT(_)));
//! ```
//!
//! ## Features
//!
//! - `ais` (default): binary decoding of AIS payloads carried by VDM/VDO.
//! - `serde`: `Serialize`/`Deserialize` for every record.

pub mod armor;
pub mod error;
pub mod fields;
pub mod lookup;
pub mod parse;
pub mod parsing;
pub mod sentences;
pub mod track;

#[cfg(feature = "ais")]
pub mod ais;

mod decoder;

pub use decoder::{LineEndingMode, SentenceDecoder};
#[cfg(feature = "ais")]
pub use error::AisError;
pub use error::{Error, IResult, TrackError};
pub use fields::{Decoded, FieldDecoder, Header, Sentence, TokenCount, Validity};
pub use parse::{FieldDefault, NmeaParse};

/// Derive macro generating a [`Sentence`] implementation for fixed-layout
/// sentence structs.
pub use nmea0183_decoder_derive::Sentence;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
