//! # Error Types
//!
//! This module defines the error types used throughout the decoding library.
//!
//! Sentence parsers never fail as a whole: they always hand back a record and a
//! [`Validity`](crate::Validity). The types here surface in three places only:
//!
//! - nom parsers operating on a single field token ([`Error`] / [`IResult`]),
//! - the [`SentenceDecoder`](crate::SentenceDecoder) dispatch entry point,
//! - the binary decoders ([`AisError`], [`TrackError`]).

use nom::error::{ErrorKind, FromExternalError, ParseError};

#[cfg(feature = "ais")]
use crate::ais::MessageType;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while lexing fields or
/// dispatching a sentence.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences are ASCII-only; anything else is rejected before tokenizing.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The token could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    #[error("parsing error: {0:?}")]
    ParsingError(E),

    /// The sentence mnemonic is not recognized by the dispatcher.
    ///
    /// Contains the sentence identifier token that caused the error.
    #[error("unrecognized sentence: {0:?}")]
    UnrecognizedMessage(I),

    /// A token was lexically well formed but its value is out of range for
    /// the field (for example a GGA quality indicator of 7).
    #[error("invalid field: {0:?}")]
    InvalidField(I),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Failure of an AIS binary decoder.
///
/// AIS decoding is all-or-nothing: once the payload is too short or carries a
/// different type tag, no field of the record can be trusted.
#[cfg(feature = "ais")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AisError {
    /// The armored payload holds fewer characters than the message type needs.
    #[error("payload too short: {found} characters, at least {minimum} required")]
    PayloadTooShort {
        /// Minimum number of armored characters for the message type
        minimum: usize,
        /// Number of armored characters found
        found: usize,
    },

    /// The payload's leading 6-bit message type does not match the decoder.
    #[error("message type mismatch: payload carries {0:?}")]
    MessageTypeMismatch(MessageType),

    /// The payload carries a message type no decoder is implemented for.
    #[error("unsupported message type {0:?}")]
    UnsupportedMessageType(MessageType),
}

/// Failure of the TTD track payload decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    /// The encapsulated track data is not a whole number of 15-character entries.
    #[error("track data length {0} is not a multiple of 15")]
    InvalidLength(usize),
}
