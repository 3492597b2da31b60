//! # Sentence Decoder
//!
//! Entry point for lines whose sentence type is not known in advance.
//!
//! [`SentenceDecoder`] handles the framing around a sentence before it reaches
//! the per-sentence parsers: the line must be ASCII, start with `$` or `!`, and
//! end (or not end) with `\r\n` as configured. The checksum token is carried
//! through untouched and is never verified.

use nom::{
    Compare, Err, FindSubstring, Input, Parser,
    bytes::complete::{tag, take_until},
    character::complete::one_of,
    combinator::{opt, peek},
    error::{ErrorKind, ParseError},
};

use crate::{Decoded, Error, IResult, parsing::consumed, sentences::NmeaSentence};

/// Defines how the decoder should handle CRLF line endings.
///
/// Sentences read from a serial port or a log file end with a carriage return and
/// line feed (`\r\n`); sentences handed over by an API usually have them stripped.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    #[default]
    /// A trailing `\r\n` is accepted and removed, but not required.
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// The decoder will fail if the line does not end with `\r\n`.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// The decoder will fail if the line contains `\r\n`.
    Forbidden,
}

/// Decodes lines of any supported sentence type.
///
/// Uses the builder pattern to configure the framing before decoding.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{LineEndingMode, SentenceDecoder, sentences::NmeaSentence};
///
/// let decoder = SentenceDecoder::new();
///
/// let decoded = decoder.decode("$GPHDT,274.07,T*03\r\n").unwrap();
/// assert!(decoded.is_valid());
/// assert!(matches!(decoded.sentence, NmeaSentence::HDT(_)));
///
/// // A blank field is reported, not rejected
/// let decoded = decoder.decode("$GPHDT,,T").unwrap();
/// assert!(!decoded.is_valid());
///
/// // Unknown mnemonics are rejected
/// assert!(decoder.decode("$GPUNK,1,2,3").is_err());
/// ```
///
/// ## Configuration
///
/// ```rust
/// use nmea0183_decoder::{LineEndingMode, SentenceDecoder};
///
/// let strict = SentenceDecoder::new().line_ending_mode(LineEndingMode::Required);
/// assert!(strict.decode("$GPHDT,274.07,T*03\r\n").is_ok());
/// assert!(strict.decode("$GPHDT,274.07,T*03").is_err()); // (missing CRLF)
///
/// let stripped = SentenceDecoder::new().line_ending_mode(LineEndingMode::Forbidden);
/// assert!(stripped.decode("$GPHDT,274.07,T*03").is_ok());
/// assert!(stripped.decode("$GPHDT,274.07,T*03\r\n").is_err()); // (CRLF present)
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceDecoder {
    /// Line ending mode for the decoder.
    line_ending_mode: LineEndingMode,
}

impl SentenceDecoder {
    /// Creates a decoder with [`LineEndingMode::Optional`].
    pub fn new() -> Self {
        SentenceDecoder {
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets the line ending mode for the decoder.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Decodes one line.
    ///
    /// Framing problems (non-ASCII input, a missing start character, a line
    /// ending that violates the configured mode) and unrecognized mnemonics are
    /// errors. Anything past that point is a [`Decoded`] record whose
    /// [`Validity`](crate::Validity) reports the fields that failed.
    pub fn decode<'a>(
        &self,
        line: &'a str,
    ) -> Result<Decoded<NmeaSentence>, Error<&'a str, nom::error::Error<&'a str>>> {
        if !line.is_ascii() {
            log::trace!("rejected non-ASCII line");
            return Err(Error::NonAscii);
        }

        let framed: IResult<&str, ()> = peek(one_of("$!"))
            .parse(line)
            .and_then(|(i, _)| crlf(self.line_ending_mode).parse(i));

        let (content, _) = framed.map_err(|e| match e {
            Err::Error(e) | Err::Failure(e) => e,
            Err::Incomplete(_) => Error::from_error_kind(line, ErrorKind::Complete),
        })?;

        NmeaSentence::decode(content)
    }
}

/// Parses CRLF line endings based on configuration.
///
/// Returns the line without its ending as the remaining input.
fn crlf<'a, I, E: ParseError<I>>(mode: LineEndingMode) -> impl Fn(I) -> nom::IResult<I, (), E>
where
    I: Input + Compare<&'a str> + FindSubstring<&'a str>,
{
    move |i: I| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        let data = match (mode, data) {
            (LineEndingMode::Forbidden, Some(_)) | (LineEndingMode::Required, None) => {
                return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
            }
            (_, Some(data)) => {
                let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                data
            }
            (_, None) => i,
        };

        Ok((data, ()))
    }
}

#[cfg(test)]
mod tests {
    mod crlf;
    mod dispatch;
}
