//! # Parsing Utilities
//!
//! Combinators that apply the field primitives of [`parse`](crate::parse) to a
//! whole token.
//!
//! A field token must be consumed entirely: `12.5x` is a failed field rather
//! than a successful `12.5` with trailing noise.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    error::{ErrorKind, ParseError},
};

use crate::Error;

/// Runs `f` and fails with `e` unless it consumed all of its input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

/// Lexes a whole field token with `parser`, returning `None` if the parser
/// fails or leaves characters behind.
///
/// ```rust
/// use nmea0183_decoder::{NmeaParse, parsing::lex};
///
/// assert_eq!(lex(u16::parse, "120"), Some(120));
/// assert_eq!(lex(u16::parse, "120m"), None);
/// assert_eq!(lex(u16::parse, ""), None);
/// ```
pub fn lex<'a, O, P>(parser: P, token: &'a str) -> Option<O>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str, nom::error::Error<&'a str>>>,
{
    consumed(parser, ErrorKind::Eof)
        .parse(token)
        .ok()
        .map(|(_, value)| value)
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
    <F as Parser<I>>::Error: ParseError<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

#[cfg(test)]
mod tests {
    use nom::{
        bytes::complete::tag,
        character::complete::{alpha1, digit1},
    };

    use super::*;
    use crate::IResult;

    #[test]
    fn test_consumed() {
        let cases = [("abc", true), ("abc1", false), ("ab", false), ("", false)];

        for (input, expected) in cases {
            let result: IResult<_, _> = consumed(tag("abc"), ErrorKind::Eof).parse(input);
            assert_eq!(result.is_ok(), expected, "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_consumed_error_kind() {
        let result: nom::IResult<_, _> = consumed(alpha1, ErrorKind::Count).parse("abc12");

        match result {
            Err(Err::Error(e)) => {
                assert_eq!(e.code, ErrorKind::Count);
                assert_eq!(e.input, "12");
            }
            other => panic!("Failed: {other:?}"),
        }
    }

    #[test]
    fn test_lex() {
        let cases = [
            ("123", Some("123")),
            ("0", Some("0")),
            ("12a", None),
            ("a12", None),
            ("", None),
        ];

        for (input, expected) in cases {
            let result = lex(digit1, input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
        }
    }
}
