use nom::{
    AsBytes, AsChar, Compare, Input, Offset, ParseTo, Parser,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::{anychar, char, digit0, one_of},
    combinator::{opt, rest, verify},
    error::{ErrorKind, ParseError},
    number::complete::{double, hex_u32},
    sequence::preceded,
};

use crate::{IResult, parsing::consumed};

/// Latitude/longitude substituted when a coordinate field cannot be decoded.
pub const DEFAULT_COORDINATE: f64 = 99.999;

/// Date substituted when a date field cannot be decoded.
pub const DEFAULT_DATE: time::Date = time::macros::date!(1900-01-01);

/// Trait for lexing typed values out of a single NMEA 0183 field token.
///
/// The `NmeaParse` trait provides a generic interface for converting the text of one
/// comma-delimited field into a value. Implementations are provided for the primitive
/// numeric types, `char`, [`String`], [`time::Time`] (`hhmmss[.ss]`) and
/// [`time::Date`] (`ddmmyy`), and every single-character enumeration in
/// [`sentences`](crate::sentences).
///
/// An implementation only has to recognise a value at the start of its input; the
/// [`FieldDecoder`](crate::FieldDecoder) rejects tokens with trailing characters.
///
/// Floating point fields only accept finite values, so `nan` and `inf` fail.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, NmeaParse};
///
/// let result: IResult<_, _> = u8::parse("42");
/// assert_eq!(result, Ok(("", 42)));
///
/// let result: IResult<_, _> = <time::Time as NmeaParse<_>>::parse("172814.0");
/// assert_eq!(result.unwrap().1, time::Time::from_hms(17, 28, 14).unwrap());
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_decoder::{IResult, NmeaParse};
/// use nom::{Parser, character::complete::char, combinator::value, branch::alt};
///
/// #[derive(Clone)]
/// enum Side {
///     Port,
///     Starboard,
/// }
///
/// impl<'a> NmeaParse<&'a str> for Side {
///     fn parse(i: &'a str) -> IResult<&'a str, Self> {
///         alt((value(Side::Port, char('L')), value(Side::Starboard, char('R')))).parse(i)
///     }
/// }
/// ```
pub trait NmeaParse<I, E = nom::error::Error<I>>
where
    I: Input,
    E: ParseError<I>,
    Self: Sized,
{
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`.
    /// - On failure: An [`Error`](crate::Error) indicating the parsing error.
    fn parse(i: I) -> IResult<I, Self, E>;
}

/// Value a field takes when its token is missing or malformed.
///
/// Numbers default to zero, characters to `-`, strings to `"-"`, times to
/// midnight and dates to [`DEFAULT_DATE`]. Enumerations name their own default.
pub trait FieldDefault {
    /// Returns the documented default for the type.
    fn field_default() -> Self;
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }

        impl FieldDefault for $t {
            fn field_default() -> Self {
                0
            }
        }
    )*)
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }

        impl FieldDefault for $t {
            fn field_default() -> Self {
                0
            }
        }
    )*)
}

impl_uints_type!(u8, u16, u32, u64);
impl_ints_type!(i8, i16, i32, i64);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + Offset + ParseTo<$t> + AsBytes,
            I: Compare<&'static str> + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            <I as Input>::Iter: Clone,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                verify(nom::number::complete::$p, |value: &$t| value.is_finite()).parse(i)
            }
        }

        impl FieldDefault for $t {
            fn field_default() -> Self {
                0.0
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl<I, E> NmeaParse<I, E> for char
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
{
    fn parse(i: I) -> IResult<I, Self, E> {
        anychar.parse(i)
    }
}

impl FieldDefault for char {
    fn field_default() -> Self {
        '-'
    }
}

impl<'a, E> NmeaParse<&'a str, E> for String
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        verify(rest, |s: &str| !s.is_empty())
            .map(|s: &str| s.to_owned())
            .parse(i)
    }
}

impl FieldDefault for String {
    fn field_default() -> Self {
        String::from("-")
    }
}

impl<'a> NmeaParse<&'a str> for time::Time {
    fn parse(i: &'a str) -> IResult<&'a str, Self> {
        let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
        let (i, fraction) = opt(preceded(char('.'), digit0)).parse(i)?;
        let nanosecond = fraction.map_or(0, fraction_nanos);

        let time = time::Time::from_hms_nano(hour, minute, second, nanosecond).or(Err(
            nom::Err::Error(nom::error::make_error(i, ErrorKind::Verify)),
        ))?;

        Ok((i, time))
    }
}

impl FieldDefault for time::Time {
    fn field_default() -> Self {
        time::Time::MIDNIGHT
    }
}

impl<'a> NmeaParse<&'a str> for time::Date {
    fn parse(i: &'a str) -> IResult<&'a str, Self> {
        let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

        let month = time::Month::try_from(month).or(Err(nom::Err::Error(
            nom::error::make_error(i, ErrorKind::Verify),
        )))?;

        let date = time::Date::from_calendar_date(2000 + year as i32, month, day).or(Err(
            nom::Err::Error(nom::error::make_error(i, ErrorKind::Verify)),
        ))?;

        Ok((i, date))
    }
}

impl FieldDefault for time::Date {
    fn field_default() -> Self {
        DEFAULT_DATE
    }
}

/// Parses exactly two decimal digits.
pub fn two_digits(i: &str) -> IResult<&str, u8> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_digit())
        .and_then(nom::character::complete::u8)
        .parse(i)
}

// Scales a run of fractional-second digits to nanoseconds, ignoring digits past the ninth.
fn fraction_nanos(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0, |nanos, digit| nanos * 10 + u32::from(digit - b'0'))
}

/// Parses the magnitude of a latitude or longitude field, `(D)DDMM.mmmm`.
///
/// The last two digits before the decimal point are whole minutes, anything before
/// them is degrees, so both the 2-digit latitude and the 3-digit longitude layouts
/// are accepted. The result is unsigned decimal degrees.
///
/// ```rust
/// use nmea0183_decoder::{IResult, parse::coordinate};
///
/// let result: IResult<_, _> = coordinate("3723.46587704");
/// let (_, degrees) = result.unwrap();
/// assert!((degrees - (37.0 + 23.46587704 / 60.0)).abs() < 1e-12);
/// ```
pub fn coordinate(i: &str) -> IResult<&str, f64> {
    let (_, whole) = verify(take_while(|c: char| c.is_ascii_digit()), |digits: &str| {
        (3..=5).contains(&digits.len())
    })
    .parse(i)?;

    let (degrees, minutes) = i.split_at(whole.len() - 2);
    let (_, degrees) = consumed(nom::character::complete::u16, ErrorKind::Digit).parse(degrees)?;
    let (i, minutes) = verify(double, |minutes: &f64| (0.0..60.0).contains(minutes)).parse(minutes)?;

    Ok((i, f64::from(degrees) + minutes / 60.0))
}

/// Parses a hemisphere indicator, returning `-1.0` for `S`/`W` and `1.0` for `N`/`E`.
pub fn hemisphere(i: &str) -> IResult<&str, f64> {
    one_of("NSEW")
        .map(|c| if c == 'S' || c == 'W' { -1.0 } else { 1.0 })
        .parse(i)
}

/// Parses a base-16 unsigned integer.
///
/// ```rust
/// use nmea0183_decoder::{IResult, parse::hex};
///
/// let result: IResult<_, _> = hex("5C");
/// assert_eq!(result, Ok(("", 0x5C)));
/// ```
pub fn hex(i: &str) -> IResult<&str, u32> {
    take_while_m_n(1, 8, |c: char| c.is_ascii_hexdigit())
        .and_then(hex_u32)
        .parse(i)
}
