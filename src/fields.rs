//! # Field Decoding
//!
//! The sentence tokenizer and the cursor that every sentence parser walks.
//!
//! A sentence is split on `,` and `*` into tokens, empty tokens included. A
//! [`FieldDecoder`] then hands the tokens out one at a time to nom parsers from
//! [`parse`](crate::parse). Every logical field a parser reads is recorded in a
//! [`Validity`]: a field that cannot be decoded takes its default value and has
//! its flag set, and decoding carries on with the next field. A sentence parse
//! therefore never fails as a whole; it always yields a [`Decoded`] record.

use std::ops::Neg;

use nom::{
    Parser,
    bytes::complete::{tag, take, take_till},
    character::complete::{anychar, one_of},
    combinator::verify,
    multi::separated_list0,
    sequence::preceded,
};

use crate::{
    IResult,
    parse::{FieldDefault, NmeaParse, coordinate, hemisphere, hex},
    parsing::lex,
};

/// Upper bound on the number of logical fields a sentence can report on.
pub const MAX_FIELDS: usize = 32;

/// Splits a raw sentence into its comma and asterisk delimited tokens.
///
/// Empty tokens are preserved, so `"$GPDPT,,"` yields three tokens. No trimming
/// is performed and a checksum, if present, is simply the final token. Only an
/// empty line yields no tokens.
///
/// ```rust
/// use nmea0183_decoder::fields::tokenize;
///
/// assert_eq!(tokenize("$GPDPT,10.5,,*4A"), vec!["$GPDPT", "10.5", "", "", "4A"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }

    let result: IResult<&str, Vec<&str>> =
        separated_list0(one_of(",*"), take_till(|c: char| c == ',' || c == '*')).parse(line);

    result.map(|(_, tokens)| tokens).unwrap_or_default()
}

/// The sentence identifier a parser expects in the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// A standard sentence: the mnemonic follows the start character and a
    /// two character talker ID (`$GPGGA`).
    Talker(&'static str),
    /// A proprietary sentence: the identifier follows the start character
    /// directly (`$PSKPDPT`).
    Proprietary(&'static str),
}

impl Header {
    /// The mnemonic or proprietary identifier.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Header::Talker(mnemonic) | Header::Proprietary(mnemonic) => mnemonic,
        }
    }

    fn offset(&self) -> usize {
        match self {
            Header::Talker(_) => 3,
            Header::Proprietary(_) => 1,
        }
    }

    /// Checks whether `token` carries this identifier at its fixed offset.
    ///
    /// ```rust
    /// use nmea0183_decoder::Header;
    ///
    /// assert!(Header::Talker("GGA").matches("$GPGGA"));
    /// assert!(Header::Talker("GGA").matches("!IIGGA"));
    /// assert!(!Header::Talker("GGA").matches("$GPGLL"));
    /// assert!(Header::Proprietary("PSKPDPT").matches("$PSKPDPT"));
    /// ```
    pub fn matches(&self, token: &str) -> bool {
        let result: IResult<&str, &str> =
            preceded(take(self.offset()), tag(self.mnemonic())).parse(token);
        result.is_ok()
    }
}

/// Number of field tokens a sentence must carry, header included and
/// checksum excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCount {
    /// At least this many tokens; trailing extra fields are tolerated.
    AtLeast(usize),
    /// Exactly this many tokens.
    Exactly(usize),
}

impl TokenCount {
    /// Checks a field count against the requirement.
    pub fn admits(self, count: usize) -> bool {
        match self {
            TokenCount::AtLeast(minimum) => count >= minimum,
            TokenCount::Exactly(expected) => count == expected,
        }
    }
}

/// Per-field decode status of one sentence.
///
/// Holds one flag per logical field of the sentence, in the fixed field order of
/// its layout. A set flag means the field could not be decoded and holds its
/// default value. Unit letters and other fixed content are not logical fields,
/// and a latitude/longitude pair counts as a single field.
///
/// ```rust
/// use nmea0183_decoder::{Sentence, sentences::DPT};
///
/// let decoded = DPT::decode("$SDDPT,12.5,x,100");
/// assert!(!decoded.validity.is_valid());
/// assert_eq!(decoded.validity.field_failed("offset"), Some(true));
/// assert_eq!(decoded.validity.failed_fields().collect::<Vec<_>>(), ["offset"]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    names: &'static [&'static str],
    failed: heapless::Vec<bool, MAX_FIELDS>,
}

impl Validity {
    /// Creates a validity record with every field marked as decoded.
    pub fn new(names: &'static [&'static str]) -> Self {
        Validity {
            names,
            failed: names.iter().take(MAX_FIELDS).map(|_| false).collect(),
        }
    }

    /// Marks the field at `index` as failed.
    pub fn mark(&mut self, index: usize) {
        if let Some(flag) = self.failed.get_mut(index) {
            *flag = true;
        }
    }

    /// Marks every field as failed.
    pub fn mark_all(&mut self) {
        self.failed.iter_mut().for_each(|flag| *flag = true);
    }

    /// Number of logical fields.
    pub fn len(&self) -> usize {
        self.failed.len()
    }

    /// Returns `true` if the sentence has no logical fields.
    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns `true` if every field decoded.
    pub fn is_valid(&self) -> bool {
        !self.failed.contains(&true)
    }

    /// Returns `true` if every field failed, as happens on a structural failure.
    pub fn is_all_failed(&self) -> bool {
        self.failed.iter().all(|&failed| failed)
    }

    /// Whether the field at `index` failed. Indexes past the last field never fail.
    pub fn failed(&self, index: usize) -> bool {
        self.failed.get(index).copied().unwrap_or(false)
    }

    /// Whether the named field failed, or `None` if the sentence has no such field.
    pub fn field_failed(&self, name: &str) -> Option<bool> {
        self.iter()
            .find(|(field, _)| *field == name)
            .map(|(_, failed)| failed)
    }

    /// Iterates over `(field name, failed)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.names.iter().copied().zip(self.failed.iter().copied())
    }

    /// Iterates over the names of the failed fields.
    pub fn failed_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter(|(_, failed)| *failed)
            .map(|(field, _)| field)
    }

    /// The flags packed into an integer, bit `i` set when field `i` failed.
    pub fn bits(&self) -> u32 {
        self.failed
            .iter()
            .enumerate()
            .filter(|(_, failed)| **failed)
            .fold(0, |bits, (index, _)| bits | (1 << index))
    }
}

/// A decoded sentence record together with its per-field [`Validity`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<S> {
    /// The record. Failed fields hold their default values.
    pub sentence: S,
    /// Which fields of the record failed to decode.
    pub validity: Validity,
}

impl<S> Decoded<S> {
    /// Returns `true` if every field decoded.
    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Maps the record, keeping the validity.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Decoded<T> {
        Decoded {
            sentence: f(self.sentence),
            validity: self.validity,
        }
    }
}

/// A sentence type with a fixed header, token count and logical field list.
///
/// Most implementations are generated with `#[derive(Sentence)]`; sentences with
/// repeating tails implement [`Sentence::decode`] by hand on top of a
/// [`FieldDecoder`].
pub trait Sentence: Sized {
    /// The identifier expected in the first token.
    const HEADER: Header;
    /// The token count requirement, header included and checksum excluded.
    const TOKENS: TokenCount;
    /// Logical field names, in validity index order.
    const FIELDS: &'static [&'static str];

    /// Decodes one sentence line.
    ///
    /// Never fails: on a structural failure (wrong header or token count) every
    /// field is marked failed and holds its default value.
    fn decode(line: &str) -> Decoded<Self>;
}

/// Cursor over the tokens of one sentence.
///
/// Each `parse*` method consumes exactly one logical field's tokens and returns
/// `None` if they do not decode; the cursor advances either way so that later
/// fields stay aligned. The `decode*` methods additionally record the outcome
/// in the field's validity flag and substitute a default on failure.
///
/// ```rust
/// use nmea0183_decoder::{FieldDecoder, Header, TokenCount};
///
/// const FIELDS: &[&str] = &["depth", "offset"];
///
/// let mut decoder = FieldDecoder::new("$SDDPT,12.5,oops", FIELDS)
///     .expect(Header::Talker("DPT"), TokenCount::AtLeast(3));
/// let depth = decoder.decode(0.0_f32);
/// let offset = decoder.decode(0.0_f32);
///
/// assert_eq!((depth, offset), (12.5, 0.0));
/// assert_eq!(decoder.validity().bits(), 0b10);
/// ```
#[derive(Debug)]
pub struct FieldDecoder<'a> {
    tokens: Vec<&'a str>,
    checksum: Option<&'a str>,
    cursor: usize,
    field: usize,
    validity: Validity,
    intact: bool,
}

impl<'a> FieldDecoder<'a> {
    /// Tokenizes `line` and positions the cursor on the first field after the header.
    pub fn new(line: &'a str, fields: &'static [&'static str]) -> Self {
        let mut tokens = tokenize(line);
        let checksum = if line.contains('*') {
            tokens.pop()
        } else {
            None
        };

        FieldDecoder {
            tokens,
            checksum,
            cursor: 1,
            field: 0,
            validity: Validity::new(fields),
            intact: true,
        }
    }

    /// Creates a decoder for `S`, checking its header and token count.
    pub fn for_sentence<S: Sentence>(line: &'a str) -> Self {
        FieldDecoder::new(line, S::FIELDS).expect(S::HEADER, S::TOKENS)
    }

    /// Checks the token count and the header.
    ///
    /// On failure every field is marked failed and the tokens are dropped, so every
    /// subsequent decode takes its default.
    pub fn expect(mut self, header: Header, count: TokenCount) -> Self {
        let counted = count.admits(self.field_count());
        let identified = self
            .tokens
            .first()
            .is_some_and(|token| header.matches(token));

        if !(counted && identified) {
            log::trace!(
                "{} structural failure: {} tokens, header {:?}",
                header.mnemonic(),
                self.field_count(),
                self.tokens.first()
            );
            self.tokens.clear();
            self.intact = false;
            self.validity.mark_all();
        }

        self
    }

    /// Number of field tokens, header included and checksum excluded.
    pub fn field_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.cursor)
    }

    /// The transmitted checksum, if the line carried a well-formed one.
    ///
    /// The value is not verified against the sentence content.
    pub fn checksum(&self) -> Option<u8> {
        self.checksum
            .and_then(|token| lex(hex, token))
            .and_then(|value| u8::try_from(value).ok())
    }

    /// Returns `true` unless the header or token count check failed.
    pub fn is_intact(&self) -> bool {
        self.intact
    }

    /// The validity recorded so far.
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Skips `n` tokens carrying fixed content, such as unit letters.
    pub fn skip(&mut self, n: usize) {
        self.cursor += n;
    }

    fn next_token(&mut self) -> &'a str {
        let token = self.tokens.get(self.cursor).copied().unwrap_or("");
        self.cursor += 1;
        token
    }

    /// Consumes one token and lexes it as a `T`.
    pub fn parse<T: NmeaParse<&'a str>>(&mut self) -> Option<T> {
        let token = self.next_token();
        lex(T::parse, token)
    }

    /// Consumes one token and lexes it with `parser`, which must consume the whole token.
    pub fn parse_with<O, P>(&mut self, parser: P) -> Option<O>
    where
        P: Parser<&'a str, Output = O, Error = crate::Error<&'a str, nom::error::Error<&'a str>>>,
    {
        let token = self.next_token();
        lex(parser, token)
    }

    /// Consumes a `(D)DDMM.mmmm` token and a hemisphere token and returns signed
    /// decimal degrees, negative for `S` and `W`.
    pub fn parse_coordinate(&mut self) -> Option<f64> {
        let magnitude = self.parse_with(coordinate);
        let sign = self.parse_with(hemisphere);

        magnitude.zip(sign).map(|(magnitude, sign)| magnitude * sign)
    }

    /// Consumes a value token and a direction token that must be `positive` or
    /// `negative`, negating the value for the latter.
    pub fn parse_directional<T>(&mut self, (positive, negative): (char, char)) -> Option<T>
    where
        T: NmeaParse<&'a str> + Neg<Output = T>,
    {
        let value = self.parse::<T>();
        let negated = self.parse_with(
            verify(anychar, |c: &char| *c == positive || *c == negative).map(|c| c == negative),
        );

        value
            .zip(negated)
            .map(|(value, negated)| if negated { -value } else { value })
    }

    /// Records the outcome of the next logical field and returns whether it stands.
    ///
    /// A field never stands once the structural check has failed.
    pub fn record(&mut self, ok: bool) -> bool {
        let ok = ok && self.intact;
        if !ok {
            self.validity.mark(self.field);
        }
        self.field += 1;
        ok
    }

    /// Records a value lexed outside the decoder as the next logical field,
    /// substituting `default` when it is missing.
    pub fn accept<T>(&mut self, value: Option<T>, default: T) -> T {
        let accepted = self.record(value.is_some());
        match value {
            Some(value) if accepted => value,
            _ => default,
        }
    }

    /// Decodes the next logical field as a `T`, substituting `default` on failure.
    pub fn decode<T: NmeaParse<&'a str>>(&mut self, default: T) -> T {
        let value = self.parse::<T>();
        self.accept(value, default)
    }

    /// Decodes a latitude or longitude pair as one logical field.
    pub fn decode_coordinate(&mut self, default: f64) -> f64 {
        let value = self.parse_coordinate();
        self.accept(value, default)
    }

    /// Decodes a value and its direction letter as one logical field.
    pub fn decode_directional<T>(&mut self, direction: (char, char), default: T) -> T
    where
        T: NmeaParse<&'a str> + Neg<Output = T>,
    {
        let value = self.parse_directional(direction);
        self.accept(value, default)
    }

    /// Decodes a repeating tail of `count` entries as one logical field.
    ///
    /// `entry` reads one entry and must consume the same number of tokens whether
    /// or not it succeeds; an entry that fails is replaced by `default()`. The
    /// field fails when the tail is empty or any entry fails.
    pub fn decode_repeated<T>(
        &mut self,
        count: usize,
        mut entry: impl FnMut(&mut Self) -> Option<T>,
        default: impl Fn() -> T,
    ) -> Vec<T> {
        let mut complete = count > 0;
        let mut entries = Vec::with_capacity(count);

        for _ in 0..count {
            match entry(self) {
                Some(value) => entries.push(value),
                None => {
                    complete = false;
                    entries.push(default());
                }
            }
        }

        self.record(complete);
        entries
    }

    /// Decodes the next logical field, substituting the type's documented default.
    pub fn decode_or_default<T: NmeaParse<&'a str> + FieldDefault>(&mut self) -> T {
        self.decode(T::field_default())
    }

    /// Wraps up the record with the recorded validity.
    pub fn finish<S>(self, sentence: S) -> Decoded<S> {
        debug_assert_eq!(self.field, self.validity.len());
        Decoded {
            sentence,
            validity: self.validity,
        }
    }
}
