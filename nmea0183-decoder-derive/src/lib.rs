//! # A Rust procedural macro for NMEA 0183 sentence decoding
//!
//! `nmea0183-decoder-derive` provides `#[derive(Sentence)]`, which generates the
//! field-by-field decoder of a fixed-layout NMEA 0183 sentence struct for
//! [`nmea0183-decoder`].
//!
//! It is not meant to be used on its own: the generated code drives the
//! `FieldDecoder` cursor of [`nmea0183-decoder`], recording the validity of every
//! field and substituting defaults for the ones that do not decode.
//!
//! [`nmea0183-decoder`]: https://crates.io/crates/nmea0183-decoder

use generate::generate_sentence_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod parser;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Sentence, attributes(nmea))]
pub fn derive_sentence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_sentence_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
