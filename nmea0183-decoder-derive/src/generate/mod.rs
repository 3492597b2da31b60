use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Error, Result};

use crate::generate::structs::Struct;

mod structs;

// Usage:
// #[derive(Sentence)]
// #[nmea(mnemonic("XYZ"), min_tokens(7))]
// pub struct XYZ {
//     pub time: time::Time,
//     #[nmea(coordinate)]
//     pub latitude: f64,
//     #[nmea(directional(('E', 'W')))]
//     pub variation: f32,
//     #[nmea(skip_after(1))]
//     pub depth_meters: f32,
// }

pub fn generate_sentence_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(datastruct) => {
            let name = &input.ident;
            let attributes = &input.attrs;
            let generics = &input.generics;

            let generator = Struct::from_datastruct(name, datastruct, attributes, generics)?;
            Ok(generator.generate_impl())
        }
        Data::Enum(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decoder-derive: Enums not supported; use `NmeaSentence` for dispatch",
        )),
        Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decoder-derive: Unions not supported",
        )),
    }
}
