use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Type};

/// How a single logical field is decoded.
#[derive(Clone)]
pub enum Parser {
    /// A `(D)DDMM.mmmm` token and its hemisphere letter.
    Coordinate,
    /// A value token and its direction letter, given as `(positive, negative)`.
    Directional(TokenStream),
    /// The field type's own `NmeaParse` implementation.
    Type(Box<Type>),
}

impl Parser {
    /// Number of tokens the field occupies.
    pub fn token_count(&self) -> usize {
        match self {
            Self::Coordinate | Self::Directional(_) => 2,
            Self::Type(_) => 1,
        }
    }

    pub fn default_value(&self, ty: &Type) -> TokenStream {
        match self {
            Self::Coordinate => quote! { nmea0183_decoder::parse::DEFAULT_COORDINATE },
            _ => quote! { <#ty as nmea0183_decoder::FieldDefault>::field_default() },
        }
    }

    pub fn decode(&self, decoder: &Ident, default: &TokenStream) -> TokenStream {
        match self {
            Self::Coordinate => quote! { #decoder.decode_coordinate(#default) },
            Self::Directional(direction) => {
                quote! { #decoder.decode_directional(#direction, #default) }
            }
            Self::Type(ty) => quote! { #decoder.decode::<#ty>(#default) },
        }
    }
}
