use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Error, Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub input_name: Ident,
    pub decoder_name: Ident,
    pub header: TokenStream,
    pub tokens: Option<TokenStream>,
}

impl Config {
    pub fn from_meta_attributes(name: &Ident, attribute_list: &[MetaAttribute]) -> Result<Self> {
        let mut header = None;
        let mut tokens = None;

        for meta in attribute_list {
            match meta.r#type {
                MetaAttributeType::Mnemonic => {
                    let mnemonic = meta.arg()?;
                    header = Some(quote! { nmea0183_decoder::Header::Talker(#mnemonic) });
                }
                MetaAttributeType::Proprietary => {
                    let identifier = meta.arg()?;
                    header = Some(quote! { nmea0183_decoder::Header::Proprietary(#identifier) });
                }
                MetaAttributeType::MinTokens => {
                    let count = meta.arg()?;
                    tokens = Some(quote! { nmea0183_decoder::TokenCount::AtLeast(#count) });
                }
                MetaAttributeType::ExactTokens => {
                    let count = meta.arg()?;
                    tokens = Some(quote! { nmea0183_decoder::TokenCount::Exactly(#count) });
                }
                _ => {}
            }
        }

        let header = header.ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-decoder-derive: Expected a `mnemonic` or `proprietary` nmea attribute",
            )
        })?;

        Ok(Self {
            input_name: Ident::new("nmea_line", Span::call_site()),
            decoder_name: Ident::new("nmea_decoder", Span::call_site()),
            header,
            tokens,
        })
    }
}
