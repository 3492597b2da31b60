use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, DataStruct, Generics, Ident, Path, Result, parse_quote};

use crate::{config::Config, generate::structs::parser::StructParser, meta};

pub mod parser;

pub struct Struct {
    pub name: Path,
    pub config: Config,
    pub generics: Generics,
    pub struct_parser: StructParser,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;
        let config = Config::from_meta_attributes(name, &attributes)?;
        let struct_parser = StructParser::from_fields(&datastruct.fields)?;

        Ok(Self {
            name: parse_quote!(#name),
            config,
            generics: generics.clone(),
            struct_parser,
        })
    }

    /// Names of the logical fields, in decode order.
    fn field_names(&self) -> Vec<&str> {
        self.struct_parser
            .parsers
            .iter()
            .map(|field_parser| field_parser.variable_name.as_str())
            .collect()
    }

    /// The token count: the explicit attribute, or every token the fields consume
    /// plus the header.
    fn token_count(&self) -> TokenStream {
        if let Some(tokens) = &self.config.tokens {
            return tokens.clone();
        }

        let consumed = self.struct_parser.parsers.iter().map(|field_parser| {
            let count = field_parser.parser.token_count();
            let after = field_parser.skip_after.iter();
            quote! { #count #(+ (#after))* }
        });

        quote! { nmea0183_decoder::TokenCount::AtLeast(1 #(+ #consumed)*) }
    }

    fn generate_decode_body(&self) -> TokenStream {
        let name = &self.name;
        let input = &self.config.input_name;
        let decoder = &self.config.decoder_name;

        let fields = self.struct_parser.parsers.iter().map(|field_parser| {
            let variable_name = Ident::new(&field_parser.variable_name, Span::call_site());
            let decode = field_parser
                .parser
                .decode(decoder, &field_parser.default);
            let skip_after = field_parser
                .skip_after
                .as_ref()
                .map(|skip| quote! { #decoder.skip(#skip); });

            quote! {
                let #variable_name = #decode;
                #skip_after
            }
        });

        let variable_names = self
            .struct_parser
            .parsers
            .iter()
            .map(|field_parser| Ident::new(&field_parser.variable_name, Span::call_site()));

        quote! {
            let mut #decoder = nmea0183_decoder::FieldDecoder::for_sentence::<Self>(#input);
            #(#fields)*
            #decoder.finish(#name { #(#variable_names),* })
        }
    }

    pub fn generate_impl(&self) -> TokenStream {
        let name = &self.name;
        let input = &self.config.input_name;
        let header = &self.config.header;
        let tokens = self.token_count();
        let field_names = self.field_names();
        let body = self.generate_decode_body();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics nmea0183_decoder::Sentence for #name #ty_generics #where_clause {
                const HEADER: nmea0183_decoder::Header = #header;
                const TOKENS: nmea0183_decoder::TokenCount = #tokens;
                const FIELDS: &'static [&'static str] = &[#(#field_names),*];

                fn decode(#input: &str) -> nmea0183_decoder::Decoded<Self> {
                    #body
                }
            }
        }
    }
}
