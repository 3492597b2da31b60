use proc_macro2::TokenStream;
use syn::{Error, Fields, Result, spanned::Spanned};

use crate::{
    meta::{self, MetaAttributeType},
    parser::Parser,
};

#[derive(Clone)]
pub struct FieldParser {
    pub variable_name: String,
    pub parser: Parser,
    pub default: TokenStream,
    pub skip_after: Option<TokenStream>,
}

#[derive(Clone)]
pub struct StructParser {
    pub parsers: Vec<FieldParser>,
}

impl StructParser {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let Fields::Named(_) = fields else {
            return Err(Error::new(
                fields.span(),
                "nmea0183-decoder-derive: Only structs with named fields are supported",
            ));
        };

        let mut parsers = vec![];
        for field in fields.iter() {
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let mut parser = Parser::Type(Box::new(field.ty.clone()));
            let mut skip_after = None;

            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::Coordinate => parser = Parser::Coordinate,
                    MetaAttributeType::Directional => {
                        parser = Parser::Directional(attribute.arg()?.clone())
                    }
                    MetaAttributeType::SkipAfter => skip_after = Some(attribute.arg()?.clone()),
                    _ => {}
                }
            }

            let default = parser.default_value(&field.ty);

            parsers.push(FieldParser {
                variable_name: ident.to_string(),
                parser,
                default,
                skip_after,
            });
        }

        Ok(Self { parsers })
    }
}
