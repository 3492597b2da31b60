use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttributeType {
    Coordinate,
    Directional,
    ExactTokens,
    MinTokens,
    Mnemonic,
    Proprietary,
    SkipAfter,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "coordinate" => Some(Self::Coordinate),
            "directional" => Some(Self::Directional),
            "exact_tokens" => Some(Self::ExactTokens),
            "min_tokens" => Some(Self::MinTokens),
            "mnemonic" => Some(Self::Mnemonic),
            "proprietary" => Some(Self::Proprietary),
            "skip_after" => Some(Self::SkipAfter),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Coordinate)
    }

    /// Attributes choosing how a field is decoded; at most one per field.
    pub fn is_decoder(&self) -> bool {
        matches!(self, Self::Coordinate | Self::Directional)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Coordinate => "coordinate",
            Self::Directional => "directional",
            Self::ExactTokens => "exact_tokens",
            Self::MinTokens => "min_tokens",
            Self::Mnemonic => "mnemonic",
            Self::Proprietary => "proprietary",
            Self::SkipAfter => "skip_after",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: Option<TokenStream>, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn is_top_level(&self) -> bool {
        matches!(
            self.r#type,
            MetaAttributeType::ExactTokens
                | MetaAttributeType::MinTokens
                | MetaAttributeType::Mnemonic
                | MetaAttributeType::Proprietary
        )
    }

    pub fn is_field_level(&self) -> bool {
        !self.is_top_level()
    }

    /// The attribute argument. Only `coordinate` has none, and
    /// parsing guarantees the others carry one.
    pub fn arg(&self) -> Result<&TokenStream> {
        self.arg.as_ref().ok_or_else(|| {
            Error::new(
                self.span,
                format!("nmea0183-decoder-derive: Attribute `{}` expects a value", self.r#type),
            )
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-decoder-derive: Unknown nmea attribute")
        })?;

        let arg = if attribute_type.takes_argument() {
            // read (value) or ="value"
            Some(parse_argument::<Expr>(input)?)
        } else {
            None
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
    }
}

impl Display for MetaAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.r#type)?;
        if let Some(arg) = &self.arg {
            write!(f, "({arg})")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            _ => Err(Error::new(
                value.span(),
                "nmea0183-decoder-derive: Unexpected type for nmea attribute content",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decoder-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn collect_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    collect_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.is_top_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` is not allowed at the top level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !attributes_set.insert(meta_attr.r#type.to_string()) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            // Only one header and one token count.
            let conflicting = [
                ("mnemonic", "proprietary"),
                ("min_tokens", "exact_tokens"),
            ];
            for (a, b) in conflicting {
                if attributes_set.contains(a) && attributes_set.contains(b) {
                    return Err(Error::new(
                        meta_attr.span(),
                        format!(
                            "nmea0183-decoder-derive: Attribute `{a}` cannot be used with `{b}` attribute."
                        ),
                    ));
                }
            }

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();
    let mut decoder: Option<MetaAttributeType> = None;

    collect_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.is_field_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` is not allowed at the field level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !attributes_set.insert(meta_attr.r#type.to_string()) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            // `coordinate` and `directional` are mutually exclusive.
            if meta_attr.r#type.is_decoder() {
                if let Some(previous) = decoder {
                    return Err(Error::new(
                        meta_attr.span(),
                        format!(
                            "nmea0183-decoder-derive: Attribute `{}` cannot be used with `{previous}` attribute.",
                            meta_attr.r#type
                        ),
                    ));
                }
                decoder = Some(meta_attr.r#type);
            }

            Ok(meta_attr)
        })
        .collect()
}
