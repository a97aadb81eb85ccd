use std::fmt::Display;

use proc_macro2::Span;
use syn::{
    Attribute, Error, Ident, Lit, Path, Result, Token, parenthesized,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetaAttributeType {
    Crate,
    Handles,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "crate" => Some(Self::Crate),
            "handles" => Some(Self::Handles),
            _ => None,
        }
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Crate => "crate",
            Self::Handles => "handles",
        };
        write!(f, "{name}")
    }
}

pub enum MetaArgument {
    /// `crate = "path"` or `crate(path)`
    Path(Path),
    /// `handles(RMC, GGA, ...)`
    Kinds(Vec<Ident>),
}

pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: MetaArgument,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: MetaArgument, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn arg(&self) -> &MetaArgument {
        &self.arg
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        // `crate` is a keyword, so a plain `Ident` parse would reject it.
        let ident = Ident::parse_any(input)?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-dispatch-derive: Unknown nmea attribute",
            )
        })?;

        let arg = match attribute_type {
            MetaAttributeType::Crate => MetaArgument::Path(parse_path_argument(input)?),
            MetaAttributeType::Handles => {
                if !input.peek(Paren) {
                    return Err(Error::new(
                        input.span(),
                        "nmea0183-dispatch-derive: Expected `handles(<kinds>)`",
                    ));
                }

                let content;
                parenthesized!(content in input);
                let kinds = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                MetaArgument::Kinds(kinds.into_iter().collect())
            }
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
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

fn parse_path_argument(input: ParseStream) -> Result<Path> {
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => string.parse(),
            _ => Err(Error::new(
                value.span(),
                "nmea0183-dispatch-derive: Expected a string literal holding a path",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-dispatch-derive: Expected '= \"<path>\"' or '(<path>)' for nmea attribute",
        ))
    }
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("nmea") {
                Some(attr.parse_args::<List<MetaAttribute>>())
            } else {
                None
            }
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-dispatch-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}
