use quote::format_ident;
use syn::{Error, Ident, Path, Result, parse_quote};

use crate::meta::{MetaArgument, MetaAttribute, MetaAttributeType};

/// Sentence kinds a handler can declare, in registry order.
const SENTENCE_KINDS: [&str; 9] = ["RMC", "VTG", "GGA", "GSA", "GLL", "ZDA", "GSV", "AAM", "GST"];

/// One `<kind>Handler` capability to advertise.
#[derive(Clone)]
pub struct Capability {
    /// The query method of `Handler`, e.g. `rmc_handler`
    pub query: Ident,
    /// The capability trait, e.g. `RMCHandler`
    pub handler_trait: Ident,
}

#[derive(Clone)]
pub struct Config {
    pub crate_path: Path,
    pub capabilities: Vec<Capability>,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: &[MetaAttribute]) -> Result<Self> {
        let mut crate_path = parse_quote!(nmea0183_dispatch);
        let mut capabilities: Vec<Capability> = Vec::new();

        for meta in attribute_list {
            match (meta.r#type, meta.arg()) {
                (MetaAttributeType::Crate, MetaArgument::Path(path)) => crate_path = path.clone(),
                (MetaAttributeType::Handles, MetaArgument::Kinds(kinds)) => {
                    for kind in kinds {
                        let capability = Capability::for_kind(kind)?;
                        if capabilities
                            .iter()
                            .any(|c| c.handler_trait == capability.handler_trait)
                        {
                            return Err(Error::new(
                                kind.span(),
                                format!("nmea0183-dispatch-derive: `{kind}` is listed twice"),
                            ));
                        }
                        capabilities.push(capability);
                    }
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        format!(
                            "nmea0183-dispatch-derive: Malformed `{}` attribute",
                            meta.r#type
                        ),
                    ));
                }
            }
        }

        Ok(Self {
            crate_path,
            capabilities,
        })
    }
}

impl Capability {
    fn for_kind(kind: &Ident) -> Result<Self> {
        let name = kind.to_string();
        if !SENTENCE_KINDS.contains(&name.as_str()) {
            return Err(Error::new(
                kind.span(),
                format!(
                    "nmea0183-dispatch-derive: Unknown sentence kind `{name}`, expected one of {}",
                    SENTENCE_KINDS.join(", ")
                ),
            ));
        }

        Ok(Self {
            query: format_ident!("{}_handler", name.to_lowercase(), span = kind.span()),
            handler_trait: format_ident!("{}Handler", name, span = kind.span()),
        })
    }
}
