use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

use crate::{config::Config, meta::parse_top_level_attributes};

// Usage:
// #[derive(Handler)]
// #[nmea(handles(RMC, GSV))]
// pub struct Tracker {
//     accumulator: GSVAccumulator,
// }
//
// expands to one `Handler` query override per listed kind, each returning `Some(self)`.

pub fn generate_handler_impl(input: &DeriveInput) -> Result<TokenStream> {
    if let Data::Union(_) = input.data {
        return Err(Error::new(
            input.ident.span(),
            "nmea0183-dispatch-derive: Unions not supported",
        ));
    }

    let attributes = parse_top_level_attributes(&input.attrs)?;
    let config = Config::from_meta_attributes(&attributes)?;

    let name = &input.ident;
    let crate_path = &config.crate_path;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let queries = config.capabilities.iter().map(|capability| {
        let query = &capability.query;
        let handler_trait = &capability.handler_trait;

        quote! {
            fn #query(&mut self) -> ::core::option::Option<&mut dyn #crate_path::#handler_trait> {
                ::core::option::Option::Some(self)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #crate_path::Handler for #name #ty_generics #where_clause {
            #(#queries)*
        }
    })
}
