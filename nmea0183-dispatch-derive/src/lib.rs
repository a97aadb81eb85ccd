//! # A Rust procedural macro for capability-based NMEA 0183 handlers
//!
//! `nmea0183-dispatch-derive` generates the `Handler` impl of a consumer from the list of
//! sentence kinds it handles, so that only the per-kind handler traits have to be written
//! by hand.
//!
//! It is re-exported by [`nmea0183-dispatch`] behind the default `derive` feature and is not
//! meant to be used on its own.
//!
//! [`nmea0183-dispatch`]: https://crates.io/crates/nmea0183-dispatch

use generate::generate_handler_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Handler, attributes(nmea))]
pub fn derive_handler(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_handler_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
