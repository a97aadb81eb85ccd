//! # NMEA Content
//!
//! Strongly typed records for the supported sentence kinds, their decoders, and the
//! registry that maps a sentence tag to its kind.

pub(crate) mod parse;
mod sentences;

pub(crate) use sentences::dispatch;
pub use sentences::*;
