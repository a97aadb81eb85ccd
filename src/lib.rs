//! # NMEA 0183 Dispatch
//!
//! This library decodes NMEA 0183 GPS sentences with the format:
//! `$TTSSS,D1,D2,...,Dn*CC`
//!
//! and routes every decoded record to whichever capability of a consumer can handle it.
//!
//! The pipeline for a line is:
//! - Checksum validation ([`checksum_valid`])
//! - Tokenization into fields ([`tokenize`])
//! - Registry lookup of the sentence tag ([`SentenceKind::from_tag`])
//! - Decoding into a typed record ([`RMC`], [`GGA`], [`GSV`], ...)
//! - Dispatch to the matching capability of a [`Handler`]
//!
//! A consumer only implements the capabilities it cares about. Sentences of any other
//! kind are skipped without being decoded.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_dispatch::{GGA, GGAHandler, Handler, process};
//!
//! #[derive(Default)]
//! struct Track {
//!     positions: Vec<(f64, f64)>,
//! }
//!
//! impl GGAHandler for Track {
//!     fn handle_gga(&mut self, gga: GGA) {
//!         self.positions.push((gga.latitude, gga.longitude));
//!     }
//! }
//!
//! impl Handler for Track {
//!     fn gga_handler(&mut self) -> Option<&mut dyn GGAHandler> {
//!         Some(self)
//!     }
//! }
//!
//! let input = "\
//! $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
//! $GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48
//! ";
//!
//! let mut track = Track::default();
//! process(input.as_bytes(), &mut track).unwrap();
//! assert_eq!(track.positions.len(), 1);
//! ```
//!
//! Multi-fragment satellite reports can be stitched back together with a
//! [`GSVAccumulator`], and failures can be inspected with a custom error policy on a
//! [`Processor`].

mod accumulator;
pub mod error;
mod handler;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
mod process;

pub use accumulator::{GSVAccumulator, GSVState};
pub use error::{Error, FieldError, StreamError};
pub use handler::*;
pub use nmea0183::*;
pub use nmea_content::*;
pub use process::*;

#[cfg(feature = "derive")]
pub use nmea0183_dispatch_derive::Handler;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
