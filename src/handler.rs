//! # Capabilities
//!
//! A consumer receives decoded sentences by implementing one capability trait per kind it
//! cares about, plus [`Handler`] to advertise which of them it has.
//!
//! ```rust
//! use nmea0183_dispatch::{GGA, GGAHandler, Handler};
//!
//! #[derive(Default)]
//! struct Altimeter {
//!     altitudes: Vec<f64>,
//! }
//!
//! impl GGAHandler for Altimeter {
//!     fn handle_gga(&mut self, gga: GGA) {
//!         self.altitudes.push(gga.altitude);
//!     }
//! }
//!
//! impl Handler for Altimeter {
//!     fn gga_handler(&mut self) -> Option<&mut dyn GGAHandler> {
//!         Some(self)
//!     }
//! }
//! ```
//!
//! With the `derive` feature the [`Handler`] impl can be generated instead:
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use nmea0183_dispatch::{GGA, GGAHandler, Handler};
//!
//! #[derive(Default, Handler)]
//! #[nmea(handles(GGA))]
//! struct Altimeter {
//!     altitudes: Vec<f64>,
//! }
//!
//! impl GGAHandler for Altimeter {
//!     fn handle_gga(&mut self, gga: GGA) {
//!         self.altitudes.push(gga.altitude);
//!     }
//! }
//! # }
//! ```

use crate::nmea_content::{AAM, GGA, GLL, GSA, GST, GSV, RMC, VTG, ZDA};

/// Receives decoded [`RMC`] sentences.
pub trait RMCHandler {
    fn handle_rmc(&mut self, rmc: RMC);
}

/// Receives decoded [`VTG`] sentences.
pub trait VTGHandler {
    fn handle_vtg(&mut self, vtg: VTG);
}

/// Receives decoded [`GGA`] sentences.
pub trait GGAHandler {
    fn handle_gga(&mut self, gga: GGA);
}

/// Receives decoded [`GSA`] sentences.
pub trait GSAHandler {
    fn handle_gsa(&mut self, gsa: GSA);
}

/// Receives decoded [`GLL`] sentences.
pub trait GLLHandler {
    fn handle_gll(&mut self, gll: GLL);
}

/// Receives decoded [`ZDA`] sentences.
pub trait ZDAHandler {
    fn handle_zda(&mut self, zda: ZDA);
}

/// Receives decoded [`GSV`] fragments, one call per fragment.
pub trait GSVHandler {
    fn handle_gsv(&mut self, gsv: GSV);
}

/// Receives decoded [`AAM`] sentences.
pub trait AAMHandler {
    fn handle_aam(&mut self, aam: AAM);
}

/// Receives decoded [`GST`] sentences.
pub trait GSTHandler {
    fn handle_gst(&mut self, gst: GST);
}

/// Advertises the capabilities of a consumer.
///
/// Every query defaults to `None`. A consumer overrides the queries for the kinds it
/// handles and returns itself. Sentences of a kind the consumer does not handle are not
/// even decoded.
///
/// `()` is the handler with no capabilities at all; driving a stream with it only checks
/// checksums.
pub trait Handler {
    /// The consumer of [`RMC`] sentences, if any.
    fn rmc_handler(&mut self) -> Option<&mut dyn RMCHandler> {
        None
    }

    /// The consumer of [`VTG`] sentences, if any.
    fn vtg_handler(&mut self) -> Option<&mut dyn VTGHandler> {
        None
    }

    /// The consumer of [`GGA`] sentences, if any.
    fn gga_handler(&mut self) -> Option<&mut dyn GGAHandler> {
        None
    }

    /// The consumer of [`GSA`] sentences, if any.
    fn gsa_handler(&mut self) -> Option<&mut dyn GSAHandler> {
        None
    }

    /// The consumer of [`GLL`] sentences, if any.
    fn gll_handler(&mut self) -> Option<&mut dyn GLLHandler> {
        None
    }

    /// The consumer of [`ZDA`] sentences, if any.
    fn zda_handler(&mut self) -> Option<&mut dyn ZDAHandler> {
        None
    }

    /// The consumer of [`GSV`] sentences, if any.
    fn gsv_handler(&mut self) -> Option<&mut dyn GSVHandler> {
        None
    }

    /// The consumer of [`AAM`] sentences, if any.
    fn aam_handler(&mut self) -> Option<&mut dyn AAMHandler> {
        None
    }

    /// The consumer of [`GST`] sentences, if any.
    fn gst_handler(&mut self) -> Option<&mut dyn GSTHandler> {
        None
    }
}

impl Handler for () {}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn rmc_handler(&mut self) -> Option<&mut dyn RMCHandler> {
        (**self).rmc_handler()
    }

    fn vtg_handler(&mut self) -> Option<&mut dyn VTGHandler> {
        (**self).vtg_handler()
    }

    fn gga_handler(&mut self) -> Option<&mut dyn GGAHandler> {
        (**self).gga_handler()
    }

    fn gsa_handler(&mut self) -> Option<&mut dyn GSAHandler> {
        (**self).gsa_handler()
    }

    fn gll_handler(&mut self) -> Option<&mut dyn GLLHandler> {
        (**self).gll_handler()
    }

    fn zda_handler(&mut self) -> Option<&mut dyn ZDAHandler> {
        (**self).zda_handler()
    }

    fn gsv_handler(&mut self) -> Option<&mut dyn GSVHandler> {
        (**self).gsv_handler()
    }

    fn aam_handler(&mut self) -> Option<&mut dyn AAMHandler> {
        (**self).aam_handler()
    }

    fn gst_handler(&mut self) -> Option<&mut dyn GSTHandler> {
        (**self).gst_handler()
    }
}
