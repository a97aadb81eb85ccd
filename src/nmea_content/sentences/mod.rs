mod aam;
mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use aam::AAM;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gst::GST;
pub use gsv::{GSV, SatelliteInfo};
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use tracing::trace;

use crate::{Error, Frame, Handler, TalkerMode, parse_frame};

macro_rules! sentence_registry {
    (
        $(
            $(#[$meta:meta])*
            $kind:ident => $handle:ident via $query:ident
        ),* $(,)?
    ) => {
        /// The kinds of sentence this crate decodes.
        ///
        /// Each kind has a record type of the same name, and a capability trait that a
        /// consumer implements to receive it (see [`Handler`]).
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SentenceKind {
            $(
                $(#[$meta])*
                $kind,
            )*
        }

        impl SentenceKind {
            /// The three-letter sentence formatter, e.g. `"RMC"`.
            pub fn formatter(&self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)*
                }
            }

            fn from_formatter(formatter: &str) -> Option<Self> {
                match formatter {
                    $(stringify!($kind) => Some(Self::$kind),)*
                    _ => None,
                }
            }
        }

        /// A unified enum over all supported sentence records.
        ///
        /// Useful when a caller wants the decoded records themselves rather than having
        /// them routed to a [`Handler`].
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum NmeaSentence {
            $(
                $(#[$meta])*
                $kind($kind),
            )*
        }

        impl NmeaSentence {
            /// The kind of this sentence.
            pub fn kind(&self) -> SentenceKind {
                match self {
                    $(Self::$kind(_) => SentenceKind::$kind,)*
                }
            }

            fn from_frame(kind: SentenceKind, frame: &Frame<'_>) -> Result<Self, Error> {
                match kind {
                    $(SentenceKind::$kind => $kind::decode(frame).map(Self::$kind),)*
                }
            }
        }

        /// Decodes `frame` as a `kind` sentence and hands the record to the matching
        /// capability of `handler`.
        ///
        /// When the handler lacks the capability nothing is decoded and the call succeeds.
        /// The capability is invoked at most once, and only after the whole record decoded.
        pub(crate) fn dispatch<H>(
            kind: SentenceKind,
            frame: &Frame<'_>,
            handler: &mut H,
        ) -> Result<(), Error>
        where
            H: Handler + ?Sized,
        {
            match kind {
                $(
                    SentenceKind::$kind => {
                        match handler.$query() {
                            Some(capability) => capability.$handle($kind::decode(frame)?),
                            None => trace!(%kind, "handler does not accept sentence"),
                        }
                    }
                )*
            }

            Ok(())
        }
    };
}

sentence_registry! {
    /// Recommended Minimum Navigation Information
    RMC => handle_rmc via rmc_handler,
    /// Track made good and Ground speed
    VTG => handle_vtg via vtg_handler,
    /// Global Positioning System Fix Data
    GGA => handle_gga via gga_handler,
    /// GPS DOP and active satellites
    GSA => handle_gsa via gsa_handler,
    /// Geographic Position - Latitude/Longitude
    GLL => handle_gll via gll_handler,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA => handle_zda via zda_handler,
    /// Satellites in View
    GSV => handle_gsv via gsv_handler,
    /// Waypoint Arrival Alarm
    AAM => handle_aam via aam_handler,
    /// Pseudorange Noise Statistics
    GST => handle_gst via gst_handler,
}

impl SentenceKind {
    /// Looks a sentence tag up in the registry.
    ///
    /// The tag is field 0 of a frame, leading `$` included. With [`TalkerMode::Gps`] only
    /// the `GP` talker is recognized, so the tag must match e.g. `$GPRMC` verbatim. With
    /// [`TalkerMode::Any`] any two-character talker is accepted.
    ///
    /// Returns `None` for tags that are not in the registry.
    ///
    /// ```rust
    /// use nmea0183_dispatch::{SentenceKind, TalkerMode};
    ///
    /// assert_eq!(SentenceKind::from_tag("$GPGSV", TalkerMode::Gps), Some(SentenceKind::GSV));
    /// assert_eq!(SentenceKind::from_tag("$GNGSV", TalkerMode::Gps), None);
    /// assert_eq!(SentenceKind::from_tag("$GNGSV", TalkerMode::Any), Some(SentenceKind::GSV));
    /// assert_eq!(SentenceKind::from_tag("$GPTXT", TalkerMode::Any), None);
    /// ```
    pub fn from_tag(tag: &str, talker_mode: TalkerMode) -> Option<Self> {
        let address = tag.strip_prefix('$')?;
        let talker = address.get(..2)?;
        let formatter = address.get(2..)?;

        if talker_mode == TalkerMode::Gps && talker != "GP" {
            return None;
        }

        Self::from_formatter(formatter)
    }

    /// The tag this kind is registered under for the GPS talker, e.g. `$GPRMC`.
    pub fn tag(&self) -> String {
        format!("$GP{}", self.formatter())
    }
}

impl std::fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.formatter())
    }
}

impl NmeaSentence {
    /// Decodes a single raw line into a record.
    ///
    /// Returns `Ok(None)` for checksum-valid lines whose tag is not in the registry.
    ///
    /// ```rust
    /// use nmea0183_dispatch::{NmeaSentence, TalkerMode};
    ///
    /// let sentence = NmeaSentence::decode("$GPAAM,A,A,0.10,N,WPTNME*32", TalkerMode::Gps);
    /// match sentence {
    ///     Ok(Some(NmeaSentence::AAM(aam))) => assert!(aam.arrival_circle_entered),
    ///     other => panic!("unexpected {other:?}"),
    /// }
    /// ```
    pub fn decode(line: &str, talker_mode: TalkerMode) -> Result<Option<Self>, Error> {
        let frame = parse_frame(line)?;

        match SentenceKind::from_tag(frame.tag(), talker_mode) {
            Some(kind) => Self::from_frame(kind, &frame).map(Some),
            None => Ok(None),
        }
    }
}

impl Frame<'_> {
    pub(crate) fn shape_error(&self, kind: SentenceKind) -> Error {
        Error::Shape {
            kind,
            fields: self.to_owned_fields(),
        }
    }

    pub(crate) fn field_error(&self, kind: SentenceKind, source: crate::FieldError) -> Error {
        Error::Field {
            kind,
            source,
            fields: self.to_owned_fields(),
        }
    }
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident($display:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A code with no known meaning, kept as received
            Other(u8),
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Other(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $code,)*
                    $name::Other(code) => code,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($display),)*
                    Self::Other(code) => write!(f, "code {code}"),
                }
            }
        }
    };
}

code_enum! {
    /// Quality of the GPS fix reported in [`GGA`]
    pub enum FixQuality {
        /// 0 - Fix not available
        0 => Invalid("invalid fix"),
        /// 1 - GPS fix
        1 => GPSFix("gps"),
        /// 2 - Differential GPS fix
        2 => DGPSFix("dgps"),
        /// 3 - PPS fix
        3 => PPSFix("pps"),
        /// 4 - Real Time Kinematic
        4 => RTK("rt kinematic"),
        /// 5 - Float RTK
        5 => FloatRTK("float rt kinematic"),
        /// 6 - estimated (dead reckoning)
        6 => Estimated("estimated"),
        /// 7 - Manual input mode
        7 => Manual("manual mode"),
        /// 8 - Simulation mode
        8 => Simulation("sim mode"),
    }
}

code_enum! {
    /// Fix Mode reported in [`GSA`]
    pub enum FixMode {
        /// 1 - No fix
        1 => NoFix("no fix"),
        /// 2 - 2D Fix
        2 => Fix2D("2D fix"),
        /// 3 - 3D Fix
        3 => Fix3D("3D fix"),
    }
}
