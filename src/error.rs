//! # Error Types
//!
//! This module defines the error types used throughout the NMEA decoding library.
//!
//! Failures come in three layers:
//! - [`FieldError`]: a single sub-field (number, position, time, ...) could not be decoded.
//! - [`Error`]: a whole sentence was rejected, either by the checksum or by its decoder.
//! - [`StreamError`]: the stream driver stopped, because the source failed or because the
//!   error policy asked it to.

use std::num::{ParseFloatError, ParseIntError};

use crate::nmea_content::SentenceKind;

/// Failure to decode one field of a sentence.
///
/// Field primitives keep going after a failure so that every field of a record gets a
/// chance to parse. Only the last failure of a record is reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// A field that should hold a decimal number did not.
    #[error("invalid number {value:?}: {source}")]
    Float {
        /// The raw field
        value: String,
        source: ParseFloatError,
    },

    /// A field that should hold an integer did not.
    #[error("invalid integer {value:?}: {source}")]
    Int {
        /// The raw field
        value: String,
        source: ParseIntError,
    },

    /// A `DDMM.mmmm` / `DDDMM.mmmm` position could not be split into degrees and minutes.
    #[error("invalid position {0:?}")]
    Position(String),

    /// A position came with a marker that is not one of `N`, `S`, `E` or `W`.
    #[error("unknown hemisphere marker {0:?}")]
    Hemisphere(String),

    /// A `HHMMSS[.sss]` time of day was malformed or out of range.
    #[error("invalid time of day {0:?}")]
    Time(String),

    /// A calendar date was malformed or does not exist.
    #[error("invalid date {0:?}")]
    Date(String),

    /// A local time zone description is out of range.
    #[error("invalid UTC offset of {hours} hours and {minutes} minutes")]
    Offset { hours: i32, minutes: i32 },
}

/// Represents all the ways a single sentence can be rejected.
///
/// Sentences of an unrecognized kind, and sentences whose kind the consumer does not
/// handle, are not errors: they are skipped silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The frame failed the integrity check.
    ///
    /// This also covers frames that are structurally broken: a missing `$`, a missing `*`
    /// or a trailer that is not two hexadecimal digits.
    #[error("bad checksum")]
    BadChecksum,

    /// A known sentence has the wrong number of fields, or a marker field (units,
    /// status) does not hold what the sentence requires.
    ///
    /// Contains the raw fields of the frame for diagnostics.
    #[error("unexpected {kind} sentence: {fields:?}")]
    Shape {
        kind: SentenceKind,
        fields: Vec<String>,
    },

    /// A field of a known sentence could not be decoded.
    ///
    /// Contains the last field failure and the raw fields of the frame.
    #[error("invalid {kind} sentence: {source}")]
    Field {
        kind: SentenceKind,
        source: FieldError,
        fields: Vec<String>,
    },
}

impl Error {
    /// The raw fields of the offending frame, if the error carries them.
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Error::BadChecksum => None,
            Error::Shape { fields, .. } | Error::Field { fields, .. } => Some(fields),
        }
    }

    /// The kind of sentence that was rejected, if it got as far as the registry.
    pub fn kind(&self) -> Option<SentenceKind> {
        match self {
            Error::BadChecksum => None,
            Error::Shape { kind, .. } | Error::Field { kind, .. } => Some(*kind),
        }
    }
}

/// The reasons a stream of sentences stops before the end of its input.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<B> {
    /// Reading from the underlying source failed.
    ///
    /// I/O failures bypass the error policy.
    #[error("failed to read NMEA source: {0}")]
    Io(#[from] std::io::Error),

    /// The error policy asked to stop, with the given value.
    #[error("NMEA processing aborted by the error policy")]
    Aborted(B),
}
