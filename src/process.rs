//! # Stream Driver
//!
//! Runs the whole pipeline over a source of lines: checksum, tokenization, registry lookup,
//! decoding and dispatch to a [`Handler`]. Failures are handed, together with the raw line,
//! to an error policy that decides whether to keep going.

use std::{
    convert::Infallible,
    io::{self, BufRead},
    ops::ControlFlow,
};

use tracing::{debug, trace, warn};

use crate::{
    Error, Handler, StreamError,
    nmea0183::parse_frame,
    nmea_content::{SentenceKind, dispatch},
};

/// Defines which talker IDs are accepted in front of a sentence formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TalkerMode {
    /// Only the GPS talker, so tags are matched verbatim (`$GPRMC`, `$GPGGA`, ...).
    #[default]
    Gps,
    /// Any two-character talker (`$GNRMC`, `$GLGSV`, ...).
    Any,
}

/// The error policy used when none is configured.
pub type DefaultPolicy = fn(&str, Error) -> ControlFlow<Infallible>;

/// Drops every failure and keeps going. This is the default policy.
pub fn continue_on_error(_line: &str, _error: Error) -> ControlFlow<Infallible> {
    ControlFlow::Continue(())
}

/// Logs every failure as a `tracing` warning and keeps going.
pub fn log_and_continue(line: &str, error: Error) -> ControlFlow<Infallible> {
    warn!(line, %error, "dropping NMEA sentence");
    ControlFlow::Continue(())
}

/// A configurable driver for streams of NMEA sentences.
///
/// It uses the builder pattern to set the talker mode and the error policy before
/// processing a source.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
///
/// use nmea0183_dispatch::{Processor, StreamError, TalkerMode};
///
/// let input = "$GPAAM,A,A,0.10,N,WPTNME*32\n$GPAAM,A,A,0.10,N,WPTNME*33\n";
///
/// // Stop at the first failure and hand back the offending line.
/// let result = Processor::new()
///     .talker_mode(TalkerMode::Any)
///     .error_policy(|line, _error| ControlFlow::Break(line.to_owned()))
///     .process(input.as_bytes(), &mut ());
///
/// match result {
///     Err(StreamError::Aborted(line)) => assert_eq!(line, "$GPAAM,A,A,0.10,N,WPTNME*33"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[must_use]
pub struct Processor<P = DefaultPolicy> {
    /// Which talkers are accepted.
    talker_mode: TalkerMode,

    /// What to do with a failed line.
    error_policy: P,
}

impl Processor {
    /// Creates a driver with default settings.
    ///
    /// The default settings are:
    /// - Talker mode: [`TalkerMode::Gps`]
    /// - Error policy: [`continue_on_error`]
    pub fn new() -> Self {
        Processor {
            talker_mode: TalkerMode::Gps,
            error_policy: continue_on_error,
        }
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

impl<P> Processor<P> {
    /// Sets which talkers are accepted.
    pub fn talker_mode(mut self, mode: TalkerMode) -> Self {
        self.talker_mode = mode;
        self
    }

    /// Sets the error policy.
    ///
    /// The policy receives the raw line and the failure. Returning
    /// [`ControlFlow::Continue`] moves on to the next line; returning
    /// [`ControlFlow::Break`] stops processing with [`StreamError::Aborted`].
    pub fn error_policy<Q, B>(self, policy: Q) -> Processor<Q>
    where
        Q: FnMut(&str, Error) -> ControlFlow<B>,
    {
        Processor {
            talker_mode: self.talker_mode,
            error_policy: policy,
        }
    }

    /// Runs a single line through the pipeline.
    ///
    /// Unknown sentences and sentences the handler has no capability for succeed
    /// without doing anything.
    pub fn parse_message<H>(&self, line: &str, handler: &mut H) -> Result<(), Error>
    where
        H: Handler + ?Sized,
    {
        let frame = parse_frame(line)?;

        let Some(kind) = SentenceKind::from_tag(frame.tag(), self.talker_mode) else {
            trace!(tag = frame.tag(), "skipping unknown sentence");
            return Ok(());
        };

        dispatch(kind, &frame, handler)
    }

    /// Processes every line of `reader`.
    ///
    /// Lines are split on `\n` and a trailing `\r` is removed. Bytes that are not valid
    /// UTF-8 are replaced, so such lines end up failing the checksum.
    ///
    /// Returns `Ok(())` at the end of the input, [`StreamError::Io`] if reading fails and
    /// [`StreamError::Aborted`] if the error policy breaks.
    pub fn process<R, H, B>(&mut self, reader: R, handler: &mut H) -> Result<(), StreamError<B>>
    where
        R: BufRead,
        H: Handler + ?Sized,
        P: FnMut(&str, Error) -> ControlFlow<B>,
    {
        let lines = reader.split(b'\n').map(|line| line.map(into_line));

        self.lines(lines, handler)
    }

    /// Processes lines from any iterator, e.g. [`BufRead::lines`].
    ///
    /// An `Err` item stops processing with [`StreamError::Io`] without consulting the
    /// error policy.
    pub fn lines<I, S, H, B>(&mut self, lines: I, handler: &mut H) -> Result<(), StreamError<B>>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
        H: Handler + ?Sized,
        P: FnMut(&str, Error) -> ControlFlow<B>,
    {
        for line in lines {
            let line = line?;
            let line = line.as_ref();

            if let Err(error) = self.parse_message(line, handler) {
                debug!(line, %error, "handing failure to the error policy");

                if let ControlFlow::Break(value) = (self.error_policy)(line, error) {
                    return Err(StreamError::Aborted(value));
                }
            }
        }

        Ok(())
    }
}

/// Turns the raw bytes of one line into text, dropping a trailing `\r`.
fn into_line(bytes: Vec<u8>) -> String {
    let mut line = match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
    };

    if line.ends_with('\r') {
        line.pop();
    }

    line
}

/// Processes every line of `reader` with the default settings.
///
/// Failures are dropped; the only way this stops early is an I/O error.
///
/// ```rust
/// use nmea0183_dispatch::{GSV, GSVHandler, Handler, process};
///
/// #[derive(Default)]
/// struct Fragments(Vec<u32>);
///
/// impl GSVHandler for Fragments {
///     fn handle_gsv(&mut self, gsv: GSV) {
///         self.0.push(gsv.fragment);
///     }
/// }
///
/// impl Handler for Fragments {
///     fn gsv_handler(&mut self) -> Option<&mut dyn GSVHandler> {
///         Some(self)
///     }
/// }
///
/// let input = "\
/// $GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75
/// $GPAAM,A,A,0.10,N,WPTNME*32
/// $GPGSV,2,2,08,15,30,050,47,19,10,120,38,24,55,200,44,32,05,330,30*72
/// ";
///
/// let mut fragments = Fragments::default();
/// process(input.as_bytes(), &mut fragments).unwrap();
/// assert_eq!(fragments.0, [1, 2]);
/// ```
pub fn process<R, H>(reader: R, handler: &mut H) -> Result<(), StreamError<Infallible>>
where
    R: BufRead,
    H: Handler + ?Sized,
{
    Processor::new().process(reader, handler)
}

/// Processes every line of `reader`, handing failures to `policy`.
pub fn process_with<R, H, F, B>(reader: R, handler: &mut H, policy: F) -> Result<(), StreamError<B>>
where
    R: BufRead,
    H: Handler + ?Sized,
    F: FnMut(&str, Error) -> ControlFlow<B>,
{
    Processor::new().error_policy(policy).process(reader, handler)
}

/// Runs a single line through the pipeline with the default settings.
///
/// ```rust
/// use nmea0183_dispatch::{Error, parse_message};
///
/// assert_eq!(parse_message("$GPXYZ,1,2,3*50", &mut ()), Ok(()));
/// assert_eq!(parse_message("$GPXYZ,1,2,3*51", &mut ()), Err(Error::BadChecksum));
/// ```
pub fn parse_message<H>(line: &str, handler: &mut H) -> Result<(), Error>
where
    H: Handler + ?Sized,
{
    Processor::new().parse_message(line, handler)
}
