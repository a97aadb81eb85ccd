//! # Field Primitives
//!
//! Decoders for the individual fields of a sentence: numbers, positions, times, dates and
//! enumerated codes.
//!
//! All of them go through a [`FieldParser`], which defers failures: a malformed field is
//! remembered and replaced by a zero value, and decoding carries on with the sibling
//! fields. Once every field of a record has been attempted, [`FieldParser::finish`] hands
//! out either the record or the last failure seen.

use std::{num::ParseIntError, str::FromStr};

use crate::{
    FieldError,
    nmea_content::parse::{degrees_minutes, utc_date, utc_time, whole},
};

/// Threads the last field failure through the decoding of one record.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{FieldError, parsing::FieldParser};
///
/// let mut p = FieldParser::new();
/// let speed = p.float("0.820");
/// let course = p.float("");
/// let satellites: u32 = p.int("x8");
///
/// assert_eq!((speed, course, satellites), (0.82, 0.0, 0));
/// assert!(matches!(p.finish(()), Err(FieldError::Int { .. })));
/// ```
#[derive(Debug, Default)]
pub struct FieldParser {
    error: Option<FieldError>,
}

impl FieldParser {
    /// Creates a parser with no failure recorded.
    pub fn new() -> Self {
        FieldParser { error: None }
    }

    /// Records a failure, replacing any earlier one.
    pub fn fail(&mut self, error: FieldError) {
        self.error = Some(error);
    }

    /// The last failure recorded so far.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Parses a decimal number. An empty field is `0.0`.
    pub fn float(&mut self, field: &str) -> f64 {
        if field.is_empty() {
            return 0.0;
        }

        field.parse().unwrap_or_else(|source| {
            self.fail(FieldError::Float {
                value: field.to_owned(),
                source,
            });
            0.0
        })
    }

    /// Parses an integer. An empty field is zero.
    pub fn int<T>(&mut self, field: &str) -> T
    where
        T: FromStr<Err = ParseIntError> + Default,
    {
        if field.is_empty() {
            return T::default();
        }

        field.parse().unwrap_or_else(|source| {
            self.fail(FieldError::Int {
                value: field.to_owned(),
                source,
            });
            T::default()
        })
    }

    /// Parses a numeric code into one of the enumerations of this crate.
    ///
    /// An empty field is read as code `0`. Codes with no known meaning are kept as the
    /// enumeration's `Other` variant; only a non-numeric field records a failure.
    pub fn code<T>(&mut self, field: &str) -> T
    where
        T: From<u8>,
    {
        T::from(self.int::<u8>(field))
    }

    /// Decodes a `DDMM.mmmm` latitude or `DDDMM.mmmm` longitude into signed decimal
    /// degrees.
    ///
    /// The degree prefix is 2 digits for `N`/`S` and 3 digits for `E`/`W`. The result is
    /// negative in the southern and western hemispheres. An empty position is `0.0`.
    ///
    /// ```rust
    /// use nmea0183_dispatch::parsing::FieldParser;
    ///
    /// let mut p = FieldParser::new();
    /// let latitude = p.dms("3723.02837", "S");
    /// let longitude = p.dms("12159.39853", "W");
    ///
    /// assert!((latitude + 37.3838062).abs() < 1e-6);
    /// assert!((longitude + 121.9899755).abs() < 1e-6);
    /// ```
    pub fn dms(&mut self, position: &str, hemisphere: &str) -> f64 {
        if position.is_empty() {
            return 0.0;
        }

        let (width, sign) = match hemisphere {
            "N" => (2, 1.0),
            "S" => (2, -1.0),
            "E" => (3, 1.0),
            "W" => (3, -1.0),
            _ => {
                self.fail(FieldError::Hemisphere(hemisphere.to_owned()));
                return 0.0;
            }
        };

        match whole(|i| degrees_minutes(i, width), position) {
            Some(degrees) => sign * degrees,
            None => {
                self.fail(FieldError::Position(position.to_owned()));
                0.0
            }
        }
    }

    /// Decodes a `HHMMSS[.sss]` UTC time of day. Out-of-range components are a failure.
    pub fn time(&mut self, field: &str) -> time::Time {
        whole(utc_time, field).unwrap_or_else(|| {
            self.fail(FieldError::Time(field.to_owned()));
            time::Time::MIDNIGHT
        })
    }

    /// Decodes a `DDMMYY` date.
    pub fn date(&mut self, field: &str) -> time::Date {
        whole(utc_date, field).unwrap_or_else(|| {
            self.fail(FieldError::Date(field.to_owned()));
            time::Date::MIN
        })
    }

    /// Hands out `value` if every field parsed, or the last failure otherwise.
    pub fn finish<T>(self, value: T) -> Result<T, FieldError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_fields_are_zero() {
        let mut p = FieldParser::new();
        assert_eq!(p.float(""), 0.0);
        assert_eq!(p.int::<i32>(""), 0);
        assert_eq!(p.dms("", "N"), 0.0);
        assert_eq!(p.dms("", ""), 0.0);
        assert!(p.finish(()).is_ok());
    }

    #[test]
    fn test_failures_do_not_stop_siblings() {
        let mut p = FieldParser::new();
        let a = p.float("1.5");
        let b = p.float("abc");
        let c = p.float("2.5");

        assert_eq!((a, b, c), (1.5, 0.0, 2.5));
        assert_matches!(p.error(), Some(FieldError::Float { value, .. }) if value == "abc");
    }

    #[test]
    fn test_last_failure_wins() {
        let mut p = FieldParser::new();
        p.float("abc");
        p.int::<u32>("-1");
        p.float("3.0");

        assert_matches!(p.finish(()), Err(FieldError::Int { value, .. }) if value == "-1");
    }

    #[test]
    fn test_dms_examples() {
        let mut p = FieldParser::new();
        assert!((p.dms("3723.02837", "S") + 37.383_806_2).abs() < 1e-6);
        assert!((p.dms("12159.39853", "W") + 121.989_975_5).abs() < 1e-6);
        assert!((p.dms("4807.038", "N") - 48.1173).abs() < 1e-9);
        assert!((p.dms("01131.000", "E") - 11.516_666_7).abs() < 1e-6);
        assert!(p.finish(()).is_ok());
    }

    #[test]
    fn test_dms_failures() {
        let mut p = FieldParser::new();
        assert_eq!(p.dms("121X9.39853", "W"), 0.0);
        assert_matches!(p.error(), Some(FieldError::Position(_)));

        let mut p = FieldParser::new();
        assert_eq!(p.dms("3", "N"), 0.0);
        assert_matches!(p.error(), Some(FieldError::Position(_)));

        let mut p = FieldParser::new();
        assert_eq!(p.dms("3723.02837", "X"), 0.0);
        assert_matches!(p.error(), Some(FieldError::Hemisphere(h)) if h == "X");
    }

    #[test]
    fn test_code() {
        use crate::nmea_content::FixQuality;

        let mut p = FieldParser::new();
        assert_eq!(p.code::<FixQuality>("4"), FixQuality::RTK);
        assert_eq!(p.code::<FixQuality>(""), FixQuality::Invalid);
        assert_eq!(p.code::<FixQuality>("9"), FixQuality::Other(9));
        assert!(p.error().is_none());

        assert_eq!(p.code::<FixQuality>("x"), FixQuality::Invalid);
        assert_matches!(p.finish(()), Err(FieldError::Int { value, .. }) if value == "x");
    }

    #[test]
    fn test_time_and_date_failures() {
        let mut p = FieldParser::new();
        assert_eq!(p.time("250000"), time::Time::MIDNIGHT);
        assert_matches!(p.error(), Some(FieldError::Time(_)));

        let mut p = FieldParser::new();
        p.date("310294");
        assert_matches!(p.finish(()), Err(FieldError::Date(d)) if d == "310294");
    }

    /// Writes decimal degrees back out as `D..DMM.mmmmmm` and a hemisphere marker.
    fn encode_dms(degrees: f64, latitude: bool) -> (String, &'static str) {
        let hemisphere = match (latitude, degrees < 0.0) {
            (true, false) => "N",
            (true, true) => "S",
            (false, false) => "E",
            (false, true) => "W",
        };
        let magnitude = degrees.abs();
        let whole = magnitude.trunc();
        let minutes = (magnitude - whole) * 60.0;
        let position = if latitude {
            format!("{:02}{:09.6}", whole as u32, minutes)
        } else {
            format!("{:03}{:09.6}", whole as u32, minutes)
        };

        (position, hemisphere)
    }

    proptest! {
        #[test]
        fn prop_latitude_round_trip(latitude in -89.999f64..89.999) {
            let (position, hemisphere) = encode_dms(latitude, true);
            let mut p = FieldParser::new();
            let decoded = p.dms(&position, hemisphere);
            prop_assert!(p.error().is_none());
            prop_assert!((decoded - latitude).abs() < 1e-5, "{position} {hemisphere} -> {decoded}");
        }

        #[test]
        fn prop_longitude_round_trip(longitude in -179.999f64..179.999) {
            let (position, hemisphere) = encode_dms(longitude, false);
            let mut p = FieldParser::new();
            let decoded = p.dms(&position, hemisphere);
            prop_assert!(p.error().is_none());
            prop_assert!(
                (decoded - longitude).abs() < 1e-5,
                "{position} {hemisphere} -> {decoded}"
            );
        }
    }
}
