//! # NMEA 0183 Framing
//!
//! This module handles the outer structure of NMEA 0183 sentences:
//! `$TTSSS,D1,D2,...,Dn*CC`
//!
//! A frame is first checked for integrity ([`checksum_valid`]) and then split into its
//! fields ([`tokenize`]). Neither step looks at what the fields mean.

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::preceded,
};

use crate::Error;

/// A checksum-valid sentence split into its comma-separated fields.
///
/// Field 0 is the sentence tag including its leading `$` (e.g. `$GPRMC`). Empty fields are
/// preserved as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Frame<'a> {
    /// The sentence tag, e.g. `$GPGGA`.
    pub fn tag(&self) -> &'a str {
        self.fields.first().copied().unwrap_or_default()
    }

    /// All fields of the frame, the tag included.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of fields, the tag included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the frame has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copies the fields out of the line, for error reports that outlive it.
    pub fn to_owned_fields(&self) -> Vec<String> {
        self.fields.iter().map(|field| (*field).to_owned()).collect()
    }
}

/// Checks the integrity of a raw NMEA line.
///
/// The line is valid when it:
/// * is at least 4 characters long
/// * starts with `$`
/// * has `*` as its third-from-last character
/// * ends with two hexadecimal digits (either case) equal to the checksum of the body
///
/// The body is everything after the `$` up to the first `*`. Any other structure is
/// simply invalid.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::checksum_valid;
///
/// let line = "$GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*74";
/// assert!(checksum_valid(line));
///
/// let line = "$GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*72";
/// assert!(!checksum_valid(line));
/// ```
pub fn checksum_valid(line: &str) -> bool {
    if line.len() < 4 || !line.starts_with('$') {
        return false;
    }

    let Some(trailer) = line.get(line.len() - 3..) else {
        return false;
    };
    let Ok((_, expected)) = checksum_trailer(trailer) else {
        return false;
    };
    let Some(body) = line[1..].split('*').next() else {
        return false;
    };

    checksum(body) == expected
}

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The checksum is the XOR of every byte of the body, which is everything between the
/// `$` prefix and the `*` delimiter (both excluded).
///
/// ```rust
/// use nmea0183_dispatch::checksum;
///
/// assert_eq!(checksum("GPAAM,A,A,0.10,N,WPTNME"), 0x32);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Parses the `*CC` trailer of a sentence into the checksum it announces.
fn checksum_trailer(i: &str) -> IResult<&str, u8> {
    all_consuming(map_res(
        preceded(
            char('*'),
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        ),
        |cc: &str| u8::from_str_radix(cc, 16),
    ))
    .parse(i)
}

/// Splits a line into its fields.
///
/// The trailing `*CC` is stripped and the remainder is split on `,`. Consecutive commas
/// yield empty fields. The line is expected to have passed [`checksum_valid`] already;
/// use [`parse_frame`] to do both.
///
/// ```rust
/// use nmea0183_dispatch::tokenize;
///
/// let frame = tokenize("$GPGLL,4916.45,N,12311.12,W,225444,A,*1D");
/// assert_eq!(frame.tag(), "$GPGLL");
/// assert_eq!(frame.len(), 8);
/// assert_eq!(frame.fields()[7], "");
/// ```
pub fn tokenize(line: &str) -> Frame<'_> {
    let body = line.get(..line.len().saturating_sub(3)).unwrap_or_default();

    Frame {
        fields: body.split(',').collect(),
    }
}

/// Validates the checksum of a line and tokenizes it.
///
/// Returns [`Error::BadChecksum`] if the line fails the integrity check.
pub fn parse_frame(line: &str) -> Result<Frame<'_>, Error> {
    if !checksum_valid(line) {
        return Err(Error::BadChecksum);
    }

    Ok(tokenize(line))
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod tokenize;
}
