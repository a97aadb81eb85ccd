use std::num::ParseFloatError;

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, rest},
    error::{ErrorKind, make_error},
    sequence::preceded,
};

/// Two-digit years at or above this value belong to the 20th century.
const CENTURY_PIVOT: u8 = 69;

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        str::parse::<u8>,
    )
    .parse(i)
}

/// Scales the digits after a decimal point to nanoseconds. Digits past the ninth are
/// ignored.
fn fraction_to_nanos(digits: &str) -> u32 {
    let digits = &digits[..digits.len().min(9)];
    let value: u32 = digits.parse().unwrap_or(0);
    value * 10u32.pow(9 - digits.len() as u32)
}

/// Parses a `HHMMSS[.sss]` UTC time of day.
pub fn utc_time(i: &str) -> IResult<&str, time::Time> {
    let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, fraction) = opt(preceded(char('.'), digit1)).parse(i)?;
    let nanosecond = fraction.map_or(0, fraction_to_nanos);

    match time::Time::from_hms_nano(hour, minute, second, nanosecond) {
        Ok(time) => Ok((i, time)),
        Err(_) => Err(nom::Err::Error(make_error(i, ErrorKind::Verify))),
    }
}

/// Parses a `DDMMYY` date. Years `69..=99` are 19xx, the rest 20xx.
pub fn utc_date(i: &str) -> IResult<&str, time::Date> {
    let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

    let year = if year >= CENTURY_PIVOT {
        1900 + i32::from(year)
    } else {
        2000 + i32::from(year)
    };

    let date = time::Month::try_from(month)
        .ok()
        .and_then(|month| time::Date::from_calendar_date(year, month, day).ok());

    match date {
        Some(date) => Ok((i, date)),
        None => Err(nom::Err::Error(make_error(i, ErrorKind::Verify))),
    }
}

fn minutes(i: &str) -> Result<f64, ParseFloatError> {
    if i.is_empty() { Ok(0.0) } else { i.parse() }
}

/// Parses an unsigned `D..DMM.mmmm` position with a degree prefix of `width` digits,
/// returning decimal degrees.
pub fn degrees_minutes(i: &str, width: usize) -> IResult<&str, f64> {
    let (i, degrees) = map_res(
        take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
        str::parse::<u16>,
    )
    .parse(i)?;
    let (i, minutes) = map_res(rest, minutes).parse(i)?;

    Ok((i, f64::from(degrees) + minutes / 60.0))
}

/// Runs a sub-field grammar over a whole field, rejecting trailing input.
pub fn whole<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    field: &'a str,
) -> Option<O> {
    all_consuming(parser).parse(field).ok().map(|(_, value)| value)
}
