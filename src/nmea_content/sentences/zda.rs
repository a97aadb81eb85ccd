#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{Error, FieldError, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// Exactly 7 fields (tag included) are accepted. A zone of `00,00` yields a UTC
/// timestamp. Any other zone yields a fixed offset of `hours * 3600 + minutes * 60`
/// seconds, with the time and date read as wall-clock values in that offset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    /// Date and time with the local zone offset
    pub timestamp: OffsetDateTime,
}

impl ZDA {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, utc_time, day, month, year, zone_hours, zone_minutes] = frame.fields() else {
            return Err(frame.shape_error(SentenceKind::ZDA));
        };
        if utc_time.len() < 6 {
            return Err(frame.shape_error(SentenceKind::ZDA));
        }

        let mut p = FieldParser::new();
        let time = p.time(utc_time);
        let date = {
            let (d, m, y): (u8, u8, i32) = (p.int(day), p.int(month), p.int(year));
            Month::try_from(m)
                .ok()
                .and_then(|m| Date::from_calendar_date(y, m, d).ok())
                .unwrap_or_else(|| {
                    p.fail(FieldError::Date(format!("{day},{month},{year}")));
                    Date::MIN
                })
        };
        let hours: i32 = p.int(zone_hours);
        let minutes: i32 = p.int(zone_minutes);
        let offset = zone_offset(hours, minutes).unwrap_or_else(|| {
            p.fail(FieldError::Offset { hours, minutes });
            UtcOffset::UTC
        });

        p.finish(ZDA {
            timestamp: PrimitiveDateTime::new(date, time).assume_offset(offset),
        })
        .map_err(|source| frame.field_error(SentenceKind::ZDA, source))
    }
}

fn zone_offset(hours: i32, minutes: i32) -> Option<UtcOffset> {
    if hours == 0 && minutes == 0 {
        return Some(UtcOffset::UTC);
    }

    let seconds = i64::from(hours) * 3600 + i64::from(minutes) * 60;
    let seconds = i32::try_from(seconds).ok()?;
    UtcOffset::from_whole_seconds(seconds).ok()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use time::macros::{datetime, offset};

    use super::*;
    use crate::tokenize;

    #[test]
    fn test_zda_utc() {
        let zda = ZDA::decode(&tokenize("$GPZDA,201530.00,04,07,2002,00,00*60")).unwrap();

        assert_eq!(zda.timestamp, datetime!(2002-07-04 20:15:30 UTC));
        assert_eq!(zda.timestamp.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_zda_offset() {
        let zda = ZDA::decode(&tokenize("$GPZDA,201530.00,04,07,2002,-03,00*4E")).unwrap();

        assert_eq!(zda.timestamp.offset(), offset!(-3));
        assert_eq!(zda.timestamp, datetime!(2002-07-04 20:15:30 -3));
        assert_eq!(
            zda.timestamp.to_offset(UtcOffset::UTC),
            datetime!(2002-07-04 23:15:30 UTC)
        );
    }

    #[test]
    fn test_zda_shape() {
        let cases = [
            "$GPZDA,201530.00,04,07,2002,00*00",
            "$GPZDA,201530.00,04,07,2002,00,00,00*00",
            "$GPZDA,20153,04,07,2002,00,00*00",
        ];

        for line in cases {
            assert_matches!(
                ZDA::decode(&tokenize(line)),
                Err(Error::Shape {
                    kind: SentenceKind::ZDA,
                    ..
                }),
                "{line}"
            );
        }
    }

    #[test]
    fn test_zda_field_errors() {
        assert_matches!(
            ZDA::decode(&tokenize("$GPZDA,201530.00,31,02,2002,00,00*00")),
            Err(Error::Field {
                source: FieldError::Date(_),
                ..
            })
        );
        assert_matches!(
            ZDA::decode(&tokenize("$GPZDA,201530.00,04,07,2002,99,00*00")),
            Err(Error::Field {
                source: FieldError::Offset {
                    hours: 99,
                    minutes: 0
                },
                ..
            })
        );
    }
}
