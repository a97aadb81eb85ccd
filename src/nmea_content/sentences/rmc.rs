#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// At least 12 fields (tag included) are required and the status must not be empty.
/// Anything past field 11, such as the NMEA 2.3 mode indicator, is ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time and date, in UTC
    pub timestamp: OffsetDateTime,
    /// Status character, `A` = active, `V` = void
    pub status: char,
    /// Latitude in degrees, negative in the southern hemisphere
    pub latitude: f64,
    /// Longitude in degrees, negative in the western hemisphere
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed: f64,
    /// Track angle in degrees
    pub track_angle: f64,
    /// Magnetic variation in degrees, negative when westerly
    pub magnetic_variation: f64,
}

impl RMC {
    /// Returns `true` when the receiver reports the data as valid.
    pub fn is_active(&self) -> bool {
        self.status == 'A'
    }

    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [
            _,
            fix_time,
            status,
            latitude,
            north_south,
            longitude,
            east_west,
            speed,
            track_angle,
            fix_date,
            variation,
            variation_direction,
            ..,
        ] = frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::RMC));
        };
        let Some(status) = status.chars().next() else {
            return Err(frame.shape_error(SentenceKind::RMC));
        };

        let mut p = FieldParser::new();
        let fix_time = p.time(fix_time);
        let latitude = p.dms(latitude, north_south);
        let longitude = p.dms(longitude, east_west);
        let speed = p.float(speed);
        let track_angle = p.float(track_angle);
        let fix_date = p.date(fix_date);
        let mut magnetic_variation = p.float(variation);
        if !variation.is_empty() && *variation_direction == "W" {
            magnetic_variation = -magnetic_variation;
        }

        p.finish(RMC {
            timestamp: PrimitiveDateTime::new(fix_date, fix_time).assume_utc(),
            status,
            latitude,
            longitude,
            speed,
            track_angle,
            magnetic_variation,
        })
        .map_err(|source| frame.field_error(SentenceKind::RMC, source))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use time::macros::datetime;

    use super::*;
    use crate::{FieldError, parse_frame};

    fn decode(line: &str) -> Result<RMC, Error> {
        RMC::decode(&parse_frame(line).unwrap())
    }

    #[test]
    fn test_rmc_decoding() {
        let rmc =
            decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A").unwrap();

        assert_eq!(rmc.timestamp, datetime!(1994-03-23 12:35:19 UTC));
        assert!(rmc.is_active());
        assert!((rmc.latitude - 48.1173).abs() < 1e-9);
        assert!((rmc.longitude - 11.516_666_7).abs() < 1e-6);
        assert_eq!(rmc.speed, 22.4);
        assert_eq!(rmc.track_angle, 84.4);
        assert_eq!(rmc.magnetic_variation, -3.1);
    }

    #[test]
    fn test_rmc_empty_variation() {
        let rmc = decode(
            "$GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*74",
        )
        .unwrap();

        assert_eq!(rmc.timestamp, datetime!(2006-07-11 16:22:54 UTC));
        assert!((rmc.latitude - 37.383_806_2).abs() < 1e-6);
        assert!((rmc.longitude + 121.989_975_5).abs() < 1e-6);
        assert_eq!(rmc.speed, 0.82);
        assert_eq!(rmc.magnetic_variation, 0.0);
    }

    #[test]
    fn test_rmc_empty_westerly_variation() {
        let rmc =
            decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,,W*46").unwrap();

        assert_eq!(rmc.magnetic_variation, 0.0);
        assert!(rmc.magnetic_variation.is_sign_positive());
    }

    #[test]
    fn test_rmc_bad_longitude() {
        let result =
            decode("$GPRMC,123519,A,4807.038,N,011X1.000,E,022.4,084.4,230394,003.1,W*01");

        assert_matches!(
            result,
            Err(Error::Field {
                kind: SentenceKind::RMC,
                source: FieldError::Position(_),
                ..
            })
        );
    }

    #[test]
    fn test_rmc_shape() {
        let frame = crate::tokenize("$GPRMC,123519,A,4807.038,N,01131.000,E*00");
        assert_matches!(
            RMC::decode(&frame),
            Err(Error::Shape {
                kind: SentenceKind::RMC,
                ..
            })
        );

        let frame =
            crate::tokenize("$GPRMC,123519,,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*00");
        assert_matches!(RMC::decode(&frame), Err(Error::Shape { .. }));
    }
}
