#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Fix time in UTC
    pub time: time::Time,
    /// `true` when the status is `A` (data valid)
    pub active: bool,
}

impl GLL {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, latitude, north_south, longitude, east_west, fix_time, status, ..] =
            frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::GLL));
        };

        let mut p = FieldParser::new();
        let latitude = p.dms(latitude, north_south);
        let longitude = p.dms(longitude, east_west);
        let time = p.time(fix_time);

        p.finish(GLL {
            latitude,
            longitude,
            time,
            active: *status == "A",
        })
        .map_err(|source| frame.field_error(SentenceKind::GLL, source))
    }
}
