#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame,
    nmea_content::{FixQuality, SentenceKind},
    parsing::FieldParser,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Both altitude units (fields 10 and 12) must be `M`. The differential fields 13 and 14
/// are ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub time: time::Time,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Quality of the fix
    pub fix_quality: FixQuality,
    /// Number of satellites in use
    pub satellite_count: u32,
    /// Horizontal dilution of precision
    pub hdop: f64,
    /// Altitude above mean sea level, meters
    pub altitude: f64,
    /// Height of the geoid above the WGS84 ellipsoid, meters
    pub geoid_height: f64,
}

impl GGA {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [
            _,
            fix_time,
            latitude,
            north_south,
            longitude,
            east_west,
            fix_quality,
            satellite_count,
            hdop,
            altitude,
            "M",
            geoid_height,
            "M",
            ..,
        ] = frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::GGA));
        };

        let mut p = FieldParser::new();
        let time = p.time(fix_time);
        let latitude = p.dms(latitude, north_south);
        let longitude = p.dms(longitude, east_west);
        let fix_quality = p.code(fix_quality);
        let satellite_count = p.int(satellite_count);
        let hdop = p.float(hdop);
        let altitude = p.float(altitude);
        let geoid_height = p.float(geoid_height);

        p.finish(GGA {
            time,
            latitude,
            longitude,
            fix_quality,
            satellite_count,
            hdop,
            altitude,
            geoid_height,
        })
        .map_err(|source| frame.field_error(SentenceKind::GGA, source))
    }
}
