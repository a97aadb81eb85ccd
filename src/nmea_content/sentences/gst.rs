#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2 3 4 5 6 7 8
///         |         | | | | | | |
///  $--GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GST {
    /// Time of the associated fix, in UTC
    pub time: time::Time,
    /// Total RMS standard deviation of ranges inputs to the navigation solution
    pub rms_deviation: f64,
    /// Standard deviation of the semi-major axis of the error ellipse, meters
    pub semi_major_deviation: f64,
    /// Standard deviation of the semi-minor axis of the error ellipse, meters
    pub semi_minor_deviation: f64,
    /// Orientation of the semi-major axis of the error ellipse, degrees from true north
    pub semi_major_orientation: f64,
    /// Standard deviation of the latitude error, meters
    pub latitude_error_deviation: f64,
    /// Standard deviation of the longitude error, meters
    pub longitude_error_deviation: f64,
    /// Standard deviation of the altitude error, meters
    pub altitude_error_deviation: f64,
}

impl GST {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [
            _,
            fix_time,
            rms,
            semi_major,
            semi_minor,
            orientation,
            latitude_error,
            longitude_error,
            altitude_error,
            ..,
        ] = frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::GST));
        };

        let mut p = FieldParser::new();
        let time = p.time(fix_time);
        let rms_deviation = p.float(rms);
        let semi_major_deviation = p.float(semi_major);
        let semi_minor_deviation = p.float(semi_minor);
        let semi_major_orientation = p.float(orientation);
        let latitude_error_deviation = p.float(latitude_error);
        let longitude_error_deviation = p.float(longitude_error);
        let altitude_error_deviation = p.float(altitude_error);

        p.finish(GST {
            time,
            rms_deviation,
            semi_major_deviation,
            semi_minor_deviation,
            semi_major_orientation,
            latitude_error_deviation,
            longitude_error_deviation,
            altitude_error_deviation,
        })
        .map_err(|source| frame.field_error(SentenceKind::GST, source))
    }
}
