#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// AAM - Waypoint Arrival Alarm
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_aam_waypoint_arrival_alarm>
///
/// ```text
///         1 2 3   4 5    6
///         | | |   | |    |
///  $--AAM,A,A,x.x,N,c--c*hh<CR><LF>
/// ```
///
/// The radius unit (field 4) and waypoint ID (field 5) are not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct AAM {
    /// The arrival circle has been entered
    pub arrival_circle_entered: bool,
    /// The perpendicular of the leg has been passed at the waypoint
    pub perpendicular_passed: bool,
    /// Radius of the arrival circle
    pub radius: f64,
}

impl AAM {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, arrival, perpendicular, radius, ..] = frame.fields() else {
            return Err(frame.shape_error(SentenceKind::AAM));
        };

        let mut p = FieldParser::new();
        let radius = p.float(radius);

        p.finish(AAM {
            arrival_circle_entered: *arrival == "A",
            perpendicular_passed: *perpendicular == "A",
            radius,
        })
        .map_err(|source| frame.field_error(SentenceKind::AAM, source))
    }
}
