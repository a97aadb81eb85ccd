#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// The unit markers `T`, `M`, `N` and `K` must be present in fields 2, 4, 6 and 8.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Course over ground, degrees true
    pub true_track: f64,
    /// Course over ground, degrees magnetic
    pub magnetic_track: f64,
    /// Speed over ground in knots
    pub speed_knots: f64,
    /// Speed over ground in km/h
    pub speed_kmh: f64,
}

impl VTG {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, true_track, "T", magnetic_track, "M", knots, "N", kmh, "K", ..] = frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::VTG));
        };

        let mut p = FieldParser::new();
        let true_track = p.float(true_track);
        let magnetic_track = p.float(magnetic_track);
        let speed_knots = p.float(knots);
        let speed_kmh = p.float(kmh);

        p.finish(VTG {
            true_track,
            magnetic_track,
            speed_knots,
            speed_kmh,
        })
        .map_err(|source| frame.field_error(SentenceKind::VTG, source))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::tokenize;

    #[test]
    fn test_vtg_decoding() {
        let frame = tokenize("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48");
        let vtg = VTG::decode(&frame).unwrap();

        assert_eq!(
            vtg,
            VTG {
                true_track: 54.7,
                magnetic_track: 34.4,
                speed_knots: 5.5,
                speed_kmh: 10.2,
            }
        );
    }

    #[test]
    fn test_vtg_shape() {
        let cases = [
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,X*5B",
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2*00",
            "$GPVTG,054.7,,034.4,M,005.5,N,010.2,K*00",
        ];

        for line in cases {
            assert_matches!(
                VTG::decode(&tokenize(line)),
                Err(Error::Shape {
                    kind: SentenceKind::VTG,
                    ..
                }),
                "{line}"
            );
        }
    }

    #[test]
    fn test_vtg_empty_values() {
        let vtg = VTG::decode(&tokenize("$GPVTG,,T,,M,0.0,N,0.0,K,N*00")).unwrap();
        assert_eq!(vtg.true_track, 0.0);
        assert_eq!(vtg.magnetic_track, 0.0);
    }
}
