#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, nmea_content::SentenceKind, parsing::FieldParser};

/// One satellite entry of a [`GSV`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SatelliteInfo {
    /// Satellite PRN number
    pub prn: u32,
    /// Elevation in degrees
    pub elevation: i32,
    /// Azimuth in degrees true
    pub azimuth: u32,
    /// Signal-to-noise ratio in dB, 0 when not tracking
    pub snr: u32,
}

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields from 4 on are read as `(prn, elevation, azimuth, snr)` groups. A trailing
/// group of fewer than four fields is ignored.
///
/// A full satellite list is usually spread over several fragments; see
/// [`GSVAccumulator`](crate::GSVAccumulator) for reassembling them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of fragments in this sequence
    pub total_fragments: u32,
    /// 1-based number of this fragment
    pub fragment: u32,
    /// Total number of satellites in view
    pub satellites_in_view: u32,
    /// Satellites carried by this fragment
    pub satellites: Vec<SatelliteInfo>,
}

impl GSV {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, total_fragments, fragment, satellites_in_view, entries @ ..] = frame.fields()
        else {
            return Err(frame.shape_error(SentenceKind::GSV));
        };

        let mut p = FieldParser::new();
        let total_fragments = p.int(total_fragments);
        let fragment = p.int(fragment);
        let satellites_in_view = p.int(satellites_in_view);

        let mut satellites = Vec::with_capacity(entries.len() / 4);
        for entry in entries.chunks_exact(4) {
            if let [prn, elevation, azimuth, snr] = entry {
                satellites.push(SatelliteInfo {
                    prn: p.int(prn),
                    elevation: p.int(elevation),
                    azimuth: p.int(azimuth),
                    snr: p.int(snr),
                });
            }
        }

        p.finish(GSV {
            total_fragments,
            fragment,
            satellites_in_view,
            satellites,
        })
        .map_err(|source| frame.field_error(SentenceKind::GSV, source))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{FieldError, tokenize};

    #[test]
    fn test_gsv_decoding() {
        let frame =
            tokenize("$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75");
        let gsv = GSV::decode(&frame).unwrap();

        assert_eq!(gsv.total_fragments, 2);
        assert_eq!(gsv.fragment, 1);
        assert_eq!(gsv.satellites_in_view, 8);
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[0],
            SatelliteInfo {
                prn: 1,
                elevation: 40,
                azimuth: 83,
                snr: 46,
            }
        );
        assert_eq!(gsv.satellites[3].prn, 14);
    }

    #[test]
    fn test_gsv_partial_groups() {
        let cases = [
            ("$GPGSV,1,1,00*00", 0),
            ("$GPGSV,1,1,01,05,45,120*00", 0),
            ("$GPGSV,1,1,01,05,45,120,*00", 1),
            ("$GPGSV,1,1,02,05,45,120,38,06,30*00", 1),
            ("$GPGSV,1,1,01,11,,,*00", 1),
        ];

        for (line, count) in cases {
            let gsv = GSV::decode(&tokenize(line)).unwrap();
            assert_eq!(gsv.satellites.len(), count, "{line}");
        }
    }

    #[test]
    fn test_gsv_errors() {
        assert_matches!(
            GSV::decode(&tokenize("$GPGSV,1,1*00")),
            Err(Error::Shape {
                kind: SentenceKind::GSV,
                ..
            })
        );
        assert_matches!(
            GSV::decode(&tokenize("$GPGSV,1,1,01,05,4x,120,38*00")),
            Err(Error::Field {
                source: FieldError::Int { .. },
                ..
            })
        );
    }
}
