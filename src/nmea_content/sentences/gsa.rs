#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame,
    nmea_content::{FixMode, SentenceKind},
    parsing::FieldParser,
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Exactly 18 fields (tag included) are accepted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// `true` for automatic 2D/3D selection, `false` for manual
    pub automatic: bool,
    /// Fix mode, `None` when the field is empty
    pub fix_mode: Option<FixMode>,
    /// PRNs of the satellites used for the fix, in field order, empty slots skipped
    pub satellites_used: heapless::Vec<u32, 12>,
    /// Position dilution of precision
    pub pdop: f64,
    /// Horizontal dilution of precision
    pub hdop: f64,
    /// Vertical dilution of precision
    pub vdop: f64,
}

impl GSA {
    pub(crate) fn decode(frame: &Frame<'_>) -> Result<Self, Error> {
        let [_, selection, fix_mode, prns @ .., pdop, hdop, vdop] = frame.fields() else {
            return Err(frame.shape_error(SentenceKind::GSA));
        };
        if prns.len() != 12 {
            return Err(frame.shape_error(SentenceKind::GSA));
        }

        let mut p = FieldParser::new();
        let fix_mode = if fix_mode.is_empty() {
            None
        } else {
            Some(p.code(fix_mode))
        };

        let mut satellites_used: heapless::Vec<u32, 12> = heapless::Vec::new();
        for prn in prns.iter().filter(|prn| !prn.is_empty()) {
            // At most 12 slots, so this cannot overflow.
            let _ = satellites_used.push(p.int(prn));
        }

        let pdop = p.float(pdop);
        let hdop = p.float(hdop);
        let vdop = p.float(vdop);

        p.finish(GSA {
            automatic: *selection == "A",
            fix_mode,
            satellites_used,
            pdop,
            hdop,
            vdop,
        })
        .map_err(|source| frame.field_error(SentenceKind::GSA, source))
    }
}
