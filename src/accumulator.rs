//! # GSV Reassembly
//!
//! A receiver spreads its satellites-in-view list over a sequence of [`GSV`] fragments.
//! [`GSVAccumulator`] stitches consecutive fragments back together.

use std::mem;

use tracing::trace;

use crate::nmea_content::{GSV, SatelliteInfo};

/// Where an accumulator stands in a fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GSVState {
    /// Nothing received yet.
    #[default]
    Idle,
    /// Part of a sequence has been received.
    ///
    /// `last` is 0 while waiting for fragment 1 after an out-of-order fragment.
    Tracking {
        total: u32,
        last: u32,
        satellites: Vec<SatelliteInfo>,
    },
}

/// Reassembles the satellite list spread over a sequence of GSV fragments.
///
/// Fragments must arrive in order, starting at 1. Anything else resynchronizes the
/// accumulator, which then waits for the next fragment 1.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{GSVAccumulator, GSV, SatelliteInfo};
///
/// let fragment = |n, prn| GSV {
///     total_fragments: 2,
///     fragment: n,
///     satellites_in_view: 2,
///     satellites: vec![SatelliteInfo { prn, ..Default::default() }],
/// };
///
/// let mut accumulator = GSVAccumulator::new();
/// assert!(!accumulator.add(fragment(1, 7)));
/// assert!(accumulator.add(fragment(2, 9)));
///
/// let prns: Vec<u32> = accumulator.satellites().iter().map(|s| s.prn).collect();
/// assert_eq!(prns, [7, 9]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GSVAccumulator {
    in_view: u32,
    state: GSVState,
}

impl GSVAccumulator {
    /// Creates an idle accumulator with no satellites in view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next fragment.
    ///
    /// Returns `true` when this fragment completes a sequence, at which point
    /// [`satellites`](Self::satellites) holds the whole list. The list stays available
    /// until the next fragment is added.
    pub fn add(&mut self, gsv: GSV) -> bool {
        let (total, last, mut satellites) = match mem::take(&mut self.state) {
            GSVState::Idle => (0, 0, Vec::new()),
            GSVState::Tracking {
                total,
                last,
                satellites,
            } => (total, last, satellites),
        };

        if gsv.total_fragments != total || last.checked_add(1) != Some(gsv.fragment) {
            trace!(
                total = gsv.total_fragments,
                fragment = gsv.fragment,
                "starting a new GSV sequence"
            );

            self.in_view = gsv.satellites_in_view;
            self.state = if gsv.fragment == 1 {
                GSVState::Tracking {
                    total: gsv.total_fragments,
                    last: 1,
                    satellites: gsv.satellites,
                }
            } else {
                GSVState::Tracking {
                    total: gsv.total_fragments,
                    last: 0,
                    satellites: Vec::new(),
                }
            };

            return gsv.total_fragments == 1;
        }

        satellites.extend(gsv.satellites);
        self.state = GSVState::Tracking {
            total,
            last: gsv.fragment,
            satellites,
        };

        gsv.fragment == total
    }

    /// Satellites in view, as announced by the first fragment of the current sequence.
    pub fn in_view(&self) -> u32 {
        self.in_view
    }

    /// Number of fragments in the current sequence, 0 before any fragment.
    pub fn total(&self) -> u32 {
        match self.state {
            GSVState::Idle => 0,
            GSVState::Tracking { total, .. } => total,
        }
    }

    /// Number of the last fragment accepted into the current sequence.
    pub fn last_fragment(&self) -> u32 {
        match self.state {
            GSVState::Idle => 0,
            GSVState::Tracking { last, .. } => last,
        }
    }

    /// Satellites collected so far in the current sequence.
    pub fn satellites(&self) -> &[SatelliteInfo] {
        match &self.state {
            GSVState::Idle => &[],
            GSVState::Tracking { satellites, .. } => satellites,
        }
    }

    /// Returns `true` when the last fragment of the current sequence has been added.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, GSVState::Tracking { total, last, .. } if total > 0 && last == total)
    }

    /// The current state of fragment tracking.
    pub fn state(&self) -> &GSVState {
        &self.state
    }
}
