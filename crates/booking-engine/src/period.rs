//! Immutable time periods with explicit boundary-inclusion rules.
//!
//! A [`Period`] is a bounded interval at whole-second precision. Boundary
//! flags decide whether the start/end instants belong to the period, which is
//! what lets back-to-back bookings coexist: a booking ending at 10:00 with an
//! excluded end shares no instant with one starting at 10:00.

use chrono::{Duration, NaiveDateTime, SubsecRound};
use serde::Serialize;

use crate::error::{EngineError, Result};

/// Boundary-inclusion policy for a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Boundaries {
    /// Both boundaries belong to the period (the default).
    #[default]
    IncludeAll,
    /// The start instant is excluded.
    ExcludeStart,
    /// The end instant is excluded. Used for booking conflict checks so that
    /// adjacent bookings do not collide.
    ExcludeEnd,
    /// Both boundaries are excluded.
    ExcludeAll,
}

impl Boundaries {
    pub fn start_included(self) -> bool {
        matches!(self, Boundaries::IncludeAll | Boundaries::ExcludeEnd)
    }

    pub fn end_included(self) -> bool {
        matches!(self, Boundaries::IncludeAll | Boundaries::ExcludeStart)
    }

    pub(crate) fn from_flags(start_included: bool, end_included: bool) -> Self {
        match (start_included, end_included) {
            (true, true) => Boundaries::IncludeAll,
            (false, true) => Boundaries::ExcludeStart,
            (true, false) => Boundaries::ExcludeEnd,
            (false, false) => Boundaries::ExcludeAll,
        }
    }
}

/// An immutable time interval at second precision.
///
/// All comparisons run on the period's half-open second grid: an included
/// start covers its own second, an excluded end stops one second earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    start: NaiveDateTime,
    end: NaiveDateTime,
    boundaries: Boundaries,
}

impl Period {
    /// Build a period from two instants and a boundary policy.
    ///
    /// Sub-second components are discarded. A degenerate period
    /// (`start == end`) denotes a single instant and requires both
    /// boundaries inclusive.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidPeriod`] when `start > end`, or when
    /// `start == end` with an excluded boundary.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, boundaries: Boundaries) -> Result<Self> {
        let start = start.trunc_subsecs(0);
        let end = end.trunc_subsecs(0);

        if start > end {
            return Err(EngineError::InvalidPeriod(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        if start == end && boundaries != Boundaries::IncludeAll {
            return Err(EngineError::InvalidPeriod(format!(
                "degenerate period at {} must include both boundaries",
                start
            )));
        }

        Ok(Period {
            start,
            end,
            boundaries,
        })
    }

    /// Internal constructor for set operations that have already established
    /// the invariants (`start <= end`, non-empty second grid).
    pub(crate) fn new_unchecked(
        start: NaiveDateTime,
        end: NaiveDateTime,
        boundaries: Boundaries,
    ) -> Self {
        debug_assert!(start <= end);
        Period {
            start,
            end,
            boundaries,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// Wall-clock length of the period in minutes, ignoring boundary flags.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// The period's coverage as a half-open `[start, end)` pair on the
    /// second grid. An included boundary instant contributes its own second.
    pub(crate) fn grid(&self) -> (NaiveDateTime, NaiveDateTime) {
        let one = Duration::seconds(1);
        let grid_start = if self.boundaries.start_included() {
            self.start
        } else {
            self.start + one
        };
        let grid_end = if self.boundaries.end_included() {
            self.end + one
        } else {
            self.end
        };
        (grid_start, grid_end)
    }

    /// True when the two periods share at least one instant under their
    /// respective boundary rules. Touching boundaries where either side
    /// excludes the shared instant are not overlap.
    pub fn overlaps(&self, other: &Period) -> bool {
        let (a_start, a_end) = self.grid();
        let (b_start, b_end) = other.grid();
        a_start < b_end && b_start < a_end
    }

    /// True when `instant` (truncated to seconds) falls inside the period.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        let instant = instant.trunc_subsecs(0);
        let (grid_start, grid_end) = self.grid();
        grid_start <= instant && instant < grid_end
    }

    /// The shared sub-period of two overlapping periods, or `None` when they
    /// do not overlap. Boundary flags follow whichever period supplies the
    /// tighter edge.
    pub fn intersect(&self, other: &Period) -> Option<Period> {
        if !self.overlaps(other) {
            return None;
        }

        let (a_start, a_end) = self.grid();
        let (b_start, b_end) = other.grid();

        let (start, start_included) = if a_start >= b_start {
            (self.start, self.boundaries.start_included())
        } else {
            (other.start, other.boundaries.start_included())
        };
        let (end, end_included) = if a_end <= b_end {
            (self.end, self.boundaries.end_included())
        } else {
            (other.end, other.boundaries.end_included())
        };

        Some(Period::new_unchecked(
            start,
            end,
            Boundaries::from_flags(start_included, end_included),
        ))
    }
}
