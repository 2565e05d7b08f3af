//! Free-time resolution -- opening hours minus confirmed bookings.
//!
//! The persistence layer hands over two pre-filtered snapshots: the room's
//! weekly schedule rows and the confirmed bookings for the day being queried.
//! Both carry times of day only; this module projects them onto one reference
//! date, unions each side into a [`PeriodSet`], and subtracts occupied from
//! available. Selecting the right rows (room, date, non-cancelled status) is
//! the caller's job -- no filtering happens here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::period::{Boundaries, Period};
use crate::period_set::PeriodSet;

/// One row of a room's recurring weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Opaque room identifier; the engine never interprets it.
    pub classroom_id: i64,
    /// Weekday name as stored, e.g. "Monday" or "lunes".
    pub weekday: String,
    pub start_time: NaiveTime,
    pub finish_time: NaiveTime,
}

/// A confirmed booking's time range on a specific calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedSlot {
    pub classroom_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub finish_time: NaiveTime,
}

/// Project a time of day onto the fixed reference date.
///
/// Only time-of-day matters for gap computation, but periods compare full
/// timestamps, so every slot lands on the same arbitrary date (the epoch
/// date, for determinism).
pub(crate) fn on_reference_date(time: NaiveTime) -> NaiveDateTime {
    NaiveDate::default().and_time(time)
}

/// Compute the free time left in a room's schedule after its bookings.
///
/// Unions `schedule` into an availability set and `occupied` into a busy
/// set, both with inclusive boundaries, and returns
/// `availability.subtract(busy)`. Empty inputs are fine: no schedule yields
/// an empty result, no bookings returns the schedule coverage untouched.
///
/// # Errors
/// Returns [`crate::EngineError::InvalidPeriod`] when any slot's start time
/// is after its finish time.
pub fn resolve(schedule: &[ScheduleSlot], occupied: &[OccupiedSlot]) -> Result<PeriodSet> {
    let mut availability = PeriodSet::new();
    for slot in schedule {
        availability = availability.add(Period::new(
            on_reference_date(slot.start_time),
            on_reference_date(slot.finish_time),
            Boundaries::IncludeAll,
        )?);
    }

    let mut busy = PeriodSet::new();
    for slot in occupied {
        busy = busy.add(Period::new(
            on_reference_date(slot.start_time),
            on_reference_date(slot.finish_time),
            Boundaries::IncludeAll,
        )?);
    }

    Ok(availability.subtract(&busy))
}
