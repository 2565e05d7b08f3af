//! Conflict detection for new booking submissions.
//!
//! Before a booking is committed, its time range is tested against every
//! confirmed booking already on the same room and date. All periods here use
//! exclusive ends, so a booking ending at 10:00 never conflicts with one
//! starting at 10:00.
//!
//! This is the decision function only. Two concurrent submissions can both
//! observe "no conflict" and both try to commit; the storage layer must
//! serialize check-then-insert per room and date (a unique constraint or a
//! locked read-modify-write).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::availability::{on_reference_date, OccupiedSlot};
use crate::error::Result;
use crate::period::{Boundaries, Period};
use crate::period_set::PeriodSet;

/// A booking submission awaiting conflict clearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedBooking {
    pub classroom_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub finish_time: NaiveTime,
}

/// A detected collision between a proposal and one existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The existing booking's period.
    pub existing: Period,
    /// The shared sub-period.
    pub overlap: Period,
    pub overlap_minutes: i64,
}

fn proposed_period(proposed: &ProposedBooking) -> Result<Period> {
    Period::new(
        on_reference_date(proposed.start_time),
        on_reference_date(proposed.finish_time),
        Boundaries::ExcludeEnd,
    )
}

fn occupied_period(slot: &OccupiedSlot) -> Result<Period> {
    Period::new(
        on_reference_date(slot.start_time),
        on_reference_date(slot.finish_time),
        Boundaries::ExcludeEnd,
    )
}

/// True when the proposal collides with any existing booking.
///
/// `existing` must already be filtered to the proposal's room and date, with
/// cancelled bookings removed; this function compares times only.
///
/// # Errors
/// Returns [`crate::EngineError::InvalidPeriod`] when the proposal or any
/// existing slot has a start at or after its finish (zero-length bookings
/// are rejected by the exclusive-end policy).
pub fn check_overlap(proposed: &ProposedBooking, existing: &[OccupiedSlot]) -> Result<bool> {
    let proposal = PeriodSet::new().add(proposed_period(proposed)?);

    let mut booked = PeriodSet::new();
    for slot in existing {
        booked = booked.add(occupied_period(slot)?);
    }

    Ok(proposal.overlaps_any(&booked))
}

/// Every existing booking the proposal collides with, with overlap detail.
///
/// Unlike [`check_overlap`] this keeps existing bookings separate instead of
/// merging them, so each conflict names the booking it collides with.
///
/// # Errors
/// Same conditions as [`check_overlap`].
pub fn find_conflicts(
    proposed: &ProposedBooking,
    existing: &[OccupiedSlot],
) -> Result<Vec<Conflict>> {
    let proposal = proposed_period(proposed)?;

    let mut conflicts = Vec::new();
    for slot in existing {
        let booked = occupied_period(slot)?;
        if let Some(overlap) = proposal.intersect(&booked) {
            conflicts.push(Conflict {
                existing: booked,
                overlap_minutes: overlap.duration_minutes(),
                overlap,
            });
        }
    }

    Ok(conflicts)
}
