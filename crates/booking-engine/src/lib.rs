//! # booking-engine
//!
//! Interval algebra for classroom booking availability.
//!
//! Given a room's recurring weekly opening hours and its confirmed bookings,
//! the engine computes the free time windows left, slices them into fixed
//! bookable blocks, and decides whether a proposed booking collides with an
//! existing one. All operations are pure, synchronous computations over
//! immutable snapshots; fetching schedule and booking rows, authorization,
//! and rendering belong to the surrounding application.
//!
//! ## Modules
//!
//! - [`period`] — immutable time intervals with boundary-inclusion rules
//! - [`period_set`] — union, subtraction, and overlap over period collections
//! - [`expander`] — weekday date expansion with localized-name normalization
//! - [`availability`] — opening hours minus bookings → free gaps
//! - [`segmenter`] — free gaps → fixed-size "HH:MM" block labels
//! - [`conflict`] — overlap verdicts for new booking submissions
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod expander;
pub mod period;
pub mod period_set;
pub mod segmenter;

pub use availability::{resolve, OccupiedSlot, ScheduleSlot};
pub use conflict::{check_overlap, find_conflicts, Conflict, ProposedBooking};
pub use error::{EngineError, Result};
pub use expander::{expand, parse_weekday, WeekdayDates};
pub use period::{Boundaries, Period};
pub use period_set::PeriodSet;
pub use segmenter::{segment, DEFAULT_BLOCK_MINUTES};
