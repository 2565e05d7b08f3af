//! Turn free gaps into fixed-size bookable blocks.
//!
//! The booking form does not offer arbitrary times; it offers half-hour
//! blocks. Each gap becomes one list of "HH:MM" labels walked from the gap's
//! start, rounding the last block up past the true end rather than clipping
//! it short. A gap shorter than one block still yields its start label plus
//! one block past it; the original system always surfaces at least one block
//! per gap and that behavior is kept.

use chrono::Duration;

use crate::error::{EngineError, Result};
use crate::period_set::PeriodSet;

/// Block length used by the booking form.
pub const DEFAULT_BLOCK_MINUTES: i64 = 30;

/// Segment each gap into `block_minutes`-sized labels.
///
/// One list per gap, in ascending gap order. Every list starts with the
/// gap's start label and ends with the first block boundary at or past the
/// gap's end.
///
/// # Errors
/// Returns [`EngineError::InvalidBlockSize`] when `block_minutes` is not
/// positive.
pub fn segment(gaps: &PeriodSet, block_minutes: i64) -> Result<Vec<Vec<String>>> {
    if block_minutes <= 0 {
        return Err(EngineError::InvalidBlockSize(block_minutes));
    }
    let step = Duration::minutes(block_minutes);

    let mut blocks = Vec::with_capacity(gaps.len());
    for gap in gaps {
        let end = gap.end();
        let mut cursor = gap.start();
        let mut labels = vec![label(cursor)];

        loop {
            // Overflow is unreachable for times of day; stop walking if a
            // pathological range hits the datetime limit.
            cursor = match cursor.checked_add_signed(step) {
                Some(next) => next,
                None => break,
            };
            labels.push(label(cursor));
            if cursor >= end {
                break;
            }
        }

        blocks.push(labels);
    }

    Ok(blocks)
}

fn label(instant: chrono::NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}
