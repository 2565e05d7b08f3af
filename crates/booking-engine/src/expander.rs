//! Recurring weekday expansion -- every calendar date in a range that falls
//! on a given weekday.
//!
//! Weekly class schedules are stored as weekday names, so turning "every
//! Monday between the semester start and end" into concrete dates is the
//! first step of any range query. Weekday names arrive from users in Spanish
//! or English; one normalization table here maps them onto [`chrono::Weekday`]
//! and nothing else in the engine ever sees a localized name.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, Result};

/// Resolve a weekday name from the closed English/Spanish vocabulary.
///
/// Case-insensitive; Spanish diacritics are folded before lookup, so
/// "Miércoles" and "miercoles" both resolve to [`Weekday::Wed`].
///
/// # Errors
/// Returns [`EngineError::InvalidWeekday`] for any token outside the
/// vocabulary.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let token: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect();

    match token.as_str() {
        "monday" | "lunes" => Ok(Weekday::Mon),
        "tuesday" | "martes" => Ok(Weekday::Tue),
        "wednesday" | "miercoles" => Ok(Weekday::Wed),
        "thursday" | "jueves" => Ok(Weekday::Thu),
        "friday" | "viernes" => Ok(Weekday::Fri),
        "saturday" | "sabado" => Ok(Weekday::Sat),
        "sunday" | "domingo" => Ok(Weekday::Sun),
        _ => Err(EngineError::InvalidWeekday(name.to_string())),
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' | 'ü' => 'u',
        _ => c,
    }
}

/// All dates in `[from, to]` falling on `weekday`, ascending.
///
/// Locates the first matching date on or after `from`, then steps forward a
/// week at a time. The returned iterator is lazy and restartable via
/// `clone`; it is empty when no matching date exists in the range.
///
/// # Errors
/// Returns [`EngineError::InvalidWeekday`] when `weekday` is not in the
/// recognized vocabulary.
pub fn expand(from: NaiveDate, to: NaiveDate, weekday: &str) -> Result<WeekdayDates> {
    let target = parse_weekday(weekday)?;

    let offset =
        (target.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    let first = from
        .checked_add_days(Days::new(u64::from(offset)))
        .filter(|d| *d <= to);

    Ok(WeekdayDates { next: first, until: to })
}

/// Lazy, finite sequence of dates produced by [`expand`].
#[derive(Debug, Clone)]
pub struct WeekdayDates {
    next: Option<NaiveDate>,
    until: NaiveDate,
}

impl Iterator for WeekdayDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current
            .checked_add_days(Days::new(7))
            .filter(|d| *d <= self.until);
        Some(current)
    }
}
