//! Ordered, non-overlapping collections of periods.
//!
//! A [`PeriodSet`] is the set-algebra workhorse: schedule windows union into
//! one set, confirmed bookings into another, and subtraction yields the free
//! gaps. Every operation returns a new set; the originals are never mutated.

use serde::Serialize;

use crate::period::{Boundaries, Period};

/// A normalized collection of periods, sorted by start time.
///
/// Invariant: no two member periods overlap or touch on the second grid.
/// [`PeriodSet::add`] maintains the invariant by merging on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodSet {
    periods: Vec<Period>,
}

impl PeriodSet {
    /// The empty set.
    pub fn new() -> Self {
        PeriodSet::default()
    }

    /// Build a set by folding [`PeriodSet::add`] over `periods`.
    pub fn from_periods<I>(periods: I) -> Self
    where
        I: IntoIterator<Item = Period>,
    {
        periods
            .into_iter()
            .fold(PeriodSet::new(), |set, p| set.add(p))
    }

    /// Insert a period, merging it with every member it overlaps or touches,
    /// and return the re-sorted set.
    pub fn add(&self, period: Period) -> PeriodSet {
        let mut merged = period;
        let mut periods = Vec::with_capacity(self.periods.len() + 1);

        for member in &self.periods {
            if touches_or_overlaps(&merged, member) {
                merged = span(&merged, member);
            } else {
                periods.push(*member);
            }
        }

        periods.push(merged);
        periods.sort_by_key(|p| p.grid());
        PeriodSet { periods }
    }

    /// The time covered by `self` but not by `other`.
    ///
    /// Each member is clipped against every overlapping member of `other` in
    /// start order. A clip can consume a member entirely, shorten one edge,
    /// or split it in two. Clipped edges flip the subtrahend's boundary
    /// inclusion, so subtracting a period with an included start leaves a
    /// remainder with an excluded end at that instant.
    pub fn subtract(&self, other: &PeriodSet) -> PeriodSet {
        let mut periods = Vec::new();

        for member in &self.periods {
            let mut fragments = vec![*member];

            for clip in &other.periods {
                let mut survivors = Vec::new();
                for fragment in fragments {
                    if !fragment.overlaps(clip) {
                        survivors.push(fragment);
                        continue;
                    }

                    let (frag_start, frag_end) = fragment.grid();
                    let (clip_start, clip_end) = clip.grid();

                    if clip_start > frag_start {
                        survivors.push(Period::new_unchecked(
                            fragment.start(),
                            clip.start(),
                            Boundaries::from_flags(
                                fragment.boundaries().start_included(),
                                !clip.boundaries().start_included(),
                            ),
                        ));
                    }
                    if clip_end < frag_end {
                        survivors.push(Period::new_unchecked(
                            clip.end(),
                            fragment.end(),
                            Boundaries::from_flags(
                                !clip.boundaries().end_included(),
                                fragment.boundaries().end_included(),
                            ),
                        ));
                    }
                }
                fragments = survivors;
            }

            periods.extend(fragments);
        }

        // Fragments inherit their source order, and sources are disjoint and
        // sorted, so the result is already normalized.
        PeriodSet { periods }
    }

    /// True when any member of `self` overlaps any member of `other`.
    ///
    /// Pairwise comparison; both sets are bounded by the number of bookings
    /// on a single room and day, so there is nothing to be clever about.
    pub fn overlaps_any(&self, other: &PeriodSet) -> bool {
        self.periods
            .iter()
            .any(|a| other.periods.iter().any(|b| a.overlaps(b)))
    }

    /// Every pairwise intersection between `self` and `other`, as a set.
    pub fn overlap_all(&self, other: &PeriodSet) -> PeriodSet {
        let periods = self
            .periods
            .iter()
            .flat_map(|a| other.periods.iter().filter_map(|b| a.intersect(b)))
            .collect();
        PeriodSet { periods }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl<'a> IntoIterator for &'a PeriodSet {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

impl FromIterator<Period> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        PeriodSet::from_periods(iter)
    }
}

/// Overlap test that also counts exact grid adjacency, so `add` coalesces
/// contiguous coverage into one member.
fn touches_or_overlaps(a: &Period, b: &Period) -> bool {
    let (a_start, a_end) = a.grid();
    let (b_start, b_end) = b.grid();
    a_start <= b_end && b_start <= a_end
}

/// The smallest period covering both inputs, keeping the boundary flag of
/// whichever period supplies each outer edge.
fn span(a: &Period, b: &Period) -> Period {
    let (a_start, a_end) = a.grid();
    let (b_start, b_end) = b.grid();

    let (start, start_included) = if a_start <= b_start {
        (a.start(), a.boundaries().start_included())
    } else {
        (b.start(), b.boundaries().start_included())
    };
    let (end, end_included) = if a_end >= b_end {
        (a.end(), a.boundaries().end_included())
    } else {
        (b.end(), b.boundaries().end_included())
    };

    Period::new_unchecked(start, end, Boundaries::from_flags(start_included, end_included))
}
