//! Property-based tests for weekday date expansion using proptest.

use booking_engine::expand;
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// The full accepted vocabulary, with the weekday each token must resolve to.
const WEEKDAY_NAMES: [(&str, Weekday); 14] = [
    ("monday", Weekday::Mon),
    ("lunes", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("martes", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("miércoles", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("jueves", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("viernes", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sábado", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("domingo", Weekday::Sun),
];

fn arb_weekday_name() -> impl Strategy<Value = (&'static str, Weekday)> {
    (0usize..WEEKDAY_NAMES.len()).prop_map(|i| WEEKDAY_NAMES[i])
}

/// A start date in 2020-2030 (day capped at 28 to dodge invalid combos).
fn arb_from_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Range length in days, zero included so empty ranges get exercised.
fn arb_span() -> impl Strategy<Value = u64> {
    0u64..180
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: every produced date is in range and on the right weekday
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn dates_are_in_range_and_on_the_weekday(
        from in arb_from_date(),
        span in arb_span(),
        (name, weekday) in arb_weekday_name(),
    ) {
        let to = from + chrono::Days::new(span);
        let dates: Vec<NaiveDate> = expand(from, to, name).unwrap().collect();

        for d in &dates {
            prop_assert!(*d >= from && *d <= to, "{} outside [{}, {}]", d, from, to);
            prop_assert_eq!(d.weekday(), weekday);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: consecutive dates are exactly seven days apart, and the first
// one is the earliest possible match
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn dates_step_by_exactly_one_week(
        from in arb_from_date(),
        span in arb_span(),
        (name, _weekday) in arb_weekday_name(),
    ) {
        let to = from + chrono::Days::new(span);
        let dates: Vec<NaiveDate> = expand(from, to, name).unwrap().collect();

        if let Some(first) = dates.first() {
            prop_assert!((*first - from).num_days() < 7);
        }
        for pair in dates.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: the sequence is empty exactly when no match exists, and a
// range of a full week or more always contains one
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn week_long_ranges_always_produce_a_date(
        from in arb_from_date(),
        span in arb_span(),
        (name, _weekday) in arb_weekday_name(),
    ) {
        let to = from + chrono::Days::new(span);
        let count = expand(from, to, name).unwrap().count();

        if span >= 6 {
            prop_assert!(count >= 1, "a {}-day range must contain every weekday", span + 1);
        }
        // Expected total: one per started week, plus one more if the
        // remainder still reaches the weekday.
        prop_assert!(count as u64 <= span / 7 + 1);
    }
}

// ---------------------------------------------------------------------------
// Property 4: the iterator is restartable — cloning replays the sequence
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn cloned_iterator_replays_the_sequence(
        from in arb_from_date(),
        span in arb_span(),
        (name, _weekday) in arb_weekday_name(),
    ) {
        let to = from + chrono::Days::new(span);
        let dates = expand(from, to, name).unwrap();

        let first_walk: Vec<NaiveDate> = dates.clone().collect();
        let second_walk: Vec<NaiveDate> = dates.collect();
        prop_assert_eq!(first_walk, second_walk);
    }
}
