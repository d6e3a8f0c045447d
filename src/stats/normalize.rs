//! Observation normalization.
//!
//! Turns parser output (markup order, possibly gappy, possibly duplicated)
//! into a strictly ascending, gap-free daily series.

use chrono::NaiveDate;

use crate::domain::{DailyObservation, ObservationSeries};
use crate::error::NormalizeError;

/// Sort, de-duplicate and gap-fill a series.
///
/// - duplicates with equal counts collapse to one observation
/// - duplicates with different counts are rejected
/// - missing days between the first and last date become zero-count days
///
/// Normalizing an already normalized series returns it unchanged.
pub fn normalize(series: ObservationSeries) -> Result<ObservationSeries, NormalizeError> {
    let mut observations = series.into_vec();
    if observations.is_empty() {
        return Err(NormalizeError::EmptySeries);
    }

    // Stable, so the first-seen count is reported first on conflicts.
    observations.sort_by_key(|o| o.date);

    let mut out: Vec<DailyObservation> = Vec::with_capacity(observations.len());
    let mut collapsed = 0usize;
    let mut filled = 0usize;

    for obs in observations {
        let Some(prev) = out.last().copied() else {
            out.push(obs);
            continue;
        };

        if obs.date == prev.date {
            if obs.count != prev.count {
                return Err(NormalizeError::DuplicateDate {
                    date: obs.date,
                    first: prev.count,
                    second: obs.count,
                });
            }
            collapsed += 1;
            continue;
        }

        for date in days_between(prev.date, obs.date) {
            out.push(DailyObservation::new(date, 0));
            filled += 1;
        }
        out.push(obs);
    }

    tracing::debug!(
        days = out.len(),
        collapsed,
        filled,
        "normalized observation series"
    );

    Ok(ObservationSeries::new(out))
}

/// Dates strictly between `start` and `end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .skip(1)
        .take_while(move |d| *d < end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series(items: &[(NaiveDate, u32)]) -> ObservationSeries {
        items
            .iter()
            .map(|&(date, count)| DailyObservation::new(date, count))
            .collect::<Vec<_>>()
            .into()
    }

    fn counts(s: &ObservationSeries) -> Vec<u32> {
        s.iter().map(|o| o.count).collect()
    }

    #[test]
    fn fills_gaps_with_zero_days() {
        let out = normalize(series(&[(d(2021, 1, 1), 3), (d(2021, 1, 4), 5)])).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out.first_date(), Some(d(2021, 1, 1)));
        assert_eq!(out.last_date(), Some(d(2021, 1, 4)));
        assert_eq!(counts(&out), vec![3, 0, 0, 5]);
    }

    #[test]
    fn sorts_out_of_order_input() {
        let out = normalize(series(&[
            (d(2021, 1, 3), 1),
            (d(2021, 1, 1), 2),
            (d(2021, 1, 2), 3),
        ]))
        .unwrap();
        assert_eq!(counts(&out), vec![2, 3, 1]);
    }

    #[test]
    fn conflicting_duplicates_are_rejected() {
        let err = normalize(series(&[(d(2021, 2, 1), 2), (d(2021, 2, 1), 7)])).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::DuplicateDate {
                date: d(2021, 2, 1),
                first: 2,
                second: 7
            }
        );
    }

    #[test]
    fn identical_duplicates_collapse() {
        let out = normalize(series(&[
            (d(2021, 2, 1), 4),
            (d(2021, 2, 2), 1),
            (d(2021, 2, 1), 4),
        ]))
        .unwrap();
        assert_eq!(counts(&out), vec![4, 1]);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(
            normalize(ObservationSeries::default()).unwrap_err(),
            NormalizeError::EmptySeries
        );
    }

    #[test]
    fn gap_across_leap_day_and_year_end() {
        let out = normalize(series(&[(d(2024, 2, 28), 1), (d(2024, 3, 1), 1)])).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.as_slice()[1].date, d(2024, 2, 29));

        let out = normalize(series(&[(d(2023, 12, 30), 1), (d(2024, 1, 2), 1)])).unwrap();
        assert_eq!(out.len(), 4);
    }

    fn arb_series() -> impl Strategy<Value = Vec<(i64, u32)>> {
        prop::collection::vec((0i64..400, 0u32..50), 1..120)
    }

    fn build(raw: &[(i64, u32)]) -> ObservationSeries {
        // One count per offset so no conflicting duplicates are generated.
        let base = d(2023, 1, 1);
        let mut seen = std::collections::HashMap::new();
        let items: Vec<_> = raw
            .iter()
            .map(|&(off, count)| {
                let count = *seen.entry(off).or_insert(count);
                (base + chrono::Duration::days(off), count)
            })
            .collect();
        series(&items)
    }

    proptest! {
        #[test]
        fn output_spans_every_day_once(raw in arb_series()) {
            let input = build(&raw);
            let min = input.iter().map(|o| o.date).min().unwrap();
            let max = input.iter().map(|o| o.date).max().unwrap();
            let out = normalize(input).unwrap();

            prop_assert_eq!(out.len() as i64, (max - min).num_days() + 1);
            for pair in out.as_slice().windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
        }

        #[test]
        fn normalize_is_idempotent(raw in arb_series()) {
            let once = normalize(build(&raw)).unwrap();
            let twice = normalize(once.clone()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn counts_are_preserved(raw in arb_series()) {
            let input = build(&raw);
            let distinct: std::collections::HashMap<_, _> =
                input.iter().map(|o| (o.date, o.count)).collect();
            let expected: u64 = distinct.values().map(|&c| u64::from(c)).sum();
            let out = normalize(input).unwrap();
            prop_assert_eq!(out.total_count(), expected);
        }
    }
}
