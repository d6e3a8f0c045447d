//! Weekday aggregation.

use chrono::Datelike;

use crate::domain::{ObservationSeries, WEEKDAYS, WeekdayBucket};

/// Fold a series into seven weekday buckets, Monday first.
///
/// Weekdays come straight from the calendar date; there is no timezone to
/// shift. A weekday with no observed days (series shorter than a week) gets
/// an empty bucket with a mean of `0.0`.
pub fn aggregate(series: &ObservationSeries) -> [WeekdayBucket; 7] {
    let mut buckets = WEEKDAYS.map(WeekdayBucket::empty);

    for obs in series {
        let idx = obs.date.weekday().num_days_from_monday() as usize;
        let bucket = &mut buckets[idx];
        bucket.total_count += u64::from(obs.count);
        bucket.day_count += 1;
        bucket.max_count = bucket.max_count.max(obs.count);
    }

    for bucket in &mut buckets {
        if bucket.day_count > 0 {
            bucket.mean_count = bucket.total_count as f64 / f64::from(bucket.day_count);
        }
    }

    buckets
}
