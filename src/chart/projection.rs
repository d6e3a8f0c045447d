//! Weekday buckets → renderer dataset.

use crate::domain::{ChartDataset, Metric, WeekdayBucket};

/// Pick one statistic per bucket, keeping the bucket order.
///
/// No scaling or rounding happens here; that is up to the renderer.
pub fn project(buckets: &[WeekdayBucket; 7], metric: Metric) -> ChartDataset {
    let labels = buckets.iter().map(|b| b.weekday.to_string()).collect();
    let values = buckets
        .iter()
        .map(|b| match metric {
            Metric::Total => b.total_count as f64,
            Metric::Mean => b.mean_count,
        })
        .collect();

    ChartDataset {
        labels,
        values,
        metric,
    }
}
