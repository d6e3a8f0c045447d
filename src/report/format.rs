//! Formatted terminal output.
//!
//! Formatting lives here so the pipeline stays free of presentation concerns
//! and output changes stay local (the golden tests below pin the layout).

use crate::app::pipeline::RunOutput;
use crate::domain::WeekdayBucket;

/// Run header plus the per-weekday table.
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== cweek - contributions per day of week ===\n");
    out.push_str(&format!("User: {}\n", run.username));
    if let (Some(start), Some(end)) = (run.series.first_date(), run.series.last_date()) {
        out.push_str(&format!("Period: {start} .. {end} ({} days)\n", run.series.len()));
    }
    out.push_str(&format!(
        "Contributions: total={} | busiest day={}\n",
        run.series.total_count(),
        run.series.max_count()
    ));
    if !run.warnings.is_empty() {
        out.push_str(&format!(
            "Warnings: {} calendar node(s) patched or skipped (schema={})\n",
            run.warnings.len(),
            run.schema
        ));
    }
    out.push('\n');
    out.push_str(&format_bucket_table(&run.buckets));

    out
}

/// `weekday / days / total / mean / max` table.
pub fn format_bucket_table(buckets: &[WeekdayBucket]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8} {:>5} {:>8} {:>8} {:>6}\n", "weekday", "days", "total", "mean", "max"));
    out.push_str(&format!("{:-<8} {:-<5} {:-<8} {:-<8} {:-<6}\n", "", "", "", "", ""));
    for b in buckets {
        out.push_str(&format!(
            "{:<8} {:>5} {:>8} {:>8.2} {:>6}\n",
            b.weekday.to_string(),
            b.day_count,
            b.total_count,
            b.mean_count,
            b.max_count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn bucket_table_golden() {
        let buckets = vec![
            WeekdayBucket {
                weekday: Weekday::Mon,
                total_count: 12,
                day_count: 4,
                mean_count: 3.0,
                max_count: 6,
            },
            WeekdayBucket {
                weekday: Weekday::Tue,
                total_count: 1,
                day_count: 3,
                mean_count: 1.0 / 3.0,
                max_count: 1,
            },
        ];
        let expected = concat!(
            "weekday   days    total     mean    max\n",
            "-------- ----- -------- -------- ------\n",
            "Mon          4       12     3.00      6\n",
            "Tue          3        1     0.33      1\n",
        );
        assert_eq!(format_bucket_table(&buckets), expected);
    }
}
