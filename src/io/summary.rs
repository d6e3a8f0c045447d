//! Write run summary JSON files.
//!
//! The summary is the portable form of a run: the period covered, the
//! per-weekday buckets and the exact dataset handed to the chart renderer.
//! The schema is defined by `domain::SummaryFile`.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::SummaryFile;
use crate::error::AppError;

/// Build the summary for a finished run.
pub fn summary_from_run(run: &RunOutput) -> Result<SummaryFile, AppError> {
    let (start, end) = run
        .series
        .first_date()
        .zip(run.series.last_date())
        .ok_or_else(|| AppError::new(3, "Cannot summarize an empty series."))?;

    Ok(SummaryFile {
        tool: "cweek".to_string(),
        username: run.username.clone(),
        start,
        end,
        days: run.series.len(),
        total: run.series.total_count(),
        dataset: run.dataset.clone(),
        buckets: run.buckets.to_vec(),
    })
}

/// Write a summary JSON file.
pub fn write_summary_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let summary = summary_from_run(run)?;
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &summary)
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote summary JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::analyze_markup;
    use crate::domain::{Metric, SchemaKind};
    use chrono::Weekday;

    #[test]
    fn summary_json_carries_buckets_and_dataset() {
        let markup = concat!(
            r#"<svg><rect class="ContributionCalendar-day" data-date="2022-05-02" data-count="4"></rect>"#,
            r#"<rect class="ContributionCalendar-day" data-date="2022-05-08" data-count="1"></rect></svg>"#,
        );
        let run = analyze_markup("octocat", markup, SchemaKind::Auto, Metric::Mean).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary_json(&path, &run).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let back: SummaryFile = serde_json::from_str(&raw).unwrap();

        assert_eq!(back.username, "octocat");
        assert_eq!(back.days, 7);
        assert_eq!(back.total, 5);
        assert_eq!(back.dataset.metric, Metric::Mean);
        assert_eq!(back.buckets.len(), 7);
        assert_eq!(back.buckets[6].weekday, Weekday::Sun);
        assert_eq!(back.buckets[6].total_count, 1);

        assert!(raw.contains("\"metric\": \"mean\""));
        assert!(raw.contains("\"start\": \"2022-05-02\""));
    }
}
