//! Export weekday statistics to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::WeekdayBucket;
use crate::error::AppError;

/// Write one row per weekday: `weekday,days,total,mean,max`.
pub fn write_buckets_csv(path: &Path, buckets: &[WeekdayBucket]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "weekday,days,total,mean,max")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for b in buckets {
        writeln!(
            file,
            "{},{},{},{:.6},{}",
            b.weekday, b.day_count, b.total_count, b.mean_count, b.max_count
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    tracing::info!(path = %path.display(), "wrote weekday CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weekdays.csv");
        let buckets = vec![WeekdayBucket {
            weekday: Weekday::Sat,
            total_count: 7,
            day_count: 2,
            mean_count: 3.5,
            max_count: 5,
        }];
        write_buckets_csv(&path, &buckets).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "weekday,days,total,mean,max\nSat,2,7,3.500000,5\n");
    }

    #[test]
    fn unwritable_path_is_exit_code_2() {
        let err = write_buckets_csv(Path::new("/no/such/dir/out.csv"), &[]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
