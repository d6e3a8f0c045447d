//! The extraction-and-aggregation pipeline.
//!
//! markup -> parse -> normalize -> aggregate -> project
//!
//! Every stage returns a fresh value or an error; the first error ends the run,
//! so nothing downstream ever sees a partially valid input.

use crate::calendar::{self, ParseWarning};
use crate::data::CalendarSource;
use crate::domain::{ChartAnnotations, ChartDataset, Metric, ObservationSeries, SchemaKind, WeekdayBucket};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub username: String,
    /// Normalized, gap-free daily series.
    pub series: ObservationSeries,
    pub buckets: [WeekdayBucket; 7],
    pub dataset: ChartDataset,
    pub warnings: Vec<ParseWarning>,
    pub schema: &'static str,
}

impl RunOutput {
    pub fn annotations(&self) -> ChartAnnotations {
        let period = self.series.first_date().zip(self.series.last_date());
        ChartAnnotations::for_user(&self.username, period)
    }
}

/// Fetch markup through `source`, then analyze it.
pub fn run<S: CalendarSource + ?Sized>(
    source: &S,
    username: &str,
    schema: SchemaKind,
    metric: Metric,
) -> Result<RunOutput, AppError> {
    let markup = source.fetch(username)?;
    analyze_markup(username.trim(), &markup, schema, metric)
}

/// Run the pure stages over already-fetched markup.
pub fn analyze_markup(
    username: &str,
    markup: &str,
    schema: SchemaKind,
    metric: Metric,
) -> Result<RunOutput, AppError> {
    let parsed = calendar::parse_markup(markup, schema)?;
    tracing::debug!(
        observations = parsed.series.len(),
        warnings = parsed.warnings.len(),
        "parsed calendar"
    );

    let series = crate::stats::normalize(parsed.series)?;
    let buckets = crate::stats::aggregate(&series);
    let dataset = crate::chart::project(&buckets, metric);

    Ok(RunOutput {
        username: username.to_string(),
        series,
        buckets,
        dataset,
        warnings: parsed.warnings,
        schema: parsed.schema,
    })
}
