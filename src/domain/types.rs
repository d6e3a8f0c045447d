//! Shared domain types.
//!
//! These types are kept small and immutable once built so each pipeline stage
//! can take ownership of its input and hand a fresh value to the next one.
//! The aggregate-side types are serializable so they can be exported to JSON.

use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Weekdays in display order (Monday first).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One calendar cell: a plain calendar date (no time-of-day) and its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub count: u32,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// An ordered sequence of daily observations.
///
/// The parser emits observations in markup order; after
/// [`crate::stats::normalize`] the dates are strictly ascending, unique and
/// contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationSeries {
    observations: Vec<DailyObservation>,
}

impl ObservationSeries {
    pub fn new(observations: Vec<DailyObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyObservation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[DailyObservation] {
        &self.observations
    }

    pub fn into_vec(self) -> Vec<DailyObservation> {
        self.observations
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Sum of all counts (widened so a year of busy days cannot overflow).
    pub fn total_count(&self) -> u64 {
        self.observations.iter().map(|o| u64::from(o.count)).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.observations.iter().map(|o| o.count).max().unwrap_or(0)
    }
}

impl From<Vec<DailyObservation>> for ObservationSeries {
    fn from(observations: Vec<DailyObservation>) -> Self {
        Self::new(observations)
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a DailyObservation;
    type IntoIter = std::slice::Iter<'a, DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Aggregate statistics for every observed day sharing one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    pub total_count: u64,
    /// Number of calendar days of this weekday in the series.
    pub day_count: u32,
    /// `total_count / day_count`; `0.0` when the weekday was never observed.
    pub mean_count: f64,
    /// Busiest single day for this weekday.
    pub max_count: u32,
}

impl WeekdayBucket {
    pub fn empty(weekday: Weekday) -> Self {
        Self {
            weekday,
            total_count: 0,
            day_count: 0,
            mean_count: 0.0,
            max_count: 0,
        }
    }
}

/// Which per-bucket statistic ends up on the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Total contributions per weekday.
    #[default]
    Total,
    /// Mean contributions per day, per weekday.
    Mean,
}

impl Metric {
    /// Axis label for charts.
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Total => "contributions",
            Metric::Mean => "mean contributions / day",
        }
    }
}

/// The exact shape handed to a chart renderer.
///
/// `labels[i]` and `values[i]` always describe the same weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub metric: Metric,
}

/// Presentation extras that are not part of the dataset itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartAnnotations {
    pub title: String,
    /// First and last date covered by the chart.
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl ChartAnnotations {
    pub fn for_user(username: &str, period: Option<(NaiveDate, NaiveDate)>) -> Self {
        Self {
            title: format!("Contributions per day of week ({username})"),
            period,
        }
    }
}

/// Which markup schema the parser should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    /// Pick based on what the markup contains.
    #[default]
    Auto,
    /// `data-date` + `data-count` attributes on each cell.
    DataCount,
    /// `data-date` on each cell, count inside a `<tool-tip>` element.
    Tooltip,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub username: String,
    /// Read markup from a local file instead of fetching it.
    pub input: Option<PathBuf>,
    pub schema: SchemaKind,
    pub metric: Metric,

    pub base_url: String,
    pub timeout_secs: u64,

    /// SVG chart destination; `None` skips rendering.
    pub output: Option<PathBuf>,
    pub chart_width: u32,
    pub chart_height: u32,

    pub plot: bool,
    pub plot_width: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// A saved run summary (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFile {
    pub tool: String,
    pub username: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: usize,
    pub total: u64,
    pub dataset: ChartDataset,
    pub buckets: Vec<WeekdayBucket>,
}
