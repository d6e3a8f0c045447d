//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - daily calendar observations (`DailyObservation`, `ObservationSeries`)
//! - weekday aggregates (`WeekdayBucket`)
//! - the renderer-facing dataset (`ChartDataset`, `ChartAnnotations`)
//! - run configuration (`RunConfig`, `Metric`, `SchemaKind`)

pub mod types;

pub use types::*;
