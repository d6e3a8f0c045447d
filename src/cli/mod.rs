//! Command-line parsing for the weekday contribution chart.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! extraction and aggregation code.

use std::path::PathBuf;

use clap::Parser;

use crate::data::github::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::{Metric, SchemaKind};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "cweek",
    version,
    about = "Chart a GitHub user's public contributions per day of week"
)]
pub struct Cli {
    /// GitHub username.
    pub username: String,

    /// Read calendar markup from a saved HTML file instead of fetching it.
    #[arg(long, value_name = "HTML")]
    pub input: Option<PathBuf>,

    /// Calendar markup schema.
    #[arg(long, value_enum, default_value_t = SchemaKind::Auto)]
    pub schema: SchemaKind,

    /// Statistic charted per weekday.
    #[arg(short = 'm', long, value_enum, default_value_t = Metric::Total)]
    pub metric: Metric,

    /// Chart output path (SVG).
    #[arg(short = 'o', long, default_value = "contributions.svg")]
    pub output: PathBuf,

    /// Skip writing the SVG chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Chart width (pixels).
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Chart height (pixels).
    #[arg(long, default_value_t = 384)]
    pub height: u32,

    /// Base URL of the GitHub instance.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Disable the terminal bar chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal bar chart width (columns).
    #[arg(long, default_value_t = 50)]
    pub plot_width: usize,

    /// Export per-weekday statistics to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export the run summary (period, buckets, chart dataset) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["cweek", "octocat"]);
        assert_eq!(cli.username, "octocat");
        assert_eq!(cli.metric, Metric::Total);
        assert_eq!(cli.schema, SchemaKind::Auto);
        assert_eq!(cli.output, PathBuf::from("contributions.svg"));
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(!cli.no_chart && !cli.no_plot);
    }

    #[test]
    fn value_enums_parse() {
        let cli = Cli::parse_from(["cweek", "octocat", "--metric", "mean", "--schema", "data-count"]);
        assert_eq!(cli.metric, Metric::Mean);
        assert_eq!(cli.schema, SchemaKind::DataCount);
    }

    #[test]
    fn username_is_required() {
        assert!(Cli::try_parse_from(["cweek"]).is_err());
    }
}
