//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - fetches (or reads) the calendar markup
//! - runs parse -> normalize -> aggregate -> project
//! - prints the summary, renders the chart, writes optional exports

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::chart::{ChartRenderer, SvgRenderer};
use crate::cli::Cli;
use crate::data::{CalendarSource, FileSource, GithubClient};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cweek` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli);
    execute(&config)
}

/// Logs go to stderr so stdout stays clean for the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        username: cli.username.clone(),
        input: cli.input.clone(),
        schema: cli.schema,
        metric: cli.metric,
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout_secs,
        output: (!cli.no_chart).then(|| cli.output.clone()),
        chart_width: cli.width,
        chart_height: cli.height,
        plot: !cli.no_plot,
        plot_width: cli.plot_width,
        export_csv: cli.export_csv.clone(),
        export_json: cli.export_json.clone(),
    }
}

/// Run the whole tool for one configuration.
pub fn execute(config: &RunConfig) -> Result<(), AppError> {
    let source: Box<dyn CalendarSource> = match &config.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(GithubClient::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?),
    };

    let run = pipeline::run(source.as_ref(), &config.username, config.schema, config.metric)?;

    println!("{}", crate::report::format_run_summary(&run));
    if config.plot {
        println!("{}", crate::plot::render_ascii_bars(&run.dataset, config.plot_width));
    }

    if let Some(path) = &config.output {
        let renderer = SvgRenderer::new(path, config.chart_width, config.chart_height);
        renderer.render(&run.dataset, &run.annotations())?;
        println!("Chart written to {}", path.display());
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_buckets_csv(path, &run.buckets)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::summary::write_summary_json(path, &run)?;
    }

    Ok(())
}
