//! ASCII bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-width bars), optimized for:
//! - a quick visual check without opening the SVG
//! - deterministic output (helpful for golden tests)

use crate::domain::{ChartDataset, Metric};

/// Render one horizontal bar per label, scaled so the largest value spans `width`.
pub fn render_ascii_bars(dataset: &ChartDataset, width: usize) -> String {
    let width = width.max(10);
    let max = dataset
        .values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let label_width = dataset.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("Plot: {} per weekday\n", dataset.metric.axis_label()));

    for (label, &value) in dataset.labels.iter().zip(&dataset.values) {
        let filled = bar_len(value, max, width);
        out.push_str(&format!(
            "{label:<label_width$} |{}{}| {}\n",
            "#".repeat(filled),
            " ".repeat(width - filled),
            fmt_value(value, dataset.metric)
        ));
    }

    out
}

fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let u = (value / max).clamp(0.0, 1.0);
    (u * width as f64).round() as usize
}

fn fmt_value(v: f64, metric: Metric) -> String {
    match metric {
        Metric::Total => format!("{v:.0}"),
        Metric::Mean => format!("{v:.2}"),
    }
}
