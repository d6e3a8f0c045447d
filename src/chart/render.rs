//! SVG chart rendering with Plotters.
//!
//! The look follows GitHub's contribution calendar: grey plot area, white grid
//! lines, and bars shaded with the calendar's greens so busier weekdays read
//! darker at a glance.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::{ChartAnnotations, ChartDataset, Metric};
use crate::error::RenderError;

/// Calendar greens, light to dark.
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0xac, 0xe7, 0xae),
    RGBColor(0x69, 0xc1, 0x6e),
    RGBColor(0x53, 0x9f, 0x57),
    RGBColor(0x38, 0x6c, 0x3e),
];

const BACKGROUND: RGBColor = RGBColor(0xeb, 0xed, 0xf0);

/// Something that can turn a dataset into an image.
pub trait ChartRenderer {
    fn render(&self, dataset: &ChartDataset, annotations: &ChartAnnotations) -> Result<(), RenderError>;
}

/// Writes an SVG file.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, dataset: &ChartDataset, annotations: &ChartAnnotations) -> Result<(), RenderError> {
        if dataset.labels.len() != dataset.values.len() {
            return Err(RenderError::Shape {
                labels: dataset.labels.len(),
                values: dataset.values.len(),
            });
        }

        draw_svg(&self.path, (self.width, self.height), dataset, annotations).map_err(|e| {
            RenderError::Draw {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        tracing::info!(path = %self.path.display(), "wrote chart");
        Ok(())
    }
}

fn draw_svg(
    path: &Path,
    size: (u32, u32),
    dataset: &ChartDataset,
    annotations: &ChartAnnotations,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = dataset.values.len();
    let (y_top, step) = y_axis(&dataset.values);
    let (lo, hi) = value_range(&dataset.values);

    let mut chart = ChartBuilder::on(&root)
        .caption(&annotations.title, ("sans-serif", 16).into_font())
        .margin(12)
        .set_label_area_size(LabelAreaPosition::Left, 48)
        .set_label_area_size(LabelAreaPosition::Bottom, 28)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_top)?;

    chart.plotting_area().fill(&BACKGROUND)?;

    let labels = &dataset.labels;
    let y_fmt = |v: &f64| match dataset.metric {
        Metric::Total => format!("{v:.0}"),
        Metric::Mean => format!("{v:.1}"),
    };
    let x_fmt = |v: &f64| {
        let i = v.round();
        if (v - i).abs() > 1e-6 || i < 0.0 {
            return String::new();
        }
        labels.get(i as usize).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .max_light_lines(0)
        .bold_line_style(WHITE.stroke_width(2))
        .axis_style(&TRANSPARENT)
        .x_labels(2 * n + 1)
        .y_labels(((y_top / step).ceil() as usize + 1).min(12))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .y_desc(dataset.metric.axis_label())
        .label_style(("sans-serif", 11).into_font())
        .draw()?;

    chart.draw_series(dataset.values.iter().enumerate().map(|(i, &v)| {
        let x = i as f64;
        let color = PALETTE[shade_index(v, lo, hi)];
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, v)], color.filled())
    }))?;
    chart.draw_series(dataset.values.iter().enumerate().map(|(i, &v)| {
        let x = i as f64;
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, v)], BLACK.stroke_width(1))
    }))?;

    if let Some((start, end)) = annotations.period {
        let (_, h) = size;
        let h = h as i32;
        let style = ("sans-serif", 10).into_font().color(&WHITE);
        root.draw(&Rectangle::new([(4, h - 34), (78, h - 4)], BLACK.filled()))?;
        root.draw(&Text::new(start.to_string(), (8, h - 30), style.clone()))?;
        root.draw(&Text::new(end.to_string(), (8, h - 17), style))?;
    }

    root.present()?;
    Ok(())
}

/// Upper bound and tick step for the value axis.
///
/// Five steps cover the busiest weekday, with half a step of headroom.
pub fn y_axis(values: &[f64]) -> (f64, f64) {
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max);
    let step = (max / 5.0).floor().max(1.0);
    (max + step / 2.0, step)
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 0.0) }
}

/// Palette slot for `value`: four thresholds spaced evenly from `lo` to `hi`,
/// first threshold at or above the value wins.
pub fn shade_index(value: f64, lo: f64, hi: f64) -> usize {
    let classes = PALETTE.len();
    for k in 0..classes {
        let threshold = lo + (hi - lo) * k as f64 / (classes - 1) as f64;
        if value <= threshold + 1e-9 {
            return k;
        }
    }
    classes - 1
}
