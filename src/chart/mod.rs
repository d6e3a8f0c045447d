//! Chart projection and rendering.
//!
//! - `projection`: weekday buckets → `ChartDataset`
//! - `render`: `ChartDataset` → SVG image

pub mod projection;
pub mod render;

pub use projection::project;
pub use render::{ChartRenderer, SvgRenderer};
