//! Series normalization and weekday statistics.

pub mod aggregate;
pub mod normalize;

pub use aggregate::aggregate;
pub use normalize::normalize;
