//! Input/output helpers.
//!
//! - weekday CSV export (`export`)
//! - run summary JSON export (`summary`)

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
