//! Contribution calendar extraction.
//!
//! - markup schemas (`schema`): where dates and counts live in the markup
//! - parsing (`parser`): markup → `ObservationSeries` + warnings

pub mod parser;
pub mod schema;

pub use parser::{ParseWarning, ParsedCalendar, WarningKind, parse, parse_markup};
pub use schema::{CalendarSchema, DataCountSchema, TooltipSchema};
