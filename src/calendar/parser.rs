//! Calendar markup → daily observations.
//!
//! The parser is deliberately lenient about nodes it cannot date (they are
//! skipped and reported) and strict about counts it cannot read: a count
//! token that is present but not a non-negative integer means the markup
//! contract changed, and a partial series would chart the wrong thing.

use std::fmt;

use chrono::NaiveDate;
use scraper::Html;

use crate::calendar::schema::{self, CalendarSchema, day_nodes};
use crate::domain::{DailyObservation, ObservationSeries, SchemaKind};
use crate::error::ParseError;

/// Why a node was skipped or patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// No date token; node skipped.
    MissingDate,
    /// Date token present but not a valid `YYYY-MM-DD` calendar date; node skipped.
    InvalidDate(String),
    /// No count token; count taken as zero.
    MissingCount { date: NaiveDate },
}

/// A non-fatal, per-node extraction problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Zero-based position of the node in markup order.
    pub node_index: usize,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::MissingDate => write!(f, "node #{}: no date, skipped", self.node_index),
            WarningKind::InvalidDate(raw) => {
                write!(f, "node #{}: invalid date {raw:?}, skipped", self.node_index)
            }
            WarningKind::MissingCount { date } => {
                write!(f, "node #{} ({date}): no count, assuming 0", self.node_index)
            }
        }
    }
}

/// Parser output: observations in markup order plus what was patched on the way.
#[derive(Debug, Clone)]
pub struct ParsedCalendar {
    pub series: ObservationSeries,
    pub warnings: Vec<ParseWarning>,
    /// Calendar day nodes located in the markup (including skipped ones).
    pub nodes_seen: usize,
    /// Name of the schema that produced the series.
    pub schema: &'static str,
}

/// Parse markup using the schema selected by `kind`.
pub fn parse_markup(markup: &str, kind: SchemaKind) -> Result<ParsedCalendar, ParseError> {
    let document = Html::parse_document(markup);
    let schema = schema::resolve(kind, &document);
    parse_document(&document, schema.as_ref())
}

/// Parse markup with an explicit schema.
pub fn parse(markup: &str, schema: &dyn CalendarSchema) -> Result<ParsedCalendar, ParseError> {
    let document = Html::parse_document(markup);
    parse_document(&document, schema)
}

fn parse_document(document: &Html, schema: &dyn CalendarSchema) -> Result<ParsedCalendar, ParseError> {
    let nodes = day_nodes(document, schema.day_selector());
    tracing::debug!(schema = schema.name(), nodes = nodes.len(), "located calendar day nodes");

    let mut observations = Vec::with_capacity(nodes.len());
    let mut warnings = Vec::new();

    for (node_index, node) in nodes.iter().enumerate() {
        let Some(raw_date) = schema.extract_date(*node) else {
            warnings.push(ParseWarning {
                node_index,
                kind: WarningKind::MissingDate,
            });
            continue;
        };

        let Some(date) = parse_iso_date(&raw_date) else {
            warnings.push(ParseWarning {
                node_index,
                kind: WarningKind::InvalidDate(raw_date),
            });
            continue;
        };

        let count = match schema.extract_count(*node, document) {
            Some(token) => parse_count(&token).ok_or(ParseError::MalformedCount {
                node_index,
                date: Some(date),
                token,
            })?,
            None => {
                warnings.push(ParseWarning {
                    node_index,
                    kind: WarningKind::MissingCount { date },
                });
                0
            }
        };

        observations.push(DailyObservation::new(date, count));
    }

    for warning in &warnings {
        tracing::warn!(schema = schema.name(), "{warning}");
    }

    if observations.is_empty() {
        return Err(ParseError::NoCalendarFound);
    }

    Ok(ParsedCalendar {
        series: ObservationSeries::new(observations),
        warnings,
        nodes_seen: nodes.len(),
        schema: schema.name(),
    })
}

/// Accept exactly `YYYY-MM-DD`; chrono alone would also take unpadded fields.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_count(token: &str) -> Option<u32> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok()
}
