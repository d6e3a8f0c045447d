//! `commit-week` library crate.
//!
//! The binary (`cweek`) is a thin wrapper around this library so that:
//!
//! - the parse/normalize/aggregate pipeline is testable without the network
//! - the markup schema, fetch client and renderer can be swapped independently

pub mod app;
pub mod calendar;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod stats;
