//! Calendar markup sources.

pub mod github;

pub use github::{CalendarSource, FileSource, GithubClient};
