use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to obtain calendar markup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
    #[error("failed to read markup from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The markup does not follow the calendar contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no contribution calendar day found in markup")]
    NoCalendarFound,
    #[error("malformed contribution count {token:?} on calendar node #{node_index}{}", fmt_date(.date))]
    MalformedCount {
        node_index: usize,
        date: Option<NaiveDate>,
        token: String,
    },
}

fn fmt_date(date: &Option<NaiveDate>) -> String {
    date.map(|d| format!(" ({d})")).unwrap_or_default()
}

/// The parsed observations cannot form a consistent daily series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("conflicting counts for {date}: {first} vs {second}")]
    DuplicateDate {
        date: NaiveDate,
        first: u32,
        second: u32,
    },
    #[error("no observations to normalize")]
    EmptySeries,
}

/// The chart could not be drawn or written.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dataset has {labels} labels but {values} values")]
    Shape { labels: usize, values: usize },
    #[error("failed to draw chart '{}': {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}

/// Top-level error carried to the binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        let code = match &err {
            FetchError::EmptyUsername | FetchError::Io { .. } => 2,
            FetchError::Request { .. } | FetchError::Status { .. } => 4,
        };
        AppError::new(code, format!("fetch failed: {err}"))
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::new(3, format!("calendar parse failed: {err}"))
    }
}

impl From<NormalizeError> for AppError {
    fn from(err: NormalizeError) -> Self {
        AppError::new(3, format!("normalization failed: {err}"))
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::new(2, format!("render failed: {err}"))
    }
}
