//! GitHub contribution calendar retrieval.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back calendar markup for a user.
pub trait CalendarSource {
    fn fetch(&self, username: &str) -> Result<String, FetchError>;
}

/// HTTP client for the public contributions fragment.
///
/// Owns its `reqwest` client; build one per run and pass it to the pipeline.
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request {
                url: base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { client, base_url })
    }

    /// `{base}/users/{username}/contributions`, the calendar without the rest of the profile.
    pub fn calendar_url(&self, username: &str) -> String {
        format!("{}/users/{}/contributions", self.base_url, username)
    }
}

impl CalendarSource for GithubClient {
    fn fetch(&self, username: &str) -> Result<String, FetchError> {
        let username = checked_username(username)?;
        let url = self.calendar_url(username);
        tracing::info!(%url, "fetching contribution calendar");

        let resp = self.client.get(&url).send().map_err(|e| FetchError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = resp.text().map_err(|e| FetchError::Request {
            url: url.clone(),
            message: format!("failed to read body: {e}"),
        })?;
        tracing::debug!(bytes = body.len(), "received calendar markup");
        Ok(body)
    }
}

/// Markup saved to disk (e.g. `curl .../contributions > page.html`).
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CalendarSource for FileSource {
    fn fetch(&self, username: &str) -> Result<String, FetchError> {
        checked_username(username)?;
        tracing::info!(path = %self.path.display(), "reading calendar markup from file");
        std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn checked_username(username: &str) -> Result<&str, FetchError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        Err(FetchError::EmptyUsername)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_url_strips_trailing_slash() {
        let client = GithubClient::new("https://example.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.calendar_url("octocat"),
            "https://example.test/users/octocat/contributions"
        );
    }

    #[test]
    fn blank_username_is_rejected_before_any_request() {
        let client = GithubClient::new(DEFAULT_BASE_URL, Duration::from_secs(1)).unwrap();
        assert!(matches!(client.fetch("   "), Err(FetchError::EmptyUsername)));
    }

    #[test]
    fn file_source_reads_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<svg></svg>").unwrap();
        assert_eq!(FileSource::new(&path).fetch("octocat").unwrap(), "<svg></svg>");
    }

    #[test]
    fn file_source_missing_file() {
        let err = FileSource::new("/definitely/not/here.html").fetch("octocat").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
