//! Results page retrieval from URLs, files, and stdin.
//!
//! These are the document sources a pipeline run can be wired to. None of
//! them retry; a failed fetch ends the run.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{DigestError, Result};

/// HTTP client configuration for fetching search pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: concat!("arxiv-digest/", env!("CARGO_PKG_VERSION")).to_string() }
    }
}

/// Fetches a search results page.
///
/// Follows redirects and respects the configured timeout. Any non-success
/// status is an error; the body of such a response is not parsed.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| DigestError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(DigestError::InvalidUrl(
            "URL must use http:// or https://".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(DigestError::HttpError)?;

    tracing::debug!(url = %parsed_url, "sending search request");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                DigestError::Timeout { timeout: config.timeout }
            } else {
                DigestError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DigestError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "response received");

    Ok(content)
}

/// Reads a saved results page from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(DigestError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(DigestError::from)
    }
}

/// Reads a results page from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(DigestError::from)?;

    Ok(buffer)
}
