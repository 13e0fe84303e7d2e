//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with user agent and uniform timeouts
//! - GET requests to fetch page markup
//! - Classifying failures into narrow [`FetchError`] variants

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for every fetch in a crawl
///
/// The request timeout applies uniformly to the root fetch and to each
/// candidate fetch; a timed-out page is treated like any other per-page
/// failure.
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value
/// * `timeout_secs` - Per-request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its raw markup
///
/// Failures are classified narrowly rather than swallowed wholesale:
///
/// | Condition | Variant |
/// |-----------|---------|
/// | URL fails to parse | `InvalidUrl` |
/// | Request timeout | `Timeout` |
/// | Connection refused / TLS failure | `Connect` |
/// | Non-2xx status | `Status` |
/// | Other send error | `Request` |
/// | Body read error | `Body` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = match client.get(parsed).send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => {
            return Err(FetchError::Timeout {
                url: url.to_string(),
            })
        }
        Err(e) if e.is_connect() => {
            return Err(FetchError::Connect {
                url: url.to_string(),
            })
        }
        Err(e) => {
            return Err(FetchError::Request {
                url: url.to_string(),
                source: e,
            })
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}
