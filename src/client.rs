//! REST client for the watchlist API.
//!
//! The API exposes a single read endpoint, `GET /watchlist/live`, returning
//! the full snapshot as a JSON array. No request parameters, headers, or
//! authentication are sent.

use std::time::Duration;

use crate::models::Snapshot;
use crate::Result;

/// Path of the live watchlist endpoint, relative to the base URL.
const LIVE_PATH: &str = "/watchlist/live";

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Per-request read timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to one watchlist API instance.
#[derive(Clone)]
pub struct WatchlistClient {
    client: reqwest::Client,
    base_url: String,
}

impl WatchlistClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`MinskyError::Network`](crate::MinskyError::Network) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one snapshot from `GET /watchlist/live`.
    ///
    /// # Errors
    ///
    /// Returns [`MinskyError::Network`](crate::MinskyError::Network) if the
    /// endpoint is unreachable or responds with a non-success status, and
    /// [`MinskyError::Parse`](crate::MinskyError::Parse) if the body is not
    /// a valid snapshot. The body of a non-success response is not
    /// interpreted.
    pub async fn fetch_live(&self) -> Result<Snapshot> {
        let url = self.live_url();
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let snapshot = serde_json::from_slice(&body)?;
        Ok(snapshot)
    }

    /// Full URL of the live endpoint.
    fn live_url(&self) -> String {
        format!("{}{LIVE_PATH}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_url_joins_base_and_path() {
        let client = WatchlistClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(client.live_url(), "http://127.0.0.1:8000/watchlist/live");
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let client = WatchlistClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.live_url(), "http://127.0.0.1:8000/watchlist/live");
    }
}
