//! Generic JSON resource fetcher.
//!
//! # Design
//! One GET per call with the client's default headers: no retry, no timeout
//! override, no caching. The status is interpreted before deserialization so
//! an error page never surfaces as a decode failure — non-2xx responses map
//! to [`FetchError::Http`], transport problems to [`FetchError::Network`],
//! and only a 2xx body that fails to parse becomes [`FetchError::Decode`].

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// Fetch `url` and decode the JSON response body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    debug!(url, "fetching resource");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
