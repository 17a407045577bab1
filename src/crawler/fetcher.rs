//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the mirror, including:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for page bodies during discovery
//! - GET requests for resource streams during download
//! - Error classification
//!
//! There is no retry logic anywhere: every URL gets exactly one fetch
//! attempt per phase, and failures are reported to the caller.

use crate::{KagamiError, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// User agent sent with every request
const USER_AGENT: &str = concat!("kagami/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used by both mirror phases
///
/// Redirects stay on the client's default transparent policy; the mirror
/// stores whatever body the transport ends up with, under the URL it asked
/// for.
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues a single GET request for a URL
///
/// Signals an error for connection failures, timeouts, and protocol errors.
/// A response with a non-2xx status is NOT an error: the served body (e.g.
/// an error page) is mirrored as-is, matching what a browser would have
/// shown at that URL.
///
/// The caller is responsible for draining the returned response.
pub async fn fetch(client: &Client, url: &Url) -> Result<Response> {
    client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| KagamiError::Http {
            url: url.to_string(),
            source,
        })
}

/// Fetches a URL and drains its body to a string
///
/// Used by the discovery phase, which needs whole documents to parse.
/// Bodies that are not valid UTF-8 are decoded lossily by the transport;
/// extraction over such bytes simply finds fewer references.
pub async fn fetch_text(client: &Client, url: &Url) -> Result<String> {
    let response = fetch(client, url).await?;

    response.text().await.map_err(|source| KagamiError::Http {
        url: url.to_string(),
        source,
    })
}
