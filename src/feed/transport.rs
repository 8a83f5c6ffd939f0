//! HTTP transport for feed calls
//!
//! The transport performs one GET per polling iteration and hands the raw
//! response body back to the decoder. The request advertises
//! `Accept-Encoding: gzip`, and the client performs no automatic
//! decompression: decompression is the decoder's job, so the bytes returned
//! here are the compressed wire payload.

use crate::TransportError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Capability interface for fetching one feed page
///
/// The polling loop depends on this trait rather than a concrete client so
/// tests can inject a scripted transport instead of performing network I/O.
#[async_trait]
pub trait FeedTransport {
    /// Performs one GET and returns the raw (compressed) response body
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

/// Builds the HTTP client used for feed calls
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
}

/// Production transport over reqwest
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the standard client settings
    pub fn new() -> Result<Self, TransportError> {
        let client = build_http_client().map_err(TransportError::Client)?;
        Ok(Self { client })
    }

    /// Performs a bare GET against an arbitrary URL and returns the status.
    ///
    /// Licensed articles must be "clicked" to record royalty payments; this
    /// is the call the click-through reporter uses. The body is discarded.
    pub async fn call_url(&self, url: &str) -> Result<u16, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_send_error(url, e))?;
        Ok(response.status().as_u16())
    }
}

#[async_trait]
impl FeedTransport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_send_error(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_send_error(url.as_str(), e))?;

        Ok(body.to_vec())
    }
}

/// Classifies a reqwest error into the transport error taxonomy
fn classify_send_error(url: &str, source: reqwest::Error) -> TransportError {
    if source.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Http {
            url: url.to_string(),
            source,
        }
    }
}
