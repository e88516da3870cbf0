//! Reqwest-backed DB Handler source adapter.
//!
//! This adapter owns transport details only: URL construction, the request
//! timeout, trace propagation, and classification of the response into the
//! port's outcome classes. One `fetch` is one GET; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::domain::ports::{
    FetchOutcome, UpstreamError, UpstreamPayload, UpstreamRequest, UpstreamSource,
};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Per-request timeout applied to every DB Handler call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// DB Handler source adapter issuing GET requests below one base URL.
///
/// The wrapped [`Client`] owns the connection pool and is shared by all
/// requests; clone the adapter behind an `Arc` rather than building more.
#[derive(Debug, Clone)]
pub struct DbHandlerHttpSource {
    client: Client,
    base_url: Url,
}

impl DbHandlerHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// A missing trailing slash is added to `base_url` so relative paths
    /// extend it instead of replacing its last segment.
    /// ```rust,ignore
    /// let source = DbHandlerHttpSource::new(base_url, UPSTREAM_TIMEOUT)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Base URL all request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, request: &UpstreamRequest) -> Result<Url, UpstreamError> {
        let mut url = self
            .base_url
            .join(request.path().trim_start_matches('/'))
            .map_err(|error| {
                UpstreamError::transport(format!(
                    "invalid upstream path '{}': {error}",
                    request.path()
                ))
            })?;
        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query());
        }
        Ok(url)
    }
}

#[async_trait]
impl UpstreamSource for DbHandlerHttpSource {
    async fn fetch(&self, request: &UpstreamRequest) -> FetchOutcome {
        let url = self.endpoint(request)?;
        let mut builder = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(trace_id) = TraceId::current() {
            builder = builder.header(TRACE_ID_HEADER, trace_id.to_string());
        }
        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let body = parse_body(body.as_ref())?;
        Ok(UpstreamPayload {
            status: status.as_u16(),
            body,
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_body(body: &[u8]) -> Result<Value, UpstreamError> {
    serde_json::from_slice(body)
        .map_err(|error| UpstreamError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::transport(format!("request timed out: {error}"))
    } else {
        UpstreamError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamError {
    UpstreamError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
