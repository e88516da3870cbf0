//! Driven port for reading from the DB Handler.
//!
//! The domain owns the request shape and the outcome classification so the
//! fetch-and-resolve pipeline stays adapter-agnostic. Adapters perform
//! exactly one outbound call per [`UpstreamSource::fetch`]; there is no
//! retry and no caching behind this port.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::DateRange;

/// One GET against the upstream service: relative path plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Request for `path`, relative to the configured upstream base URL.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append one query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append `start_date` and `end_date`.
    #[must_use]
    pub fn with_date_range(mut self, range: &DateRange) -> Self {
        self.query.extend(range.query_pairs());
        self
    }

    /// Relative path.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Query pairs in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

/// A 2xx response whose body parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamPayload {
    /// HTTP status returned by the upstream service.
    pub status: u16,
    /// Parsed JSON body.
    pub body: Value,
}

/// Failure classes of one upstream call, in classification priority order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Connection, DNS or timeout failure before a full response arrived.
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying cause.
        message: String,
    },
    /// Non-2xx HTTP status.
    #[error("status {status}: {body}")]
    Status {
        /// Upstream status code.
        status: u16,
        /// Body preview as returned by the upstream service.
        body: String,
    },
    /// 2xx response whose body is not JSON.
    #[error("undecodable body: {message}")]
    Decode {
        /// Parser failure.
        message: String,
    },
}

impl UpstreamError {
    /// Construct [`UpstreamError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct [`UpstreamError::Status`].
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Construct [`UpstreamError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the upstream answered with HTTP 404.
    pub fn is_not_found_status(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Tagged result of one upstream call.
pub type FetchOutcome = Result<UpstreamPayload, UpstreamError>;

/// Port for issuing GET requests to the DB Handler.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Perform exactly one GET and classify its outcome.
    async fn fetch(&self, request: &UpstreamRequest) -> FetchOutcome;
}

/// In-memory source answering from canned outcomes keyed by path.
///
/// Paths without a canned outcome answer `404`. Every request is recorded
/// so callers can assert which upstream calls were (not) made.
///
/// # Examples
/// ```
/// use events_gateway::domain::ports::{
///     FixtureUpstreamSource, UpstreamPayload, UpstreamRequest, UpstreamSource,
/// };
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let source = FixtureUpstreamSource::default().with_json("events/1/summary", json!({"id": 1}));
/// let outcome = source.fetch(&UpstreamRequest::new("events/1/summary")).await;
/// assert_eq!(outcome, Ok(UpstreamPayload { status: 200, body: json!({"id": 1}) }));
/// assert_eq!(source.requests().len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct FixtureUpstreamSource {
    outcomes: HashMap<String, FetchOutcome>,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl FixtureUpstreamSource {
    /// Answer `path` with `outcome`.
    #[must_use]
    pub fn with_outcome(mut self, path: impl Into<String>, outcome: FetchOutcome) -> Self {
        self.outcomes.insert(path.into(), outcome);
        self
    }

    /// Answer `path` with a `200` JSON body.
    #[must_use]
    pub fn with_json(self, path: impl Into<String>, body: Value) -> Self {
        self.with_outcome(path, Ok(UpstreamPayload { status: 200, body }))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UpstreamSource for FixtureUpstreamSource {
    async fn fetch(&self, request: &UpstreamRequest) -> FetchOutcome {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.outcomes
            .get(request.path())
            .cloned()
            .unwrap_or_else(|| Err(UpstreamError::status(404, "")))
    }
}
