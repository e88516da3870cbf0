//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UpstreamSource;

/// Dependency bundle for HTTP handlers.
///
/// Cloning shares the same upstream source; the reqwest connection pool
/// behind it is created once per process.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use events_gateway::domain::ports::FixtureUpstreamSource;
/// use events_gateway::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureUpstreamSource::default()));
/// let _upstream = state.upstream.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The DB Handler.
    pub upstream: Arc<dyn UpstreamSource>,
}

impl HttpState {
    /// Construct state around one upstream source.
    pub fn new(upstream: Arc<dyn UpstreamSource>) -> Self {
        Self { upstream }
    }
}
