//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use events_gateway::domain::ports::UpstreamSource;

/// Everything needed to start serving once boot checks have passed.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) upstream: Arc<dyn UpstreamSource>,
}

impl ServerConfig {
    /// Construct a server configuration around the shared upstream source.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, upstream: Arc<dyn UpstreamSource>) -> Self {
        Self {
            bind_addr,
            upstream,
        }
    }
}
