//! Gateway entry-point: loads configuration, checks the DB Handler once,
//! then serves the REST API and OpenAPI docs.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use events_gateway::domain::ports::UpstreamSource;
use events_gateway::domain::{UPSTREAM_SERVICE_NAME, verify_upstream};
use events_gateway::inbound::http::health::ProbeState;
use events_gateway::outbound::db_handler::{DbHandlerHttpSource, UPSTREAM_TIMEOUT};
use events_gateway::settings::GatewaySettings;
use server::{ServerConfig, create_server, drain_after, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = GatewaySettings::load()
        .map_err(|err| io::Error::other(format!("failed to load configuration: {err}")))?;
    init_tracing(settings.log_level());

    let upstream_url = settings.upstream_url().map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let source = DbHandlerHttpSource::new(upstream_url, UPSTREAM_TIMEOUT).map_err(|err| {
        io::Error::other(format!("failed to build {UPSTREAM_SERVICE_NAME} client: {err}"))
    })?;
    info!(base_url = %source.base_url(), "{UPSTREAM_SERVICE_NAME} client ready");
    let upstream: Arc<dyn UpstreamSource> = Arc::new(source);

    if settings.debug {
        warn!("debug mode: skipping {UPSTREAM_SERVICE_NAME} startup check");
    } else if let Err(err) = verify_upstream(upstream.as_ref()).await {
        error!(kind = %err.kind(), error = %err, "startup dependency check failed");
        return Err(io::Error::other(err));
    }

    let probes = web::Data::new(ProbeState::new());
    let server = create_server(probes.clone(), ServerConfig::new(bind_addr, upstream))?;
    actix_web::rt::spawn(drain_after(shutdown_signal(), probes, server.handle()));
    info!(%bind_addr, "listening");

    let result = server.await;
    info!("server stopped; {UPSTREAM_SERVICE_NAME} client released");
    result
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}
