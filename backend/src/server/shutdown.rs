//! Signal-driven graceful shutdown.

use std::future::{Future, pending};

use actix_web::dev::ServerHandle;
use actix_web::web;
use tokio::signal;
use tracing::{info, warn};

use events_gateway::inbound::http::health::ProbeState;

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "failed to listen for Ctrl+C");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
}

/// Once `signal` resolves, fail the probes and stop the server gracefully.
pub async fn drain_after<S>(signal: S, probes: web::Data<ProbeState>, handle: ServerHandle)
where
    S: Future<Output = ()>,
{
    signal.await;
    let previous = probes.begin_drain();
    info!(?previous, "draining in-flight requests");
    handle.stop(true).await;
}
