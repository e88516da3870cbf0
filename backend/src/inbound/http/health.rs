//! Gateway status routes and orchestration probes.
//!
//! The process moves through three phases. It is `starting` until the
//! listener is bound, which happens only after the DB Handler health check
//! has passed (debug mode skips that check). It is then `serving` until a
//! shutdown signal moves it to `draining`. Readiness holds only while
//! serving; liveness fails only once draining. Probes never call the DB
//! Handler themselves.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Boot checks are still running.
    Starting,
    /// Accepting traffic.
    Serving,
    /// Finishing in-flight requests before exit.
    Draining,
}

impl Phase {
    const fn encode(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }

    const fn decode(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Process-wide phase shared by the probe handlers and the shutdown path.
///
/// # Examples
/// ```
/// use events_gateway::inbound::http::health::{Phase, ProbeState};
///
/// let probes = ProbeState::new();
/// probes.start_serving();
/// probes.begin_drain();
/// probes.start_serving();
/// assert_eq!(probes.phase(), Phase::Draining);
/// ```
#[derive(Debug)]
pub struct ProbeState(AtomicU8);

impl Default for ProbeState {
    fn default() -> Self {
        Self(AtomicU8::new(Phase::Starting.encode()))
    }
}

impl ProbeState {
    /// Start in [`Phase::Starting`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::decode(self.0.load(Ordering::Acquire))
    }

    /// Move from starting to serving. A draining process stays draining.
    pub fn start_serving(&self) {
        // A failed exchange means shutdown already began.
        let _ = self.0.compare_exchange(
            Phase::Starting.encode(),
            Phase::Serving.encode(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter [`Phase::Draining`], returning the phase it replaced.
    pub fn begin_drain(&self) -> Phase {
        Phase::decode(self.0.swap(Phase::Draining.encode(), Ordering::AcqRel))
    }
}

/// Probe body: `{"phase": "serving"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProbeBody {
    /// Phase at the time of the probe.
    pub phase: Phase,
}

fn probe(healthy: bool, phase: Phase) -> HttpResponse {
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    HttpResponse::build(status)
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeBody { phase })
}

/// Readiness probe: 200 only while serving.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving traffic", body = ProbeBody),
        (status = 503, description = "Starting or draining", body = ProbeBody)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<ProbeState>) -> HttpResponse {
    let phase = state.phase();
    probe(phase == Phase::Serving, phase)
}

/// Liveness probe: 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive", body = ProbeBody),
        (status = 503, description = "Draining before exit", body = ProbeBody)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<ProbeState>) -> HttpResponse {
    let phase = state.phase();
    probe(phase != Phase::Draining, phase)
}

/// `{"status": "OK"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    /// Always `OK` while the process answers HTTP.
    #[schema(example = "OK")]
    pub status: String,
}

fn status_ok() -> web::Json<StatusBody> {
    web::Json(StatusBody {
        status: "OK".to_owned(),
    })
}

/// Root status check.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Gateway is up", body = StatusBody))
)]
#[get("/")]
pub async fn root_status() -> web::Json<StatusBody> {
    status_ok()
}

/// Status check under the API prefix.
#[utoipa::path(
    get,
    path = "/api/",
    tags = ["health"],
    responses((status = 200, description = "Gateway is up", body = StatusBody))
)]
#[get("/")]
pub async fn api_status() -> web::Json<StatusBody> {
    status_ok()
}
