//! Event API handlers.
//!
//! ```text
//! GET /api/events/{event_id}/summary
//! GET /api/events/{event_id}/locations
//! GET /api/events/{event_id}/participants/invited
//! GET /api/events/{event_id}/participants/accepted
//! GET /api/events/{event_id}/settlement
//! GET /api/events/{event_id}/transactions
//! ```
//!
//! Each handler validates the identifier, makes one DB Handler call at the
//! mirrored path and wraps the validated payload.

use actix_web::{get, web};

use crate::domain::ports::UpstreamRequest;
use crate::domain::{EntityId, ResourceRef, fetch_resource, fetch_resource_list};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::params::entity_id;
use crate::inbound::http::state::HttpState;
use crate::models::{
    AcceptedParticipant, AcceptedParticipantList, EventData, EventLocation, EventLocationList,
    EventSettlementStatus, EventSummary, EventTransactionItem, EventTransactionList, Participant,
    ParticipantList,
};

fn event_ref(path: &str) -> ApiResult<(EntityId, ResourceRef)> {
    let id = entity_id(path, "event_id")?;
    Ok((id, ResourceRef::new("event", id)))
}

/// Full record of one event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/summary",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Event summary", body = EventSummary),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "getEventSummary"
)]
#[get("/events/{event_id}/summary")]
pub async fn event_summary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventSummary>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/summary"));
    let summary: EventData = fetch_resource(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(EventSummary { summary }))
}

/// Locations visited during an event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/locations",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Event locations", body = EventLocationList),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "listEventLocations"
)]
#[get("/events/{event_id}/locations")]
pub async fn event_locations(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventLocationList>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/locations"));
    let locations: Vec<EventLocation> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(EventLocationList { locations }))
}

/// Everyone invited to an event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants/invited",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Invited participants", body = ParticipantList),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "listInvitedParticipants"
)]
#[get("/events/{event_id}/participants/invited")]
pub async fn invited_participants(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ParticipantList>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/participants/invited"));
    let participants: Vec<Participant> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(ParticipantList { participants }))
}

/// Participants who accepted their invite.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants/accepted",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Accepted participants", body = AcceptedParticipantList),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "listAcceptedParticipants"
)]
#[get("/events/{event_id}/participants/accepted")]
pub async fn accepted_participants(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AcceptedParticipantList>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/participants/accepted"));
    let participants: Vec<AcceptedParticipant> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(AcceptedParticipantList { participants }))
}

/// Settlement state of every participant.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/settlement",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Settlement status", body = EventSettlementStatus),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "getEventSettlement"
)]
#[get("/events/{event_id}/settlement")]
pub async fn event_settlement(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventSettlementStatus>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/settlement"));
    let status = fetch_resource(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(status))
}

/// Transactions recorded within an event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/transactions",
    params(("event_id" = String, Path, description = "Integer or UUID event identifier")),
    responses(
        (status = 200, description = "Event transactions", body = EventTransactionList),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["events"],
    operation_id = "listEventTransactions"
)]
#[get("/events/{event_id}/transactions")]
pub async fn event_transactions(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventTransactionList>> {
    let (id, resource) = event_ref(&path)?;
    let request = UpstreamRequest::new(format!("events/{id}/transactions"));
    let items: Vec<EventTransactionItem> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(EventTransactionList { items }))
}
