//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers every gateway route and
//! the resource DTOs they return.
//!
//! The generated specification is served by Swagger UI at `/docs` and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::{Phase, ProbeBody, StatusBody};
use crate::models::{
    AcceptedParticipant, AcceptedParticipantList, DeclarationIssue, EventData,
    EventFinancialBreakdown, EventLocation, EventLocationList, EventQuickInfo,
    EventQuickInfoList, EventSettlementStatus, EventSummary, EventSummaryList,
    EventTransactionItem, EventTransactionList, Location, OrphanedTransaction, Participant,
    ParticipantList, ParticipantSettlementStatus, PendingInvite, PendingInviteList, TimeRange,
    TotalMismatch, UserFinancialSummary, ValidationIssuesReport,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events gateway API",
        description = "Validated, reshaped views over the DB Handler service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::root_status,
        crate::inbound::http::health::api_status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::events::event_summary,
        crate::inbound::http::events::event_locations,
        crate::inbound::http::events::invited_participants,
        crate::inbound::http::events::accepted_participants,
        crate::inbound::http::events::event_settlement,
        crate::inbound::http::events::event_transactions,
        crate::inbound::http::users::user_event_summaries,
        crate::inbound::http::users::financial_summary,
        crate::inbound::http::users::owned_events,
        crate::inbound::http::users::unsettled_events,
        crate::inbound::http::users::pending_invites,
        crate::inbound::http::reports::inconsistencies,
        crate::inbound::http::reports::validation_log,
    ),
    components(schemas(
        ErrorBody,
        StatusBody,
        ProbeBody,
        Phase,
        EventData,
        EventSummary,
        EventSummaryList,
        Location,
        EventLocation,
        EventLocationList,
        Participant,
        ParticipantList,
        AcceptedParticipant,
        AcceptedParticipantList,
        ParticipantSettlementStatus,
        EventSettlementStatus,
        EventQuickInfo,
        EventQuickInfoList,
        PendingInvite,
        PendingInviteList,
        EventTransactionItem,
        EventTransactionList,
        TimeRange,
        EventFinancialBreakdown,
        UserFinancialSummary,
        DeclarationIssue,
        TotalMismatch,
        OrphanedTransaction,
        ValidationIssuesReport,
    )),
    tags(
        (name = "events", description = "Views of a single event"),
        (name = "users", description = "Views centred on one user"),
        (name = "reports", description = "Data consistency reports"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
