//! User API handlers.
//!
//! ```text
//! GET /api/users/{user_id}/events/summary?start_date=2025-07-01&end_date=2025-07-10
//! GET /api/users/{user_id}/financial-summary?start_date=2025-07-01&end_date=2025-07-10
//! GET /api/users/{user_id}/events/owned
//! GET /api/users/{user_id}/events/unsettled
//! GET /api/users/{user_id}/invites/pending
//! ```
//!
//! Date-range routes validate both bounds before contacting the DB Handler
//! and forward them as calendar dates.

use actix_web::{get, web};

use crate::domain::ports::UpstreamRequest;
use crate::domain::{EntityId, ResourceRef, fetch_resource, fetch_resource_list};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::params::{DateRangeQuery, entity_id};
use crate::inbound::http::state::HttpState;
use crate::models::{
    EventData, EventQuickInfo, EventQuickInfoList, EventSummary, EventSummaryList, PendingInvite,
    PendingInviteList, UserFinancialSummary,
};

fn user_ref(path: &str) -> ApiResult<(EntityId, ResourceRef)> {
    let id = entity_id(path, "user_id")?;
    Ok((id, ResourceRef::new("user", id)))
}

/// Summaries of a user's events within a date range.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/events/summary",
    params(
        ("user_id" = String, Path, description = "Integer or UUID user identifier"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Event summaries", body = EventSummaryList),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier or date range", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUserEventSummaries"
)]
#[get("/users/{user_id}/events/summary")]
pub async fn user_event_summaries(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DateRangeQuery>,
) -> ApiResult<web::Json<EventSummaryList>> {
    let (id, resource) = user_ref(&path)?;
    let range = query.to_range()?;
    let request =
        UpstreamRequest::new(format!("users/{id}/events/summary")).with_date_range(&range);
    let events: Vec<EventData> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    let summaries = events
        .into_iter()
        .map(|summary| EventSummary { summary })
        .collect();
    Ok(web::Json(EventSummaryList { summaries }))
}

/// What a user paid and received within a date range.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/financial-summary",
    params(
        ("user_id" = String, Path, description = "Integer or UUID user identifier"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Financial summary", body = UserFinancialSummary),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier or date range", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUserFinancialSummary"
)]
#[get("/users/{user_id}/financial-summary")]
pub async fn financial_summary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DateRangeQuery>,
) -> ApiResult<web::Json<UserFinancialSummary>> {
    let (id, resource) = user_ref(&path)?;
    let range = query.to_range()?;
    let request =
        UpstreamRequest::new(format!("users/{id}/financial-summary")).with_date_range(&range);
    let summary = fetch_resource(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(summary))
}

/// Events the user owns.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/events/owned",
    params(("user_id" = String, Path, description = "Integer or UUID user identifier")),
    responses(
        (status = 200, description = "Owned events", body = EventQuickInfoList),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listOwnedEvents"
)]
#[get("/users/{user_id}/events/owned")]
pub async fn owned_events(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventQuickInfoList>> {
    quick_info_list(&state, &path, "owned").await
}

/// Events the user has not settled yet.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/events/unsettled",
    params(("user_id" = String, Path, description = "Integer or UUID user identifier")),
    responses(
        (status = 200, description = "Unsettled events", body = EventQuickInfoList),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUnsettledEvents"
)]
#[get("/users/{user_id}/events/unsettled")]
pub async fn unsettled_events(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventQuickInfoList>> {
    quick_info_list(&state, &path, "unsettled").await
}

async fn quick_info_list(
    state: &HttpState,
    path: &str,
    selection: &str,
) -> ApiResult<web::Json<EventQuickInfoList>> {
    let (id, resource) = user_ref(path)?;
    let request = UpstreamRequest::new(format!("users/{id}/events/{selection}"));
    let events: Vec<EventQuickInfo> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(EventQuickInfoList { events }))
}

/// Invites the user has not answered.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/invites/pending",
    params(("user_id" = String, Path, description = "Integer or UUID user identifier")),
    responses(
        (status = 200, description = "Pending invites", body = PendingInviteList),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listPendingInvites"
)]
#[get("/users/{user_id}/invites/pending")]
pub async fn pending_invites(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PendingInviteList>> {
    let (id, resource) = user_ref(&path)?;
    let request = UpstreamRequest::new(format!("users/{id}/invites/pending"));
    let invites: Vec<PendingInvite> =
        fetch_resource_list(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(PendingInviteList { invites }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::ports::FixtureUpstreamSource;
    use crate::inbound::http::api_scope;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get(upstream: Arc<FixtureUpstreamSource>, uri: &str) -> (StatusCode, Value) {
        let state = web::Data::new(HttpState::new(upstream));
        let app = actix_test::init_service(App::new().app_data(state).service(api_scope())).await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn financial_summary_forwards_calendar_dates() {
        let upstream = Arc::new(FixtureUpstreamSource::default().with_json(
            "users/5/financial-summary",
            json!({
                "total_paid": 120.5,
                "total_received": "30.00",
                "event_count": 2,
                "time_range": {"start": "2025-07-01", "end": "2025-07-10"}
            }),
        ));
        let (status, body) = get(
            upstream.clone(),
            "/api/users/5/financial-summary?start_date=2025-07-01T00:00:00Z&end_date=2025-07-10",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currency"], "PLN");
        assert_eq!(body["total_paid"], "120.5");
        assert_eq!(body["details"], json!([]));
        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].query(),
            [
                ("start_date".to_owned(), "2025-07-01".to_owned()),
                ("end_date".to_owned(), "2025-07-10".to_owned()),
            ]
        );
    }

    #[rstest]
    #[case("/api/users/5/financial-summary?start_date=2025-07-01")]
    #[case("/api/users/5/financial-summary?start_date=2025-07-01&end_date=10-07-2025")]
    #[case("/api/users/5/events/summary?start_date=2025-07-10&end_date=2025-07-01")]
    #[case("/api/users/x/events/summary?start_date=2025-07-01&end_date=2025-07-10")]
    #[actix_web::test]
    async fn invalid_parameters_never_reach_the_upstream(#[case] uri: &str) {
        let upstream = Arc::new(FixtureUpstreamSource::default());
        let (status, body) = get(upstream.clone(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
        assert!(upstream.requests().is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn unsettled_events_use_their_own_upstream_route() {
        let upstream = Arc::new(FixtureUpstreamSource::default().with_json(
            "users/5/events/unsettled",
            json!([{
                "id": 9,
                "name": "Ski week",
                "opened_at": "2025-01-10T08:00:00Z",
                "closed_at": null,
                "participant_count": 4,
                "location_count": 2,
                "transaction_count": 11
            }]),
        ));
        let (status, body) = get(upstream, "/api/users/5/events/unsettled").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["events"][0]["transaction_count"], 11);
    }

    #[rstest]
    #[actix_web::test]
    async fn pending_invites_honour_the_absence_marker() {
        let upstream = Arc::new(
            FixtureUpstreamSource::default()
                .with_json("users/42/invites/pending", json!({"detail": "User not found"})),
        );
        let (status, body) = get(upstream, "/api/users/42/invites/pending").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "User with ID '42' not found or data missing.");
    }
}
