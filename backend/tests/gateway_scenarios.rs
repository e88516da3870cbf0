//! End-to-end behaviour of the gateway routes against a canned DB Handler.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use events_gateway::RequestTrace;
use events_gateway::domain::ports::{FixtureUpstreamSource, UpstreamError};
use events_gateway::inbound::http::api_scope;
use events_gateway::inbound::http::state::HttpState;
use events_gateway::middleware::TRACE_ID_HEADER;
use rstest::rstest;
use serde_json::{Value, json};

async fn call(
    upstream: Arc<FixtureUpstreamSource>,
    uri: &str,
) -> (StatusCode, Option<String>, Value) {
    let state = web::Data::new(HttpState::new(upstream));
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .wrap(RequestTrace)
            .service(api_scope()),
    )
    .await;
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res: ServiceResponse = actix_test::call_service(&app, req).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(res).await;
    (status, trace_id, serde_json::from_slice(&body).expect("JSON body"))
}

fn detail(body: &Value) -> &str {
    body["detail"].as_str().expect("detail string")
}

#[rstest]
#[actix_web::test]
async fn event_summary_is_wrapped_verbatim() {
    let upstream = Arc::new(FixtureUpstreamSource::default().with_json(
        "events/1/summary",
        json!({"id": 1, "name": "Trip", "total_cost": 123.45}),
    ));

    let (status, trace_id, body) = call(upstream, "/api/events/1/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some());
    assert_eq!(
        body,
        json!({"summary": {"id": 1, "name": "Trip", "total_cost": 123.45}})
    );
}

#[rstest]
#[actix_web::test]
async fn upstream_404_names_the_id_and_service() {
    let upstream = Arc::new(FixtureUpstreamSource::default().with_outcome(
        "events/999/summary",
        Err(UpstreamError::status(404, "{\"detail\":\"Not Found\"}")),
    ));

    let (status, _, body) = call(upstream, "/api/events/999/summary").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(detail(&body).contains("999"));
    assert!(detail(&body).contains("DB Handler"));
}

#[rstest]
#[actix_web::test]
async fn not_found_marker_in_a_200_body_is_a_404() {
    let upstream = Arc::new(
        FixtureUpstreamSource::default()
            .with_json("events/7/summary", json!({"detail": "not found"})),
    );

    let (status, _, body) = call(upstream, "/api/events/7/summary").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(detail(&body), "Event with ID '7' not found or data missing.");
}

#[rstest]
#[actix_web::test]
async fn upstream_timeout_is_a_503_naming_the_service() {
    let upstream = Arc::new(FixtureUpstreamSource::default().with_outcome(
        "events/1/summary",
        Err(UpstreamError::transport("request timed out: operation timed out")),
    ));

    let (status, trace_id, body) = call(upstream, "/api/events/1/summary").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(trace_id.is_some());
    assert!(detail(&body).contains("DB Handler"));
    assert!(detail(&body).contains("timed out"));
}

#[rstest]
#[actix_web::test]
async fn inverted_range_is_rejected_without_an_upstream_call() {
    let upstream = Arc::new(FixtureUpstreamSource::default());

    let (status, _, body) = call(
        upstream.clone(),
        "/api/users/5/events/summary?start_date=2025-07-10&end_date=2025-07-01",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail(&body).contains("must not be after"));
    assert!(upstream.requests().is_empty());
}

#[rstest]
#[actix_web::test]
async fn payload_matching_no_shape_is_a_500() {
    let upstream = Arc::new(
        FixtureUpstreamSource::default()
            .with_json("events/1/summary", json!({"unexpected": true})),
    );

    let (status, _, body) = call(upstream, "/api/events/1/summary").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(detail(&body).starts_with(
        "An unexpected error occurred while communicating with DB Handler."
    ));
}

#[rstest]
#[case::server_error(Err(UpstreamError::status(500, "Internal Server Error")))]
#[case::not_json(Err(UpstreamError::decode("invalid JSON payload: expected value")))]
#[actix_web::test]
async fn contract_violations_are_500s(
    #[case] outcome: Result<events_gateway::domain::ports::UpstreamPayload, UpstreamError>,
) {
    let upstream = Arc::new(
        FixtureUpstreamSource::default().with_outcome("events/3/settlement", outcome),
    );

    let (status, _, _) = call(upstream, "/api/events/3/settlement").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[actix_web::test]
async fn range_summaries_wrap_each_event() {
    let upstream = Arc::new(FixtureUpstreamSource::default().with_json(
        "users/5/events/summary",
        json!([
            {"id": 1, "name": "Trip"},
            {"id": 2, "name": "Ski week", "opened_at": "2025-07-02T08:00:00+02:00"}
        ]),
    ));

    let (status, _, body) = call(
        upstream.clone(),
        "/api/users/5/events/summary?start_date=2025-07-01&end_date=2025-07-10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"summaries": [
            {"summary": {"id": 1, "name": "Trip"}},
            {"summary": {"id": 2, "name": "Ski week", "opened_at": "2025-07-02T06:00:00Z"}}
        ]})
    );
    assert_eq!(upstream.requests().len(), 1);
}
