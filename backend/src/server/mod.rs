//! Server construction and middleware wiring.

mod config;
mod shutdown;

pub use config::ServerConfig;
pub use shutdown::{drain_after, shutdown_signal};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use events_gateway::RequestTrace;
use events_gateway::doc::ApiDoc;
use events_gateway::inbound::http::api_scope;
use events_gateway::inbound::http::health::{ProbeState, live, ready, root_status};
use events_gateway::inbound::http::state::HttpState;

#[derive(Clone)]
struct AppDependencies {
    probes: web::Data<ProbeState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies { probes, http_state } = deps;

    App::new()
        .app_data(probes)
        .app_data(http_state)
        .wrap(RequestTrace)
        .service(api_scope())
        .service(root_status)
        .service(ready)
        .service(live)
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Construct an Actix HTTP server using the provided probe state and configuration.
///
/// The probes move to serving once the listener is bound; the caller has
/// already verified the DB Handler by then. Actix's own signal handling is
/// disabled so that [`drain_after`] owns shutdown.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    probes: web::Data<ProbeState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        upstream,
    } = config;
    let server_probes = probes.clone();
    let http_state = web::Data::new(HttpState::new(upstream));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            probes: server_probes.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    probes.start_serving();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test as actix_test};
    use events_gateway::domain::ports::FixtureUpstreamSource;
    use events_gateway::inbound::http::health::Phase;
    use events_gateway::middleware::TRACE_ID_HEADER;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn deps() -> AppDependencies {
        let upstream = FixtureUpstreamSource::default()
            .with_json("events/1/summary", json!({"id": 1, "name": "Trip"}));
        AppDependencies {
            probes: web::Data::new(ProbeState::new()),
            http_state: web::Data::new(HttpState::new(Arc::new(upstream))),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/api/")]
    #[actix_web::test]
    async fn status_routes_answer_ok_with_a_trace_id(#[case] uri: &str) {
        let app = actix_test::init_service(build_app(deps())).await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"status": "OK"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn api_routes_and_openapi_are_mounted() {
        let app = actix_test::init_service(build_app(deps())).await;
        let req = actix_test::TestRequest::get().uri("/api/events/1/summary").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"summary": {"id": 1, "name": "Trip"}}));

        let req = actix_test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_starts_false() {
        let app = actix_test::init_service(build_app(deps())).await;
        let req = actix_test::TestRequest::get().uri("/health/ready").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_probes_and_stops_the_server() {
        let probes = web::Data::new(ProbeState::new());
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket address"),
            Arc::new(FixtureUpstreamSource::default()),
        );
        let server = create_server(probes.clone(), config).expect("bind");
        assert_eq!(probes.phase(), Phase::Serving);

        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        drain_after(async {}, probes.clone(), handle).await;

        assert_eq!(probes.phase(), Phase::Draining);
        running.await.expect("server task").expect("clean exit");
    }
}
