//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod events;
pub mod health;
pub mod params;
pub mod reports;
pub mod state;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Every `/api` route, with parameter extractors mapped onto domain errors.
///
/// Handlers expect [`state::HttpState`] as application data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use events_gateway::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(params::query_config())
        .service(health::api_status)
        .service(events::event_summary)
        .service(events::event_locations)
        .service(events::invited_participants)
        .service(events::accepted_participants)
        .service(events::event_settlement)
        .service(events::event_transactions)
        .service(users::user_event_summaries)
        .service(users::financial_summary)
        .service(users::owned_events)
        .service(users::unsettled_events)
        .service(users::pending_invites)
        .service(reports::inconsistencies)
        .service(reports::validation_log)
}
