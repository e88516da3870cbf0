//! Report API handlers.

use actix_web::{HttpResponse, get, web};

use crate::domain::ports::UpstreamRequest;
use crate::domain::{Error, ResourceRef, fetch_resource};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::models::ValidationIssuesReport;

/// Data inconsistencies detected by the DB Handler.
#[utoipa::path(
    get,
    path = "/api/reports/inconsistencies",
    responses(
        (status = 200, description = "Inconsistency report", body = ValidationIssuesReport),
        (status = 404, description = "Report unavailable", body = ErrorBody),
        (status = 500, description = "DB Handler contract violation", body = ErrorBody),
        (status = 503, description = "DB Handler unreachable", body = ErrorBody)
    ),
    tags = ["reports"],
    operation_id = "getInconsistencyReport"
)]
#[get("/reports/inconsistencies")]
pub async fn inconsistencies(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ValidationIssuesReport>> {
    let resource = ResourceRef::new("report", "inconsistencies");
    let request = UpstreamRequest::new("reports/inconsistencies");
    let report = fetch_resource(state.upstream.as_ref(), &request, &resource).await?;
    Ok(web::Json(report))
}

/// Parsed DB Handler validation log.
///
/// Placeholder route: the DB Handler does not expose its validation log
/// over HTTP, so this always answers 501.
#[utoipa::path(
    get,
    path = "/api/reports/validation-log",
    responses((status = 501, description = "Not implemented", body = ErrorBody)),
    tags = ["reports"],
    operation_id = "getValidationLog"
)]
#[get("/reports/validation-log")]
pub async fn validation_log() -> ApiResult<HttpResponse> {
    Err(Error::not_implemented("Validation log parsing"))
}
