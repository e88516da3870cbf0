//! Request parameter parsing shared by the HTTP handlers.
//!
//! Parameters are extracted as raw text and validated here, so every
//! malformed value ends up as the same `InvalidInput` error rather than an
//! extractor-specific rejection.

use actix_web::{HttpRequest, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DateRange, EntityId, Error, RangeBound, parse_date_range, parse_entity_id};

/// `start_date` / `end_date` query parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// Inclusive lower bound, ISO 8601 date or date-time.
    #[param(example = "2025-07-01")]
    pub start_date: Option<String>,
    /// Inclusive upper bound, ISO 8601 date or date-time.
    #[param(example = "2025-07-10")]
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    /// Validate both bounds into an ordered range.
    ///
    /// # Errors
    /// `InvalidInput` when a bound is missing, malformed, or the range is
    /// inverted.
    ///
    /// # Examples
    /// ```
    /// use events_gateway::inbound::http::params::DateRangeQuery;
    ///
    /// let query = DateRangeQuery {
    ///     start_date: Some("2025-07-01".into()),
    ///     end_date: None,
    /// };
    /// assert_eq!(query.to_range().unwrap_err().message(), "end_date is required");
    /// ```
    pub fn to_range(&self) -> Result<DateRange, Error> {
        let start = required(self.start_date.as_deref(), RangeBound::Start)?;
        let end = required(self.end_date.as_deref(), RangeBound::End)?;
        Ok(parse_date_range(start, end)?)
    }
}

fn required(value: Option<&str>, bound: RangeBound) -> Result<&str, Error> {
    value.ok_or_else(|| Error::invalid_input(format!("{bound} is required")))
}

/// Parse an identifier path segment.
pub(crate) fn entity_id(raw: &str, parameter: &str) -> Result<EntityId, Error> {
    parse_entity_id(raw, parameter)
}

/// Map query-string decoding failures onto `InvalidInput`.
pub(crate) fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::invalid_input(format!("malformed query string: {err}")).into()
}

/// Query extractor configuration used by the API scope.
pub(crate) fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
