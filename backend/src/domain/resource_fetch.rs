//! Fetch-and-resolve pipeline shared by every endpoint.
//!
//! One upstream call, then shape resolution, then translation of whatever
//! went wrong into the error taxonomy. The upstream handle is always passed
//! in explicitly.

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::domain::ports::{UpstreamError, UpstreamRequest, UpstreamSource};
use crate::domain::{
    Error, ResourceRef, UPSTREAM_SERVICE_NAME, ValidatedResource, resolve, resolve_list,
};

/// Fetch one object-shaped resource.
///
/// # Errors
/// Any upstream failure or shape mismatch, translated by
/// [`translate_upstream_error`] and [`settle`].
pub async fn fetch_resource<T: DeserializeOwned>(
    upstream: &dyn UpstreamSource,
    request: &UpstreamRequest,
    resource: &ResourceRef,
) -> Result<T, Error> {
    let payload = upstream
        .fetch(request)
        .await
        .map_err(|err| translate_upstream_error(err, resource))?;
    settle(resolve(&payload.body, resource))
}

/// Fetch an array-shaped resource, validating every element.
///
/// # Errors
/// As [`fetch_resource`]; one invalid element fails the whole call.
pub async fn fetch_resource_list<T: DeserializeOwned>(
    upstream: &dyn UpstreamSource,
    request: &UpstreamRequest,
    resource: &ResourceRef,
) -> Result<Vec<T>, Error> {
    let payload = upstream
        .fetch(request)
        .await
        .map_err(|err| translate_upstream_error(err, resource))?;
    settle(resolve_list(&payload.body, resource))
}

/// Check the upstream health endpoint once.
///
/// # Errors
/// [`crate::domain::ErrorKind::CriticalDependencyFailure`] when the call
/// does not succeed.
pub async fn verify_upstream(upstream: &dyn UpstreamSource) -> Result<(), Error> {
    upstream
        .fetch(&UpstreamRequest::new("health"))
        .await
        .map(|_| ())
        .map_err(|err| Error::critical_dependency(UPSTREAM_SERVICE_NAME, err))
}

/// Map a failed upstream call onto the error taxonomy.
///
/// | upstream failure | kind |
/// |---|---|
/// | transport | `UpstreamConnectionFailure` |
/// | status 404 | `NotFound` |
/// | other status | `UpstreamUnexpectedFailure` |
/// | undecodable body | `UpstreamUnexpectedFailure` |
pub fn translate_upstream_error(err: UpstreamError, resource: &ResourceRef) -> Error {
    match err {
        UpstreamError::Transport { message } => {
            warn!(%resource, cause = %message, "upstream unreachable");
            Error::upstream_connection(UPSTREAM_SERVICE_NAME, message)
        }
        err if err.is_not_found_status() => {
            Error::missing_in_service(resource, UPSTREAM_SERVICE_NAME)
        }
        err => {
            error!(%resource, cause = %err, "upstream contract violation");
            Error::upstream_unexpected(UPSTREAM_SERVICE_NAME, err)
        }
    }
}

/// Turn a resolution outcome into the handler result.
///
/// # Errors
/// `NotFound` for the absence marker, `UpstreamUnexpectedFailure` for a
/// malformed payload.
pub fn settle<T>(validated: ValidatedResource<T>) -> Result<T, Error> {
    match validated {
        ValidatedResource::Found(value) => Ok(value),
        ValidatedResource::NotFound(resource) => {
            debug!(%resource, "upstream answered with a not-found marker");
            Err(Error::missing_or_incomplete(&resource))
        }
        ValidatedResource::Malformed(cause) => {
            error!(cause = %cause, "upstream payload failed validation");
            Err(Error::upstream_unexpected(UPSTREAM_SERVICE_NAME, cause))
        }
    }
}
