//! Domain-level error taxonomy.
//!
//! Every failure path of the gateway ends in exactly one [`Error`]. The
//! error is transport agnostic: it names a closed [`ErrorKind`] and carries
//! a human-readable message built from a fixed template plus contextual
//! values. The HTTP adapter maps kinds onto status codes.

use std::fmt;

use crate::domain::ResourceRef;
use crate::middleware::trace::TraceId;

/// Display name of the upstream service used in client-facing messages.
pub const UPSTREAM_SERVICE_NAME: &str = "DB Handler";

/// Closed set of client-visible failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The upstream service reported the resource as absent.
    NotFound,
    /// The upstream service could not be reached.
    UpstreamConnectionFailure,
    /// The upstream service broke its contract (status, encoding or shape).
    UpstreamUnexpectedFailure,
    /// Request parameters failed validation.
    InvalidInput,
    /// A dependency required at boot is unavailable.
    CriticalDependencyFailure,
    /// The route exists but is not implemented.
    NotImplemented,
}

impl ErrorKind {
    /// Stable snake_case identifier, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::UpstreamConnectionFailure => "upstream_connection_failure",
            Self::UpstreamUnexpectedFailure => "upstream_unexpected_failure",
            Self::InvalidInput => "invalid_input",
            Self::CriticalDependencyFailure => "critical_dependency_failure",
            Self::NotImplemented => "not_implemented",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised by [`Error::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
}

/// Gateway error record: kind, message and the ambient trace identifier.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use events_gateway::domain::{Error, ErrorKind};
///
/// let err = Error::invalid_input("start date is malformed");
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.message(), "start date is malformed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, panicking if the message is blank.
    ///
    /// Factory constructors below always supply non-empty templates, so
    /// they never reach the panic.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        match Self::try_new(kind, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor validating the message.
    ///
    /// Captures the current trace identifier when one is in scope.
    pub fn try_new(
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            kind,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured at construction, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// The upstream service answered 404 for `resource`.
    ///
    /// ```
    /// use events_gateway::domain::{Error, ResourceRef, UPSTREAM_SERVICE_NAME};
    ///
    /// let event = ResourceRef::new("event", "999");
    /// let err = Error::missing_in_service(&event, UPSTREAM_SERVICE_NAME);
    /// assert_eq!(err.message(), "Event '999' not found in DB Handler.");
    /// ```
    pub fn missing_in_service(resource: &ResourceRef, service: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("{resource} not found in {service}."),
        )
    }

    /// The upstream payload was a not-found marker instead of `resource`.
    pub fn missing_or_incomplete(resource: &ResourceRef) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!(
                "{} with ID '{}' not found or data missing.",
                resource.display_kind(),
                resource.id()
            ),
        )
    }

    /// The upstream service could not be reached.
    pub fn upstream_connection(service: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UpstreamConnectionFailure,
            format!("Could not connect to {service}. Original error: {cause}"),
        )
    }

    /// The upstream service answered in a way this gateway cannot use.
    pub fn upstream_unexpected(service: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UpstreamUnexpectedFailure,
            format!(
                "An unexpected error occurred while communicating with {service}. Original error: {cause}"
            ),
        )
    }

    /// Request parameters are malformed.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// A dependency checked at boot is unavailable.
    pub fn critical_dependency(service: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::CriticalDependencyFailure,
            format!(
                "Failed to connect to or initialize critical dependency: {service}. Original error: {cause}"
            ),
        )
    }

    /// The route is a placeholder.
    pub fn not_implemented(feature: &str) -> Self {
        Self::new(
            ErrorKind::NotImplemented,
            format!("{feature} is not implemented yet."),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
