//! Domain core of the gateway.
//!
//! Purpose: parse request parameters, call the DB Handler through the
//! [`ports::UpstreamSource`] port, resolve the payload shape and translate
//! every failure into one [`Error`]. Nothing here knows about actix or
//! reqwest.
//!
//! Public surface:
//! - Error / ErrorKind: closed error taxonomy with message factories.
//! - DateRange / parse_date_range: strict ISO-8601 range parsing.
//! - EntityId: integer-or-UUID path identifiers.
//! - resolve / resolve_list: two-shape payload resolution.
//! - fetch_resource / fetch_resource_list: the per-endpoint pipeline.

pub mod date_range;
pub mod entity_id;
pub mod error;
pub mod ports;
pub mod resolution;
pub mod resource_fetch;
pub mod resource_ref;

pub use self::date_range::{
    DateRange, DateRangeError, RangeBound, parse_date_range, parse_iso_instant,
};
pub use self::entity_id::{EntityId, EntityIdError, parse_entity_id};
pub use self::error::{Error, ErrorKind, ErrorValidationError, UPSTREAM_SERVICE_NAME};
pub use self::resolution::{AbsenceMarker, ValidatedResource, resolve, resolve_list};
pub use self::resource_fetch::{
    fetch_resource, fetch_resource_list, settle, translate_upstream_error, verify_upstream,
};
pub use self::resource_ref::ResourceRef;
