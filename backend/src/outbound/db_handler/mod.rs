//! DB Handler outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `UpstreamSource` port.

mod http_source;

pub use http_source::{DbHandlerHttpSource, UPSTREAM_TIMEOUT};
