//! Domain ports for the hexagonal boundary.

mod upstream_source;

#[cfg(test)]
pub use upstream_source::MockUpstreamSource;
pub use upstream_source::{
    FetchOutcome, FixtureUpstreamSource, UpstreamError, UpstreamPayload, UpstreamRequest,
    UpstreamSource,
};
